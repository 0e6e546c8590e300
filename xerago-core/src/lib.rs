pub mod binding;
pub mod random;
pub mod repository;

pub use binding::{bind_collection, bind_fields, BoundRecord, FieldSpec, FromContent};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use repository::{ensure_path, ContentRepository, RepoError, RepoResult, WriteSession};
