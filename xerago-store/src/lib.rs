pub mod app_config;
pub mod database;
pub mod error;
pub mod memory_repo;
pub mod postgres_repo;
pub mod seed;

pub use app_config::{Config, CouponConfig, RepositoryBackend};
pub use database::DbClient;
pub use error::StoreError;
pub use memory_repo::MemoryRepository;
pub use postgres_repo::PostgresRepository;
pub use seed::{apply_seed, SeedFile, SeedTarget};
