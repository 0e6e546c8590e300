pub mod models;
pub mod path;

pub use models::asset::Asset;
pub use models::node::{ContentNode, FlatNode, RESOURCE_TYPE_PROPERTY};
