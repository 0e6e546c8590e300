pub mod asset;
pub mod node;
