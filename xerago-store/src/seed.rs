//! Startup content seeding from a JSON file.
//!
//! ```json
//! {
//!   "content": { "content": { "home": { "sling:resourceType": "citi/components/hero" } } },
//!   "assets": { "/content/dam/coupons.json": { "mimeType": "application/json", "text": "[...]" } }
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::info;
use xerago_shared::{path, Asset};

use crate::error::StoreError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    /// Tree rooted at `/`, in the JSON content format.
    #[serde(default)]
    pub content: Map<String, Value>,
    #[serde(default)]
    pub assets: BTreeMap<String, SeedAsset>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAsset {
    pub mime_type: String,
    pub text: String,
}

impl SeedFile {
    pub async fn read(file: &str) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(file).await.map_err(|source| StoreError::SeedIo {
            path: file.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Repositories that can be populated outside a write session.
#[async_trait]
pub trait SeedTarget: Send + Sync {
    /// Store `value` as the subtree at `at`, creating missing ancestors.
    /// Existing nodes keep their position and get the new properties.
    async fn load_json(&self, at: &str, value: &Value) -> Result<(), StoreError>;

    async fn put_asset(&self, asset: Asset) -> Result<(), StoreError>;
}

pub async fn apply_seed(target: &dyn SeedTarget, seed: &SeedFile) -> Result<(), StoreError> {
    for (name, value) in &seed.content {
        target.load_json(&path::join(path::ROOT, name), value).await?;
    }

    for (asset_path, asset) in &seed.assets {
        let normalized = path::normalize(asset_path).ok_or_else(|| StoreError::InvalidPath(asset_path.clone()))?;
        target
            .put_asset(Asset::new(normalized, asset.mime_type.clone(), asset.text.clone().into_bytes()))
            .await?;
    }

    info!("Seeded {} top-level nodes and {} assets", seed.content.len(), seed.assets.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryRepository;
    use xerago_core::ContentRepository;

    #[tokio::test]
    async fn test_apply_seed() {
        let seed: SeedFile = serde_json::from_value(serde_json::json!({
            "content": {
                "content": {
                    "home": { "title": "Home", "hero": { "sling:resourceType": "citi/components/hero" } }
                }
            },
            "assets": {
                "/content/dam/coupons.json": { "mimeType": "application/json", "text": "[{\"id\":\"C1\"}]" }
            }
        }))
        .unwrap();

        let repo = MemoryRepository::new();
        apply_seed(&repo, &seed).await.unwrap();

        let home = repo.get("/content/home").await.unwrap().unwrap();
        assert_eq!(home.property("title"), Some(&serde_json::json!("Home")));
        assert_eq!(home.children[0].resource_type.as_deref(), Some("citi/components/hero"));

        let asset = repo.asset("/content/dam/coupons.json").await.unwrap().unwrap();
        assert!(asset.is_json());
        assert_eq!(asset.original, b"[{\"id\":\"C1\"}]".to_vec());
    }

    #[tokio::test]
    async fn test_relative_asset_path_is_rejected() {
        let mut seed = SeedFile::default();
        seed.assets.insert(
            "dam/x.json".to_string(),
            SeedAsset { mime_type: "application/json".to_string(), text: "[]".to_string() },
        );
        let repo = MemoryRepository::new();
        assert!(matches!(apply_seed(&repo, &seed).await, Err(StoreError::InvalidPath(_))));
    }
}
