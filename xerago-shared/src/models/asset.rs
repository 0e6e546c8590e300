use serde::{Deserialize, Serialize};

/// A DAM asset: a binary stored at a repository path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub path: String,
    pub mime_type: String,
    /// Bytes of the original rendition.
    #[serde(skip)]
    pub original: Vec<u8>,
}

impl Asset {
    pub fn new(path: impl Into<String>, mime_type: impl Into<String>, original: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            mime_type: mime_type.into(),
            original,
        }
    }

    pub fn is_json(&self) -> bool {
        self.mime_type == "application/json" || self.path.ends_with(".json")
    }
}
