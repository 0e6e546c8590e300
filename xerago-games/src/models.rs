use serde::{Deserialize, Serialize};

/// Relative likelihood of an entry. Not normalized; authors may use any
/// scale. Integer weights stay integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Integer(i64),
    Decimal(f64),
}

impl Weight {
    pub fn is_finite(&self) -> bool {
        match self {
            Weight::Integer(_) => true,
            Weight::Decimal(v) => v.is_finite(),
        }
    }
}

/// A prize on a scratch card or behind a gift box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeEntry {
    pub text: String,
    pub value: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Weight>,
    pub redeem_code: String,
}

/// A segment of the prize wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEntry {
    pub text: String,
    pub color: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Weight>,
    pub redeem_code: String,
}

/// Where the entries of a [`GameConfig`] came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "detail")]
pub enum ConfigSource {
    /// Built from authored entries.
    Authored,
    /// Defaults: nothing usable was authored.
    NoAuthoredEntries,
    /// Defaults: authored data could not be turned into entries.
    BuildFailed(String),
}

/// Client payload for one game: the entries and their JSON encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig<E> {
    pub entries: Vec<E>,
    pub entries_json: String,
    pub count: usize,
    pub source: ConfigSource,
}

impl<E> GameConfig<E> {
    pub fn new(entries: Vec<E>, entries_json: String, source: ConfigSource) -> Self {
        Self {
            count: entries.len(),
            entries,
            entries_json,
            source,
        }
    }

    /// Payload used when not even the defaults could be encoded.
    pub fn empty(reason: String) -> Self {
        Self::new(Vec::new(), "[]".to_string(), ConfigSource::BuildFailed(reason))
    }

    pub fn used_defaults(&self) -> bool {
        self.source != ConfigSource::Authored
    }
}
