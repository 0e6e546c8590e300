//! Bulk import of coupon records from a JSON asset into the content tree.
//!
//! The asset must hold a JSON array of flat objects, each with an `id`.
//! Every object becomes a child node named after its id under the target
//! path; ids that already exist there are skipped, never overwritten. The
//! whole file is validated before anything is written, and all creates are
//! committed together.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};
use uuid::Uuid;
use xerago_core::repository::{PRIMARY_TYPE_PROPERTY, UNSTRUCTURED};
use xerago_core::{ensure_path, ContentRepository, RepoError};
use xerago_shared::path;

const ID_PROPERTY: &str = "id";

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Source is not an asset: {0}")]
    NotAnAsset(String),

    #[error("Source is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Source must contain a JSON array")]
    NotAnArray,

    #[error("Entry {index} is not an object")]
    EntryNotObject { index: usize },

    #[error("Entry {index} has no id")]
    MissingId { index: usize },

    #[error("Entry {index}: property '{key}' is not a scalar")]
    NonScalar { index: usize, key: String },

    #[error("Entry {index}: '{id}' is not a valid node name")]
    InvalidId { index: usize, id: String },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub import_id: Uuid,
    pub target_path: String,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

struct CouponRecord {
    id: String,
    properties: Map<String, Value>,
}

pub async fn import_coupons(
    repo: &dyn ContentRepository,
    dam_path: &str,
    target_path: &str,
) -> Result<ImportReport, ImportError> {
    let import_id = Uuid::new_v4();
    let dam_path = path::normalize(dam_path).ok_or_else(|| ImportError::InvalidPath(dam_path.to_string()))?;
    let target_path =
        path::normalize(target_path).ok_or_else(|| ImportError::InvalidPath(target_path.to_string()))?;

    let asset = match repo.asset(&dam_path).await? {
        Some(asset) => asset,
        None if repo.get(&dam_path).await?.is_some() => return Err(ImportError::NotAnAsset(dam_path)),
        None => return Err(ImportError::SourceNotFound(dam_path)),
    };
    if !asset.is_json() {
        warn!("Import {}: {} has type {}, parsing as JSON anyway", import_id, dam_path, asset.mime_type);
    }

    let records = parse_records(&asset.original)?;
    info!("Import {}: {} records from {} into {}", import_id, records.len(), dam_path, target_path);

    let mut session = repo.begin().await?;
    let parent = ensure_path(session.as_mut(), &target_path).await?;

    let mut created = Vec::new();
    let mut skipped = Vec::new();
    for record in records {
        let child = path::join(&parent, &record.id);
        if session.exists(&child).await? {
            info!("Coupon {} already exists, skipping", child);
            skipped.push(record.id);
            continue;
        }

        session.create(&parent, &record.id, record.properties).await?;
        info!("Coupon created {}", child);
        created.push(record.id);
    }

    session.commit().await?;
    info!(
        "Import {} committed: {} created, {} skipped",
        import_id,
        created.len(),
        skipped.len()
    );

    Ok(ImportReport {
        import_id,
        target_path: parent,
        created,
        skipped,
        completed_at: Utc::now(),
    })
}

fn parse_records(bytes: &[u8]) -> Result<Vec<CouponRecord>, ImportError> {
    let root: Value = serde_json::from_slice(bytes)?;
    let Value::Array(entries) = root else {
        return Err(ImportError::NotAnArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_record(index, entry))
        .collect()
}

fn parse_record(index: usize, entry: Value) -> Result<CouponRecord, ImportError> {
    let Value::Object(fields) = entry else {
        return Err(ImportError::EntryNotObject { index });
    };

    let mut properties = Map::new();
    for (key, value) in fields {
        let text = scalar_text(&value).ok_or_else(|| match value {
            Value::Null if key == ID_PROPERTY => ImportError::MissingId { index },
            _ => ImportError::NonScalar { index, key: key.clone() },
        })?;
        properties.insert(key, Value::String(text));
    }

    let id = match properties.get(ID_PROPERTY) {
        Some(Value::String(id)) => id.clone(),
        _ => return Err(ImportError::MissingId { index }),
    };
    if !path::is_valid_name(&id) {
        return Err(ImportError::InvalidId { index, id });
    }

    // Storage type always wins over an authored one
    properties.insert(PRIMARY_TYPE_PROPERTY.to_string(), Value::String(UNSTRUCTURED.to_string()));

    Ok(CouponRecord { id, properties })
}

/// Every coupon property is stored as a string.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
