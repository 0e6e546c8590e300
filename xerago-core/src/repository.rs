use async_trait::async_trait;
use serde_json::{Map, Value};
use xerago_shared::{path, Asset, ContentNode};

pub const PRIMARY_TYPE_PROPERTY: &str = "jcr:primaryType";
pub const UNSTRUCTURED: &str = "nt:unstructured";

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Parent node not found: {0}")]
    ParentNotFound(String),
    #[error("Node already exists: {0}")]
    AlreadyExists(String),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Read access to the content tree plus write sessions.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Node at `path` with its whole subtree, children in creation order.
    async fn get(&self, path: &str) -> RepoResult<Option<ContentNode>>;

    /// Original rendition of the asset stored at `path`.
    async fn asset(&self, path: &str) -> RepoResult<Option<Asset>>;

    /// Open a write session. Nothing it stages is visible to readers until
    /// [`WriteSession::commit`]; dropping the session discards its writes.
    async fn begin(&self) -> RepoResult<Box<dyn WriteSession>>;
}

/// Request-scoped unit of work against the repository.
#[async_trait]
pub trait WriteSession: Send {
    /// Whether a node exists, including nodes staged in this session.
    async fn exists(&mut self, path: &str) -> RepoResult<bool>;

    /// Stage a new child node and return its path.
    async fn create(
        &mut self,
        parent: &str,
        name: &str,
        properties: Map<String, Value>,
    ) -> RepoResult<String>;

    async fn commit(self: Box<Self>) -> RepoResult<()>;
}

/// Resolve `target`, staging any missing ancestors (and the node itself) as
/// unstructured nodes. Returns the normalized path.
pub async fn ensure_path(session: &mut dyn WriteSession, target: &str) -> RepoResult<String> {
    let normalized = path::normalize(target).ok_or_else(|| RepoError::InvalidPath(target.to_string()))?;

    let mut current = path::ROOT.to_string();
    for segment in path::segments(&normalized) {
        let next = path::join(&current, segment);
        if !session.exists(&next).await? {
            let mut props = Map::new();
            props.insert(PRIMARY_TYPE_PROPERTY.to_string(), Value::String(UNSTRUCTURED.to_string()));
            session.create(&current, segment, props).await?;
            tracing::debug!("Created intermediate node {}", next);
        }
        current = next;
    }

    Ok(normalized)
}
