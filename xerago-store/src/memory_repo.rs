use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use xerago_core::repository::{PRIMARY_TYPE_PROPERTY, UNSTRUCTURED};
use xerago_core::{ContentRepository, RepoError, RepoResult, WriteSession};
use xerago_shared::{path, Asset, ContentNode, FlatNode};

use crate::error::StoreError;
use crate::seed::SeedTarget;

struct Tree {
    /// Keyed by path, so a subtree is a contiguous key range.
    nodes: BTreeMap<String, FlatNode>,
    assets: HashMap<String, Asset>,
    next_ordinal: i64,
}

impl Tree {
    fn new() -> Self {
        let mut tree = Self {
            nodes: BTreeMap::new(),
            assets: HashMap::new(),
            next_ordinal: 0,
        };
        tree.insert(path::ROOT.to_string(), Map::new());
        tree
    }

    /// Insert or overwrite a node. Overwritten nodes keep their ordinal.
    fn insert(&mut self, node_path: String, properties: Map<String, Value>) {
        let ordinal = match self.nodes.get(&node_path) {
            Some(existing) => existing.ordinal,
            None => {
                self.next_ordinal += 1;
                self.next_ordinal
            }
        };
        self.nodes.insert(node_path.clone(), FlatNode { path: node_path, properties, ordinal });
    }

    fn ensure_ancestors(&mut self, node_path: &str) {
        let mut missing = Vec::new();
        let mut cursor = path::parent(node_path);
        while let Some(p) = cursor {
            if self.nodes.contains_key(p) {
                break;
            }
            missing.push(p.to_string());
            cursor = path::parent(p);
        }

        for p in missing.into_iter().rev() {
            self.insert(p, unstructured());
        }
    }

    fn subtree(&self, root: &str) -> Option<ContentNode> {
        let root_row = self.nodes.get(root)?.clone();
        let prefix = path::descendant_prefix(root);

        let mut rows = vec![root_row];
        rows.extend(
            self.nodes
                .range(prefix.clone()..)
                .take_while(|(k, _)| k.starts_with(&prefix))
                .filter(|(k, _)| k.as_str() != root)
                .map(|(_, row)| row.clone()),
        );

        ContentNode::assemble(root, rows)
    }
}

fn unstructured() -> Map<String, Value> {
    let mut props = Map::new();
    props.insert(PRIMARY_TYPE_PROPERTY.to_string(), Value::String(UNSTRUCTURED.to_string()));
    props
}

/// Content repository held in process memory. Clones share the same tree.
#[derive(Clone)]
pub struct MemoryRepository {
    tree: Arc<RwLock<Tree>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self { tree: Arc::new(RwLock::new(Tree::new())) }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for MemoryRepository {
    async fn get(&self, node_path: &str) -> RepoResult<Option<ContentNode>> {
        let normalized = path::normalize(node_path).ok_or_else(|| RepoError::InvalidPath(node_path.to_string()))?;
        let tree = self.tree.read().await;
        Ok(tree.subtree(&normalized))
    }

    async fn asset(&self, asset_path: &str) -> RepoResult<Option<Asset>> {
        let normalized = path::normalize(asset_path).ok_or_else(|| RepoError::InvalidPath(asset_path.to_string()))?;
        let tree = self.tree.read().await;
        Ok(tree.assets.get(&normalized).cloned())
    }

    async fn begin(&self) -> RepoResult<Box<dyn WriteSession>> {
        Ok(Box::new(MemorySession {
            tree: self.tree.clone(),
            staged: Vec::new(),
            staged_paths: HashSet::new(),
        }))
    }
}

#[async_trait]
impl SeedTarget for MemoryRepository {
    async fn load_json(&self, at: &str, value: &Value) -> Result<(), StoreError> {
        let normalized = path::normalize(at).ok_or_else(|| StoreError::InvalidPath(at.to_string()))?;
        let mut tree = self.tree.write().await;

        tree.ensure_ancestors(&normalized);
        for row in ContentNode::from_json(&normalized, value).flatten(0) {
            tree.insert(row.path, row.properties);
        }
        Ok(())
    }

    async fn put_asset(&self, asset: Asset) -> Result<(), StoreError> {
        let mut tree = self.tree.write().await;
        tree.assets.insert(asset.path.clone(), asset);
        Ok(())
    }
}

/// Staged creates, applied under one write lock on commit.
pub struct MemorySession {
    tree: Arc<RwLock<Tree>>,
    staged: Vec<(String, Map<String, Value>)>,
    staged_paths: HashSet<String>,
}

#[async_trait]
impl WriteSession for MemorySession {
    async fn exists(&mut self, node_path: &str) -> RepoResult<bool> {
        if self.staged_paths.contains(node_path) {
            return Ok(true);
        }
        Ok(self.tree.read().await.nodes.contains_key(node_path))
    }

    async fn create(&mut self, parent: &str, name: &str, properties: Map<String, Value>) -> RepoResult<String> {
        if !path::is_valid_name(name) {
            return Err(RepoError::InvalidPath(name.to_string()));
        }
        let parent = path::normalize(parent).ok_or_else(|| RepoError::InvalidPath(parent.to_string()))?;
        if !self.exists(&parent).await? {
            return Err(RepoError::ParentNotFound(parent));
        }

        let child = path::join(&parent, name);
        if self.exists(&child).await? {
            return Err(RepoError::AlreadyExists(child));
        }

        self.staged_paths.insert(child.clone());
        self.staged.push((child.clone(), properties));
        Ok(child)
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let MemorySession { tree, staged, .. } = *self;
        let mut guard = tree.write().await;

        // Another session may have created the same node since it was staged
        if let Some((conflict, _)) = staged.iter().find(|(p, _)| guard.nodes.contains_key(p)) {
            return Err(RepoError::AlreadyExists(conflict.clone()));
        }

        let count = staged.len();
        for (node_path, properties) in staged {
            guard.insert(node_path, properties);
        }
        debug!("Committed {} nodes", count);
        Ok(())
    }
}
