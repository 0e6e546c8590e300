use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use xerago_core::repository::{PRIMARY_TYPE_PROPERTY, UNSTRUCTURED};
use xerago_core::{ContentRepository, RepoError, RepoResult, WriteSession};
use xerago_shared::{path, Asset, ContentNode, FlatNode};

use crate::error::StoreError;
use crate::seed::SeedTarget;

const SUBTREE_QUERY: &str = r#"
    SELECT path, properties, ordinal
    FROM content_nodes
    WHERE path = $1 OR left(path, length($2)) = $2
    ORDER BY ordinal
"#;

const INSERT_NODE: &str = r#"
    INSERT INTO content_nodes (path, parent_path, name, properties)
    VALUES ($1, $2, $3, $4)
"#;

pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NodeRow {
    path: String,
    properties: Json<Map<String, Value>>,
    ordinal: i64,
}

impl From<NodeRow> for FlatNode {
    fn from(row: NodeRow) -> Self {
        FlatNode {
            path: row.path,
            properties: row.properties.0,
            ordinal: row.ordinal,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssetRow {
    path: String,
    mime_type: String,
    data: Vec<u8>,
}

fn backend(e: sqlx::Error) -> RepoError {
    RepoError::Backend(e.to_string())
}

fn normalized(node_path: &str) -> RepoResult<String> {
    path::normalize(node_path).ok_or_else(|| RepoError::InvalidPath(node_path.to_string()))
}

#[async_trait]
impl ContentRepository for PostgresRepository {
    async fn get(&self, node_path: &str) -> RepoResult<Option<ContentNode>> {
        let root = normalized(node_path)?;
        let rows = sqlx::query_as::<_, NodeRow>(SUBTREE_QUERY)
            .bind(&root)
            .bind(path::descendant_prefix(&root))
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        Ok(ContentNode::assemble(&root, rows.into_iter().map(FlatNode::from).collect()))
    }

    async fn asset(&self, asset_path: &str) -> RepoResult<Option<Asset>> {
        let asset_path = normalized(asset_path)?;
        let row = sqlx::query_as::<_, AssetRow>("SELECT path, mime_type, data FROM content_assets WHERE path = $1")
            .bind(&asset_path)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        Ok(row.map(|r| Asset::new(r.path, r.mime_type, r.data)))
    }

    async fn begin(&self) -> RepoResult<Box<dyn WriteSession>> {
        let tx = self.pool.begin().await.map_err(backend)?;
        Ok(Box::new(PostgresSession { tx }))
    }
}

#[async_trait]
impl SeedTarget for PostgresRepository {
    async fn load_json(&self, at: &str, value: &Value) -> Result<(), StoreError> {
        let root = path::normalize(at).ok_or_else(|| StoreError::InvalidPath(at.to_string()))?;
        let mut tx = self.pool.begin().await?;

        let mut ancestors: Vec<&str> = Vec::new();
        let mut cursor = path::parent(&root);
        while let Some(p) = cursor {
            ancestors.push(p);
            cursor = path::parent(p);
        }
        for ancestor in ancestors.into_iter().rev() {
            upsert(&mut tx, ancestor, &unstructured(), false).await?;
        }

        for row in ContentNode::from_json(&root, value).flatten(0) {
            upsert(&mut tx, &row.path, &row.properties, true).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn put_asset(&self, asset: Asset) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO content_assets (path, mime_type, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (path) DO UPDATE SET mime_type = EXCLUDED.mime_type, data = EXCLUDED.data
            "#,
        )
        .bind(&asset.path)
        .bind(&asset.mime_type)
        .bind(&asset.original)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

async fn upsert(
    tx: &mut Transaction<'static, Postgres>,
    node_path: &str,
    properties: &Map<String, Value>,
    overwrite: bool,
) -> Result<(), sqlx::Error> {
    let conflict = if overwrite {
        "ON CONFLICT (path) DO UPDATE SET properties = EXCLUDED.properties"
    } else {
        "ON CONFLICT (path) DO NOTHING"
    };

    sqlx::query(&format!("{} {}", INSERT_NODE, conflict))
        .bind(node_path)
        .bind(path::parent(node_path))
        .bind(path::name(node_path))
        .bind(Json(properties))
        .execute(&mut **tx)
        .await?;
    Ok(())
}

fn unstructured() -> Map<String, Value> {
    let mut props = Map::new();
    props.insert(PRIMARY_TYPE_PROPERTY.to_string(), Value::String(UNSTRUCTURED.to_string()));
    props
}

/// One SQL transaction. Dropping it rolls back.
pub struct PostgresSession {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl WriteSession for PostgresSession {
    async fn exists(&mut self, node_path: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM content_nodes WHERE path = $1)")
            .bind(node_path)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(backend)
    }

    async fn create(&mut self, parent: &str, name: &str, properties: Map<String, Value>) -> RepoResult<String> {
        if !path::is_valid_name(name) {
            return Err(RepoError::InvalidPath(name.to_string()));
        }
        let parent = normalized(parent)?;
        if !self.exists(&parent).await? {
            return Err(RepoError::ParentNotFound(parent));
        }

        let child = path::join(&parent, name);
        let result = sqlx::query(INSERT_NODE)
            .bind(&child)
            .bind(&parent)
            .bind(name)
            .bind(Json(&properties))
            .execute(&mut *self.tx)
            .await;

        match result {
            Ok(_) => Ok(child),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(RepoError::AlreadyExists(child)),
            Err(e) => Err(backend(e)),
        }
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(backend)?;
        debug!("Committed content transaction");
        Ok(())
    }
}
