use serde_json::{Map, Value};
use tracing::debug;
use xerago_core::random::pick;
use xerago_core::{ContentRepository, RandomSource, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("coupon folder not found")]
    FolderNotFound,

    #[error("No coupons available")]
    NoCoupons,

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Pick one coupon under `folder` uniformly at random and return its
/// properties.
pub async fn select_random_coupon(
    repo: &dyn ContentRepository,
    random: &dyn RandomSource,
    folder: &str,
) -> Result<Map<String, Value>, SelectError> {
    let folder = repo.get(folder).await?.ok_or(SelectError::FolderNotFound)?;
    let coupon = pick(random, &folder.children).ok_or(SelectError::NoCoupons)?;

    debug!("Selected coupon {} of {}", coupon.path, folder.children.len());
    Ok(coupon.properties.clone())
}
