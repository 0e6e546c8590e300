use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;
use xerago_coupons::ImportReport;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportParams {
    pub dam_path: Option<String>,
    pub target_path: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/bin/importcoupons", get(import_coupons))
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError(format!("missing parameter: {}", name)))
}

async fn import_coupons(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
) -> Result<Json<ImportReport>, AppError> {
    let dam_path = required(params.dam_path, "damPath")?;
    let target_path = required(params.target_path, "targetPath")?;
    info!("Coupon import requested: {} -> {}", dam_path, target_path);

    let report = xerago_coupons::import_coupons(state.repo.as_ref(), &dam_path, &target_path)
        .await
        .map_err(|e| {
            tracing::warn!("Coupon import from {} failed: {}", dam_path, e);
            AppError::from_import(e)
        })?;

    Ok(Json(report))
}
