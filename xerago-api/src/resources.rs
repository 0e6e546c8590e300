//! Content-addressed endpoints: `<node>.coupon.json` and `<node>.model.json`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use xerago_core::ContentRepository;
use xerago_coupons::SelectError;

use crate::{error::AppError, resolve, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/{*resource}", get(serve_resource))
}

async fn serve_resource(State(state): State<AppState>, Path(resource): Path<String>) -> Result<Response, AppError> {
    let request = resolve::parse(&format!("/{}", resource))
        .ok_or_else(|| AppError::NotFoundError(format!("No resource at /{}", resource)))?;

    if request.is("coupon", "json") {
        random_coupon(&state, &request.path).await
    } else if request.is("model", "json") {
        component_model(&state, &request.path).await
    } else {
        Err(AppError::NotFoundError(format!("No handler for /{}", resource)))
    }
}

async fn random_coupon(state: &AppState, node_path: &str) -> Result<Response, AppError> {
    let node = state
        .repo
        .get(node_path)
        .await
        .map_err(AppError::from_repo)?
        .ok_or_else(|| AppError::NotFoundError(format!("Resource not found: {}", node_path)))?;

    // Only game start screens serve coupons
    if node.resource_type.as_deref() != Some(state.coupons.start_screen_resource_type.as_str()) {
        return Err(AppError::NotFoundError(format!("No coupon handler for {}", node_path)));
    }

    match xerago_coupons::select_random_coupon(state.repo.as_ref(), state.random.as_ref(), &state.coupons.folder).await {
        Ok(coupon) => Ok(Json(coupon).into_response()),
        Err(e @ (SelectError::FolderNotFound | SelectError::NoCoupons)) => {
            tracing::warn!("Coupon request on {}: {}", node_path, e);
            Ok((StatusCode::NOT_FOUND, e.to_string()).into_response())
        }
        Err(SelectError::Repository(e)) => Err(AppError::from_repo(e)),
    }
}

async fn component_model(state: &AppState, node_path: &str) -> Result<Response, AppError> {
    let node = state
        .repo
        .get(node_path)
        .await
        .map_err(AppError::from_repo)?
        .ok_or_else(|| AppError::NotFoundError(format!("Resource not found: {}", node_path)))?;

    let model = state.components.render(&node).map_err(AppError::from_component)?;
    Ok(Json(model).into_response())
}
