use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use xerago_components::ComponentError;
use xerago_core::RepoError;
use xerago_coupons::ImportError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    UnprocessableError(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn from_import(err: ImportError) -> Self {
        match err {
            ImportError::InvalidPath(_) => AppError::ValidationError(err.to_string()),
            ImportError::SourceNotFound(_) => AppError::NotFoundError(err.to_string()),
            ImportError::NotAnAsset(_)
            | ImportError::Malformed(_)
            | ImportError::NotAnArray
            | ImportError::EntryNotObject { .. }
            | ImportError::MissingId { .. }
            | ImportError::NonScalar { .. }
            | ImportError::InvalidId { .. } => AppError::UnprocessableError(err.to_string()),
            ImportError::Repository(e) => AppError::from_repo(e),
        }
    }

    pub fn from_repo(err: RepoError) -> Self {
        match err {
            RepoError::AlreadyExists(_) => AppError::ConflictError(err.to_string()),
            RepoError::InvalidPath(_) => AppError::ValidationError(err.to_string()),
            RepoError::ParentNotFound(_) | RepoError::Backend(_) => AppError::InternalServerError(err.to_string()),
        }
    }

    pub fn from_component(err: ComponentError) -> Self {
        match err {
            ComponentError::Untyped(_) | ComponentError::Unsupported(_) => AppError::NotFoundError(err.to_string()),
            ComponentError::Render(e) => AppError::Anyhow(e.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::UnprocessableError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
