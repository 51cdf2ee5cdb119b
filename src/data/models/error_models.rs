use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::Error as DieselError;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure surface of the REST handlers. Serialized as `{error, status}` JSON.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Word '{0}' already exists")]
    DuplicateHeadword(String),
    #[error("{0}")]
    Validation(String),
    #[error("Database error")]
    DatabaseError(#[from] DieselError),
    #[error("Connection pool error")]
    PoolError(#[from] r2d2::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::DuplicateHeadword(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e),
            ApiError::DatabaseError(e) => {
                log::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            }
            ApiError::PoolError(e) => {
                log::error!("Failed to get DB connection: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get DB connection".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
