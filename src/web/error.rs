use crate::services::assets::AssetError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::collections::BTreeMap;
use thiserror::Error;

/// Request-level failure taxonomy. Every variant renders the uniform
/// `{status, message, ...}` envelope the frontend expects.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("request".to_string(), message.into());
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "status": false,
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "status": false,
                    "message": message,
                })),
            )
                .into_response(),
            ApiError::Asset(e) => {
                tracing::error!("asset pipeline error: {:?}", e);
                internal_error_response(&e.to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!("request failed: {:?}", e);
                internal_error_response(&e.to_string())
            }
        }
    }
}

fn internal_error_response(detail: &str) -> Response {
    // Error text is exposed in the envelope; this backend is an internal
    // admin tool, not a hardened public API.
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "status": false,
            "message": "Something went wrong",
            "error": detail,
        })),
    )
        .into_response()
}
