//! Mapping of domain failures onto HTTP responses.

use crate::domain::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything a route handler can fail with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body rejected by the JSON extractor (syntax, content type or schema).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "detail": message })),
            ApiError::Domain(DomainError::Unauthorized) => (
                StatusCode::UNAUTHORIZED,
                json!({ "detail": DomainError::Unauthorized.to_string() }),
            ),
            ApiError::Domain(
                ref e @ (DomainError::MissingConfig(_) | DomainError::InvalidConfig(_)),
            ) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": e.to_string() }),
                )
            }
            ApiError::Domain(DomainError::Upstream { status, body }) => (
                StatusCode::BAD_GATEWAY,
                json!({ "notion_status": status, "notion_body": body }),
            ),
            ApiError::Domain(ref e @ DomainError::Transport(_)) => {
                tracing::error!("Upstream transport error: {}", e);
                (StatusCode::BAD_GATEWAY, json!({ "detail": e.to_string() }))
            }
        };

        (status, Json(body)).into_response()
    }
}
