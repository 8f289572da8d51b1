//! Webhook routes
//!
//! `GET /health` is always open; `POST /ingest` is guarded by the optional
//! shared secret inside the use case.

use super::ApiError;
use crate::domain::{Extraction, IngestReceipt};
use crate::ports::IngestPort;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

/// Create the webhook router around an ingest use case.
pub fn router(ingest_port: Arc<dyn IngestPort>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ingest", post(ingest))
        .layer(TraceLayer::new_for_http())
        .with_state(ingest_port)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Forward one extraction to Notion
///
/// POST /ingest
async fn ingest(
    State(ingest_port): State<Arc<dyn IngestPort>>,
    headers: HeaderMap,
    payload: Result<Json<Extraction>, JsonRejection>,
) -> Result<Json<IngestReceipt>, ApiError> {
    let Json(extraction) = payload.map_err(|e| {
        tracing::debug!("Rejected ingest body: {}", e.body_text());
        ApiError::BadRequest(e.body_text())
    })?;

    // Non-UTF-8 header values are treated as absent
    let secret = headers
        .get(WEBHOOK_SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let receipt = ingest_port.ingest(extraction, secret).await?;
    Ok(Json(receipt))
}
