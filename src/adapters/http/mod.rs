//! Inbound HTTP adapter. axum router over the IngestPort.

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{WEBHOOK_SECRET_HEADER, router};
