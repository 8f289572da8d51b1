//! Inbound port. The HTTP adapter calls into the application.

use crate::domain::{DomainError, Extraction, IngestReceipt};

/// Ingest use case as seen by the transport layer.
#[async_trait::async_trait]
pub trait IngestPort: Send + Sync {
    /// Authorize, map and forward one extraction.
    ///
    /// `secret` is the raw `X-Webhook-Secret` header value, `None` when the
    /// header was not sent.
    async fn ingest(
        &self,
        extraction: Extraction,
        secret: Option<String>,
    ) -> Result<IngestReceipt, DomainError>;
}
