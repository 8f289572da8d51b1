//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, NewPage};

/// Document database that sessions end up in.
#[async_trait::async_trait]
pub trait PageSink: Send + Sync {
    /// Create a single page. One attempt, no retry.
    ///
    /// Returns the id the database assigned, or `None` when the success
    /// response did not carry one.
    ///
    /// # Errors
    /// `DomainError::Upstream` for a rejected request,
    /// `DomainError::Transport` when no response was received.
    async fn create_page(&self, page: &NewPage) -> Result<Option<String>, DomainError>;
}
