//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these; the HTTP adapter maps them
//! back onto status codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Shared secret configured and the request did not present it.
    #[error("Unauthorized")]
    Unauthorized,

    /// Required environment variable is unset or empty. Holds the variable name.
    #[error("Missing {0}")]
    MissingConfig(&'static str),

    #[error("{0}")]
    InvalidConfig(String),

    /// Notion answered with a status >= 300. Body is kept verbatim for diagnostics.
    #[error("Notion API error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Timeout, connection failure or an aborted request task.
    #[error("Notion request failed: {0}")]
    Transport(String),
}
