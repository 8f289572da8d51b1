//! Infrastructure adapters.
//!
//! Inbound HTTP (axum) and outbound Notion (reqwest). Map errors to and from DomainError.

pub mod http;
pub mod notion;
