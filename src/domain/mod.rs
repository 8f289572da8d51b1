//! Core domain layer. No external I/O dependencies.
//!
//! The inbound record, its field semantics and the pure mapping onto the
//! sessions database schema live here.

pub mod database_id;
pub mod entities;
pub mod errors;
pub mod properties;

pub use database_id::DatabaseId;
pub use entities::{Extraction, Field, IngestReceipt, NewPage};
pub use errors::DomainError;
pub use properties::{PropertyMap, build_properties, rich_text};
