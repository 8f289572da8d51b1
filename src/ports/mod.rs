//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the HTTP adapter into the application
//! - Outbound: Called by application into the document database

pub mod inbound;
pub mod outbound;

pub use inbound::IngestPort;
pub use outbound::PageSink;
