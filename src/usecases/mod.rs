//! Application use cases. Orchestrate domain logic via ports.

pub mod ingest_service;

pub use ingest_service::IngestService;
