//! Notion adapter. Implements PageSink over the Notion REST API.

pub mod client;

pub use client::NotionAdapter;
