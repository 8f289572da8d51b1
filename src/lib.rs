//! notion-session-sink: webhook that files session extractions into Notion, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
