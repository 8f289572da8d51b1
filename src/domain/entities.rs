//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/Notion types here; adapters map to and from these.

use super::{DatabaseId, PropertyMap};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Optional text field as received on the wire.
///
/// `null` and a missing key both land on `Absent`, so `Empty` only ever means
/// the caller explicitly sent `""`. Long-form text fields key off presence,
/// date-like and select fields key off truthiness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Absent,
    Empty,
    Value(String),
}

impl Field {
    /// Text for any field the caller supplied, including `""`.
    pub fn present(&self) -> Option<&str> {
        match self {
            Field::Absent => None,
            Field::Empty => Some(""),
            Field::Value(s) => Some(s),
        }
    }

    /// Text only for non-empty values.
    pub fn truthy(&self) -> Option<&str> {
        match self {
            Field::Value(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Field::Empty
        } else {
            Field::Value(s)
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::from(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.map_or(Field::Absent, Field::from))
    }
}

/// One journaling/reflection session as extracted upstream of this service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extraction {
    #[serde(deserialize_with = "non_empty")]
    pub session_title: String,
    /// ISO-8601 date. Today (server-local) when not supplied.
    #[serde(default)]
    pub date: Field,
    #[serde(default)]
    pub domain: Field,
    #[serde(default)]
    pub thesis: Field,
    #[serde(default)]
    pub antithesis: Field,
    #[serde(default)]
    pub synthesis: Field,
    #[serde(default)]
    pub open_tensions: Field,
    #[serde(default)]
    pub behavioral_commitment: Field,
    #[serde(default)]
    pub follow_up_date: Field,
}

fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(D::Error::custom("session_title must not be empty"));
    }
    Ok(s)
}

/// Reply to a successful ingest. `page_id` is whatever id Notion assigned, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReceipt {
    pub ok: bool,
    pub page_id: Option<String>,
}

impl IngestReceipt {
    pub fn created(page_id: Option<String>) -> Self {
        Self { ok: true, page_id }
    }
}

/// A page ready to be created under the sessions database.
#[derive(Clone)]
pub struct NewPage {
    pub token: String,
    pub database_id: DatabaseId,
    pub properties: PropertyMap,
}

impl fmt::Debug for NewPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPage")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("properties", &self.properties)
            .finish()
    }
}
