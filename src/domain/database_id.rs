//! Notion database identifier, as configured by the operator.

use super::DomainError;
use std::fmt;

/// Minimum number of hex digits in a Notion id (a UUID without hyphens).
pub const MIN_HEX_LEN: usize = 32;

/// Database id reduced to its hex digits.
///
/// Operators paste ids with hyphens or as part of a share URL; everything that
/// is not `[0-9a-fA-F]` is dropped before the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseId(String);

impl DatabaseId {
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let hex: String = raw.chars().filter(char::is_ascii_hexdigit).collect();
        if hex.len() < MIN_HEX_LEN {
            return Err(DomainError::InvalidConfig(
                "NOTION_SESSIONS_DB_ID looks invalid".to_string(),
            ));
        }
        Ok(Self(hex))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
