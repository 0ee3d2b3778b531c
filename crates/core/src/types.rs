//! Identifier types for the catalog
//!
//! This module defines:
//! - UniqueId: Globally unique identifier for collections, segments and
//!   database references
//!
//! ## Resolution Forms
//!
//! Identifiers arrive from persisted rows as strings. Three forms exist:
//!
//! - `parse`: fallible, for callers that want to handle a malformed id
//! - `parse_or_nil`: total, absent or malformed input becomes the nil id
//! - `must_parse`: for ids the schema guarantees; malformed input is a
//!   data-integrity bug and panics
//!
//! The nil id (all zero bytes) means "no identifier". It is distinct from a
//! parse failure, which is an error value.

use crate::error::IdParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a catalog entity
///
/// A UniqueId wraps a UUID. Its canonical string encoding is the hyphenated
/// lowercase UUID form (36 characters).
///
/// `UniqueId::default()` is the nil id, not a random one: a defaulted
/// reference means "unset".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// Create a new random UniqueId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The distinguished nil id
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Create a UniqueId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a UniqueId from its string encoding
    ///
    /// # Errors
    /// Returns `IdParseError` if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|source| IdParseError {
                value: s.to_string(),
                source,
            })
    }

    /// Parse an optional id, degrading to nil
    ///
    /// Returns the nil id when `s` is `None` or does not parse. Used for
    /// references where legacy or malformed values must not abort the
    /// surrounding conversion.
    pub fn parse_or_nil(s: Option<&str>) -> Self {
        s.and_then(|s| Self::parse(s).ok()).unwrap_or_default()
    }

    /// Parse an id the persistence schema guarantees to be valid
    ///
    /// # Panics
    /// Panics if `s` is not a valid UUID. A malformed value here means the
    /// persisted data violates its schema.
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(e) => panic!("schema-guaranteed identifier is malformed: {}", e),
        }
    }

    /// Check whether this is the nil id
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// `None` for the nil id, `Some(self)` otherwise
    pub fn non_nil(self) -> Option<Self> {
        if self.is_nil() {
            None
        } else {
            Some(self)
        }
    }

    /// Get the raw bytes of this UniqueId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UniqueId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for UniqueId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
