//! Error types for catalog conversions
//!
//! Only violations of schema guarantees are errors. Skipped metadata rows,
//! unparseable optional ids and unknown metadata variants are tolerated and
//! never surface here.

use sysdb_core::{IdParseError, UniqueId};
use thiserror::Error;

/// Result type alias for conversions
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Conversion failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A required identifier column holds a malformed value
    #[error("invalid {field} '{value}'")]
    InvalidId {
        /// Column the value came from
        field: &'static str,
        /// The rejected value
        value: String,
        /// Parse failure
        #[source]
        source: IdParseError,
    },

    /// An epoch-seconds value cannot be represented as a timestamp
    #[error("{field} out of range: {secs} seconds")]
    InvalidTimestamp {
        /// Field the value came from
        field: &'static str,
        /// The rejected value
        secs: i64,
    },
}

/// Resolve an identifier the schema guarantees to be valid
///
/// Recoverable form of `UniqueId::must_parse`: a malformed value fails the
/// conversion instead of panicking.
pub(crate) fn required_id(field: &'static str, raw: &str) -> Result<UniqueId> {
    UniqueId::parse(raw).map_err(|source| ConvertError::InvalidId {
        field,
        value: raw.to_string(),
        source,
    })
}
