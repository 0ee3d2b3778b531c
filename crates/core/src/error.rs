//! Error types for the catalog core
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// A string could not be parsed as a `UniqueId`
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid unique id '{value}': {source}")]
pub struct IdParseError {
    /// The rejected input
    pub value: String,
    /// Underlying UUID parse failure
    #[source]
    pub source: uuid::Error,
}
