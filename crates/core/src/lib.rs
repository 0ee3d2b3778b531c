//! Core types for the sysdb catalog
//!
//! This crate defines the in-memory domain model:
//! - UniqueId: Identifier with parse / parse-or-nil / must-parse resolution
//! - MetadataValue: Bool / Str / Int / Float union
//! - Metadata: Key to value map shared by collections and segments
//! - Collection, CollectionToGc, Segment, Database, Tenant: Catalog entities
//! - IdParseError: Identifier parse failure

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod metadata;
pub mod model;
pub mod types;
pub mod value;

pub use error::IdParseError;
pub use metadata::{CollectionMetadata, Metadata, SegmentMetadata};
pub use model::{Collection, CollectionToGc, Database, Segment, Tenant};
pub use types::UniqueId;
pub use value::MetadataValue;
