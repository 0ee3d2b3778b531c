//! sysdb - catalog row and domain model conversion
//!
//! The catalog tracks tenants, databases, collections and segments. This
//! crate converts between the rows the persistence layer stores and the
//! domain entities the rest of the service works with.
//!
//! # Quick Start
//!
//! ```
//! use sysdb::{CollectionMetadataRow, Converter, MetadataValue};
//!
//! let converter = Converter::new();
//! let rows = vec![CollectionMetadataRow::new("c1", "hnsw:space").with_str("cosine")];
//! let metadata = converter.collection_metadata_to_model(Some(&rows)).unwrap();
//! assert_eq!(metadata.get("hnsw:space"), Some(&MetadataValue::Str("cosine".into())));
//! ```
//!
//! # Architecture
//!
//! - `sysdb-core`: identifiers, metadata values, domain entities
//! - `sysdb-storage`: persisted rows
//! - `sysdb-convert`: the [`Converter`]

pub use sysdb_convert::{
    ConversionEvent, ConvertError, Converter, ConverterConfig, Diagnostics, DiagnosticsMode,
    NoopDiagnostics, TracingDiagnostics,
};
pub use sysdb_core::{
    Collection, CollectionMetadata, CollectionToGc, Database, IdParseError, Metadata,
    MetadataValue, Segment, SegmentMetadata, Tenant, UniqueId,
};
pub use sysdb_storage::{
    CollectionAndMetadataRow, CollectionMetadataRow, CollectionRow, CollectionScope,
    CollectionToGcRow, DatabaseRow, MetadataRow, MetadataScope, SegmentAndMetadataRow,
    SegmentMetadataRow, SegmentRow, SegmentScope, TenantRow,
};
