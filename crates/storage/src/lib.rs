//! Persisted row representation for the sysdb catalog
//!
//! This crate defines the flat, nullable-column structs exchanged with the
//! persistence layer:
//! - Entity rows: CollectionRow, SegmentRow, DatabaseRow, TenantRow
//! - Joined rows: CollectionAndMetadataRow, SegmentAndMetadataRow
//! - CollectionToGcRow: GC listing projection
//! - MetadataRow<S>: one metadata entry, scoped to collections or segments
//!
//! No querying happens here; the query layer fills these structs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod metadata_row;
pub mod rows;

pub use metadata_row::{
    CollectionMetadataRow, CollectionScope, MetadataRow, MetadataScope, SegmentMetadataRow,
    SegmentScope,
};
pub use rows::{
    CollectionAndMetadataRow, CollectionRow, CollectionToGcRow, DatabaseRow,
    SegmentAndMetadataRow, SegmentRow, TenantRow,
};
