//! Domain entities for the catalog
//!
//! These are request-scoped value objects. They are built fresh from
//! persisted rows for each read, or built by a caller right before a write,
//! and are never mutated by the conversion layer afterwards.

use crate::metadata::{CollectionMetadata, SegmentMetadata};
use crate::types::UniqueId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A collection tracked by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection id
    pub id: UniqueId,
    /// User-visible name, unique within the database
    pub name: String,
    /// Serialized collection configuration (opaque to this layer)
    pub configuration_json_str: String,
    /// Embedding dimension, unknown until the first write
    pub dimension: Option<i32>,
    /// Owning tenant
    pub tenant_id: String,
    /// Owning database name
    pub database_name: String,
    /// Owning database id
    pub database_id: UniqueId,
    /// Logical timestamp
    pub ts: i64,
    /// Last log offset folded into the collection
    pub log_position: i64,
    /// Collection version, bumped on each compaction
    pub version: i32,
    /// Record count after the last compaction
    pub total_records_post_compaction: u64,
    /// Size after the last compaction
    pub size_bytes_post_compaction: u64,
    /// Time of the last compaction in epoch seconds
    pub last_compaction_time_secs: u64,
    /// Collection this one was forked from, if any
    pub root_collection_id: Option<UniqueId>,
    /// Path of the fork lineage file
    pub lineage_file_name: Option<String>,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Path of the version history file
    pub version_file_name: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update in epoch seconds
    pub updated_at: i64,
    /// Collection metadata; `None` when no metadata is set
    pub metadata: Option<CollectionMetadata>,
}

/// Collection fields needed by garbage collection
///
/// Avoids materializing full collections when listing GC candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionToGc {
    /// Collection id
    pub id: UniqueId,
    /// Collection name
    pub name: String,
    /// Path of the version history file
    pub version_file_path: String,
    /// Owning tenant
    pub tenant_id: String,
    /// Path of the fork lineage file
    pub lineage_file_path: Option<String>,
}

/// A segment of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment id
    pub id: UniqueId,
    /// Segment implementation tag (e.g. record, metadata, vector index)
    pub segment_type: String,
    /// Segment scope tag
    pub scope: String,
    /// Logical timestamp
    pub ts: i64,
    /// Owning collection; nil when the segment is unowned
    pub collection_id: UniqueId,
    /// Segment metadata; `None` when no metadata is set
    pub metadata: Option<SegmentMetadata>,
}

impl Segment {
    /// True when the segment has no owning collection
    pub fn is_unowned(&self) -> bool {
        self.collection_id.is_nil()
    }
}

/// A database within a tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Database id (opaque string)
    pub id: String,
    /// Database name
    pub name: String,
    /// Owning tenant
    pub tenant: String,
}

/// A tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Tenant name
    pub name: String,
    /// External resource name, if one was assigned
    pub resource_name: Option<String>,
}
