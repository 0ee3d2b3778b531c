//! Persisted catalog rows
//!
//! Flat structs mirroring the catalog tables. Identifier columns are kept as
//! raw strings; nullable columns are `Option`. Joined rows pair an entity row
//! with its metadata rows the way the query layer returns them.
//!
//! `metadata: None` on a joined row means the metadata join produced no rows
//! at all, which readers treat the same as an empty list.

use crate::metadata_row::{CollectionMetadataRow, SegmentMetadataRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `collections` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionRow {
    /// Collection id
    pub id: String,
    /// Collection name
    pub name: String,
    /// Serialized collection configuration
    pub configuration_json_str: String,
    /// Embedding dimension
    pub dimension: Option<i32>,
    /// Owning database id
    pub database_id: String,
    /// Logical timestamp
    pub ts: i64,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Row update time
    pub updated_at: DateTime<Utc>,
    /// Last log offset folded into the collection
    pub log_position: i64,
    /// Collection version
    pub version: i32,
    /// Path of the version history file
    pub version_file_name: Option<String>,
    /// Id of the collection this one was forked from
    pub root_collection_id: Option<String>,
    /// Path of the fork lineage file
    pub lineage_file_name: Option<String>,
    /// Record count after the last compaction
    pub total_records_post_compaction: u64,
    /// Size after the last compaction
    pub size_bytes_post_compaction: u64,
    /// Time of the last compaction in epoch seconds
    pub last_compaction_time_secs: u64,
}

/// Collection row joined with its metadata and owning tenant/database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionAndMetadataRow {
    /// The collection row
    pub collection: CollectionRow,
    /// Joined metadata rows
    pub metadata: Option<Vec<CollectionMetadataRow>>,
    /// Owning tenant id
    pub tenant_id: String,
    /// Owning database name
    pub database_name: String,
}

/// Projection of a collection row used to list GC candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionToGcRow {
    /// Collection id
    pub id: String,
    /// Collection name
    pub name: String,
    /// Path of the version history file
    pub version_file_name: String,
    /// Owning tenant id
    pub tenant_id: String,
    /// Path of the fork lineage file
    pub lineage_file_name: Option<String>,
}

/// Row of the `segments` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRow {
    /// Segment id
    pub id: String,
    /// Segment implementation tag
    pub segment_type: String,
    /// Segment scope tag
    pub scope: String,
    /// Logical timestamp
    pub ts: i64,
    /// Owning collection id, null for unassigned segments
    pub collection_id: Option<String>,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Row update time
    pub updated_at: DateTime<Utc>,
}

/// Segment row joined with its metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentAndMetadataRow {
    /// The segment row
    pub segment: SegmentRow,
    /// Joined metadata rows
    pub metadata: Option<Vec<SegmentMetadataRow>>,
}

/// Row of the `databases` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRow {
    /// Database id
    pub id: String,
    /// Database name
    pub name: String,
    /// Owning tenant id
    pub tenant_id: String,
    /// Logical timestamp
    pub ts: i64,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Row update time
    pub updated_at: DateTime<Utc>,
}

/// Row of the `tenants` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRow {
    /// Tenant id (the tenant name)
    pub id: String,
    /// Logical timestamp
    pub ts: i64,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Row update time
    pub updated_at: DateTime<Utc>,
    /// Time of the last compaction across the tenant
    pub last_compaction_time: i64,
    /// External resource name
    pub resource_name: Option<String>,
}
