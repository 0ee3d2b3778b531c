//! Collection conversions
//!
//! Batch reads are 1:1 and order-preserving. An absent batch converts to
//! `None` and an empty batch to `Some(vec![])`; callers rely on telling
//! "nothing queried" apart from "queried, nothing found".
//!
//! `id` and `database_id` are required: a malformed value fails the whole
//! batch. `root_collection_id` is optional and degrades to `None` when it is
//! absent or malformed.

use crate::converter::Converter;
use crate::diagnostics::Diagnostics;
use crate::error::{required_id, ConvertError, Result};
use chrono::{TimeZone, Utc};
use sysdb_core::{Collection, CollectionToGc, UniqueId};
use sysdb_storage::{CollectionAndMetadataRow, CollectionRow, CollectionToGcRow};

impl<D: Diagnostics> Converter<D> {
    /// Convert joined collection rows into collections
    ///
    /// # Errors
    /// `ConvertError::InvalidId` if any row has a malformed `id` or
    /// `database_id`. No partial result is returned.
    pub fn collections_to_model(
        &self,
        rows: Option<&[CollectionAndMetadataRow]>,
    ) -> Result<Option<Vec<Collection>>> {
        let collections = rows
            .map(|rows| {
                rows.iter()
                    .map(|row| self.collection_to_model(row))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;
        self.emit(
            "collections_to_model",
            rows.map(<[_]>::len),
            collections.as_ref().map(Vec::len),
            &collections,
        );
        Ok(collections)
    }

    fn collection_to_model(&self, row: &CollectionAndMetadataRow) -> Result<Collection> {
        let collection = &row.collection;
        let root_collection_id =
            UniqueId::parse_or_nil(collection.root_collection_id.as_deref()).non_nil();

        Ok(Collection {
            id: required_id("id", &collection.id)?,
            name: collection.name.clone(),
            configuration_json_str: collection.configuration_json_str.clone(),
            dimension: collection.dimension,
            tenant_id: row.tenant_id.clone(),
            database_name: row.database_name.clone(),
            database_id: required_id("database_id", &collection.database_id)?,
            ts: collection.ts,
            log_position: collection.log_position,
            version: collection.version,
            total_records_post_compaction: collection.total_records_post_compaction,
            size_bytes_post_compaction: collection.size_bytes_post_compaction,
            last_compaction_time_secs: collection.last_compaction_time_secs,
            root_collection_id,
            lineage_file_name: collection.lineage_file_name.clone(),
            is_deleted: collection.is_deleted,
            version_file_name: collection.version_file_name.clone(),
            created_at: collection.created_at,
            updated_at: collection.updated_at.timestamp(),
            metadata: self.collection_metadata_to_model(row.metadata.as_deref()),
        })
    }

    /// Convert GC listing rows into GC projections
    ///
    /// # Errors
    /// `ConvertError::InvalidId` if any row has a malformed `id`.
    pub fn collections_to_gc_model(
        &self,
        rows: Option<&[CollectionToGcRow]>,
    ) -> Result<Option<Vec<CollectionToGc>>> {
        let collections = rows
            .map(|rows| {
                rows.iter()
                    .map(|row| -> Result<CollectionToGc> {
                        Ok(CollectionToGc {
                            id: required_id("id", &row.id)?,
                            name: row.name.clone(),
                            version_file_path: row.version_file_name.clone(),
                            tenant_id: row.tenant_id.clone(),
                            lineage_file_path: row.lineage_file_name.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;
        self.emit(
            "collections_to_gc_model",
            rows.map(<[_]>::len),
            collections.as_ref().map(Vec::len),
            &collections,
        );
        Ok(collections)
    }

    /// Convert a collection into its row and metadata rows
    ///
    /// # Errors
    /// `ConvertError::InvalidTimestamp` if `updated_at` is outside the
    /// representable range.
    pub fn collection_to_row(&self, collection: &Collection) -> Result<CollectionAndMetadataRow> {
        let updated_at = Utc
            .timestamp_opt(collection.updated_at, 0)
            .single()
            .ok_or(ConvertError::InvalidTimestamp {
                field: "updated_at",
                secs: collection.updated_at,
            })?;
        let id = collection.id.to_string();
        let metadata = collection
            .metadata
            .as_ref()
            .map(|metadata| self.collection_metadata_to_rows(&id, Some(metadata)));

        let row = CollectionAndMetadataRow {
            collection: CollectionRow {
                id,
                name: collection.name.clone(),
                configuration_json_str: collection.configuration_json_str.clone(),
                dimension: collection.dimension,
                database_id: collection.database_id.to_string(),
                ts: collection.ts,
                is_deleted: collection.is_deleted,
                created_at: collection.created_at,
                updated_at,
                log_position: collection.log_position,
                version: collection.version,
                version_file_name: collection.version_file_name.clone(),
                root_collection_id: collection.root_collection_id.map(|id| id.to_string()),
                lineage_file_name: collection.lineage_file_name.clone(),
                total_records_post_compaction: collection.total_records_post_compaction,
                size_bytes_post_compaction: collection.size_bytes_post_compaction,
                last_compaction_time_secs: collection.last_compaction_time_secs,
            },
            metadata,
            tenant_id: collection.tenant_id.clone(),
            database_name: collection.database_name.clone(),
        };
        self.emit("collection_to_row", Some(1), Some(1), &row);
        Ok(row)
    }
}
