//! Metadata rows <-> `Metadata`
//!
//! ## Read path
//!
//! Rows without a key are skipped. Otherwise the first populated slot in the
//! order bool, str, int, float becomes the value; rows with no populated
//! slot are skipped. If nothing survives, the result is `None`: an empty map
//! never crosses into the domain model.
//!
//! ## Write path
//!
//! One row per key with exactly the slot of the value's variant set. An
//! absent map produces no rows. A variant the write path does not know is
//! reported to diagnostics and its key is left out; the remaining keys are
//! still written. Rows come out sorted by key.
//!
//! Both directions are generic over `MetadataScope`; collections and
//! segments differ only in the owner column.

use crate::converter::Converter;
use crate::diagnostics::Diagnostics;
use sysdb_core::{CollectionMetadata, Metadata, MetadataValue, SegmentMetadata};
use sysdb_storage::{
    CollectionMetadataRow, CollectionScope, MetadataRow, MetadataScope, SegmentMetadataRow,
    SegmentScope,
};

/// Value of the highest-priority populated slot
fn slot_value<S: MetadataScope>(row: &MetadataRow<S>) -> Option<MetadataValue> {
    row.bool_value
        .map(MetadataValue::Bool)
        .or_else(|| row.str_value.clone().map(MetadataValue::Str))
        .or_else(|| row.int_value.map(MetadataValue::Int))
        .or_else(|| row.float_value.map(MetadataValue::Float))
}

impl<D: Diagnostics> Converter<D> {
    /// Fold metadata rows into a map
    ///
    /// Returns `None` for absent input and for input where every row is
    /// skipped.
    pub fn metadata_to_model<S: MetadataScope>(
        &self,
        rows: Option<&[MetadataRow<S>]>,
    ) -> Option<Metadata> {
        let metadata = rows.and_then(|rows| {
            let mut metadata = Metadata::new();
            for row in rows {
                let Some(key) = row.key.as_deref() else {
                    continue;
                };
                if let Some(value) = slot_value(row) {
                    metadata.set(key, value);
                }
            }
            (!metadata.is_empty()).then_some(metadata)
        });
        self.emit(
            "metadata_to_model",
            rows.map(<[_]>::len),
            metadata.as_ref().map(Metadata::len),
            &metadata,
        );
        metadata
    }

    /// Expand a map into metadata rows owned by `owner_id`
    pub fn metadata_to_rows<S: MetadataScope>(
        &self,
        owner_id: &str,
        metadata: Option<&Metadata>,
    ) -> Vec<MetadataRow<S>> {
        let Some(metadata) = metadata else {
            self.emit("metadata_to_rows", None, Some(0), &());
            return Vec::new();
        };

        let mut entries: Vec<(&String, &MetadataValue)> = metadata.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut rows = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let row = MetadataRow::<S>::new(owner_id, key.as_str());
            let row = match value {
                MetadataValue::Bool(b) => row.with_bool(*b),
                MetadataValue::Str(s) => row.with_str(s.as_str()),
                MetadataValue::Int(i) => row.with_int(*i),
                MetadataValue::Float(f) => row.with_float(*f),
                other => {
                    self.diagnostics()
                        .unknown_variant(S::TABLE, owner_id, key, other);
                    continue;
                }
            };
            rows.push(row);
        }
        self.emit("metadata_to_rows", Some(metadata.len()), Some(rows.len()), &rows);
        rows
    }

    /// Fold `collection_metadata` rows into a map
    pub fn collection_metadata_to_model(
        &self,
        rows: Option<&[CollectionMetadataRow]>,
    ) -> Option<CollectionMetadata> {
        self.metadata_to_model::<CollectionScope>(rows)
    }

    /// Expand collection metadata into `collection_metadata` rows
    pub fn collection_metadata_to_rows(
        &self,
        collection_id: &str,
        metadata: Option<&CollectionMetadata>,
    ) -> Vec<CollectionMetadataRow> {
        self.metadata_to_rows::<CollectionScope>(collection_id, metadata)
    }

    /// Fold `segment_metadata` rows into a map
    pub fn segment_metadata_to_model(
        &self,
        rows: Option<&[SegmentMetadataRow]>,
    ) -> Option<SegmentMetadata> {
        self.metadata_to_model::<SegmentScope>(rows)
    }

    /// Expand segment metadata into `segment_metadata` rows
    pub fn segment_metadata_to_rows(
        &self,
        segment_id: &str,
        metadata: Option<&SegmentMetadata>,
    ) -> Vec<SegmentMetadataRow> {
        self.metadata_to_rows::<SegmentScope>(segment_id, metadata)
    }
}
