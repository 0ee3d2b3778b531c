//! Segment conversions
//!
//! A segment row without a collection reference is unowned (e.g. awaiting
//! assignment). It converts to a segment whose `collection_id` is the nil
//! id, and a nil `collection_id` is written back as a null column.

use crate::converter::Converter;
use crate::diagnostics::Diagnostics;
use crate::error::{required_id, Result};
use chrono::{DateTime, Utc};
use sysdb_core::{Segment, UniqueId};
use sysdb_storage::{SegmentAndMetadataRow, SegmentRow};

impl<D: Diagnostics> Converter<D> {
    /// Convert joined segment rows into segments
    ///
    /// # Errors
    /// `ConvertError::InvalidId` if any row has a malformed `id` or a
    /// present but malformed `collection_id`.
    pub fn segments_to_model(
        &self,
        rows: Option<&[SegmentAndMetadataRow]>,
    ) -> Result<Option<Vec<Segment>>> {
        let segments = rows
            .map(|rows| {
                rows.iter()
                    .map(|row| self.segment_to_model(row))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;
        self.emit(
            "segments_to_model",
            rows.map(<[_]>::len),
            segments.as_ref().map(Vec::len),
            &segments,
        );
        Ok(segments)
    }

    fn segment_to_model(&self, row: &SegmentAndMetadataRow) -> Result<Segment> {
        let segment = &row.segment;
        let collection_id = match segment.collection_id.as_deref() {
            Some(raw) => required_id("collection_id", raw)?,
            None => UniqueId::nil(),
        };

        Ok(Segment {
            id: required_id("id", &segment.id)?,
            segment_type: segment.segment_type.clone(),
            scope: segment.scope.clone(),
            ts: segment.ts,
            collection_id,
            metadata: self.segment_metadata_to_model(row.metadata.as_deref()),
        })
    }

    /// Convert a segment into its row and metadata rows
    ///
    /// `now` stamps the row's creation and update times.
    pub fn segment_to_row(&self, segment: &Segment, now: DateTime<Utc>) -> SegmentAndMetadataRow {
        let id = segment.id.to_string();
        let metadata = segment
            .metadata
            .as_ref()
            .map(|metadata| self.segment_metadata_to_rows(&id, Some(metadata)));

        let row = SegmentAndMetadataRow {
            segment: SegmentRow {
                id,
                segment_type: segment.segment_type.clone(),
                scope: segment.scope.clone(),
                ts: segment.ts,
                collection_id: segment.collection_id.non_nil().map(|id| id.to_string()),
                is_deleted: false,
                created_at: now,
                updated_at: now,
            },
            metadata,
        };
        self.emit("segment_to_row", Some(1), Some(1), &row);
        row
    }
}
