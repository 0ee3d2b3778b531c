//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's
//! main.rs.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::sync::Mutex;
use sysdb::{
    CollectionAndMetadataRow, CollectionMetadataRow, CollectionRow, ConversionEvent, Converter,
    ConverterConfig, Diagnostics, MetadataValue, SegmentAndMetadataRow, SegmentMetadataRow,
    SegmentRow, UniqueId,
};

// ============================================================================
// Converters
// ============================================================================

/// Converter that records every diagnostic it receives.
pub fn recording_converter(config: ConverterConfig) -> Converter<RecordingDiagnostics> {
    Converter::with_diagnostics(config, RecordingDiagnostics::default())
}

/// A diagnostic captured by `RecordingDiagnostics`.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Converted {
        operation: &'static str,
        input: Option<usize>,
        output: Option<usize>,
        payload: Option<String>,
    },
    UnknownVariant {
        table: &'static str,
        owner_id: String,
        key: String,
    },
}

/// Diagnostics sink that keeps everything in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<Recorded>>,
}

impl RecordingDiagnostics {
    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Converted { operation, .. } => Some(operation),
                Recorded::UnknownVariant { .. } => None,
            })
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn converted(&self, event: &ConversionEvent<'_>) {
        self.events.lock().unwrap().push(Recorded::Converted {
            operation: event.operation,
            input: event.input,
            output: event.output,
            payload: event.payload.map(|p| format!("{:?}", p)),
        });
    }

    fn unknown_variant(&self, table: &'static str, owner_id: &str, key: &str, _value: &MetadataValue) {
        self.events.lock().unwrap().push(Recorded::UnknownVariant {
            table,
            owner_id: owner_id.to_string(),
            key: key.to_string(),
        });
    }
}

// ============================================================================
// Row builders
// ============================================================================

/// Joined collection row with valid ids and no metadata.
pub fn collection_row() -> CollectionAndMetadataRow {
    CollectionAndMetadataRow {
        collection: CollectionRow {
            id: UniqueId::new().to_string(),
            name: "docs".to_string(),
            configuration_json_str: r#"{"hnsw":{"space":"cosine"}}"#.to_string(),
            dimension: Some(768),
            database_id: UniqueId::new().to_string(),
            ts: 1,
            created_at: Utc.timestamp_opt(1_690_000_000, 0).unwrap(),
            updated_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            log_position: 100,
            version: 3,
            version_file_name: Some("versions/3".to_string()),
            total_records_post_compaction: 1_000,
            size_bytes_post_compaction: 4_096,
            last_compaction_time_secs: 1_699_999_000,
            ..Default::default()
        },
        metadata: None,
        tenant_id: "default_tenant".to_string(),
        database_name: "default_database".to_string(),
    }
}

/// Joined collection row carrying the given metadata rows.
pub fn collection_row_with_metadata(
    build: impl FnOnce(&str) -> Vec<CollectionMetadataRow>,
) -> CollectionAndMetadataRow {
    let mut row = collection_row();
    row.metadata = Some(build(&row.collection.id));
    row
}

/// Joined segment row owned by `collection_id`.
pub fn segment_row(collection_id: Option<String>) -> SegmentAndMetadataRow {
    SegmentAndMetadataRow {
        segment: SegmentRow {
            id: UniqueId::new().to_string(),
            segment_type: "urn:sysdb:segment/metadata/sqlite".to_string(),
            scope: "METADATA".to_string(),
            ts: 1,
            collection_id,
            ..Default::default()
        },
        metadata: None,
    }
}

/// Joined segment row carrying the given metadata rows.
pub fn segment_row_with_metadata(
    build: impl FnOnce(&str) -> Vec<SegmentMetadataRow>,
) -> SegmentAndMetadataRow {
    let mut row = segment_row(Some(UniqueId::new().to_string()));
    row.metadata = Some(build(&row.segment.id));
    row
}
