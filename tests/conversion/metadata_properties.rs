//! Metadata conversion properties
//!
//! Round-trip, collapse and slot priority over generated inputs.

use crate::common::*;
use proptest::prelude::*;
use sysdb::{
    CollectionMetadataRow, ConverterConfig, Metadata, MetadataValue, SegmentMetadataRow,
};

fn value_strategy() -> impl Strategy<Value = MetadataValue> {
    prop_oneof![
        any::<bool>().prop_map(MetadataValue::Bool),
        "[a-zA-Z0-9 ]{0,16}".prop_map(MetadataValue::Str),
        any::<i64>().prop_map(MetadataValue::Int),
        any::<i32>().prop_map(|i| MetadataValue::Float(i as f64 / 8.0)),
    ]
}

fn metadata_strategy() -> impl Strategy<Value = Metadata> {
    prop::collection::hash_map("[a-z]{1,8}", value_strategy(), 1..16)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Arbitrary, possibly malformed, persisted row.
fn raw_row_strategy() -> impl Strategy<Value = CollectionMetadataRow> {
    (
        proptest::option::of("[a-c]"),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z]{0,4}"),
        proptest::option::of(any::<i64>()),
        proptest::option::of(-1.0e6f64..1.0e6),
    )
        .prop_map(|(key, b, s, i, f)| {
            let mut row = CollectionMetadataRow::new("owner", "placeholder");
            row.key = key;
            row.bool_value = b;
            row.str_value = s;
            row.int_value = i;
            row.float_value = f;
            row
        })
}

fn skip_eligible(row: &CollectionMetadataRow) -> bool {
    row.key.is_none() || row.populated_slots() == 0
}

proptest! {
    #[test]
    fn round_trip_collection_scope(metadata in metadata_strategy()) {
        let converter = recording_converter(ConverterConfig::quiet());
        let rows = converter.collection_metadata_to_rows("c", Some(&metadata));
        prop_assert_eq!(converter.collection_metadata_to_model(Some(&rows)), Some(metadata));
    }

    #[test]
    fn round_trip_segment_scope(metadata in metadata_strategy()) {
        let converter = recording_converter(ConverterConfig::quiet());
        let rows: Vec<SegmentMetadataRow> = converter.segment_metadata_to_rows("s", Some(&metadata));
        prop_assert!(rows.iter().all(|r| r.owner_id == "s" && r.populated_slots() == 1));
        prop_assert_eq!(converter.segment_metadata_to_model(Some(&rows)), Some(metadata));
    }

    #[test]
    fn absent_iff_all_rows_skip_eligible(rows in prop::collection::vec(raw_row_strategy(), 0..8)) {
        let converter = recording_converter(ConverterConfig::quiet());
        let metadata = converter.collection_metadata_to_model(Some(&rows));
        prop_assert_eq!(metadata.is_none(), rows.iter().all(skip_eligible));
    }

    #[test]
    fn converted_keys_come_from_usable_rows(rows in prop::collection::vec(raw_row_strategy(), 0..8)) {
        let converter = recording_converter(ConverterConfig::quiet());
        if let Some(metadata) = converter.collection_metadata_to_model(Some(&rows)) {
            for (key, _) in metadata.iter() {
                prop_assert!(rows
                    .iter()
                    .any(|r| !skip_eligible(r) && r.key.as_deref() == Some(key.as_str())));
            }
        }
    }

    #[test]
    fn bool_slot_always_wins(
        b in any::<bool>(),
        s in proptest::option::of("[a-z]{1,4}"),
        i in proptest::option::of(any::<i64>()),
        f in proptest::option::of(-10.0f64..10.0),
    ) {
        let mut row = CollectionMetadataRow::new("owner", "k").with_bool(b);
        row.str_value = s;
        row.int_value = i;
        row.float_value = f;
        let converter = recording_converter(ConverterConfig::quiet());
        let metadata = converter.collection_metadata_to_model(Some(&[row])).unwrap();
        prop_assert_eq!(metadata.get("k"), Some(&MetadataValue::Bool(b)));
    }
}

#[test]
fn absent_map_writes_zero_rows_and_empty_rows_read_absent() {
    let converter = recording_converter(ConverterConfig::quiet());
    assert!(converter.collection_metadata_to_rows("c", None).is_empty());
    assert_eq!(converter.collection_metadata_to_model(Some(&[][..])), None);
    assert_eq!(converter.segment_metadata_to_model(None), None);
}
