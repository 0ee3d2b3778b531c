//! Persisted metadata rows
//!
//! Metadata tables store one row per key with one nullable column per value
//! type. A well-formed row has at most one populated slot; rows written by
//! the conversion layer always do. Rows read back may be malformed (no key,
//! no slot, several slots) and readers must tolerate that.
//!
//! Collection and segment metadata tables differ only in the name of the
//! owner column, so a single `MetadataRow` is parameterized by a
//! `MetadataScope` marker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker describing which table a metadata row belongs to
pub trait MetadataScope:
    Copy + Default + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Name of the column holding the owning entity id
    const OWNER_COLUMN: &'static str;
    /// Table name
    const TABLE: &'static str;
}

/// Scope of `collection_metadata` rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionScope;

impl MetadataScope for CollectionScope {
    const OWNER_COLUMN: &'static str = "collection_id";
    const TABLE: &'static str = "collection_metadata";
}

/// Scope of `segment_metadata` rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentScope;

impl MetadataScope for SegmentScope {
    const OWNER_COLUMN: &'static str = "segment_id";
    const TABLE: &'static str = "segment_metadata";
}

/// One persisted metadata entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRow<S: MetadataScope> {
    /// Id of the owning collection or segment
    pub owner_id: String,
    /// Metadata key
    pub key: Option<String>,
    /// Boolean slot
    pub bool_value: Option<bool>,
    /// String slot
    pub str_value: Option<String>,
    /// Integer slot
    pub int_value: Option<i64>,
    /// Float slot
    pub float_value: Option<f64>,
    #[serde(skip)]
    _scope: PhantomData<S>,
}

/// Row of the `collection_metadata` table
pub type CollectionMetadataRow = MetadataRow<CollectionScope>;

/// Row of the `segment_metadata` table
pub type SegmentMetadataRow = MetadataRow<SegmentScope>;

impl<S: MetadataScope> MetadataRow<S> {
    /// Create a row with owner and key set and every value slot empty
    pub fn new(owner_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            key: Some(key.into()),
            bool_value: None,
            str_value: None,
            int_value: None,
            float_value: None,
            _scope: PhantomData,
        }
    }

    /// Set the boolean slot
    pub fn with_bool(mut self, value: bool) -> Self {
        self.bool_value = Some(value);
        self
    }

    /// Set the string slot
    pub fn with_str(mut self, value: impl Into<String>) -> Self {
        self.str_value = Some(value.into());
        self
    }

    /// Set the integer slot
    pub fn with_int(mut self, value: i64) -> Self {
        self.int_value = Some(value);
        self
    }

    /// Set the float slot
    pub fn with_float(mut self, value: f64) -> Self {
        self.float_value = Some(value);
        self
    }

    /// Number of populated value slots
    pub fn populated_slots(&self) -> usize {
        [
            self.bool_value.is_some(),
            self.str_value.is_some(),
            self.int_value.is_some(),
            self.float_value.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Name of the owner column for this row's table
    pub fn owner_column(&self) -> &'static str {
        S::OWNER_COLUMN
    }

    /// Name of this row's table
    pub fn table(&self) -> &'static str {
        S::TABLE
    }
}
