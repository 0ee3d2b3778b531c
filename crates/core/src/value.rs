//! Metadata value type
//!
//! This module defines:
//! - MetadataValue: discriminated union over the four metadata scalar types
//!
//! ## Value Model
//!
//! Exactly four variants: Bool, Str, Int, Float. There is no null variant;
//! an absent value is a missing key in the owning `Metadata` map.
//!
//! - `Int(1) != Float(1.0)`: different variants are never equal
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//!
//! The enum is `#[non_exhaustive]`. Code outside this crate that matches on it
//! must handle an unrecognized variant.

use serde::{Deserialize, Serialize};

/// A single metadata value attached to a collection or segment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MetadataValue {
    /// Boolean value
    Bool(bool),
    /// UTF-8 string
    Str(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MetadataValue::Bool(a), MetadataValue::Bool(b)) => a == b,
            (MetadataValue::Str(a), MetadataValue::Str(b)) => a == b,
            (MetadataValue::Int(a), MetadataValue::Int(b)) => a == b,
            (MetadataValue::Float(a), MetadataValue::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl MetadataValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::Bool(_) => "Bool",
            MetadataValue::Str(_) => "Str",
            MetadataValue::Int(_) => "Int",
            MetadataValue::Float(_) => "Float",
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as &str if this is a Str value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Bool(b)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Str(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Str(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(i: i64) -> Self {
        MetadataValue::Int(i)
    }
}

impl From<i32> for MetadataValue {
    fn from(i: i32) -> Self {
        MetadataValue::Int(i as i64)
    }
}

impl From<f64> for MetadataValue {
    fn from(f: f64) -> Self {
        MetadataValue::Float(f)
    }
}
