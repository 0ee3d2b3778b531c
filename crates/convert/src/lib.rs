//! Row to domain model conversion for the sysdb catalog
//!
//! This crate translates between the persisted rows of `sysdb-storage` and
//! the domain entities of `sysdb-core`:
//! - Metadata: rows <-> `Metadata`, generic over the owning table
//! - Collections, GC projections, segments: batch reads, single-entity writes
//! - Databases, tenants: single-row copies
//!
//! All conversions go through a [`Converter`], which carries a
//! [`ConverterConfig`] and an injected [`Diagnostics`] sink.
//!
//! ## Failure Policy
//!
//! - Metadata rows with no key or no value are skipped
//! - Malformed optional ids (root collection) degrade to "none"
//! - Unknown metadata variants are reported and their key omitted
//! - Malformed required ids fail the whole batch with [`ConvertError`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod config;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod metadata;
pub mod segment;
pub mod tenancy;

pub use config::{ConverterConfig, DiagnosticsMode};
pub use converter::Converter;
pub use diagnostics::{ConversionEvent, Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use error::{ConvertError, Result};
