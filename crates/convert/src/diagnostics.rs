//! Diagnostics hooks for conversions
//!
//! Conversions report what they did through an injected `Diagnostics`
//! implementation instead of a global logger, so they stay pure and can be
//! observed in tests. Diagnostics are advisory: nothing a sink does can
//! change a conversion result.

use std::fmt;
use std::sync::Arc;
use sysdb_core::MetadataValue;

/// A completed conversion
#[derive(Clone, Copy)]
pub struct ConversionEvent<'a> {
    /// Conversion name, e.g. `collections_to_model`
    pub operation: &'static str,
    /// Number of input rows or items; `None` for an absent input
    pub input: Option<usize>,
    /// Number of produced rows or items; `None` for an absent output
    pub output: Option<usize>,
    /// The converted value, when payload tracing is enabled
    pub payload: Option<&'a dyn fmt::Debug>,
}

impl fmt::Debug for ConversionEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionEvent")
            .field("operation", &self.operation)
            .field("input", &self.input)
            .field("output", &self.output)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

/// Sink for conversion diagnostics
pub trait Diagnostics {
    /// Called once per completed conversion
    fn converted(&self, event: &ConversionEvent<'_>);

    /// Called when a metadata value has a variant the write path cannot map
    ///
    /// The key is left out of the produced rows.
    fn unknown_variant(&self, table: &'static str, owner_id: &str, key: &str, value: &MetadataValue);
}

/// Emits diagnostics as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn converted(&self, event: &ConversionEvent<'_>) {
        match event.payload {
            Some(payload) => tracing::trace!(
                operation = event.operation,
                input = ?event.input,
                output = ?event.output,
                payload = ?payload,
                "converted"
            ),
            None => tracing::trace!(
                operation = event.operation,
                input = ?event.input,
                output = ?event.output,
                "converted"
            ),
        }
    }

    fn unknown_variant(&self, table: &'static str, owner_id: &str, key: &str, value: &MetadataValue) {
        tracing::error!(
            table,
            owner_id,
            key,
            value = ?value,
            "unknown metadata value type"
        );
    }
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn converted(&self, _event: &ConversionEvent<'_>) {}

    fn unknown_variant(&self, _table: &'static str, _owner_id: &str, _key: &str, _value: &MetadataValue) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn converted(&self, event: &ConversionEvent<'_>) {
        (**self).converted(event)
    }

    fn unknown_variant(&self, table: &'static str, owner_id: &str, key: &str, value: &MetadataValue) {
        (**self).unknown_variant(table, owner_id, key, value)
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Box<D> {
    fn converted(&self, event: &ConversionEvent<'_>) {
        (**self).converted(event)
    }

    fn unknown_variant(&self, table: &'static str, owner_id: &str, key: &str, value: &MetadataValue) {
        (**self).unknown_variant(table, owner_id, key, value)
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn converted(&self, event: &ConversionEvent<'_>) {
        (**self).converted(event)
    }

    fn unknown_variant(&self, table: &'static str, owner_id: &str, key: &str, value: &MetadataValue) {
        (**self).unknown_variant(table, owner_id, key, value)
    }
}
