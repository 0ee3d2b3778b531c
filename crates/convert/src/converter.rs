//! The converter handle
//!
//! `Converter` holds configuration and a diagnostics sink. It has no other
//! state: every conversion reads its arguments and returns fresh values, so
//! one converter can be shared freely across threads (when its sink is
//! `Sync`).
//!
//! Conversion methods live next to the entities they handle:
//! - `metadata`: metadata rows <-> `Metadata`
//! - `collection`: collections and GC projections
//! - `segment`: segments
//! - `tenancy`: databases and tenants

use crate::config::{ConverterConfig, DiagnosticsMode};
use crate::diagnostics::{ConversionEvent, Diagnostics, NoopDiagnostics, TracingDiagnostics};
use std::fmt;

/// Converts between persisted rows and domain entities
#[derive(Debug, Clone)]
pub struct Converter<D = TracingDiagnostics> {
    config: ConverterConfig,
    diagnostics: D,
}

impl Converter<TracingDiagnostics> {
    /// Create a converter with default config, tracing diagnostics
    pub fn new() -> Self {
        Self::with_diagnostics(ConverterConfig::default(), TracingDiagnostics)
    }
}

impl Default for Converter<TracingDiagnostics> {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<Box<dyn Diagnostics + Send + Sync>> {
    /// Create a converter whose sink is chosen by `config.diagnostics`
    pub fn from_config(config: ConverterConfig) -> Self {
        let diagnostics: Box<dyn Diagnostics + Send + Sync> = match config.diagnostics {
            DiagnosticsMode::Tracing => Box::new(TracingDiagnostics),
            DiagnosticsMode::Silent => Box::new(NoopDiagnostics),
        };
        Self::with_diagnostics(config, diagnostics)
    }
}

impl<D: Diagnostics> Converter<D> {
    /// Create a converter with an explicit sink
    ///
    /// `config.diagnostics` is ignored; the given sink receives everything.
    pub fn with_diagnostics(config: ConverterConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    /// Converter configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Diagnostics sink
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub(crate) fn emit<T: fmt::Debug>(
        &self,
        operation: &'static str,
        input: Option<usize>,
        output: Option<usize>,
        payload: &T,
    ) {
        let payload: Option<&dyn fmt::Debug> = if self.config.trace_payloads {
            Some(payload)
        } else {
            None
        };
        self.diagnostics.converted(&ConversionEvent {
            operation,
            input,
            output,
            payload,
        });
    }
}
