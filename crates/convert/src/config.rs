//! Converter configuration
//!
//! Controls where conversion diagnostics go and how much they carry.
//! Configuration never changes conversion results.

/// Destination for conversion diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticsMode {
    /// Emit `tracing` events (trace level for conversions, error level for
    /// unknown metadata variants)
    #[default]
    Tracing,
    /// Discard all diagnostics
    Silent,
}

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Diagnostics destination
    pub diagnostics: DiagnosticsMode,
    /// Attach the `Debug` rendering of converted values to trace events
    pub trace_payloads: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            diagnostics: DiagnosticsMode::Tracing,
            trace_payloads: false,
        }
    }
}

impl ConverterConfig {
    /// Create config that discards diagnostics
    pub fn quiet() -> Self {
        ConverterConfig {
            diagnostics: DiagnosticsMode::Silent,
            ..Default::default()
        }
    }

    /// Create config that traces full payloads
    ///
    /// Formatting payloads costs an allocation per conversion; meant for
    /// debugging.
    pub fn verbose() -> Self {
        ConverterConfig {
            diagnostics: DiagnosticsMode::Tracing,
            trace_payloads: true,
        }
    }

    /// Set diagnostics destination
    pub fn with_diagnostics(mut self, mode: DiagnosticsMode) -> Self {
        self.diagnostics = mode;
        self
    }

    /// Set payload tracing
    pub fn with_trace_payloads(mut self, enabled: bool) -> Self {
        self.trace_payloads = enabled;
        self
    }
}
