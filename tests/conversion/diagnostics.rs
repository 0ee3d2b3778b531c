//! Diagnostics emitted by conversions

use crate::common::*;
use std::sync::{Arc, Mutex};
use sysdb::{
    CollectionMetadataRow, Converter, ConverterConfig, DiagnosticsMode, Metadata,
    NoopDiagnostics, TracingDiagnostics,
};
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn batch_conversion_reports_counts() {
    let converter = recording_converter(ConverterConfig::quiet());
    converter
        .collections_to_model(Some(&[collection_row(), collection_row()]))
        .unwrap();
    converter.collections_to_model(None).unwrap();

    let events = converter.diagnostics().events();
    let batch: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Recorded::Converted { operation: "collections_to_model", .. }))
        .collect();
    assert_eq!(
        batch,
        vec![
            &Recorded::Converted {
                operation: "collections_to_model",
                input: Some(2),
                output: Some(2),
                payload: None,
            },
            &Recorded::Converted {
                operation: "collections_to_model",
                input: None,
                output: None,
                payload: None,
            },
        ]
    );
}

#[test]
fn payloads_only_when_configured() {
    let quiet = recording_converter(ConverterConfig::default());
    let verbose = recording_converter(ConverterConfig::verbose());
    let metadata = Metadata::new().with("marker", "payload-marker");

    quiet.collection_metadata_to_rows("c", Some(&metadata));
    verbose.collection_metadata_to_rows("c", Some(&metadata));

    let payload_of = |events: Vec<Recorded>| match events.into_iter().last() {
        Some(Recorded::Converted { payload, .. }) => payload,
        other => panic!("unexpected event: {other:?}"),
    };
    assert_eq!(payload_of(quiet.diagnostics().events()), None);
    assert!(payload_of(verbose.diagnostics().events())
        .unwrap()
        .contains("payload-marker"));
}

#[test]
fn diagnostics_do_not_change_results() {
    let rows = vec![collection_row_with_metadata(|id| {
        vec![CollectionMetadataRow::new(id, "k").with_float(1.0)]
    })];

    let recorded = recording_converter(ConverterConfig::verbose())
        .collections_to_model(Some(&rows))
        .unwrap();
    let silent = Converter::with_diagnostics(ConverterConfig::quiet(), NoopDiagnostics)
        .collections_to_model(Some(&rows))
        .unwrap();
    let traced = Converter::new().collections_to_model(Some(&rows)).unwrap();
    let configured = Converter::from_config(ConverterConfig::default())
        .collections_to_model(Some(&rows))
        .unwrap();

    assert_eq!(recorded, silent);
    assert_eq!(recorded, traced);
    assert_eq!(recorded, configured);
}

#[test]
fn from_config_silent_mode() {
    let config = ConverterConfig::default().with_diagnostics(DiagnosticsMode::Silent);
    let converter = Converter::from_config(config);
    assert_eq!(converter.config().diagnostics, DiagnosticsMode::Silent);
    assert!(converter.segments_to_model(None).unwrap().is_none());
}

/// Captures formatted tracing output in memory.
#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl std::io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn tracing_sink_emits_trace_events() {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(output.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let converter = Converter::with_diagnostics(ConverterConfig::verbose(), TracingDiagnostics);
        converter
            .segments_to_model(Some(&[segment_row(None)]))
            .unwrap();
    });

    let logged = output.contents();
    assert!(logged.contains("TRACE"));
    assert!(logged.contains("segments_to_model"));
    assert!(logged.contains("converted"));
}
