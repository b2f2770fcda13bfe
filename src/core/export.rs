//! Atomic export driver
//!
//! Drives a collection's document sequence to completion against a write
//! sink. "Atomic" is log-and-stop: the first generation or size failure
//! aborts the whole run and is surfaced in the summary, but documents the
//! sink already wrote are not rolled back.

use crate::adapters::sink::WriteSink;
use crate::core::collection::Collection;
use crate::core::generator::{DocumentIter, ExportLimits};
use crate::domain::record::RecordSource;
use crate::domain::Result;
use std::path::Path;
use std::time::{Duration, Instant};

/// Outcome of one export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Documents handed to the sink
    pub documents_written: usize,
    /// Whether the run stopped on a generation or size failure
    pub aborted: bool,
    /// The failure that stopped the run, if any
    pub abort_reason: Option<String>,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Whether the sequence ran to exhaustion with no failure
    pub fn is_successful(&self) -> bool {
        !self.aborted
    }
}

/// Export every document of a collection to the sink at `location`
///
/// Iterates the batched document sequence, writing each document as it is
/// produced. A [`DocGeneration`](crate::domain::QuillError::DocGeneration)
/// or [`CollectionSizeExceeded`](crate::domain::QuillError::CollectionSizeExceeded)
/// failure is logged and ends the run with `aborted` set; exactly those
/// two kinds are caught. Sink and source failures propagate as `Err`.
pub fn export_collection(
    collection: &Collection,
    source: &dyn RecordSource,
    sink: &dyn WriteSink,
    location: &Path,
    limits: ExportLimits,
) -> Result<ExportSummary> {
    let start = Instant::now();
    let mut written = 0;

    tracing::info!(
        collection = %collection,
        location = %location.display(),
        batch_size = limits.max_batch_size(),
        max_size = limits.max_collection_size(),
        "Starting export run"
    );

    for item in DocumentIter::new(collection, source, limits) {
        match item {
            Ok(document) => {
                sink.write(&document, location)?;
                written += 1;
            }
            Err(e) if e.aborts_export() => {
                tracing::error!(
                    collection = %collection,
                    documents_written = written,
                    error = %e,
                    "atomic write failed!"
                );
                return Ok(ExportSummary {
                    documents_written: written,
                    aborted: true,
                    abort_reason: Some(e.to_string()),
                    duration: start.elapsed(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    let duration = start.elapsed();
    tracing::info!(
        collection = %collection,
        documents_written = written,
        duration_ms = duration.as_millis() as u64,
        "Export run completed"
    );

    Ok(ExportSummary {
        documents_written: written,
        aborted: false,
        abort_reason: None,
        duration,
    })
}
