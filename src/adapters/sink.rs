//! Write sink seam
//!
//! The export driver hands finished documents to a [`WriteSink`]; the
//! sink owns the physical format and layout at the target location.

use crate::domain::{Document, Result};
use std::path::Path;

/// Destination for exported documents
pub trait WriteSink {
    /// Write one document under the given location
    fn write(&self, document: &Document, location: &Path) -> Result<()>;
}

/// Sink that discards every document, for dry runs
#[derive(Debug, Default)]
pub struct NullSink;

impl WriteSink for NullSink {
    fn write(&self, document: &Document, location: &Path) -> Result<()> {
        tracing::debug!(
            filename = document.filename(),
            location = %location.display(),
            "Dry run - document not written"
        );
        Ok(())
    }
}
