//! Batched document generation
//!
//! [`DocumentIter`] pages through a record source in fixed-size windows and
//! lazily yields one transformed [`Document`] per pull, enforcing a hard
//! cap on the total exported record count. This is the only place that
//! touches the source; the full record set is never held in memory.

use crate::core::collection::Collection;
use crate::core::transform::parse_to_document;
use crate::domain::record::{Record, RecordSource};
use crate::domain::{Document, QuillError, Result};

/// Window and cap limits for one export run
///
/// Threaded explicitly into the generator rather than read from global
/// state, so concurrent runs over different sources stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportLimits {
    max_batch_size: usize,
    max_collection_size: usize,
}

impl ExportLimits {
    /// Create limits; both values must be positive
    pub fn new(max_batch_size: usize, max_collection_size: usize) -> Result<Self> {
        if max_batch_size == 0 {
            return Err(QuillError::Validation(
                "max_batch_size must be at least 1".to_string(),
            ));
        }
        if max_collection_size == 0 {
            return Err(QuillError::Validation(
                "max_collection_size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            max_batch_size,
            max_collection_size,
        })
    }

    /// Window size for paged fetches
    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Hard upper bound on total exported record count
    pub fn max_collection_size(&self) -> usize {
        self.max_collection_size
    }
}

/// Lazy iterator over a collection's documents
///
/// Yields `Result<Document>`; the first error fuses the iterator.
/// Documents yielded before the error stay yielded (the caller has already
/// consumed them).
pub struct DocumentIter<'a> {
    collection: &'a Collection,
    source: &'a dyn RecordSource,
    limits: ExportLimits,
    offset: usize,
    window: std::vec::IntoIter<Box<dyn Record>>,
    done: bool,
}

impl<'a> DocumentIter<'a> {
    /// Create an iterator over the full record set of `source`
    pub fn new(
        collection: &'a Collection,
        source: &'a dyn RecordSource,
        limits: ExportLimits,
    ) -> Self {
        Self {
            collection,
            source,
            limits,
            offset: 0,
            window: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Fetch the next window, enforcing the collection size cap
    ///
    /// Returns `Ok(true)` when a non-empty window was loaded, `Ok(false)`
    /// on exhaustion. An empty window is always normal exhaustion; the cap
    /// only applies to non-empty windows, before any of their records is
    /// processed. The offset advances by the full batch size even when a
    /// short final window ends the set, so checking the cap on the empty
    /// probe fetch would misfire.
    fn advance_window(&mut self) -> Result<bool> {
        let batch = self.source.fetch(self.offset, self.limits.max_batch_size)?;

        if batch.is_empty() {
            return Ok(false);
        }
        if self.offset + batch.len() > self.limits.max_collection_size {
            return Err(QuillError::CollectionSizeExceeded {
                collection: self.collection.to_string(),
                limit: self.limits.max_collection_size,
                actual: self.offset + batch.len(),
            });
        }

        tracing::debug!(
            collection = %self.collection,
            offset = self.offset,
            window_len = batch.len(),
            "Loaded record window"
        );

        self.window = batch.into_iter();
        self.offset += self.limits.max_batch_size;
        Ok(true)
    }
}

impl Iterator for DocumentIter<'_> {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(record) = self.window.next() {
                match parse_to_document(self.collection, record.as_ref()) {
                    Ok(doc) => return Some(Ok(doc)),
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }

            match self.advance_window() {
                Ok(true) => continue,
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
