//! Output document model
//!
//! A [`Document`] is the immutable unit the export pipeline produces: one
//! per source record, consumed exactly once by a write sink.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Resolved attribute map for one record
///
/// Keyed by output field name (the terminal segment for related lookups).
/// `BTreeMap` keeps iteration stable so emitted front matter is
/// deterministic.
pub type FrontMatter = BTreeMap<String, Value>;

/// One exportable document: content, filename, and front-matter metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    content: String,
    filename: String,
    front_matter: FrontMatter,
}

impl Document {
    /// Construct a document from its resolved parts
    pub fn new(
        content: impl Into<String>,
        filename: impl Into<String>,
        front_matter: FrontMatter,
    ) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            front_matter,
        }
    }

    /// Document body text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Target filename, as produced by the collection's filename rule
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Front-matter metadata (the full resolved attribute map)
    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document ({})", self.filename)
    }
}
