//! Export configuration for one collection
//!
//! A [`Collection`] declares everything one export run needs to know about
//! a record type: which field paths to resolve, which resolved field is the
//! document content, how filenames are produced, and the collection label.

use crate::domain::record::Record;
use crate::domain::{QuillError, Result};
use std::fmt;

/// How a document's filename is produced
///
/// Dispatched by match: either the resolved value of a named field, or a
/// function of the raw record.
pub enum FilenameRule {
    /// Use the resolved value of this field
    ByField(String),
    /// Invoke this function with the raw (unresolved) record
    ByFunction(Box<dyn Fn(&dyn Record) -> String + Send + Sync>),
}

impl fmt::Debug for FilenameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilenameRule::ByField(name) => f.debug_tuple("ByField").field(name).finish(),
            FilenameRule::ByFunction(_) => f.debug_tuple("ByFunction").field(&"<fn>").finish(),
        }
    }
}

/// Declarative spec driving one export run
#[derive(Debug)]
pub struct Collection {
    record_type: String,
    fields: Vec<String>,
    content_field: String,
    filename: FilenameRule,
    label: String,
}

impl Collection {
    /// Start building a collection for the named record type
    pub fn builder(record_type: impl Into<String>) -> CollectionBuilder {
        CollectionBuilder::new(record_type)
    }

    /// Name of the record type this collection exports
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// Declared field paths, in declaration order with duplicates removed
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Name of the field whose resolved value becomes the document content
    pub fn content_field(&self) -> &str {
        &self.content_field
    }

    /// The filename rule for documents of this collection
    pub fn filename_rule(&self) -> &FilenameRule {
        &self.filename
    }

    /// Collection label (explicit, or derived from the record type name)
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Collection ({} -> {})", self.record_type, self.label)
    }
}

/// Builder for [`Collection`]
pub struct CollectionBuilder {
    record_type: String,
    fields: Vec<String>,
    content_field: Option<String>,
    filename: Option<FilenameRule>,
    label: Option<String>,
}

impl CollectionBuilder {
    /// Create a builder for the named record type
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            fields: Vec::new(),
            content_field: None,
            filename: None,
            label: None,
        }
    }

    /// Declare the field paths to export
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Name the content field (mandatory, must appear among the fields)
    pub fn content_field(mut self, name: impl Into<String>) -> Self {
        self.content_field = Some(name.into());
        self
    }

    /// Produce filenames from the resolved value of the named field
    pub fn filename_field(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(FilenameRule::ByField(name.into()));
        self
    }

    /// Produce filenames by invoking a function on the raw record
    pub fn filename_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Record) -> String + Send + Sync + 'static,
    {
        self.filename = Some(FilenameRule::ByFunction(Box::new(f)));
        self
    }

    /// Set an explicit label instead of deriving one from the type name
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Validate and build the collection
    ///
    /// Fails if no fields are declared, if the content field is missing or
    /// not among the declared fields. The field list is deduplicated,
    /// keeping first occurrences. An absent filename rule falls back to the
    /// record's display text, matching the default a record type gets when
    /// no rule is configured.
    pub fn build(self) -> Result<Collection> {
        let mut fields: Vec<String> = Vec::with_capacity(self.fields.len());
        for f in self.fields {
            if !fields.contains(&f) {
                fields.push(f);
            }
        }

        if fields.is_empty() {
            return Err(QuillError::Validation(format!(
                "collection for '{}' declares no fields",
                self.record_type
            )));
        }

        let content_field = self.content_field.ok_or_else(|| {
            QuillError::Validation(format!(
                "collection for '{}' has no content_field",
                self.record_type
            ))
        })?;

        if !fields.iter().any(|f| f == &content_field) {
            return Err(QuillError::Validation(format!(
                "content_field '{}' is not among the declared fields of '{}'",
                content_field, self.record_type
            )));
        }

        let filename = self
            .filename
            .unwrap_or_else(|| FilenameRule::ByFunction(Box::new(|r: &dyn Record| r.display())));

        let label = self
            .label
            .unwrap_or_else(|| derive_label(&self.record_type));

        Ok(Collection {
            record_type: self.record_type,
            fields,
            content_field,
            filename,
            label,
        })
    }
}

/// Derive a collection label from a record type name
///
/// Slugifies the type name (CamelCase words split, lowercased,
/// non-alphanumeric runs collapsed) and replaces hyphens with underscores:
/// `ClientGoal` becomes `client_goal`.
pub fn derive_label(type_name: &str) -> String {
    slugify(type_name).replace('-', "_")
}

/// Slugify a name: split CamelCase words, lowercase, join with hyphens
fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() && prev_lower_or_digit {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
            prev_lower_or_digit = false;
        }
    }

    out.trim_end_matches('-').to_string()
}
