//! Row transformation
//!
//! Converts one source record into a [`Document`] per a collection's field
//! specification: resolve each declared field path (direct or one-hop
//! related), validate the mandatory fields, and build the flat attribute
//! map the document carries as front matter.

use crate::core::collection::{Collection, FilenameRule};
use crate::core::resolve::related_lookup_parts;
use crate::domain::record::{FieldDescriptor, Record};
use crate::domain::{Document, FrontMatter, QuillError, Result};
use serde_json::Value;

/// Parse one record into a document
///
/// Validation happens before any value resolution: the collection's content
/// field, and a field-valued filename rule, must both name resolvable
/// fields on the record type, else this fails with
/// [`QuillError::DocGeneration`] and no attribute map is built.
///
/// Related lookups store their value under the terminal segment name, not
/// the full path: `client__name` resolves into the `name` key.
pub fn parse_to_document(collection: &Collection, record: &dyn Record) -> Result<Document> {
    let schema = record.schema();

    // Map each declared field path to the descriptor of its immediate
    // field on the record type. A related descriptor can satisfy several
    // declared lookup paths.
    let mut field_meta: Vec<(&str, &FieldDescriptor)> = Vec::new();

    for meta in schema.fields() {
        if collection.fields().iter().any(|f| f == meta.name()) {
            field_meta.push((meta.name(), meta));
        } else if meta.is_related() {
            for path in collection.fields() {
                if let Some((immediate, _)) = related_lookup_parts(path) {
                    if immediate == meta.name() {
                        field_meta.push((path.as_str(), meta));
                    }
                }
            }
        }
    }

    let resolvable = |name: &str| field_meta.iter().any(|(path, _)| *path == name);

    if !resolvable(collection.content_field()) {
        return Err(QuillError::DocGeneration {
            field: collection.content_field().to_string(),
            record_type: schema.type_name().to_string(),
        });
    }
    if let FilenameRule::ByField(name) = collection.filename_rule() {
        if !resolvable(name) {
            return Err(QuillError::DocGeneration {
                field: name.clone(),
                record_type: schema.type_name().to_string(),
            });
        }
    }

    let mut values = FrontMatter::new();
    for (path, meta) in &field_meta {
        let (key, value) = resolve_field(record, path, meta);
        values.insert(key.to_string(), value);
    }

    let content = render_value(values.get(output_key(collection.content_field())));

    let filename = match collection.filename_rule() {
        FilenameRule::ByField(name) => render_value(values.get(output_key(name))),
        FilenameRule::ByFunction(f) => f(record),
    };

    Ok(Document::new(content, filename, values))
}

/// Resolve one declared path against a record, returning the output key
/// and value
///
/// A related lookup reads the terminal attribute off the one-hop related
/// record; a field present on the type but unset on this record resolves
/// to null.
fn resolve_field<'a>(record: &dyn Record, path: &'a str, meta: &FieldDescriptor) -> (&'a str, Value) {
    if meta.is_related() {
        if let Some((_, terminal)) = related_lookup_parts(path) {
            let value = record
                .related(meta.name())
                .and_then(|rel| rel.value(terminal))
                .unwrap_or(Value::Null);
            return (terminal, value);
        }
    }

    (path, record.value(path).unwrap_or(Value::Null))
}

/// Output key a declared path resolves under: the terminal segment for a
/// lookup path, the path itself otherwise
fn output_key(path: &str) -> &str {
    related_lookup_parts(path).map_or(path, |(_, terminal)| terminal)
}

/// Render a resolved value as document text
///
/// Strings pass through unquoted; null and missing render empty; anything
/// else renders as its JSON text.
fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
