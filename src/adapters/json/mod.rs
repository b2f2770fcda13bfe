//! JSON-backed record source
//!
//! Adapts a JSON array of objects into the [`RecordSource`] seam: each
//! object is one record, object-valued keys are one-hop relations, and the
//! array order is the source order. This stands in for an ORM queryset,
//! which lives outside this crate.

use crate::domain::record::{Record, RecordSchema, RecordSource};
use crate::domain::{QuillError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// One record materialized from a JSON object
///
/// The schema is derived from the object itself: every key becomes a
/// declared field, nested objects become related fields backed by their
/// own records.
#[derive(Debug)]
pub struct JsonRecord {
    schema: RecordSchema,
    values: BTreeMap<String, Value>,
    related: BTreeMap<String, JsonRecord>,
}

impl JsonRecord {
    /// Build a record of the named type from a JSON object value
    pub fn from_value(type_name: &str, value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            QuillError::Source(format!(
                "record of type '{type_name}' must be a JSON object, got: {value}"
            ))
        })?;

        let mut schema = RecordSchema::new(type_name);
        let mut values = BTreeMap::new();
        let mut related = BTreeMap::new();

        for (key, val) in obj {
            if val.is_object() {
                schema = schema.related(key);
                related.insert(key.clone(), JsonRecord::from_value(key, val)?);
            } else {
                schema = schema.direct(key);
                values.insert(key.clone(), val.clone());
            }
        }

        Ok(Self {
            schema,
            values,
            related,
        })
    }
}

impl Record for JsonRecord {
    fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    fn value(&self, field: &str) -> Option<Value> {
        self.values.get(field).cloned()
    }

    fn related(&self, field: &str) -> Option<&dyn Record> {
        self.related.get(field).map(|r| r as &dyn Record)
    }

    fn display(&self) -> String {
        match self.values.get("id") {
            Some(Value::String(id)) => format!("{}-{}", self.schema.type_name(), id),
            Some(Value::Number(id)) => format!("{}-{}", self.schema.type_name(), id),
            _ => self.schema.type_name().to_string(),
        }
    }
}

/// Windowed record source over a JSON array
#[derive(Debug)]
pub struct JsonRecordSource {
    type_name: String,
    records: Vec<Value>,
}

impl JsonRecordSource {
    /// Create a source from in-memory values
    pub fn new(type_name: impl Into<String>, records: Vec<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            records,
        }
    }

    /// Load a source from a file containing a JSON array of objects
    pub fn from_file(type_name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            QuillError::Source(format!("failed to read data file {}: {e}", path.display()))
        })?;
        let value: Value = serde_json::from_str(&contents)?;
        let records = match value {
            Value::Array(items) => items,
            other => {
                return Err(QuillError::Source(format!(
                    "data file {} must contain a JSON array, got: {}",
                    path.display(),
                    kind_of(&other)
                )))
            }
        };
        Ok(Self::new(type_name, records))
    }

    /// Total record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for JsonRecordSource {
    fn fetch(&self, offset: usize, limit: usize) -> Result<Vec<Box<dyn Record>>> {
        if offset >= self.records.len() {
            return Ok(Vec::new());
        }
        let end = (offset + limit).min(self.records.len());

        self.records[offset..end]
            .iter()
            .map(|v| {
                JsonRecord::from_value(&self.type_name, v).map(|r| Box::new(r) as Box<dyn Record>)
            })
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
