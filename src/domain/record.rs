//! Source record abstraction
//!
//! A record type declares its fields up front in a [`RecordSchema`]: an
//! ordered descriptor table mapping each field name to its kind (direct
//! value or one-hop relation). The export pipeline only ever consults this
//! table, so no runtime reflection over record types is needed.

use crate::domain::Result;
use serde_json::Value;

/// Kind of a declared field on a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain attribute holding a scalar value
    Direct,
    /// An attribute referencing another record (one level of indirection)
    Related,
}

/// Descriptor for a single declared field
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
}

impl FieldDescriptor {
    /// Field name as declared on the record type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field is direct or related
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether this field references another record
    pub fn is_related(&self) -> bool {
        self.kind == FieldKind::Related
    }
}

/// Static field-descriptor table for one record type
///
/// Built once per type and looked up by name in the transformer. Iteration
/// order is the declaration order.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    type_name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    /// Create an empty schema for the named record type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a direct field
    pub fn direct(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind: FieldKind::Direct,
        });
        self
    }

    /// Declare a related field (a reference to another record)
    pub fn related(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind: FieldKind::Related,
        });
        self
    }

    /// Name of the record type this schema describes
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// All declared fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field descriptor by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One source record with introspectable named attributes
///
/// Implementations back onto whatever actually stores the data (the bundled
/// JSON adapter, or a caller-provided type). Attribute access goes through
/// the schema's declared names only.
pub trait Record {
    /// The descriptor table for this record's type
    fn schema(&self) -> &RecordSchema;

    /// Resolve a direct field's value, if present on this record
    fn value(&self, field: &str) -> Option<Value>;

    /// Resolve a related record, if the field is a relation and is set
    fn related(&self, field: &str) -> Option<&dyn Record>;

    /// Human-readable identity for this record, used as the default
    /// filename when no filename rule is configured
    fn display(&self) -> String {
        self.schema().type_name().to_string()
    }
}

/// Orderable, sliceable source of records
///
/// The generator pages through a source in `[offset, offset + limit)`
/// windows. Ordering stability across calls is assumed from the source, not
/// enforced here.
pub trait RecordSource {
    /// Fetch the window `[offset, offset + limit)` of the record set
    ///
    /// A window shorter than `limit` (possibly empty) means the set is
    /// exhausted at `offset + returned length`.
    fn fetch(&self, offset: usize, limit: usize) -> Result<Vec<Box<dyn Record>>>;
}
