//! Domain models and types for Quill.
//!
//! The domain layer provides:
//! - **Output model** ([`Document`] and its [`FrontMatter`] map)
//! - **Source abstraction** ([`Record`], [`RecordSchema`], [`RecordSource`])
//! - **Error types** ([`QuillError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations return [`Result<T>`]; errors convert
//! automatically with the `?` operator.

pub mod document;
pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use document::{Document, FrontMatter};
pub use errors::QuillError;
pub use record::{FieldDescriptor, FieldKind, Record, RecordSchema, RecordSource};
pub use result::Result;
