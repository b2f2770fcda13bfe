//! Domain error types
//!
//! This module defines the error hierarchy for Quill. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Quill error type
///
/// This is the primary error type used throughout the application.
/// The two export-aborting kinds, [`QuillError::DocGeneration`] and
/// [`QuillError::CollectionSizeExceeded`], are the only errors the export
/// driver converts into a logged termination; everything else propagates.
#[derive(Debug, Error)]
pub enum QuillError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required field could not be resolved on a record type
    ///
    /// Raised when the content field, or a field-valued filename rule,
    /// names a field that does not exist on the record type. Indicates a
    /// collection/schema mismatch and is never retryable.
    #[error("doc generation failed: field '{field}' wasn't found on record type '{record_type}'")]
    DocGeneration { field: String, record_type: String },

    /// Cumulative exported record count would exceed the configured maximum
    #[error("{collection} exceeded size constraint of {limit} (has {actual})")]
    CollectionSizeExceeded {
        collection: String,
        limit: usize,
        actual: usize,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Write sink errors
    #[error("Sink error: {0}")]
    Sink(String),

    /// Record source errors
    #[error("Source error: {0}")]
    Source(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl QuillError {
    /// Whether this error aborts an export run with a logged termination
    /// rather than propagating out of the driver.
    pub fn aborts_export(&self) -> bool {
        matches!(
            self,
            QuillError::DocGeneration { .. } | QuillError::CollectionSizeExceeded { .. }
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for QuillError {
    fn from(err: std::io::Error) -> Self {
        QuillError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QuillError {
    fn from(err: serde_json::Error) -> Self {
        QuillError::Serialization(err.to_string())
    }
}

// Conversion from serde_yaml::Error
impl From<serde_yaml::Error> for QuillError {
    fn from(err: serde_yaml::Error) -> Self {
        QuillError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QuillError {
    fn from(err: toml::de::Error) -> Self {
        QuillError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_generation_display() {
        let err = QuillError::DocGeneration {
            field: "body".to_string(),
            record_type: "Post".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "doc generation failed: field 'body' wasn't found on record type 'Post'"
        );
    }

    #[test]
    fn test_collection_size_exceeded_display() {
        let err = QuillError::CollectionSizeExceeded {
            collection: "Collection (Post -> post)".to_string(),
            limit: 10,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Collection (Post -> post) exceeded size constraint of 10 (has 12)"
        );
    }

    #[test]
    fn test_aborts_export() {
        let doc_err = QuillError::DocGeneration {
            field: "body".to_string(),
            record_type: "Post".to_string(),
        };
        let size_err = QuillError::CollectionSizeExceeded {
            collection: "posts".to_string(),
            limit: 1,
            actual: 2,
        };
        assert!(doc_err.aborts_export());
        assert!(size_err.aborts_export());
        assert!(!QuillError::Sink("disk full".to_string()).aborts_export());
        assert!(!QuillError::Configuration("bad".to_string()).aborts_export());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: QuillError = io_err.into();
        assert!(matches!(err, QuillError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: QuillError = json_err.into();
        assert!(matches!(err, QuillError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: QuillError = toml_err.into();
        assert!(matches!(err, QuillError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_quill_error_implements_std_error() {
        let err = QuillError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
