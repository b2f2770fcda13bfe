//! Configuration schema types
//!
//! Defines the structure of the `quill.toml` configuration file.

use crate::core::generator::ExportLimits;
use serde::{Deserialize, Serialize};

/// Main Quill configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuillConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    pub export: ExportConfig,

    /// Collections to export
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuillConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;

        if self.collections.is_empty() {
            return Err("at least one [[collections]] entry is required".to_string());
        }
        for collection in &self.collections {
            collection.validate()?;
        }

        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Site root directory collections are written beneath
    pub output_dir: String,

    /// Window size for paged record fetches
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Hard upper bound on records exported per collection
    #[serde(default = "default_max_collection_size")]
    pub max_collection_size: usize,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir must not be empty".to_string());
        }
        if self.max_batch_size == 0 {
            return Err("export.max_batch_size must be at least 1".to_string());
        }
        if self.max_collection_size == 0 {
            return Err("export.max_collection_size must be at least 1".to_string());
        }
        Ok(())
    }

    /// Window and cap limits for the generator
    pub fn limits(&self) -> crate::domain::Result<ExportLimits> {
        ExportLimits::new(self.max_batch_size, self.max_collection_size)
    }
}

/// One collection declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Name of the record type being exported
    pub record_type: String,

    /// Path to the JSON data file holding the records
    pub data: String,

    /// Field paths to resolve (direct names or `relation__attribute`)
    pub fields: Vec<String>,

    /// Field whose resolved value becomes the document content
    pub content_field: String,

    /// Field whose resolved value becomes the filename (optional; records
    /// fall back to their display text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_field: Option<String>,

    /// Explicit collection label (optional; derived from record_type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CollectionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.record_type.trim().is_empty() {
            return Err("collections.record_type must not be empty".to_string());
        }
        if self.data.trim().is_empty() {
            return Err(format!(
                "collections.data must not be empty for '{}'",
                self.record_type
            ));
        }
        if self.fields.is_empty() {
            return Err(format!(
                "collections.fields must not be empty for '{}'",
                self.record_type
            ));
        }
        if !self.fields.contains(&self.content_field) {
            return Err(format!(
                "content_field '{}' is not among the declared fields of '{}'",
                self.content_field, self.record_type
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when file logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "quill".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_batch_size() -> usize {
    500
}

fn default_max_collection_size() -> usize {
    10_000
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> QuillConfig {
        toml::from_str(
            r#"
[export]
output_dir = "_site"

[[collections]]
record_type = "Post"
data = "posts.json"
fields = ["title", "body"]
content_field = "body"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config = minimal_config();

        assert_eq!(config.application.name, "quill");
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.export.max_batch_size, 500);
        assert_eq!(config.export.max_collection_size, 10_000);
        assert!(!config.logging.local_enabled);
        assert_eq!(config.collections.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limits_from_export_config() {
        let config = minimal_config();
        let limits = config.export.limits().unwrap();
        assert_eq!(limits.max_batch_size(), 500);
        assert_eq!(limits.max_collection_size(), 10_000);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = minimal_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut config = minimal_config();
        config.export.max_batch_size = 0;
        assert!(config.validate().unwrap_err().contains("max_batch_size"));
    }

    #[test]
    fn test_zero_collection_size_rejected() {
        let mut config = minimal_config();
        config.export.max_collection_size = 0;
        assert!(config
            .validate()
            .unwrap_err()
            .contains("max_collection_size"));
    }

    #[test]
    fn test_empty_collections_rejected() {
        let mut config = minimal_config();
        config.collections.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_content_field_must_be_declared() {
        let mut config = minimal_config();
        config.collections[0].content_field = "summary".to_string();
        assert!(config
            .validate()
            .unwrap_err()
            .contains("content_field 'summary'"));
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = minimal_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
