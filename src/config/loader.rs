//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuillConfig;
use crate::domain::errors::QuillError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into QuillConfig
/// 4. Applies environment variable overrides (QUILL_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<QuillConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QuillError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QuillError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: QuillConfig = toml::from_str(&contents)
        .map_err(|e| QuillError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        QuillError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched, so a commented-out setting never
/// demands a variable.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid pattern");
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
        } else {
            let substituted = re.replace_all(line, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                })
            });
            result.push_str(&substituted);
        }
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(QuillError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the QUILL_* prefix
///
/// Environment variables follow the pattern: QUILL_<SECTION>_<KEY>
/// For example: QUILL_EXPORT_OUTPUT_DIR, QUILL_EXPORT_MAX_BATCH_SIZE
fn apply_env_overrides(config: &mut QuillConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("QUILL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("QUILL_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("QUILL_EXPORT_MAX_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.export.max_batch_size = size;
        }
    }
    if let Ok(val) = std::env::var("QUILL_EXPORT_MAX_COLLECTION_SIZE") {
        if let Ok(size) = val.parse() {
            config.export.max_collection_size = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("QUILL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("QUILL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
