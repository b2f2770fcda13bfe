//! Configuration management for Quill.
//!
//! TOML-based configuration loading, parsing, and validation, with
//! `${VAR}` environment variable substitution and `QUILL_*` overrides.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! output_dir = "_site"
//! max_batch_size = 500
//! max_collection_size = 10000
//!
//! [[collections]]
//! record_type = "Post"
//! data = "data/posts.json"
//! fields = ["title", "body", "client__name"]
//! content_field = "body"
//! filename_field = "title"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CollectionConfig, ExportConfig, LoggingConfig, QuillConfig,
};
