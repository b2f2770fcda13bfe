//! Init command implementation
//!
//! Writes a starter configuration file.

use clap::Args;
use std::path::Path;

const SAMPLE_CONFIG: &str = r#"# Quill configuration

[application]
log_level = "info"

[export]
# Site root; each collection is written to <output_dir>/_<label>/
output_dir = "_site"
max_batch_size = 500
max_collection_size = 10000

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"

[[collections]]
record_type = "Post"
data = "data/posts.json"
# Direct fields, or one-hop related lookups like "client__name"
fields = ["title", "body", "client__name"]
content_field = "body"
filename_field = "title"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path for the new configuration file
    #[arg(short, long, default_value = "quill.toml")]
    pub output: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let path = Path::new(&self.output);

        if path.exists() && !self.force {
            eprintln!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            );
            return Ok(2);
        }

        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Wrote {}", path.display());
        println!("Edit the [[collections]] entries, then run: quill export");
        Ok(0)
    }
}
