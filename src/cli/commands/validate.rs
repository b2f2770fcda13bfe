//! Validate-config command implementation

use crate::cli::commands::build_collection;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Also check that each collection's data file exists and parses
    #[arg(long)]
    pub check_data: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = config_path, "Validating configuration");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration invalid: {e}");
                return Ok(2);
            }
        };

        println!("Configuration valid: {config_path}");
        println!("  Output: {}", config.export.output_dir);
        println!("  Batch size: {}", config.export.max_batch_size);
        println!("  Collection cap: {}", config.export.max_collection_size);

        for cc in &config.collections {
            let collection = match build_collection(cc) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Collection '{}' invalid: {e}", cc.record_type);
                    return Ok(2);
                }
            };
            println!("  - {} (data: {})", collection, cc.data);

            if self.check_data {
                use crate::adapters::json::JsonRecordSource;
                match JsonRecordSource::from_file(&cc.record_type, &cc.data) {
                    Ok(source) => println!("    {} record(s)", source.len()),
                    Err(e) => {
                        eprintln!("    data file invalid: {e}");
                        return Ok(2);
                    }
                }
            }
        }

        Ok(0)
    }
}
