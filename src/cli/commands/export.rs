//! Export command implementation
//!
//! Runs every configured collection (or one selected by label) through the
//! export pipeline against the filesystem sink.

use crate::adapters::filesystem::FileSystemSink;
use crate::adapters::json::JsonRecordSource;
use crate::adapters::sink::{NullSink, WriteSink};
use crate::cli::commands::build_collection;
use crate::config::{load_config, CollectionConfig};
use crate::core::export::export_collection;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - generate documents without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Only export the collection with this label
    #[arg(long)]
    pub collection: Option<String>,

    /// Override the output directory from the configuration
    #[arg(long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = load_config(config_path)?;

        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        let limits = config.export.limits()?;

        // Resolve collections up front so a bad label or field spec fails
        // before anything is written
        let mut planned: Vec<(crate::core::Collection, &CollectionConfig)> = Vec::new();
        for cc in &config.collections {
            let collection = build_collection(cc)?;
            if let Some(wanted) = &self.collection {
                if collection.label() != wanted {
                    continue;
                }
            }
            planned.push((collection, cc));
        }

        if planned.is_empty() {
            if let Some(wanted) = &self.collection {
                tracing::error!(label = %wanted, "No collection with that label");
                eprintln!("No collection labelled '{wanted}' in {config_path}");
                return Ok(2);
            }
            eprintln!("Nothing to export.");
            return Ok(0);
        }

        if self.dry_run {
            tracing::info!("Dry run mode enabled - no files will be written");
            println!("DRY RUN - no files will be written");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !self.dry_run {
            println!("Export Configuration:");
            println!("  Output: {}", config.export.output_dir);
            println!("  Batch size: {}", config.export.max_batch_size);
            println!("  Collection cap: {}", config.export.max_collection_size);
            for (collection, _) in &planned {
                println!("  - {collection}");
            }
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        let fs_sink = FileSystemSink::new();
        let null_sink = NullSink;
        let sink: &dyn WriteSink = if self.dry_run { &null_sink } else { &fs_sink };

        let output_root = PathBuf::from(&config.export.output_dir);
        let mut total_written = 0;
        let mut aborted = 0;

        for (collection, cc) in &planned {
            let source = JsonRecordSource::from_file(&cc.record_type, &cc.data)?;
            let location = collection_dir(&output_root, collection.label());

            let summary = export_collection(collection, &source, sink, &location, limits)?;
            total_written += summary.documents_written;

            if summary.aborted {
                aborted += 1;
                println!(
                    "  {} ABORTED after {} document(s): {}",
                    collection,
                    summary.documents_written,
                    summary.abort_reason.as_deref().unwrap_or("unknown")
                );
            } else {
                println!(
                    "  {} -> {} document(s) in {:.2}s",
                    collection,
                    summary.documents_written,
                    summary.duration.as_secs_f64()
                );
            }
        }

        println!();
        println!("Export Summary:");
        println!("  Collections: {}", planned.len());
        println!("  Documents written: {total_written}");

        if aborted > 0 {
            println!("  Aborted collections: {aborted}");
            Ok(1)
        } else {
            println!("Export completed successfully.");
            Ok(0)
        }
    }
}

/// Directory a collection's documents are written into: `_<label>` under
/// the site root, the layout static-site generators expect
fn collection_dir(output_root: &Path, label: &str) -> PathBuf {
    output_root.join(format!("_{label}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_dir_layout() {
        let dir = collection_dir(Path::new("_site"), "client_goal");
        assert_eq!(dir, PathBuf::from("_site/_client_goal"));
    }

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            yes: false,
            dry_run: false,
            collection: None,
            output_dir: None,
        };

        assert!(!args.yes);
        assert!(!args.dry_run);
        assert!(args.collection.is_none());
        assert!(args.output_dir.is_none());
    }
}
