//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Quill using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Quill - relational records to static-site collections
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version, about, long_about = None)]
#[command(author = "Quill Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "quill.toml", env = "QUILL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "QUILL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export configured collections to the site directory
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
