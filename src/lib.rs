// Quill - relational records to static-site collections
// Copyright (c) 2026 Quill Contributors
// Licensed under the MIT License

//! # Quill - static-site collection exporter
//!
//! Quill exports rows from a relational-style data model into static-site
//! collection documents: files with a YAML front-matter block and a content
//! body, the shape Jekyll-like generators consume.
//!
//! ## Overview
//!
//! An export run pages through a record source in bounded windows,
//! resolves each record's declared fields (direct attributes or one-hop
//! related lookups like `client__name`) into a flat attribute map, and
//! materializes one immutable [`Document`](domain::Document) per record.
//! The run is all-or-nothing at the logical level: the first generation or
//! size-cap failure aborts the whole run.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (resolve, transform, generate, export)
//! - [`adapters`] - Record sources and write sinks
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quill::adapters::{FileSystemSink, JsonRecordSource};
//! use quill::core::{export_collection, Collection, ExportLimits};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let collection = Collection::builder("Post")
//!         .fields(["title", "body", "client__name"])
//!         .content_field("body")
//!         .filename_field("title")
//!         .build()?;
//!
//!     let source = JsonRecordSource::from_file("Post", "data/posts.json")?;
//!     let limits = ExportLimits::new(500, 10_000)?;
//!
//!     let summary = export_collection(
//!         &collection,
//!         &source,
//!         &FileSystemSink::new(),
//!         Path::new("_site/_post"),
//!         limits,
//!     )?;
//!
//!     println!("Wrote {} documents", summary.documents_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with
//! [`domain::QuillError`]. Two kinds abort an export run with a logged
//! termination rather than propagating: a required field missing on the
//! record type, and the collection size cap being exceeded.
//!
//! ## Logging
//!
//! Quill uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting export");
//! warn!(collection = "post", "No records found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
