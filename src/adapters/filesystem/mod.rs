//! Filesystem write sink
//!
//! Writes documents as front-matter files: a YAML metadata block between
//! `---` fences followed by the content body, the layout static-site
//! generators consume directly.

use crate::adapters::sink::WriteSink;
use crate::domain::{Document, QuillError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sink that writes one front-matter file per document
#[derive(Debug, Default)]
pub struct FileSystemSink;

impl FileSystemSink {
    pub fn new() -> Self {
        Self
    }

    /// Render a document as front matter plus body
    fn render(document: &Document) -> Result<String> {
        let front_matter = serde_yaml::to_string(document.front_matter())?;
        Ok(format!(
            "---\n{front_matter}---\n\n{}\n",
            document.content()
        ))
    }

    /// Target path for a document under the location directory
    ///
    /// The filename is sanitized for the filesystem and gets an `.md`
    /// extension when the rule produced none.
    fn target_path(document: &Document, location: &Path) -> PathBuf {
        let mut name = sanitize_filename(document.filename());
        if Path::new(&name).extension().is_none() {
            name.push_str(".md");
        }
        location.join(name)
    }
}

impl WriteSink for FileSystemSink {
    fn write(&self, document: &Document, location: &Path) -> Result<()> {
        fs::create_dir_all(location).map_err(|e| {
            QuillError::Sink(format!(
                "failed to create export directory {}: {e}",
                location.display()
            ))
        })?;

        let path = Self::target_path(document, location);
        let rendered = Self::render(document)?;

        fs::write(&path, rendered)
            .map_err(|e| QuillError::Sink(format!("failed to write {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "Wrote document");
        Ok(())
    }
}

/// Replace path separators and whitespace so a filename stays a single
/// file under the export directory
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}
