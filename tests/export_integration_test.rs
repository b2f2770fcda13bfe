//! End-to-end export tests
//!
//! Drives the full pipeline (source -> generator -> transformer -> driver
//! -> filesystem sink) against real files in a temporary directory.

use quill::adapters::{FileSystemSink, JsonRecordSource};
use quill::core::{export_collection, Collection, ExportLimits};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn post_collection() -> Collection {
    Collection::builder("Post")
        .fields(["title", "body", "client__name"])
        .content_field("body")
        .filename_field("title")
        .build()
        .unwrap()
}

fn posts(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "title": format!("post-{i}"),
                "body": format!("Body of post {i}."),
                "client": {"name": format!("client-{i}")}
            })
        })
        .collect()
}

/// Split a written file into its parsed front matter and body.
fn read_document(path: &Path) -> (BTreeMap<String, Value>, String) {
    let raw = fs::read_to_string(path).unwrap();
    let rest = raw.strip_prefix("---\n").unwrap();
    let (front, body) = rest.split_once("---\n").unwrap();
    (
        serde_yaml::from_str(front).unwrap(),
        body.trim_start_matches('\n').to_string(),
    )
}

#[test]
fn export_writes_every_document_with_related_fields() {
    let dir = TempDir::new().unwrap();
    let source = JsonRecordSource::new("Post", posts(5));
    let limits = ExportLimits::new(2, 10).unwrap();

    let summary = export_collection(
        &post_collection(),
        &source,
        &FileSystemSink::new(),
        dir.path(),
        limits,
    )
    .unwrap();

    assert!(summary.is_successful());
    assert_eq!(summary.documents_written, 5);

    let mut files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "post-0.md",
            "post-1.md",
            "post-2.md",
            "post-3.md",
            "post-4.md"
        ]
    );

    let (front, body) = read_document(&dir.path().join("post-2.md"));
    // related field lands under its terminal segment name
    let keys: Vec<&String> = front.keys().collect();
    assert_eq!(keys, vec!["body", "name", "title"]);
    assert_eq!(front["name"], json!("client-2"));
    assert_eq!(front["title"], json!("post-2"));
    assert_eq!(body, "Body of post 2.\n");
}

#[test]
fn export_reads_records_from_a_data_file() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("posts.json");
    fs::write(
        &data_path,
        serde_json::to_string(&posts(3)).unwrap(),
    )
    .unwrap();

    let source = JsonRecordSource::from_file("Post", &data_path).unwrap();
    let out = dir.path().join("_site").join("_post");
    let limits = ExportLimits::new(500, 10_000).unwrap();

    let summary = export_collection(
        &post_collection(),
        &source,
        &FileSystemSink::new(),
        &out,
        limits,
    )
    .unwrap();

    assert_eq!(summary.documents_written, 3);
    assert!(out.join("post-0.md").exists());
}

#[test]
fn size_cap_aborts_run_but_leaves_written_files() {
    let dir = TempDir::new().unwrap();
    let source = JsonRecordSource::new("Post", posts(12));
    let limits = ExportLimits::new(5, 10).unwrap();

    let summary = export_collection(
        &post_collection(),
        &source,
        &FileSystemSink::new(),
        dir.path(),
        limits,
    )
    .unwrap();

    assert!(summary.aborted);
    assert_eq!(summary.documents_written, 10);
    assert!(summary
        .abort_reason
        .as_deref()
        .unwrap()
        .contains("exceeded size constraint of 10 (has 12)"));

    // no rollback: the two full windows stay on disk
    let count = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(count, 10);
}

#[test]
fn generation_failure_aborts_run_but_leaves_written_files() {
    let dir = TempDir::new().unwrap();
    let mut records = posts(3);
    // fourth record's type is missing the content field entirely
    records.push(json!({"title": "broken"}));
    records.extend(posts(2));

    let source = JsonRecordSource::new("Post", records);
    let limits = ExportLimits::new(2, 100).unwrap();

    let summary = export_collection(
        &post_collection(),
        &source,
        &FileSystemSink::new(),
        dir.path(),
        limits,
    )
    .unwrap();

    assert!(summary.aborted);
    assert_eq!(summary.documents_written, 3);
    assert!(summary
        .abort_reason
        .as_deref()
        .unwrap()
        .contains("field 'body' wasn't found on record type 'Post'"));

    // documents generated before the failure stay written, nothing after
    let count = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(count, 3);
}

#[test]
fn filename_function_receives_raw_record() {
    let dir = TempDir::new().unwrap();
    let collection = Collection::builder("Post")
        .fields(["title", "body"])
        .content_field("body")
        .filename_fn(|record| {
            format!(
                "{}-by-fn",
                record
                    .value("title")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default()
            )
        })
        .build()
        .unwrap();

    let source = JsonRecordSource::new("Post", posts(1));
    let limits = ExportLimits::new(10, 10).unwrap();

    export_collection(
        &collection,
        &source,
        &FileSystemSink::new(),
        dir.path(),
        limits,
    )
    .unwrap();

    assert!(dir.path().join("post-0-by-fn.md").exists());
}

#[test]
fn derived_label_matches_slug_convention() {
    let collection = Collection::builder("ClientGoal")
        .fields(["name"])
        .content_field("name")
        .build()
        .unwrap();
    assert_eq!(collection.label(), "client_goal");
}
