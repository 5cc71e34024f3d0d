//! Tests for release table discovery.

use std::fs;
use std::path::{Path, PathBuf};

use relfind_ingest::{IngestError, discover_release_table, list_csv_files};

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "Product,Release\n").expect("write file");
    path
}

#[test]
fn prefers_product_pages_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let _ = touch(dir.path(), "aaa.csv");
    let export = touch(dir.path(), "Product-Pages-Export-2026-10.csv");
    let _ = touch(dir.path(), "notes.txt");

    assert_eq!(discover_release_table(dir.path()).expect("discover"), export);
}

#[test]
fn falls_back_to_first_csv_by_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let _ = touch(dir.path(), "zeta.CSV");
    let alpha = touch(dir.path(), "alpha.csv");
    fs::create_dir(dir.path().join("nested.csv")).expect("create dir");

    let files = list_csv_files(dir.path()).expect("list");
    assert_eq!(files.len(), 2);
    assert_eq!(discover_release_table(dir.path()).expect("discover"), alpha);
}

#[test]
fn empty_directory_is_table_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let _ = touch(dir.path(), "source.txt");
    let error = discover_release_table(dir.path()).expect_err("no csv");
    assert!(matches!(error, IngestError::TableUnavailable { .. }));
}
