// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{JsonFileVisitStore, PersistenceError, VisitRecord};
use std::path::PathBuf;
use tempfile::TempDir;
use wellspring::{StoreError, VisitStore};

fn state_file(dir: &TempDir) -> PathBuf {
    dir.path().join("state.json")
}

#[test]
fn test_missing_file_is_a_first_visit() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonFileVisitStore = JsonFileVisitStore::new(state_file(&dir));

    assert!(!store.has_visited().unwrap());
    assert!(!store.path().exists());
}

#[test]
fn test_mark_visited_writes_flag_document() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let mut store: JsonFileVisitStore = JsonFileVisitStore::new(state_file(&dir));

    store.mark_visited().unwrap();

    let contents: String = std::fs::read_to_string(state_file(&dir)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json, serde_json::json!({ "wellspring_visited": true }));

    let reopened: JsonFileVisitStore = JsonFileVisitStore::new(state_file(&dir));
    assert!(reopened.has_visited().unwrap());
}

#[test]
fn test_parent_directories_are_created() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("nested").join("deeper").join("state.json");
    let mut store: JsonFileVisitStore = JsonFileVisitStore::new(&path);

    store.mark_visited().unwrap();

    assert!(path.exists());
}

#[test]
fn test_empty_object_reads_as_not_visited() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    std::fs::write(state_file(&dir), "{}").unwrap();
    let store: JsonFileVisitStore = JsonFileVisitStore::new(state_file(&dir));

    assert_eq!(store.load().unwrap(), VisitRecord { visited: false });
}

#[test]
fn test_corrupt_file_is_a_serialization_error() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    std::fs::write(state_file(&dir), "not json").unwrap();
    let store: JsonFileVisitStore = JsonFileVisitStore::new(state_file(&dir));

    let err: PersistenceError = store.load().unwrap_err();
    assert!(matches!(err, PersistenceError::Serialization(_)));

    let store_err: StoreError = store.has_visited().unwrap_err();
    assert!(store_err.message.starts_with("Serialization error"));
}

#[test]
fn test_directory_in_place_of_file_is_an_io_error() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonFileVisitStore = JsonFileVisitStore::new(dir.path());

    let err: PersistenceError = store.load().unwrap_err();

    assert!(matches!(err, PersistenceError::Io { .. }));
    assert!(err.to_string().starts_with("Failed to access"));
}

#[test]
fn test_clear_forgets_the_visit() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let mut store: JsonFileVisitStore = JsonFileVisitStore::new(state_file(&dir));
    store.mark_visited().unwrap();

    store.clear().unwrap();

    assert!(!store.has_visited().unwrap());
    store.clear().unwrap();
}
