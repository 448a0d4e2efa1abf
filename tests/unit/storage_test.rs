//! Unit tests for the storage layer.
//!
//! These tests exercise slot reads, writes, overwrites, and deletion through
//! the `Storage` API, plus persistence across reopen using a temp file.

use scout::storage::{Storage, ENGINE_CONFIG_SLOT, HISTORY_SLOT};

#[test]
fn test_read_absent_slot_returns_none() {
    let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");

    assert_eq!(storage.read_slot("never_written").unwrap(), None);
    assert_eq!(storage.read_slot(HISTORY_SLOT).unwrap(), None);
    assert_eq!(storage.read_slot(ENGINE_CONFIG_SLOT).unwrap(), None);
}

#[test]
fn test_write_then_read_round_trips() {
    let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");

    storage.write_slot("greeting", "hello").unwrap();
    assert_eq!(storage.read_slot("greeting").unwrap(), Some("hello".to_string()));
}

#[test]
fn test_write_overwrites_previous_value() {
    let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");

    storage.write_slot("slot", "first").unwrap();
    storage.write_slot("slot", "second").unwrap();

    assert_eq!(storage.read_slot("slot").unwrap(), Some("second".to_string()));
}

#[test]
fn test_clear_slot_removes_value() {
    let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");

    storage.write_slot("slot", "value").unwrap();
    storage.clear_slot("slot").unwrap();

    assert_eq!(storage.read_slot("slot").unwrap(), None);
}

#[test]
fn test_clear_absent_slot_is_not_an_error() {
    let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");

    storage.clear_slot("never_written").unwrap();
}

#[test]
fn test_slots_are_independent() {
    let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");

    storage.write_slot(HISTORY_SLOT, "[]").unwrap();
    storage.write_slot(ENGINE_CONFIG_SLOT, "{}").unwrap();
    storage.clear_slot(HISTORY_SLOT).unwrap();

    assert_eq!(storage.read_slot(HISTORY_SLOT).unwrap(), None);
    assert_eq!(
        storage.read_slot(ENGINE_CONFIG_SLOT).unwrap(),
        Some("{}".to_string())
    );
}

#[test]
fn test_values_persist_across_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scout.db");

    {
        let storage = Storage::open(&path).expect("Failed to open storage file");
        storage.write_slot("slot", "durable").unwrap();
    }

    let storage = Storage::open(&path).expect("Failed to reopen storage file");
    assert_eq!(storage.read_slot("slot").unwrap(), Some("durable".to_string()));
}

/// Reopening a database that already has the current schema must not fail or
/// lose data.
#[test]
fn test_migrations_are_idempotent() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scout.db");

    {
        let storage = Storage::open(&path).unwrap();
        storage.write_slot("slot", "kept").unwrap();
    }
    // Open twice more; migrations run on every open.
    {
        let _ = Storage::open(&path).unwrap();
    }
    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.read_slot("slot").unwrap(), Some("kept".to_string()));
}
