//! SQLite connection management and slot access for Scout.
//!
//! Provides the [`Storage`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::migrations;

/// Slot key for the persisted search history (JSON array of history items).
pub const HISTORY_SLOT: &str = "history_items";

/// Slot key for the persisted engine configuration (JSON object).
pub const ENGINE_CONFIG_SLOT: &str = "engine_config";

/// Durable key-value storage for the application.
///
/// `Storage` owns a `rusqlite::Connection` and ensures the slot table exists
/// when opened. Each slot holds one text value; writers overwrite the full
/// value, there are no partial updates.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the storage file at the given path and runs migrations.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or
    /// migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let storage = Self { conn };
        migrations::run_all(&storage.conn)?;
        Ok(storage)
    }

    /// Opens in-memory storage and runs migrations.
    ///
    /// Useful for testing — the contents are discarded when the `Storage` is dropped.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or
    /// migrations fail.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let storage = Self { conn };
        migrations::run_all(&storage.conn)?;
        Ok(storage)
    }

    /// Reads a slot. `None` when the slot has never been written.
    pub fn read_slot(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        self.conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    /// Writes a slot, replacing any previous value.
    pub fn write_slot(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    /// Deletes a slot. Succeeds whether or not the slot existed.
    pub fn clear_slot(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
