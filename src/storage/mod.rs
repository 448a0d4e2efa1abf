//! Scout storage layer.
//!
//! Durable string-keyed slots backed by SQLite, surviving process restarts.
//! Exactly two slots are in use: the history log and the engine
//! configuration.
//!
//! # Usage
//!
//! ```no_run
//! use scout::storage::Storage;
//!
//! // Open persistent storage
//! let storage = Storage::open("scout.db").expect("failed to open storage");
//!
//! // Or use in-memory storage for testing
//! let storage = Storage::open_in_memory().expect("failed to open in-memory storage");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::{Storage, ENGINE_CONFIG_SLOT, HISTORY_SLOT};
