//! Scout — a privacy-focused search companion with a locking private mode.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
