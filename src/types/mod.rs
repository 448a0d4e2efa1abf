// Scout shared type definitions
// Each submodule defines types used across the application.

pub mod auth;
pub mod engine;
pub mod errors;
pub mod history;
