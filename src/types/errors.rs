use std::fmt;

// === ResolveError ===

/// Errors from search URL resolution.
#[derive(Debug)]
pub enum ResolveError {
    /// The prefix + encoded query does not parse as an absolute URL.
    /// Recovered by substituting the fallback page, never shown as an error.
    InvalidUrl(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidUrl(msg) => write!(f, "Invalid search URL: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

// === ConfigError ===

/// Errors related to engine configuration management.
#[derive(Debug)]
pub enum ConfigError {
    /// The storage layer failed while reading or writing the config slot.
    Storage(String),
    /// Failed to serialize or deserialize the persisted configuration.
    Serialization(String),
    /// The provided configuration value is invalid.
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Storage(msg) => write!(f, "Config storage error: {}", msg),
            ConfigError::Serialization(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
