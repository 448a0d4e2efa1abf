// Scout settings engine
// Manages the engine configuration: loading, saving, engine selection, the
// custom prefix, and the private mode toggle. The configuration is stored as
// a JSON object in its own storage slot.

use std::sync::{Arc, Mutex};

use crate::storage::{Storage, ENGINE_CONFIG_SLOT};
use crate::types::engine::{EngineConfig, SearchEngine};
use crate::types::errors::ConfigError;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<EngineConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn config(&self) -> &EngineConfig;
    fn select_engine(&mut self, engine: SearchEngine) -> Result<(), ConfigError>;
    fn set_custom_prefix(&mut self, prefix: &str) -> Result<(), ConfigError>;
    fn set_private_mode(&mut self, enabled: bool) -> Result<(), ConfigError>;
}

/// Settings engine implementation persisting to the `engine_config` slot.
pub struct SettingsEngine {
    storage: Arc<Mutex<Storage>>,
    config: EngineConfig,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine with default configuration. Call
    /// [`load`](SettingsEngineTrait::load) to pick up persisted values.
    pub fn new(storage: Arc<Mutex<Storage>>) -> Self {
        Self {
            storage,
            config: EngineConfig::default(),
        }
    }

    fn storage(&self) -> Result<std::sync::MutexGuard<'_, Storage>, ConfigError> {
        self.storage
            .lock()
            .map_err(|_| ConfigError::Storage("storage lock poisoned".to_string()))
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads the configuration from its storage slot.
    ///
    /// An absent slot yields the defaults. A present but malformed slot
    /// returns a serialization error and leaves the in-memory configuration
    /// untouched.
    fn load(&mut self) -> Result<EngineConfig, ConfigError> {
        let payload = {
            let storage = self.storage()?;
            storage
                .read_slot(ENGINE_CONFIG_SLOT)
                .map_err(|e| ConfigError::Storage(format!("Failed to read config slot: {}", e)))?
        };

        let config = match payload {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                ConfigError::Serialization(format!("Failed to parse config: {}", e))
            })?,
            None => EngineConfig::default(),
        };

        self.config = config;
        Ok(self.config.clone())
    }

    /// Saves the current configuration to its storage slot.
    fn save(&self) -> Result<(), ConfigError> {
        let json = serde_json::to_string(&self.config).map_err(|e| {
            ConfigError::Serialization(format!("Failed to serialize config: {}", e))
        })?;

        let storage = self.storage()?;
        storage
            .write_slot(ENGINE_CONFIG_SLOT, &json)
            .map_err(|e| ConfigError::Storage(format!("Failed to write config slot: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory configuration.
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Selects an engine, applying its built-in prefix and display name.
    ///
    /// Selecting `Custom` keeps the current prefix so the user can edit it;
    /// only the label changes. Saves after a successful update.
    fn select_engine(&mut self, engine: SearchEngine) -> Result<(), ConfigError> {
        self.config.engine = engine;
        if let Some(prefix) = engine.prefix() {
            self.config.search_prefix = prefix.to_string();
        }
        self.config.engine_name = engine.display_name().to_string();
        self.save()
    }

    /// Sets a user-supplied search prefix. Only valid while `Custom` is the
    /// selected engine.
    fn set_custom_prefix(&mut self, prefix: &str) -> Result<(), ConfigError> {
        if self.config.engine != SearchEngine::Custom {
            return Err(ConfigError::InvalidValue(
                "custom prefix requires the Custom engine to be selected".to_string(),
            ));
        }
        self.config.search_prefix = prefix.to_string();
        self.save()
    }

    /// Turns the private mode feature on or off and persists the toggle.
    fn set_private_mode(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.config.private_mode = enabled;
        self.save()
    }
}
