//! App core for Scout.
//!
//! Central struct owning the storage handle and the components built on top
//! of it. The store is constructed explicitly here and handed to whoever
//! needs it. There is no global singleton; its lifecycle is tied to the
//! `App` value.
//!
//! Control flow for one search: the UI calls [`App::submit_search`], the
//! resolver builds a URL, history records the query unless private mode is
//! on, and the returned URL is handed to the web-view collaborator to load.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};
use url::Url;

use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::managers::private_mode::{Authenticator, PrivateModeGate};
use crate::services::search_resolver::{SearchResolver, SearchResolverTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::Storage;
use crate::types::history::HistoryItem;

/// Central application struct holding the storage handle and all components.
pub struct App {
    pub storage: Arc<Mutex<Storage>>,
    pub settings: SettingsEngine,
    pub history: HistoryStore,
    pub gate: PrivateModeGate,
    pub resolver: SearchResolver,
}

impl App {
    /// Creates a new App backed by the storage file at `db_path`.
    pub fn new(db_path: &str, authenticator: Box<dyn Authenticator>) -> Result<Self, rusqlite::Error> {
        let storage = Arc::new(Mutex::new(Storage::open(db_path)?));
        Ok(Self::with_storage(storage, authenticator))
    }

    /// Creates a new App backed by in-memory storage. Useful for testing.
    pub fn open_in_memory(authenticator: Box<dyn Authenticator>) -> Result<Self, rusqlite::Error> {
        let storage = Arc::new(Mutex::new(Storage::open_in_memory()?));
        Ok(Self::with_storage(storage, authenticator))
    }

    fn with_storage(storage: Arc<Mutex<Storage>>, authenticator: Box<dyn Authenticator>) -> Self {
        let mut settings = SettingsEngine::new(storage.clone());
        // A malformed config slot leaves the defaults in place.
        if let Err(e) = settings.load() {
            warn!("failed to load engine config, using defaults: {}", e);
        }

        let history = HistoryStore::open(storage.clone());
        let gate = PrivateModeGate::new(authenticator, settings.config().private_mode);

        Self {
            storage,
            settings,
            history,
            gate,
            resolver: SearchResolver::new(),
        }
    }

    /// Startup sequence: report what was restored.
    pub fn startup(&self) {
        info!(
            history_items = self.history.list().len(),
            engine = %self.settings.config().engine_name,
            private_mode = self.gate.is_active(),
            "scout started"
        );
    }

    /// Shutdown sequence: wait for pending history writes to land.
    pub fn shutdown(&mut self) {
        self.history.flush();
    }

    /// Resolves and optionally records one search submission, returning the
    /// URL for the web view to load.
    ///
    /// An empty query is skipped entirely: no resolution, no history entry,
    /// `None` returned. A query that fails to resolve loads the fallback
    /// page and is not recorded. While private mode is on, no search is ever
    /// recorded, whatever the gate's unlock state.
    pub fn submit_search(&mut self, query: &str) -> Option<Url> {
        if query.is_empty() {
            return None;
        }

        let config = self.settings.config().clone();
        match self.resolver.resolve(&config.search_prefix, query) {
            Ok(url) => {
                if !self.gate.is_active() {
                    self.history
                        .add(HistoryItem::new(url.clone(), &config.engine_name, query));
                }
                Some(url)
            }
            Err(e) => {
                info!("search resolution failed, loading fallback: {}", e);
                Some(self.resolver.fallback().clone())
            }
        }
    }

    /// Toggles the private mode feature, keeping the persisted setting and
    /// the gate in step.
    pub fn set_private_mode(&mut self, enabled: bool) {
        if let Err(e) = self.settings.set_private_mode(enabled) {
            warn!("failed to persist private mode toggle: {}", e);
        }
        self.gate.set_enabled(enabled);
    }
}
