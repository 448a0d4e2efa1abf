use serde::{Deserialize, Serialize};

/// Selectable search engines. The picker indices are persisted, so the
/// variant order is stable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Bing,
    Yahoo,
    DuckDuckGo,
    Ecosia,
    Custom,
}

impl SearchEngine {
    /// All engines in picker order.
    pub const ALL: [SearchEngine; 6] = [
        SearchEngine::Google,
        SearchEngine::Bing,
        SearchEngine::Yahoo,
        SearchEngine::DuckDuckGo,
        SearchEngine::Ecosia,
        SearchEngine::Custom,
    ];

    /// Maps a persisted picker index back to an engine.
    pub fn from_index(index: usize) -> Option<SearchEngine> {
        Self::ALL.get(index).copied()
    }

    /// Stable picker index of this engine.
    pub fn index(&self) -> usize {
        match self {
            SearchEngine::Google => 0,
            SearchEngine::Bing => 1,
            SearchEngine::Yahoo => 2,
            SearchEngine::DuckDuckGo => 3,
            SearchEngine::Ecosia => 4,
            SearchEngine::Custom => 5,
        }
    }

    /// Display name shown in the picker and recorded on history items.
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
            SearchEngine::Yahoo => "Yahoo!",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Ecosia => "Ecosia",
            SearchEngine::Custom => "Custom",
        }
    }

    /// Built-in search prefix. `Custom` has none; the user supplies it.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            SearchEngine::Google => Some("https://google.com/search?q="),
            SearchEngine::Bing => Some("https://bing.com/search?q="),
            SearchEngine::Yahoo => Some("https://search.yahoo.com/search?p="),
            SearchEngine::DuckDuckGo => Some("https://duckduckgo.com/?q="),
            SearchEngine::Ecosia => Some("https://www.ecosia.org/search?q="),
            SearchEngine::Custom => None,
        }
    }
}

/// Engine selection plus the private mode toggle. Persisted as one JSON
/// object in the `engine_config` storage slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    pub engine: SearchEngine,
    /// URL prefix the escaped query is appended to.
    pub search_prefix: String,
    /// Display label paired with `search_prefix`. Tracks the engine name for
    /// built-in engines; user-facing label for `Custom`.
    pub engine_name: String,
    /// Whether the private mode feature is turned on.
    pub private_mode: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let engine = SearchEngine::Google;
        Self {
            engine,
            search_prefix: engine.prefix().unwrap_or_default().to_string(),
            engine_name: engine.display_name().to_string(),
            private_mode: false,
        }
    }
}
