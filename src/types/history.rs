use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single recorded search. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    /// Unique for the lifetime of the store; never reused.
    pub id: Uuid,
    /// Fully-resolved destination URL for the search.
    pub url: Url,
    /// Display name of the engine used (built-in or a custom label).
    pub engine: String,
    /// Capture time. Insertion order is authoritative for the in-memory
    /// list; the clock is only consulted when re-sorting a restored list.
    pub time: DateTime<Utc>,
    /// Raw user query, unescaped.
    pub search_text: String,
}

impl HistoryItem {
    /// Creates an item with a fresh id and the current capture time.
    pub fn new(url: Url, engine: &str, search_text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            engine: engine.to_string(),
            time: Utc::now(),
            search_text: search_text.to_string(),
        }
    }
}
