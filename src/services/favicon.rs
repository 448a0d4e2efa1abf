//! Favicon lookup for the engine picker.
//!
//! A pure mapping from engine display name to a fixed icon URL. The five
//! built-in engines have known icons; custom engines have none and the UI
//! shows a placeholder instead.

/// Returns the fixed favicon URL for a known engine display name.
pub fn favicon_url(engine_name: &str) -> Option<&'static str> {
    match engine_name {
        "Google" => Some("https://google.com/favicon.ico"),
        "Yahoo!" => Some("https://yahoo.com/favicon.ico"),
        "Bing" => Some("https://bing.com/favicon.ico"),
        "DuckDuckGo" => Some("https://duckduckgo.com/favicon.ico"),
        "Ecosia" => Some("https://ecosia.com/favicon.ico"),
        _ => None,
    }
}
