//! Unit tests for the App core.
//!
//! These tests exercise the full search flow end to end: resolution, history
//! recording, the private mode bypass, and the fallback path, over in-memory
//! storage.

use scout::app::App;
use scout::managers::history_store::HistoryStoreTrait;
use scout::managers::private_mode::Authenticator;
use scout::services::settings_engine::SettingsEngineTrait;
use scout::types::auth::{AuthOutcome, AuthPolicy, GateState};
use scout::types::engine::SearchEngine;

struct Approving;
impl Authenticator for Approving {
    fn evaluate(&self, _policy: AuthPolicy) -> AuthOutcome {
        AuthOutcome::Success
    }
}

struct Absent;
impl Authenticator for Absent {
    fn evaluate(&self, _policy: AuthPolicy) -> AuthOutcome {
        AuthOutcome::Unavailable
    }
}

fn setup() -> App {
    App::open_in_memory(Box::new(Approving)).expect("Failed to open in-memory app")
}

#[test]
fn test_search_resolves_and_records() {
    let mut app = setup();

    let url = app.submit_search("cats").expect("search should resolve");
    assert_eq!(url.as_str(), "https://google.com/search?q=cats");

    let history = app.history.list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].search_text, "cats");
    assert_eq!(history[0].engine, "Google");
    assert_eq!(history[0].url.as_str(), "https://google.com/search?q=cats");
}

#[test]
fn test_newest_search_is_first() {
    let mut app = setup();

    app.submit_search("first").unwrap();
    app.submit_search("second").unwrap();

    assert_eq!(app.history.list()[0].search_text, "second");
}

#[test]
fn test_empty_query_is_skipped() {
    let mut app = setup();

    assert_eq!(app.submit_search(""), None);
    assert!(app.history.list().is_empty());
}

#[test]
fn test_private_mode_bypasses_history() {
    let mut app = setup();

    app.set_private_mode(true);
    app.gate.request_unlock();
    assert_eq!(app.gate.state(), GateState::Unlocked);

    let url = app.submit_search("secret").expect("search should resolve");
    assert_eq!(url.as_str(), "https://google.com/search?q=secret");
    assert!(app.history.list().is_empty());
}

/// A degraded unlock still counts as private mode: nothing is recorded.
#[test]
fn test_degraded_private_mode_also_bypasses_history() {
    let mut app = App::open_in_memory(Box::new(Absent)).unwrap();

    app.set_private_mode(true);
    app.gate.request_unlock();
    assert_eq!(app.gate.state(), GateState::UnlockedDegraded);
    assert!(app.gate.degraded_warning());

    app.submit_search("secret").unwrap();
    assert!(app.history.list().is_empty());
}

/// Even a still-locked gate bypasses recording while the feature is on.
#[test]
fn test_locked_private_mode_bypasses_history() {
    let mut app = setup();

    app.set_private_mode(true);
    assert_eq!(app.gate.state(), GateState::Locked);

    app.submit_search("secret").unwrap();
    assert!(app.history.list().is_empty());
}

#[test]
fn test_recording_resumes_after_private_mode() {
    let mut app = setup();

    app.set_private_mode(true);
    app.submit_search("hidden").unwrap();
    app.set_private_mode(false);
    app.submit_search("visible").unwrap();

    let history = app.history.list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].search_text, "visible");
}

/// A prefix that does not form a URL loads the fallback page and records
/// nothing.
#[test]
fn test_unresolvable_search_falls_back_and_is_not_recorded() {
    let mut app = setup();

    app.settings.select_engine(SearchEngine::Custom).unwrap();
    app.settings.set_custom_prefix("definitely not a url").unwrap();

    let url = app.submit_search("cats").expect("fallback should load");
    assert_eq!(url.as_str(), "https://example.com/");
    assert!(app.history.list().is_empty());
}

#[test]
fn test_selected_engine_flows_into_history() {
    let mut app = setup();

    app.settings.select_engine(SearchEngine::DuckDuckGo).unwrap();
    app.submit_search("privacy").unwrap();

    let item = &app.history.list()[0];
    assert_eq!(item.engine, "DuckDuckGo");
    assert_eq!(item.url.as_str(), "https://duckduckgo.com/?q=privacy");
}

#[test]
fn test_private_mode_toggle_persists() {
    let mut app = setup();
    app.set_private_mode(true);

    let config = app.settings.load().unwrap();
    assert!(config.private_mode);
}

#[test]
fn test_shutdown_flushes_pending_writes() {
    let mut app = setup();

    app.submit_search("durable").unwrap();
    app.shutdown();

    let payload = app
        .storage
        .lock()
        .unwrap()
        .read_slot(scout::storage::HISTORY_SLOT)
        .unwrap()
        .expect("history slot should be written");
    assert!(payload.contains("durable"));
}
