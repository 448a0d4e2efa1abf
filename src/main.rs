//! Scout — a privacy-focused search companion with a locking private mode.
//!
//! Entry point: opens the WebView shell. When built without the `gui`
//! feature, runs an interactive console demo instead.

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_tracing();
    scout::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_tracing();

    println!();
    println!("  Scout v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!("  Privacy-focused search companion");
    println!();

    demo_storage();
    demo_resolver();
    demo_settings();
    demo_history();
    demo_private_mode();
    demo_favicon();
    demo_app_core();

    println!("  All components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_storage() {
    use scout::storage::Storage;
    section("Storage Layer");

    let storage = Storage::open_in_memory().expect("Failed to open storage");
    storage.write_slot("demo", "hello").unwrap();
    println!("  Wrote slot 'demo': {:?}", storage.read_slot("demo").unwrap());
    storage.clear_slot("demo").unwrap();
    println!("  Cleared slot: {:?}", storage.read_slot("demo").unwrap());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_resolver() {
    use scout::services::search_resolver::{SearchResolver, SearchResolverTrait};
    section("Search Resolver");

    let resolver = SearchResolver::new();
    let url = resolver
        .resolve("https://google.com/search?q=", "rust history store")
        .unwrap();
    println!("  Resolved: {}", url);
    let fallback = resolver.resolve_or_fallback("not a url", "x");
    println!("  Malformed prefix falls back to: {}", fallback);
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use std::sync::{Arc, Mutex};
    use scout::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    use scout::storage::Storage;
    use scout::types::engine::SearchEngine;
    section("Settings Engine");

    let storage = Arc::new(Mutex::new(Storage::open_in_memory().unwrap()));
    let mut engine = SettingsEngine::new(storage);
    engine.load().unwrap();
    println!("  Default engine: {}", engine.config().engine_name);

    engine.select_engine(SearchEngine::DuckDuckGo).unwrap();
    println!("  Selected DuckDuckGo, prefix = {}", engine.config().search_prefix);

    engine.select_engine(SearchEngine::Custom).unwrap();
    engine.set_custom_prefix("https://www.youtube.com/results?search_query=").unwrap();
    println!("  Custom prefix = {}", engine.config().search_prefix);
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_history() {
    use std::sync::{Arc, Mutex};
    use scout::managers::history_store::{HistoryStore, HistoryStoreTrait};
    use scout::storage::Storage;
    use scout::types::history::HistoryItem;
    use url::Url;
    section("History Store");

    let storage = Arc::new(Mutex::new(Storage::open_in_memory().unwrap()));
    let mut store = HistoryStore::open(storage);

    for query in ["cats", "dogs", "ferrets"] {
        let url = Url::parse(&format!("https://google.com/search?q={}", query)).unwrap();
        store.add(HistoryItem::new(url, "Google", query));
    }
    println!("  Added 3 searches, newest first: {:?}",
        store.list().iter().map(|i| i.search_text.as_str()).collect::<Vec<_>>());

    let first = store.list()[0].id;
    store.delete(&first);
    println!("  Deleted newest, remaining: {}", store.list().len());

    store.flush();
    println!("  Flushed, last write status: {:?}", store.last_write_status());

    store.clear();
    println!("  Cleared: {} items", store.list().len());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_private_mode() {
    use scout::managers::private_mode::{Authenticator, PrivateModeGate};
    use scout::types::auth::{AuthOutcome, AuthPolicy};
    section("Private Mode Gate");

    struct AlwaysApprove;
    impl Authenticator for AlwaysApprove {
        fn evaluate(&self, _policy: AuthPolicy) -> AuthOutcome {
            AuthOutcome::Success
        }
    }

    let mut gate = PrivateModeGate::new(Box::new(AlwaysApprove), true);
    println!("  Initial state: {:?}", gate.state());
    let result = gate.request_unlock();
    println!("  Unlock: {:?} -> {:?}", result, gate.state());
    gate.lock();
    println!("  Locked again: {:?}", gate.state());
    gate.set_enabled(false);
    println!("  Feature off: {:?}", gate.state());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_favicon() {
    use scout::services::favicon::favicon_url;
    section("Favicon Lookup");

    println!("  Google -> {:?}", favicon_url("Google"));
    println!("  Custom -> {:?}", favicon_url("My Engine"));
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use scout::app::App;
    use scout::managers::history_store::HistoryStoreTrait;
    use scout::managers::private_mode::Authenticator;
    use scout::types::auth::{AuthOutcome, AuthPolicy};
    section("App Core (full search flow)");

    struct NoAuthenticator;
    impl Authenticator for NoAuthenticator {
        fn evaluate(&self, _policy: AuthPolicy) -> AuthOutcome {
            AuthOutcome::Unavailable
        }
    }

    let mut app = App::open_in_memory(Box::new(NoAuthenticator)).unwrap();
    app.startup();

    let url = app.submit_search("cats").unwrap();
    println!("  Searched 'cats' -> {}", url);
    println!("  History items: {}", app.history.list().len());

    app.set_private_mode(true);
    let _ = app.gate.request_unlock();
    println!("  Private mode on, degraded warning: {}", app.gate.degraded_warning());
    let _ = app.submit_search("secret plans");
    println!("  Private search recorded nothing: {} items", app.history.list().len());

    app.shutdown();
    println!("  Shut down cleanly");
    println!();
}
