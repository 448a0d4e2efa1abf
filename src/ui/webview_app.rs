//! WebView shell for Scout using `wry` + `tao`.
//!
//! Architecture:
//! - The search page is served via the `scout://` custom protocol.
//! - Submitted queries go through `App::submit_search`; the resolved URL is
//!   loaded into the same webview via `load_url()`.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; Rust → JS via
//!   `evaluate_script()`.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::debug;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::history_store::HistoryStoreTrait;
use crate::managers::private_mode::Authenticator;
use crate::services::favicon;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::auth::{AuthOutcome, AuthPolicy, GateState};
use crate::types::engine::SearchEngine;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
}

/// Desktop builds have no biometric backend, so the authenticator reports
/// `Unavailable` and the gate takes its degraded path with the standing
/// warning visible in the UI.
struct DesktopAuthenticator;

impl Authenticator for DesktopAuthenticator {
    fn evaluate(&self, _policy: AuthPolicy) -> AuthOutcome {
        AuthOutcome::Unavailable
    }
}

const SEARCH_PAGE: &str = include_str!("../../resources/ui/search_page.html");

fn search_page_html() -> String {
    SEARCH_PAGE.to_string()
}

// ─── IPC handler ───

fn handle_ipc(app: &mut App, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => Some(UserEvent::EvalScript(build_state_update(app))),

        "search" => {
            let query = msg.get("query").and_then(|v| v.as_str()).unwrap_or("");
            // Empty queries do not trigger a search; a locked gate does not
            // run private searches either.
            if app.gate.is_active() && !app.gate.can_search() {
                return Some(UserEvent::EvalScript(build_state_update(app)));
            }
            app.submit_search(query)
                .map(|url| UserEvent::LoadUrl(url.to_string()))
        }

        "back_to_search" => Some(UserEvent::LoadUrl("scout://localhost/search".to_string())),

        "unlock" => {
            let _ = app.gate.request_unlock();
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        "lock" => {
            app.gate.lock();
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        "set_private_mode" => {
            let on = msg.get("on").and_then(|v| v.as_bool()).unwrap_or(false);
            app.set_private_mode(on);
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        "history_delete" => {
            if let Some(id) = msg
                .get("id")
                .and_then(|v| v.as_str())
                .and_then(|s| s.parse().ok())
            {
                app.history.delete(&id);
            }
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        "history_clear" => {
            app.history.clear();
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        "select_engine" => {
            let index = msg.get("index").and_then(|v| v.as_u64()).unwrap_or(0) as usize;
            if let Some(engine) = SearchEngine::from_index(index) {
                let _ = app.settings.select_engine(engine);
            }
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        "set_custom_prefix" => {
            if let Some(prefix) = msg.get("prefix").and_then(|v| v.as_str()) {
                let _ = app.settings.set_custom_prefix(prefix);
            }
            Some(UserEvent::EvalScript(build_state_update(app)))
        }

        _ => None,
    }
}

/// Pushes the full UI state: engine config, gate state, and history items.
fn build_state_update(app: &App) -> String {
    let config = app.settings.config();
    let mode = match app.gate.state() {
        GateState::Disabled => "normal",
        GateState::Locked => "locked",
        GateState::Unlocked => "private",
        GateState::UnlockedDegraded => "private",
    };
    let history: Vec<serde_json::Value> = app
        .history
        .list()
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id.to_string(),
                "url": item.url.as_str(),
                "engine": item.engine,
                "time": item.time.to_rfc3339(),
                "searchText": item.search_text,
                "favicon": favicon::favicon_url(&item.engine),
            })
        })
        .collect();

    let state = serde_json::json!({
        "mode": mode,
        "degradedWarning": app.gate.degraded_warning(),
        "engineIndex": config.engine.index(),
        "engineName": config.engine_name,
        "searchPrefix": config.search_prefix,
        "privateMode": config.private_mode,
        "history": history,
    });
    format!("if(window.__scout_applyState)__scout_applyState({})", state)
}

// ─── Main entry point ───

pub fn run() {
    let data_dir = crate::platform::get_data_dir();
    let _ = std::fs::create_dir_all(&data_dir);
    let db_path = data_dir.join("scout.db");

    let app = App::new(
        &db_path.to_string_lossy(),
        Box::new(DesktopAuthenticator),
    )
    .expect("Failed to initialize Scout");
    app.startup();
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Scout")
        .with_inner_size(tao::dpi::LogicalSize::new(480.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("scout".into(), move |_wv_id, request| {
            let path = request.uri().path();
            let html = match path {
                "/search" | "/" => search_page_html(),
                _ => search_page_html(),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_url("scout://localhost/search")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!("ipc: {}", &body[..body.len().min(200)]);
            let mut app = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut app, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut app = state.lock().unwrap();
                // Session end: lock the gate and flush pending writes.
                app.gate.lock();
                app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    debug!("load: {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
            },

            _ => {}
        }
    });
}
