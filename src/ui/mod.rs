//! Scout UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The search page is rendered as HTML/CSS/JS inside the WebView and search
//! results are external pages loaded into the same view. Communication
//! between the Rust backend and the JS frontend uses wry IPC.

pub mod webview_app;
