//! Profile Popup - a small Dioxus desktop client for user profile cards
//!
//! The app renders a profile icon for a user account. Hovering the icon (or
//! clicking it, depending on configuration) fetches the user's profile JSON
//! from the server and shows it in a popup overlay; clicking the icon
//! navigates the webview to the full profile page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use profile_popup::{AppConfig, StartupAction};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load_default()?;
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let _guard = runtime.enter();
//!     profile_popup::launch(config, StartupAction::Default)
//! }
//! ```
//!
//! ## Architecture
//!
//! The mutable application state is kept out of the component tree:
//!
//! 1. `AppContext` lives on the main thread and is never shared
//! 2. Components render from read-only snapshots of the state
//! 3. Commands are sent via channels and processed on the main thread
//! 4. The Dioxus app runs in a single-threaded context

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use anyhow::Result;
use dioxus::prelude::Signal;
use dioxus::prelude::WritableExt as _;

// Public library modules
pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod state;

// Internal modules
mod app;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use client::{ProfileClient, UserProfile};
pub use config::AppConfig;
pub use state::{AppCommand, AppContext, AppSnapshot, StartupAction};

// Thread-local storage for AppContext to allow synchronous command processing
thread_local! {
    pub(crate) static APP_CTX: RefCell<Option<Rc<RefCell<AppContext>>>> = const { RefCell::new(None) };
}

/// Custom HTML head content with CSS styles.
const CUSTOM_HEAD: &str = include_str!("../assets/head.html");

/// Launch the Dioxus desktop application.
///
/// Before calling this, ensure a Tokio runtime is active (via
/// `Runtime::enter()`); the HTTP client needs it for profile fetches.
pub fn launch(config: AppConfig, startup_action: StartupAction) -> Result<()> {
    // Create command channel
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();

    let user_id = match startup_action {
        StartupAction::ShowUser(id) => id,
        StartupAction::Default => config.server.default_user.clone(),
    };

    let client = ProfileClient::new(&config.server)?;
    let app_ctx = AppContext::new(&config, user_id, command_rx);

    // Create initial snapshot
    let initial_snapshot = app_ctx.snapshot();

    // Wrap the context in Rc<RefCell> for single-threaded access
    let app_ctx = Rc::new(RefCell::new(app_ctx));

    // Store in thread-local for synchronous command processing from Dioxus components
    APP_CTX.with(|ctx| {
        *ctx.borrow_mut() = Some(app_ctx.clone());
    });

    // Create app state that can be shared with Dioxus
    let app_state = AppState {
        command_tx,
        snapshot: std::sync::Arc::new(parking_lot::Mutex::new(initial_snapshot)),
        client,
    };

    // Clone for the closure
    let app_ctx_clone = app_ctx.clone();
    let snapshot_ref = app_state.snapshot.clone();

    // Launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(CUSTOM_HEAD.to_string())
                .with_custom_event_handler(move |_event, _target| {
                    // Process commands on each event loop iteration
                    if let Ok(mut ctx) = app_ctx_clone.try_borrow_mut() {
                        ctx.process_commands();
                        *snapshot_ref.lock() = ctx.snapshot();
                    }
                }),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<AppCommand>,
    pub snapshot: std::sync::Arc<parking_lot::Mutex<AppSnapshot>>,
    /// HTTP client for the profile JSON endpoint.
    pub client: ProfileClient,
}

impl AppState {
    /// Send a command to the application context.
    pub fn send_command(&self, cmd: AppCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Process pending commands and push the fresh snapshot into the signal.
    /// Call after sending commands so the UI re-renders with the new state.
    pub fn process_and_notify(&self, snapshot_signal: &mut Signal<AppSnapshot>) {
        APP_CTX.with(|ctx| {
            if let Some(ref app_ctx) = *ctx.borrow() {
                if let Ok(mut inner) = app_ctx.try_borrow_mut() {
                    inner.process_commands();
                    let new_snapshot = inner.snapshot();
                    *self.snapshot.lock() = new_snapshot.clone();
                    snapshot_signal.set(new_snapshot);
                }
            }
        });
    }

    /// Get the current snapshot.
    #[must_use]
    pub fn get_snapshot(&self) -> AppSnapshot {
        self.snapshot.lock().clone()
    }
}
