//! Application state management for Dioxus integration.
//!
//! The mutable state lives on the main thread in an `AppContext`. UI
//! components never touch it directly; they send [`AppCommand`] values over a
//! channel and render from a read-only [`AppSnapshot`].
//!
//! This module provides:
//! - `AppContext`: the main-thread state with command handling
//! - `AppSnapshot`: a read-only snapshot of the state for rendering
//! - `AppCommand`: commands that can be sent to the context

mod types;

pub use types::{AppCommand, AppSnapshot, StartupAction};

use std::sync::mpsc;

use crate::client::UserProfile;
use crate::config::{AppConfig, PopupTrigger};

/// The application state that lives on the main thread.
pub struct AppContext {
    command_rx: mpsc::Receiver<AppCommand>,

    user_id: String,
    profile_href: String,
    trigger: PopupTrigger,
    hide_on_leave: bool,

    // Popup state
    pub(crate) popup_visible: bool,
    pub(crate) profile: Option<UserProfile>,

    // Navigation state
    pub(crate) pending_navigation: Option<String>,
}

impl AppContext {
    /// Create the context for the given user.
    pub fn new(config: &AppConfig, user_id: String, command_rx: mpsc::Receiver<AppCommand>) -> Self {
        let base = config.server.base_url.trim_end_matches('/');
        let profile_href = format!("{base}/accounts/profile/{user_id}/");
        Self {
            command_rx,
            user_id,
            profile_href,
            trigger: config.popup.trigger,
            hide_on_leave: config.popup.hide_on_leave,
            popup_visible: false,
            profile: None,
            pending_navigation: None,
        }
    }

    /// Process all pending commands from the channel.
    pub fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::ShowPopup(profile) => {
                log::info!("showing popup for {}", profile.username);
                self.profile = Some(profile);
                self.popup_visible = true;
            }
            AppCommand::ClosePopup => {
                self.popup_visible = false;
                // The record only lives for one popup display
                self.profile = None;
            }
            AppCommand::Navigate(url) => {
                log::info!("navigating to {url}");
                self.pending_navigation = Some(url);
                self.popup_visible = false;
                self.profile = None;
            }
            AppCommand::NavigationDispatched => {
                self.pending_navigation = None;
            }
        }
    }

    /// Create a read-only snapshot of the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            user_id: self.user_id.clone(),
            profile_href: self.profile_href.clone(),
            trigger: self.trigger,
            hide_on_leave: self.hide_on_leave,
            popup_visible: self.popup_visible,
            profile: self.profile.clone(),
            pending_navigation: self.pending_navigation.clone(),
        }
    }
}
