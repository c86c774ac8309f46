//! Data types for application state management.
//!
//! Shared data structures used for state management and communication
//! between the main-thread context and UI components.

use crate::client::UserProfile;
use crate::config::PopupTrigger;

/// Determines what the application shows on startup.
#[derive(Debug, Clone)]
pub enum StartupAction {
    /// No argument provided - show the configured default user.
    Default,
    /// Show the profile icon for a specific user id.
    ShowUser(String),
}

/// Commands that can be sent to the application context.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// A profile fetch completed; show it in the popup.
    ShowPopup(UserProfile),
    /// Hide the popup and discard the displayed profile.
    ClosePopup,
    /// Navigate the webview to the full profile page.
    Navigate(String),
    /// The webview navigation was issued; clear the pending URL.
    NavigationDispatched,
}

/// A snapshot of the application state for rendering.
/// This is Clone + Send + Sync so it can be used with Dioxus.
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    /// Id of the user the profile icon represents.
    pub user_id: String,
    /// Href of the full profile page carried by the icon.
    pub profile_href: String,
    pub trigger: PopupTrigger,
    pub hide_on_leave: bool,

    // Popup state
    pub popup_visible: bool,
    pub profile: Option<UserProfile>,

    /// Profile page URL waiting to be loaded into the webview.
    pub pending_navigation: Option<String>,
}
