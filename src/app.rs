//! Main application component.
//!
//! This is the root Dioxus component that composes the page: the profile
//! icon, the conditionally rendered popup, and the navigation effect.

use dioxus::prelude::*;

use crate::components::{ProfileIcon, ProfilePopup};
use crate::state::AppCommand;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    // Get app state from context
    let app_state = use_context::<AppState>();

    // Provide the snapshot signal that components read and update
    let snapshot_signal = use_context_provider(|| Signal::new(app_state.get_snapshot()));
    let snapshot = snapshot_signal.read().clone();

    // Issue pending webview navigation, then clear it so the effect settles
    let nav_state = app_state.clone();
    let mut nav_signal = snapshot_signal;
    use_effect(move || {
        let pending = nav_signal.read().pending_navigation.clone();
        if let Some(url) = pending {
            document::eval(&format!("window.location.href = {url:?};"));
            nav_state.send_command(AppCommand::NavigationDispatched);
            nav_state.process_and_notify(&mut nav_signal);
        }
    });

    rsx! {
        document::Title { "Profile - {snapshot.user_id}" }

        div {
            class: "profile-page",

            ProfileIcon {
                user_id: snapshot.user_id.clone(),
                href: snapshot.profile_href.clone(),
            }

            // Popup overlay (shown once a profile has been fetched)
            if snapshot.popup_visible {
                if let Some(profile) = snapshot.profile.clone() {
                    ProfilePopup { profile }
                }
            }
        }
    }
}
