//! User profile popup component.
//!
//! Transient overlay displaying the six profile fields, with a close control
//! in the header.

use dioxus::prelude::*;

use crate::client::UserProfile;
use crate::hooks::use_snapshot_signal;
use crate::state::AppCommand;
use crate::AppState;

/// Popup overlay showing a fetched [`UserProfile`].
#[component]
pub fn ProfilePopup(profile: UserProfile) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    let close_handler = {
        let app_state = app_state.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            app_state.send_command(AppCommand::ClosePopup);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    rsx! {
        div {
            class: "user-popup",

            div {
                class: "user-popup-header",
                h2 { "{profile.username}" }
                a {
                    href: "#",
                    class: "user-popup-close",
                    title: "Close",
                    onclick: close_handler,
                    "\u{d7}"
                }
            }

            div {
                class: "user-popup-body",
                p { strong { "Email:" } " {profile.email}" }
                p { strong { "First Name:" } " {profile.first_name}" }
                p { strong { "Last Name:" } " {profile.last_name}" }
                p { strong { "Home Address:" } " {profile.home_address}" }
                p { strong { "Phone Number:" } " {profile.phone_number}" }
            }
        }
    }
}
