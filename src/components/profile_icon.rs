//! Profile icon component.
//!
//! The icon carries a user id and the href of the full profile page. The
//! configured trigger event fetches the profile JSON and opens the popup;
//! clicking navigates to the profile page (unless the trigger is click).

use dioxus::prelude::*;

use crate::client::profile_json_url_from_href;
use crate::config::PopupTrigger;
use crate::hooks::{use_snapshot, use_snapshot_signal};
use crate::state::AppCommand;
use crate::AppState;

/// Clickable/hoverable element representing a user's account.
#[component]
pub fn ProfileIcon(user_id: String, href: String) -> Element {
    let app_state = use_context::<AppState>();
    let snapshot_signal = use_snapshot_signal();
    let snapshot = use_snapshot();

    let trigger = snapshot.trigger;
    let hide_on_leave = snapshot.hide_on_leave;

    // Fetch the profile, then show the popup once the response arrives.
    // A failed fetch is only logged; the popup simply never opens.
    let open_popup = {
        let app_state = app_state.clone();
        let href = href.clone();
        move || {
            let app_state = app_state.clone();
            let url = profile_json_url_from_href(&href);
            let mut snapshot_signal = snapshot_signal;
            spawn(async move {
                match app_state.client.fetch_profile_at(&url).await {
                    Ok(profile) => {
                        app_state.send_command(AppCommand::ShowPopup(profile));
                        app_state.process_and_notify(&mut snapshot_signal);
                    }
                    Err(err) => log::error!("profile fetch failed: {err}"),
                }
            });
        }
    };

    let enter_handler = {
        let open_popup = open_popup.clone();
        move |_: MouseEvent| {
            if trigger == PopupTrigger::Hover {
                open_popup();
            }
        }
    };

    let leave_handler = {
        let app_state = app_state.clone();
        let mut snapshot_signal = snapshot_signal;
        move |_: MouseEvent| {
            if hide_on_leave {
                app_state.send_command(AppCommand::ClosePopup);
                app_state.process_and_notify(&mut snapshot_signal);
            }
        }
    };

    let click_handler = {
        let app_state = app_state.clone();
        let href = href.clone();
        let mut snapshot_signal = snapshot_signal;
        move |evt: MouseEvent| {
            evt.prevent_default();
            match trigger {
                PopupTrigger::Hover => {
                    // Redirect to the full profile page, bypassing the popup
                    app_state.send_command(AppCommand::Navigate(href.clone()));
                    app_state.process_and_notify(&mut snapshot_signal);
                }
                PopupTrigger::Click => open_popup(),
            }
        }
    };

    rsx! {
        a {
            class: "profile-icon",
            href: "{href}",
            title: "View full profile",
            onmouseenter: enter_handler,
            onmouseleave: leave_handler,
            onclick: click_handler,

            span { class: "profile-icon-avatar", "@" }
            span { class: "profile-icon-label", "user {user_id}" }
        }
    }
}
