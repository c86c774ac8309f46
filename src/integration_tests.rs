//! Integration tests for the popup command flow.
//!
//! These tests drive `AppContext` through the same command sequences the UI
//! components send, and verify the resulting snapshots.

use httpmock::prelude::*;
use serde_json::json;

use crate::client::{profile_json_url_from_href, ProfileClient};
use crate::config::{AppConfig, PopupTrigger, ServerConfig};
use crate::state::AppCommand;
use crate::test_helpers::{sample_profile, test_context};

// --- Snapshot construction ---

#[test]
fn initial_snapshot_has_hidden_popup_and_derived_href() {
    let config = AppConfig::default();
    let (ctx, _tx) = test_context(&config, "42");

    let snapshot = ctx.snapshot();
    assert!(!snapshot.popup_visible);
    assert!(snapshot.profile.is_none());
    assert!(snapshot.pending_navigation.is_none());
    assert_eq!(snapshot.user_id, "42");
    assert_eq!(
        snapshot.profile_href,
        "http://127.0.0.1:8000/accounts/profile/42/"
    );
}

#[test]
fn snapshot_carries_popup_configuration() {
    let config = AppConfig::default()
        .with_trigger(PopupTrigger::Click)
        .with_hide_on_leave(true);
    let (ctx, _tx) = test_context(&config, "1");

    let snapshot = ctx.snapshot();
    assert_eq!(snapshot.trigger, PopupTrigger::Click);
    assert!(snapshot.hide_on_leave);
}

// --- Popup show/close ---

#[test]
fn show_popup_populates_all_fields() {
    let config = AppConfig::default();
    let (mut ctx, tx) = test_context(&config, "42");

    tx.send(AppCommand::ShowPopup(sample_profile())).unwrap();
    ctx.process_commands();

    let snapshot = ctx.snapshot();
    assert!(snapshot.popup_visible);
    let profile = snapshot.profile.expect("profile should be set");
    assert_eq!(profile.username, "ada");
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
    assert_eq!(profile.home_address, "12 St James's Square, London");
    assert_eq!(profile.phone_number, "+44 20 7946 0018");
}

#[test]
fn close_popup_hides_and_discards_profile() {
    let config = AppConfig::default();
    let (mut ctx, tx) = test_context(&config, "42");

    tx.send(AppCommand::ShowPopup(sample_profile())).unwrap();
    tx.send(AppCommand::ClosePopup).unwrap();
    ctx.process_commands();

    let snapshot = ctx.snapshot();
    assert!(!snapshot.popup_visible);
    assert!(snapshot.profile.is_none());
    // The rest of the state is untouched
    assert_eq!(snapshot.user_id, "42");
    assert!(snapshot.pending_navigation.is_none());
}

#[test]
fn reopening_popup_replaces_previous_profile() {
    let config = AppConfig::default();
    let (mut ctx, tx) = test_context(&config, "42");

    tx.send(AppCommand::ShowPopup(sample_profile())).unwrap();
    ctx.process_commands();

    let mut other = sample_profile();
    other.username = "grace".to_owned();
    tx.send(AppCommand::ShowPopup(other)).unwrap();
    ctx.process_commands();

    let snapshot = ctx.snapshot();
    assert!(snapshot.popup_visible);
    assert_eq!(snapshot.profile.expect("profile").username, "grace");
}

// --- Navigation ---

#[test]
fn navigate_records_pending_url_and_hides_popup() {
    let config = AppConfig::default();
    let (mut ctx, tx) = test_context(&config, "42");

    // A hover may have opened the popup before the click
    tx.send(AppCommand::ShowPopup(sample_profile())).unwrap();
    tx.send(AppCommand::Navigate(
        "http://127.0.0.1:8000/accounts/profile/42/".to_owned(),
    ))
    .unwrap();
    ctx.process_commands();

    let snapshot = ctx.snapshot();
    assert_eq!(
        snapshot.pending_navigation.as_deref(),
        Some("http://127.0.0.1:8000/accounts/profile/42/")
    );
    assert!(!snapshot.popup_visible);
}

#[test]
fn navigation_dispatched_clears_pending_url() {
    let config = AppConfig::default();
    let (mut ctx, tx) = test_context(&config, "42");

    tx.send(AppCommand::Navigate("http://example.com/".to_owned()))
        .unwrap();
    tx.send(AppCommand::NavigationDispatched).unwrap();
    ctx.process_commands();

    assert!(ctx.snapshot().pending_navigation.is_none());
}

// --- Fetch-to-popup flow against a mocked server ---

#[tokio::test]
async fn successful_fetch_shows_popup_with_server_values() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/user/7/json/");
        then.status(200).json_body(json!({
            "username": "grace",
            "email": "grace@example.com",
            "first_name": "Grace",
            "last_name": "Hopper",
            "home_address": "Arlington, Virginia",
            "phone_number": "+1 555 0100",
        }));
    });

    let config = AppConfig::default().with_base_url(server.base_url());
    let (mut ctx, tx) = test_context(&config, "7");
    let client = ProfileClient::new(&ServerConfig {
        base_url: server.base_url(),
        ..ServerConfig::default()
    })
    .expect("client should build");

    // Same flow the icon component runs on its trigger event
    let href = ctx.snapshot().profile_href;
    match client
        .fetch_profile_at(&profile_json_url_from_href(&href))
        .await
    {
        Ok(profile) => tx.send(AppCommand::ShowPopup(profile)).unwrap(),
        Err(err) => log::error!("profile fetch failed: {err}"),
    }
    ctx.process_commands();

    let snapshot = ctx.snapshot();
    assert!(snapshot.popup_visible);
    let profile = snapshot.profile.expect("profile should be set");
    assert_eq!(profile.username, "grace");
    assert_eq!(profile.last_name, "Hopper");
}

#[tokio::test]
async fn failed_fetch_leaves_popup_hidden() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/user/7/json/");
        then.status(500);
    });

    let config = AppConfig::default().with_base_url(server.base_url());
    let (mut ctx, tx) = test_context(&config, "7");
    let client = ProfileClient::new(&ServerConfig {
        base_url: server.base_url(),
        ..ServerConfig::default()
    })
    .expect("client should build");

    let href = ctx.snapshot().profile_href;
    match client
        .fetch_profile_at(&profile_json_url_from_href(&href))
        .await
    {
        Ok(profile) => tx.send(AppCommand::ShowPopup(profile)).unwrap(),
        Err(err) => log::error!("profile fetch failed: {err}"),
    }
    ctx.process_commands();

    let snapshot = ctx.snapshot();
    assert!(!snapshot.popup_visible);
    assert!(snapshot.profile.is_none());
}
