//! Test helpers for application state tests.
//!
//! Provides an `AppContext` wired to a command channel, plus a canned
//! profile record.

use std::sync::mpsc;

use crate::client::UserProfile;
use crate::config::AppConfig;
use crate::state::{AppCommand, AppContext};

/// Create an `AppContext` for `user_id` together with the command sender.
pub fn test_context(config: &AppConfig, user_id: &str) -> (AppContext, mpsc::Sender<AppCommand>) {
    let (tx, rx) = mpsc::channel();
    let ctx = AppContext::new(config, user_id.to_owned(), rx);
    (ctx, tx)
}

/// A profile record with all six fields populated.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        home_address: "12 St James's Square, London".to_owned(),
        phone_number: "+44 20 7946 0018".to_owned(),
    }
}
