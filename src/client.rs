//! HTTP client for the profile JSON endpoint.
//!
//! The server exposes a user's profile as `GET /user/{id}/json/`. The profile
//! icon carries an href pointing at the full profile page
//! (`/accounts/profile/{id}/`), and the JSON URL is derived from it the same
//! way the web frontend does: rewrite the page prefix and append `json/`.

use serde::Deserialize;
use thiserror::Error;

use crate::config::ServerConfig;

/// A user's profile as returned by the JSON endpoint.
///
/// Fields are taken verbatim from the response. The record is only held for
/// the lifetime of one popup display and is never persisted or cached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub home_address: String,
    pub phone_number: String,
}

/// Errors from fetching a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Network failure or a body that does not deserialize into [`UserProfile`].
    #[error("profile request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Thin wrapper around [`reqwest::Client`] bound to a server base URL.
///
/// Cloning is cheap; the inner client is a handle to a shared connection pool.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    /// Create a client for the configured server.
    pub fn new(config: &ServerConfig) -> Result<Self, ProfileError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// URL of the full profile page for `user_id`.
    #[must_use]
    pub fn profile_page_url(&self, user_id: &str) -> String {
        format!("{}/accounts/profile/{user_id}/", self.base_url)
    }

    /// URL of the JSON endpoint for `user_id`.
    #[must_use]
    pub fn profile_json_url(&self, user_id: &str) -> String {
        format!("{}/user/{user_id}/json/", self.base_url)
    }

    /// Fetch the profile of `user_id` from the JSON endpoint.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, ProfileError> {
        self.fetch_profile_at(&self.profile_json_url(user_id)).await
    }

    /// Fetch a profile from an explicit URL (e.g. one derived from an href).
    pub async fn fetch_profile_at(&self, url: &str) -> Result<UserProfile, ProfileError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::UnexpectedStatus {
                status,
                url: url.to_owned(),
            });
        }
        Ok(response.json().await?)
    }
}

/// Derive the JSON endpoint URL from a profile page href.
///
/// `.../accounts/profile/{id}/` becomes `.../user/{id}/json/`. A missing
/// trailing slash on the href is tolerated.
#[must_use]
pub fn profile_json_url_from_href(href: &str) -> String {
    let mut url = href.replace("/accounts/profile/", "/user/");
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str("json/");
    url
}
