//! # Spotify Integration Module
//!
//! This module talks to the Spotify accounts service and the Spotify Web API.
//! It covers exactly the calls the application needs:
//!
//! ```text
//! auth      POST /api/token                      code + verifier -> access token
//! profile   GET  /me                             profile of the signed in user
//! tracks    GET  /me/top/tracks                  top tracks for a time range
//! playlist  POST /users/{user_id}/playlists      create a private playlist
//!           POST /playlists/{playlist_id}/tracks add tracks to it
//!           DELETE /playlists/{playlist_id}/followers  remove it again
//! ```
//!
//! All calls go through a [`SpotifyClient`], which carries the HTTP client and
//! the configured endpoints. Every call returns a [`SpotifyError`] on failure
//! instead of logging and carrying on, so callers decide whether a sequence
//! continues. Whether a token is present at all is checked by the caller
//! before any authenticated call.

pub mod auth;
mod error;
pub mod playlist;
pub mod profile;
pub mod tracks;

pub use error::SpotifyError;
pub use playlist::PlaylistOutcome;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::Config;

/// HTTP client bound to a set of Spotify endpoints.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }
}

/// Turns non-success statuses into [`SpotifyError::Status`].
async fn check_status(response: Response, context: &'static str) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SpotifyError::Status {
        status,
        context,
        body,
    })
}

/// Checks the status and decodes the JSON body into `T`.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, SpotifyError> {
    let response = check_status(response, context).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| SpotifyError::Decode { context, source })
}
