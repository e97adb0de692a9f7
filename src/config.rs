//! Configuration management for the toptracks client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. All values are collected once into a [`Config`]
//! which is then handed to the components that need it.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, str::FromStr};

use crate::Res;

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:5173/callback";
pub const DEFAULT_SCOPE: &str =
    "user-read-private user-read-email user-top-read playlist-modify-public playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5173";
pub const DEFAULT_PLAYLIST_NAME: &str = "Top 25 Tracks from Last Month";
pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Your favorite songs from the past month!";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives in the platform-specific local data directory under
/// `toptracks/.env`:
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// A missing file is fine, since every value can also come from the process
/// environment. A file that exists but cannot be parsed is reported.
///
/// # Example
///
/// ```
/// use toptracks::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

/// Returns the application's directory inside the local data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks");
    path
}

/// Location of the persisted session, `TOPTRACKS_SESSION_PATH` or
/// `session.json` in the data directory.
pub fn session_path() -> PathBuf {
    env::var("TOPTRACKS_SESSION_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("session.json"))
}

/// What to do with a freshly created playlist when adding tracks to it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Leave the (empty) playlist in the user's library.
    #[default]
    Keep,
    /// Delete the playlist again.
    Remove,
}

impl FromStr for OrphanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(OrphanPolicy::Keep),
            "remove" => Ok(OrphanPolicy::Remove),
            other => Err(format!(
                "Invalid orphan policy '{}'. Valid options: keep, remove",
                other
            )),
        }
    }
}

impl fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrphanPolicy::Keep => write!(f, "keep"),
            OrphanPolicy::Remove => write!(f, "remove"),
        }
    }
}

/// Runtime configuration of the client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client id of the registered Spotify application.
    pub client_id: String,
    /// Callback URL Spotify redirects to. Must match the app registration.
    pub redirect_uri: String,
    /// Space separated scopes requested during authorization.
    pub scope: String,
    /// Spotify's `/authorize` endpoint.
    pub auth_url: String,
    /// Spotify's `/api/token` endpoint.
    pub token_url: String,
    /// Web API base, including the `/v1` prefix.
    pub api_url: String,
    /// Address the local web application binds to.
    pub server_addr: String,
    pub playlist_name: String,
    pub playlist_description: String,
    pub orphan_policy: OrphanPolicy,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `SPOTIFY_API_AUTH_CLIENT_ID` is missing or empty, or when
    /// `TOPTRACKS_ORPHAN_POLICY` holds an unknown value.
    pub fn from_env() -> Result<Self, String> {
        let client_id = env::var("SPOTIFY_API_AUTH_CLIENT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| "SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string())?;

        let orphan_policy = match env::var("TOPTRACKS_ORPHAN_POLICY") {
            Ok(value) => value.parse()?,
            Err(_) => OrphanPolicy::default(),
        };

        Ok(Self {
            client_id,
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scope: var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL),
            server_addr: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            playlist_name: var_or("TOPTRACKS_PLAYLIST_NAME", DEFAULT_PLAYLIST_NAME),
            playlist_description: var_or(
                "TOPTRACKS_PLAYLIST_DESCRIPTION",
                DEFAULT_PLAYLIST_DESCRIPTION,
            ),
            orphan_policy,
        })
    }

    /// Configuration with every default in place and the given client id.
    pub fn with_client_id(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            playlist_name: DEFAULT_PLAYLIST_NAME.to_string(),
            playlist_description: DEFAULT_PLAYLIST_DESCRIPTION.to_string(),
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
