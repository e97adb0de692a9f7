//! # CLI Module
//!
//! Command implementations behind the `toptracks` binary. Each command loads
//! the configuration and the persisted session, calls into [`crate::spotify`]
//! and prints the result.
//!
//! ## Commands
//!
//! - [`serve`] - runs the local web application and opens it in the browser;
//!   visiting it starts the PKCE login
//! - [`profile`] - prints the signed in user's profile
//! - [`top_tracks`] - prints the user's top tracks as a table
//! - [`playlist`] - saves the top tracks as a private playlist
//! - [`status`] / [`logout`] - inspect or forget the persisted session
//!
//! Commands that need an access token stop with a hint to run
//! `toptracks serve` when no session exists. Fatal problems end the process
//! through the [`crate::error`] macro.
//!
//! ## Usage
//!
//! ```bash
//! toptracks serve                               # sign in through the browser
//! toptracks top-tracks --time-range medium --limit 10
//! toptracks playlist --limit 25
//! ```

mod playlist;
mod profile;
mod serve;
mod session;
mod top_tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use playlist::playlist;
pub use profile::profile;
pub use serve::serve;
pub use session::logout;
pub use session::status;
pub use top_tracks::top_tracks;

use crate::{
    config::{self, Config},
    error,
    management::SessionManager,
    spotify::SpotifyClient,
};

const NOT_AUTHENTICATED: &str = "Not authenticated. Run `toptracks serve` first.";

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    }
}

async fn load_session() -> SessionManager {
    match SessionManager::load(config::session_path()).await {
        Ok(session) => session,
        Err(e) => error!("Failed to load session: {}", e),
    }
}

/// Client plus the stored access token, or exit when signed out.
async fn authenticated_client() -> (SpotifyClient, SessionManager, String) {
    let config = load_config();
    let session = load_session().await;

    let Some(token) = session.access_token().map(str::to_string) else {
        error!("{}", NOT_AUTHENTICATED);
    };

    (SpotifyClient::new(config), session, token)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
