//! # API Module
//!
//! HTTP handlers of the local web application. The browser is the only
//! client: every handler answers with an HTML page (or a redirect), except
//! the health check.
//!
//! ## Endpoints
//!
//! - [`landing`] - `GET /` and `GET /callback`. Without a `code` it stores a
//!   new PKCE verifier and redirects to Spotify; with one it exchanges the code,
//!   loads the profile and remembers the token and user id.
//! - [`top_tracks`] - `GET /top-tracks` renders the user's top tracks.
//! - [`create_playlist`] - `POST /playlist` saves the top tracks as a playlist.
//! - [`toggle_preview`] / [`preview_ended`] - drive the preview player.
//! - [`health`] - status and version for monitoring.
//!
//! Failures are logged and rendered as an error page linking back to `/`,
//! which restarts the flow.

mod callback;
mod health;
mod playlist;
mod tracks;

pub use callback::{LandingParams, landing};
pub use health::health;
pub use playlist::create_playlist;
pub use tracks::{TracksParams, preview_ended, toggle_preview, top_tracks};
