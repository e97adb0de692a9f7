use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    api,
    config::Config,
    management::SessionManager,
    spotify::SpotifyClient,
    types::{TimeRange, Track},
    ui::{PlayerView, PreviewDeck},
    utils,
};

/// Last list of top tracks shown in the browser, with the inputs that produced it.
#[derive(Debug)]
pub struct TrackList {
    pub tracks: Vec<Track>,
    pub time_range: TimeRange,
    pub limit: u32,
}

impl Default for TrackList {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            time_range: TimeRange::default(),
            limit: utils::DEFAULT_TRACK_LIMIT,
        }
    }
}

/// Preview state machine together with what the page currently shows.
#[derive(Debug, Default)]
pub struct Player {
    pub deck: PreviewDeck,
    pub view: PlayerView,
}

/// Everything the request handlers share.
///
/// Created once at startup. The session part is persisted on every change;
/// the rest lives as long as the server.
pub struct AppState {
    pub spotify: SpotifyClient,
    pub session: Mutex<SessionManager>,
    pub tracks: Mutex<TrackList>,
    pub player: Mutex<Player>,
    /// Held while a playlist is being created.
    pub playlist_guard: Mutex<()>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config, session: SessionManager) -> SharedState {
        Arc::new(Self {
            spotify: SpotifyClient::new(config),
            session: Mutex::new(session),
            tracks: Mutex::new(TrackList::default()),
            player: Mutex::new(Player::default()),
            playlist_guard: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &Config {
        self.spotify.config()
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(api::landing))
        .route("/callback", get(api::landing))
        .route("/top-tracks", get(api::top_tracks))
        .route("/playlist", post(api::create_playlist))
        .route("/preview/ended", get(api::preview_ended))
        .route("/preview/{index}", get(api::toggle_preview))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Binds the configured address. Kept apart from [`serve`] so callers know
/// the server is reachable before opening a browser.
pub async fn bind(state: &AppState) -> Result<TcpListener, String> {
    let addr = SocketAddr::from_str(&state.config().server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))
}

pub async fn serve(listener: TcpListener, state: SharedState) -> Result<(), String> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| e.to_string())
}
