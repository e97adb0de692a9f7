#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use toptracks::{
    config::Config,
    management::SessionManager,
    server::{self, AppState, SharedState},
};

pub const TOKEN: &str = "good-token";
pub const USER_ID: &str = "user-1";
pub const PLAYLIST_ID: &str = "playlist-1";

/// How the fake Spotify answers.
pub struct Behaviour {
    pub token_body: Value,
    pub create_status: StatusCode,
    pub add_status: StatusCode,
    pub add_body: Value,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            token_body: json!({
                "access_token": TOKEN,
                "token_type": "Bearer",
                "scope": "user-top-read",
                "expires_in": 3600
            }),
            create_status: StatusCode::CREATED,
            add_status: StatusCode::CREATED,
            add_body: json!({ "snapshot_id": "snap-1" }),
        }
    }
}

#[derive(Default)]
pub struct Recorded {
    pub token_requests: Mutex<Vec<HashMap<String, String>>>,
    pub top_tracks_queries: Mutex<Vec<HashMap<String, String>>>,
    pub created: Mutex<Vec<Value>>,
    pub added: Mutex<Vec<Value>>,
    pub profile_hits: AtomicUsize,
    pub removed_hits: AtomicUsize,
}

impl Recorded {
    pub fn profile_hits(&self) -> usize {
        self.profile_hits.load(Ordering::SeqCst)
    }

    pub fn removed_hits(&self) -> usize {
        self.removed_hits.load(Ordering::SeqCst)
    }
}

struct Fake {
    behaviour: Behaviour,
    recorded: Arc<Recorded>,
}

pub struct FakeSpotify {
    pub base: String,
    pub recorded: Arc<Recorded>,
}

impl FakeSpotify {
    /// Config pointing every endpoint at the fake.
    pub fn config(&self) -> Config {
        let mut config = Config::with_client_id("test-client");
        config.auth_url = format!("{}/authorize", self.base);
        config.token_url = format!("{}/api/token", self.base);
        config.api_url = format!("{}/v1", self.base);
        config.redirect_uri = "http://127.0.0.1:5173/callback".to_string();
        config
    }
}

pub fn top_tracks_body() -> Value {
    json!({
        "items": [
            {
                "name": "A",
                "artists": [{ "name": "X" }],
                "album": { "name": "Album A", "images": [{ "url": "https://i.test/a.jpg" }] },
                "preview_url": "https://p.test/a.mp3",
                "uri": "spotify:track:a"
            },
            {
                "name": "B",
                "artists": [{ "name": "Y" }, { "name": "Z" }],
                "album": { "name": "Album B", "images": [{ "url": "https://i.test/b.jpg" }] },
                "preview_url": null,
                "uri": "spotify:track:b"
            }
        ]
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

async fn token(
    State(fake): State<Arc<Fake>>,
    Form(params): Form<HashMap<String, String>>,
) -> Json<Value> {
    fake.recorded.token_requests.lock().unwrap().push(params);
    Json(fake.behaviour.token_body.clone())
}

async fn me(State(fake): State<Arc<Fake>>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    fake.recorded.profile_hits.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid token" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": USER_ID,
            "display_name": "Test User",
            "email": "test@example.com",
            "images": [{ "url": "https://i.test/me.jpg", "width": 200, "height": 200 }],
            "external_urls": { "spotify": "https://open.spotify.com/user/user-1" },
            "href": "https://api.spotify.com/v1/users/user-1",
            "uri": "spotify:user:user-1"
        })),
    )
}

async fn top_tracks(
    State(fake): State<Arc<Fake>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    fake.recorded.top_tracks_queries.lock().unwrap().push(query);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid token" })));
    }
    (StatusCode::OK, Json(top_tracks_body()))
}

async fn create_playlist(
    State(fake): State<Arc<Fake>>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.recorded
        .created
        .lock()
        .unwrap()
        .push(json!({ "user_id": user_id, "body": body }));
    let status = fake.behaviour.create_status;
    if !status.is_success() {
        return (status, Json(json!({ "error": "nope" })));
    }
    (
        status,
        Json(json!({
            "id": PLAYLIST_ID,
            "name": body["name"],
            "external_urls": { "spotify": "https://open.spotify.com/playlist/playlist-1" }
        })),
    )
}

async fn add_tracks(
    State(fake): State<Arc<Fake>>,
    Path(playlist_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.recorded
        .added
        .lock()
        .unwrap()
        .push(json!({ "playlist_id": playlist_id, "body": body }));
    let status = fake.behaviour.add_status;
    if !status.is_success() {
        return (status, Json(json!({ "error": "nope" })));
    }
    (status, Json(fake.behaviour.add_body.clone()))
}

async fn remove_playlist(State(fake): State<Arc<Fake>>, Path(_id): Path<String>) -> StatusCode {
    fake.recorded.removed_hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::OK
}

/// Starts a fake Spotify accounts service and Web API on an ephemeral port.
pub async fn start_fake_spotify(behaviour: Behaviour) -> FakeSpotify {
    let recorded = Arc::new(Recorded::default());
    let fake = Arc::new(Fake {
        behaviour,
        recorded: Arc::clone(&recorded),
    });

    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me", get(me))
        .route("/v1/me/top/tracks", get(top_tracks))
        .route("/v1/users/{user_id}/playlists", post(create_playlist))
        .route("/v1/playlists/{playlist_id}/tracks", post(add_tracks))
        .route("/v1/playlists/{playlist_id}/followers", delete(remove_playlist))
        .with_state(fake);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeSpotify {
        base: format!("http://{}", addr),
        recorded,
    }
}

/// Unique session file location for one test.
pub fn session_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "toptracks-test-{}-{}-{}/session.json",
        name,
        std::process::id(),
        nanos
    ))
}

pub struct App {
    pub base: String,
    pub state: SharedState,
    pub session_path: PathBuf,
}

/// Starts the web application against `fake` with the given session.
pub async fn start_app(fake: &FakeSpotify, session: SessionManager) -> App {
    let session_path = session.path().clone();
    let state = AppState::new(fake.config(), session);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let serving = Arc::clone(&state);
    tokio::spawn(async move {
        server::serve(listener, serving).await.unwrap();
    });

    App {
        base: format!("http://{}", addr),
        state,
        session_path,
    }
}

/// HTTP client that does not follow redirects.
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
