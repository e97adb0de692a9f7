use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::server::SharedState;

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    let authenticated = state.session.lock().await.is_authenticated();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": authenticated,
    }))
}
