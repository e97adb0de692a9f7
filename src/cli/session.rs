use chrono::Local;

use crate::{error, info, success, warning};

use super::load_session;

pub async fn status() {
    let session = load_session().await;
    info!("Session file: {}", session.path().display());

    match session.credentials() {
        Some((_, user_id)) => {
            let since = session
                .authenticated_at()
                .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            success!("Signed in as {} since {}", user_id, since);
        }
        None => warning!("Not signed in."),
    }
}

pub async fn logout() {
    let mut session = load_session().await;
    if let Err(e) = session.clear().await {
        error!("Failed to remove session: {}", e);
    }
    success!("Session removed.");
}
