use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    debug, info,
    server::SharedState,
    spotify::auth::authorize_url,
    success,
    ui::pages,
    utils, warning,
};

#[derive(Debug, Deserialize)]
pub struct LandingParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Page load: start the login when there is no code, finish it when there is one.
pub async fn landing(
    State(state): State<SharedState>,
    Query(params): Query<LandingParams>,
) -> Response {
    if let Some(error) = params.error {
        warning!("Authorization was not granted: {}", error);
        return failure(
            StatusCode::UNAUTHORIZED,
            "Login failed",
            &format!("Spotify did not grant access ({}).", error),
        );
    }

    match params.code.filter(|c| !c.is_empty()) {
        None => redirect_to_auth_code_flow(&state).await,
        Some(code) => complete_login(&state, &code).await,
    }
}

/// Persists a fresh verifier and sends the browser to Spotify's consent page.
async fn redirect_to_auth_code_flow(state: &SharedState) -> Response {
    info!("No code found, redirecting to the authorization page.");

    let verifier = utils::generate_code_verifier();
    let challenge = utils::generate_code_challenge(&verifier);

    let auth_url = match authorize_url(state.config(), &challenge) {
        Ok(url) => url,
        Err(e) => {
            warning!("{}", e);
            return failure(StatusCode::INTERNAL_SERVER_ERROR, "Login failed", &e);
        }
    };

    // the verifier has to outlive the round trip through Spotify
    {
        let mut session = state.session.lock().await;
        session.set_verifier(verifier.clone());
        if let Err(e) = session.persist().await {
            warning!("Failed to save code verifier: {}", e);
            return failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Login failed",
                &e.to_string(),
            );
        }
    }

    debug!(
        "Verifier: {}, challenge: {}",
        utils::mask_secret(&verifier),
        challenge
    );
    debug!("Auth URL: {}", auth_url);

    Redirect::to(auth_url.as_str()).into_response()
}

/// Token exchange, then profile fetch, then persisting token and user id.
async fn complete_login(state: &SharedState, code: &str) -> Response {
    info!("Code found, fetching access token.");

    let verifier = {
        let mut session = state.session.lock().await;
        let verifier = session.take_verifier();
        if verifier.is_some() {
            if let Err(e) = session.persist().await {
                warning!("Failed to update session: {}", e);
            }
        }
        verifier
    };

    let Some(verifier) = verifier else {
        warning!("Missing PKCE code verifier.");
        return failure(
            StatusCode::BAD_REQUEST,
            "Login failed",
            "Missing PKCE code verifier. Start the login again.",
        );
    };

    let spotify = &state.spotify;
    let access_token = match spotify.exchange_code(code, &verifier).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return failure(StatusCode::BAD_GATEWAY, "Login failed", &e.to_string());
        }
    };

    let profile = match spotify.fetch_profile(&access_token).await {
        Ok(profile) => profile,
        Err(e) => {
            warning!("Error fetching profile: {}", e);
            return failure(
                StatusCode::BAD_GATEWAY,
                "Could not load your profile",
                &e.to_string(),
            );
        }
    };

    {
        let mut session = state.session.lock().await;
        session.sign_in(access_token, profile.id.clone());
        if let Err(e) = session.persist().await {
            warning!("Failed to save session: {}", e);
        }
    }

    success!(
        "Logged in as {}",
        profile.display_name.as_deref().unwrap_or(&profile.id)
    );
    Html(pages::profile_page(&profile)).into_response()
}

pub(crate) fn failure(status: StatusCode, title: &str, message: &str) -> Response {
    (status, Html(pages::error_page(title, message))).into_response()
}
