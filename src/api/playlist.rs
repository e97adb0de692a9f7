use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    server::SharedState,
    spotify::PlaylistOutcome,
    success,
    types::NewPlaylist,
    ui::pages,
    utils, warning,
};

use super::{callback::failure, tracks::TracksParams};

/// Creates a playlist from the current top tracks.
///
/// The tracks are fetched again with the submitted inputs, so the playlist
/// matches what the form describes even if the page is stale.
pub async fn create_playlist(
    State(state): State<SharedState>,
    Form(params): Form<TracksParams>,
) -> Response {
    let Ok(_guard) = state.playlist_guard.try_lock() else {
        warning!("A playlist is already being created.");
        return failure(
            StatusCode::CONFLICT,
            "Busy",
            "A playlist is already being created. Wait for it to finish.",
        );
    };

    let (time_range, limit) = {
        let list = state.tracks.lock().await;
        match params.resolve(list.time_range, list.limit) {
            Ok(values) => values,
            Err(e) => return failure(StatusCode::BAD_REQUEST, "Invalid input", &e),
        }
    };

    let credentials = {
        let session = state.session.lock().await;
        session
            .credentials()
            .map(|(token, user_id)| (token.to_string(), user_id.to_string()))
    };
    let Some((token, user_id)) = credentials else {
        warning!("Access token or user id not available.");
        return failure(
            StatusCode::UNAUTHORIZED,
            "Not logged in",
            "Access token or user id not available.",
        );
    };

    let spotify = &state.spotify;
    let tracks = match spotify.top_tracks(&token, time_range, limit).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Error fetching top tracks: {}", e);
            return failure(
                StatusCode::BAD_GATEWAY,
                "Could not load top tracks",
                &e.to_string(),
            );
        }
    };

    let config = state.config();
    let playlist = NewPlaylist {
        name: config.playlist_name.clone(),
        description: config.playlist_description.clone(),
    };

    let outcome = match spotify
        .create_with_tracks(
            &token,
            &user_id,
            &playlist,
            utils::track_uris(&tracks),
            config.orphan_policy,
        )
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            warning!("Playlist not created: {}", e);
            return failure(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Playlist not created",
                &e.to_string(),
            );
        }
    };

    let status = match &outcome {
        PlaylistOutcome::Created { playlist, .. } => {
            success!("Added the tracks to playlist {}.", playlist.id);
            StatusCode::CREATED
        }
        _ => StatusCode::BAD_GATEWAY,
    };

    (status, Html(pages::playlist_page(&playlist.name, &outcome))).into_response()
}
