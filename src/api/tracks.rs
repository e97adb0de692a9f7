use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    server::{AppState, SharedState},
    types::TimeRange,
    ui::pages,
    utils, warning,
};

use super::callback::failure;

/// Inputs of the top tracks and playlist forms. Missing values fall back to
/// the last ones used.
#[derive(Debug, Default, Deserialize)]
pub struct TracksParams {
    pub time_range: Option<String>,
    pub limit: Option<String>,
}

impl TracksParams {
    pub fn resolve(&self, time_range: TimeRange, limit: u32) -> Result<(TimeRange, u32), String> {
        let time_range = match self.time_range.as_deref() {
            Some(value) => utils::parse_time_range(value)?,
            None => time_range,
        };
        let limit = match self.limit.as_deref() {
            Some(value) => utils::parse_track_limit(value)?,
            None => limit,
        };
        Ok((time_range, limit))
    }
}

pub async fn top_tracks(
    State(state): State<SharedState>,
    Query(params): Query<TracksParams>,
) -> Response {
    let (time_range, limit) = {
        let list = state.tracks.lock().await;
        match params.resolve(list.time_range, list.limit) {
            Ok(values) => values,
            Err(e) => return failure(StatusCode::BAD_REQUEST, "Invalid input", &e),
        }
    };

    let Some(token) = state.session.lock().await.access_token().map(str::to_string) else {
        warning!("No access token found.");
        return failure(
            StatusCode::UNAUTHORIZED,
            "Not logged in",
            "No access token found.",
        );
    };

    let tracks = match state.spotify.top_tracks(&token, time_range, limit).await {
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

    {
        let mut player = state.player.lock().await;
        let effects = player.deck.reset();
        player.view.apply(effects);
        player.view.clear();
    }

    let mut list = state.tracks.lock().await;
    list.tracks = tracks;
    list.time_range = time_range;
    list.limit = limit;

    render_track_list(&state, &list).await
}

/// Click on the preview button of the track at `index`.
pub async fn toggle_preview(State(state): State<SharedState>, Path(index): Path<usize>) -> Response {
    let list = state.tracks.lock().await;
    let Some(url) = list
        .tracks
        .get(index)
        .and_then(|track| track.preview_url.clone())
    else {
        return failure(
            StatusCode::NOT_FOUND,
            "No preview",
            "This track has no preview available.",
        );
    };

    {
        let mut player = state.player.lock().await;
        let effects = player.deck.toggle(index, &url);
        player.view.apply(effects);
    }

    render_track_list(&state, &list).await
}

/// The audio element finished playing the current preview.
pub async fn preview_ended(State(state): State<SharedState>) -> Response {
    let list = state.tracks.lock().await;
    {
        let mut player = state.player.lock().await;
        let effects = player.deck.ended();
        player.view.apply(effects);
    }

    render_track_list(&state, &list).await
}

async fn render_track_list(state: &AppState, list: &crate::server::TrackList) -> Response {
    let player = state.player.lock().await;
    Html(pages::tracks_page(
        &list.tracks,
        list.time_range,
        list.limit,
        &player.view,
    ))
    .into_response()
}
