use tabled::Table;

use crate::{
    error, info,
    types::{TimeRange, TrackTableRow},
    utils,
};

use super::{authenticated_client, spinner};

pub async fn top_tracks(time_range: TimeRange, limit: u32) {
    let (spotify, _, token) = authenticated_client().await;

    let pb = spinner("Fetching top tracks...");
    let result = spotify.top_tracks(&token, time_range, limit).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch top tracks: {}", e),
    };

    if tracks.is_empty() {
        info!("No top tracks for {} yet.", time_range.label().to_lowercase());
        return;
    }

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            position: i + 1,
            track: utils::describe_track(track),
            preview: if track.preview_url.is_some() {
                "yes".to_string()
            } else {
                "-".to_string()
            },
            uri: track.uri.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
