use crate::{
    error, info,
    spotify::PlaylistOutcome,
    success,
    types::{NewPlaylist, TimeRange},
    utils, warning,
};

use super::{authenticated_client, spinner};

pub async fn playlist(time_range: TimeRange, limit: u32) {
    let (spotify, session, token) = authenticated_client().await;
    let Some(user_id) = session.user_id().map(str::to_string) else {
        error!("No user id stored. Run `toptracks serve` to sign in again.");
    };

    let pb = spinner("Fetching top tracks...");
    let tracks = spotify.top_tracks(&token, time_range, limit).await;
    pb.finish_and_clear();

    let tracks = match tracks {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch top tracks: {}", e),
    };

    let config = spotify.config();
    let new_playlist = NewPlaylist {
        name: config.playlist_name.clone(),
        description: config.playlist_description.clone(),
    };

    info!(
        "Create playlist \"{}\" with {} tracks",
        new_playlist.name,
        tracks.len()
    );

    let outcome = spotify
        .create_with_tracks(
            &token,
            &user_id,
            &new_playlist,
            utils::track_uris(&tracks),
            config.orphan_policy,
        )
        .await;

    match outcome {
        Ok(PlaylistOutcome::Created {
            playlist,
            track_count,
            ..
        }) => {
            success!("Added {} tracks to playlist {}.", track_count, playlist.id);
            if let Some(url) = playlist.external_urls.spotify {
                info!("{}", url);
            }
        }
        Ok(PlaylistOutcome::NotCreated(e)) => error!("Playlist not created: {}", e),
        Ok(PlaylistOutcome::TracksNotAdded {
            playlist, removed, ..
        }) => {
            if removed {
                warning!("Removed the empty playlist {} again.", playlist.id);
            } else {
                warning!("Playlist {} was created but is empty.", playlist.id);
            }
            std::process::exit(1);
        }
        Err(e) => error!("Playlist not created: {}", e),
    }
}
