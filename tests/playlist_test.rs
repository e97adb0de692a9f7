mod common;

use axum::http::StatusCode;
use common::{Behaviour, PLAYLIST_ID, TOKEN, USER_ID, start_fake_spotify};
use serde_json::json;
use toptracks::{
    config::OrphanPolicy,
    spotify::{PlaylistOutcome, SpotifyClient, SpotifyError},
    types::{NewPlaylist, TimeRange},
};

fn new_playlist() -> NewPlaylist {
    NewPlaylist {
        name: "Top 25 Tracks from Last Month".to_string(),
        description: "Your favorite songs from the past month!".to_string(),
    }
}

fn uris() -> Vec<String> {
    vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()]
}

#[tokio::test]
async fn test_create_with_tracks() {
    let fake = start_fake_spotify(Behaviour::default()).await;
    let spotify = SpotifyClient::new(fake.config());

    let outcome = spotify
        .create_with_tracks(TOKEN, USER_ID, &new_playlist(), uris(), OrphanPolicy::Keep)
        .await
        .unwrap();

    match outcome {
        PlaylistOutcome::Created {
            playlist,
            snapshot_id,
            track_count,
        } => {
            assert_eq!(playlist.id, PLAYLIST_ID);
            assert_eq!(snapshot_id.as_deref(), Some("snap-1"));
            assert_eq!(track_count, 2);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_creation_skips_adding_tracks() {
    let fake = start_fake_spotify(Behaviour {
        create_status: StatusCode::FORBIDDEN,
        ..Behaviour::default()
    })
    .await;
    let spotify = SpotifyClient::new(fake.config());

    let outcome = spotify
        .create_with_tracks(TOKEN, USER_ID, &new_playlist(), uris(), OrphanPolicy::Remove)
        .await
        .unwrap();

    match outcome {
        PlaylistOutcome::NotCreated(SpotifyError::Status { status, .. }) => {
            assert_eq!(status, StatusCode::FORBIDDEN);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(fake.recorded.added.lock().unwrap().is_empty());
    assert_eq!(fake.recorded.removed_hits(), 0);
}

#[tokio::test]
async fn test_orphan_is_kept_by_default() {
    let fake = start_fake_spotify(Behaviour {
        add_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..Behaviour::default()
    })
    .await;
    let spotify = SpotifyClient::new(fake.config());

    let outcome = spotify
        .create_with_tracks(TOKEN, USER_ID, &new_playlist(), uris(), OrphanPolicy::default())
        .await
        .unwrap();

    assert!(!outcome.is_success());
    assert!(matches!(
        outcome,
        PlaylistOutcome::TracksNotAdded { removed: false, .. }
    ));
    assert_eq!(fake.recorded.removed_hits(), 0);
}

#[tokio::test]
async fn test_orphan_is_removed_when_configured() {
    let fake = start_fake_spotify(Behaviour {
        add_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..Behaviour::default()
    })
    .await;
    let spotify = SpotifyClient::new(fake.config());

    let outcome = spotify
        .create_with_tracks(TOKEN, USER_ID, &new_playlist(), uris(), OrphanPolicy::Remove)
        .await
        .unwrap();

    match outcome {
        PlaylistOutcome::TracksNotAdded {
            playlist,
            error,
            removed,
        } => {
            assert_eq!(playlist.id, PLAYLIST_ID);
            assert!(removed);
            assert!(matches!(
                error,
                SpotifyError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
            ));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(fake.recorded.removed_hits(), 1);
}

#[tokio::test]
async fn test_added_tracks_without_snapshot_id_keep_the_playlist() {
    let fake = start_fake_spotify(Behaviour {
        add_body: json!({}),
        ..Behaviour::default()
    })
    .await;
    let spotify = SpotifyClient::new(fake.config());

    let outcome = spotify
        .create_with_tracks(TOKEN, USER_ID, &new_playlist(), uris(), OrphanPolicy::Remove)
        .await
        .unwrap();

    match outcome {
        PlaylistOutcome::Created {
            playlist,
            snapshot_id,
            track_count,
        } => {
            assert_eq!(playlist.id, PLAYLIST_ID);
            assert_eq!(snapshot_id, None);
            assert_eq!(track_count, 2);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(fake.recorded.added.lock().unwrap().len(), 1);
    assert_eq!(fake.recorded.removed_hits(), 0);
}

#[tokio::test]
async fn test_no_tracks_means_no_playlist() {
    let fake = start_fake_spotify(Behaviour::default()).await;
    let spotify = SpotifyClient::new(fake.config());

    let result = spotify
        .create_with_tracks(TOKEN, USER_ID, &new_playlist(), Vec::new(), OrphanPolicy::Keep)
        .await;

    assert!(matches!(result, Err(SpotifyError::NothingToAdd)));
    assert!(fake.recorded.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_reads_surface_auth_failures() {
    let fake = start_fake_spotify(Behaviour::default()).await;
    let spotify = SpotifyClient::new(fake.config());

    let result = spotify.top_tracks("bad-token", TimeRange::LongTerm, 5).await;
    assert!(matches!(
        result,
        Err(SpotifyError::Status { status, .. }) if status == StatusCode::UNAUTHORIZED
    ));

    let profile = spotify.fetch_profile(TOKEN).await.unwrap();
    assert_eq!(profile.id, USER_ID);
    assert_eq!(profile.display_name.as_deref(), Some("Test User"));
}
