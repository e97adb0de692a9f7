use crate::{
    config::OrphanPolicy,
    debug,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, NewPlaylist,
    },
    warning,
};

use super::{SpotifyClient, SpotifyError, check_status, read_json};

/// Result of [`SpotifyClient::create_with_tracks`].
#[derive(Debug)]
pub enum PlaylistOutcome {
    /// The playlist exists and holds all tracks.
    Created {
        playlist: CreatePlaylistResponse,
        snapshot_id: Option<String>,
        track_count: usize,
    },
    /// Creating the playlist itself failed; nothing was written.
    NotCreated(SpotifyError),
    /// The playlist was created but adding tracks failed.
    ///
    /// `removed` tells whether the empty playlist was deleted again according
    /// to the [`OrphanPolicy`].
    TracksNotAdded {
        playlist: CreatePlaylistResponse,
        error: SpotifyError,
        removed: bool,
    },
}

impl PlaylistOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PlaylistOutcome::Created { .. })
    }
}

impl SpotifyClient {
    /// Creates a private playlist owned by `user_id`.
    pub async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatePlaylistResponse, SpotifyError> {
        let body = CreatePlaylistRequest {
            name: playlist.name.clone(),
            description: playlist.description.clone(),
            public: false,
        };

        let res = self
            .http
            .post(self.api(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        read_json(res, "playlist creation").await
    }

    /// Adds tracks by URI to the end of a playlist.
    ///
    /// Only the status decides success. The new snapshot id is returned when
    /// the body carries one.
    pub async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<Option<String>, SpotifyError> {
        let res = self
            .http
            .post(self.api(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(token)
            .json(&AddTrackToPlaylistRequest { uris })
            .send()
            .await?;

        let res = check_status(res, "adding tracks").await?;
        let body = res.text().await?;
        let snapshot_id = serde_json::from_str::<AddTrackToPlaylistResponse>(&body)
            .ok()
            .and_then(|r| r.snapshot_id);
        if snapshot_id.is_none() {
            debug!("Tracks added to {} without a snapshot id", playlist_id);
        }
        Ok(snapshot_id)
    }

    /// Removes a playlist from the owner's library.
    ///
    /// Spotify has no delete call for playlists; unfollowing one you own is how
    /// it disappears.
    pub async fn remove_playlist(&self, token: &str, playlist_id: &str) -> Result<(), SpotifyError> {
        let res = self
            .http
            .delete(self.api(&format!("/playlists/{}/followers", playlist_id)))
            .bearer_auth(token)
            .send()
            .await?;

        check_status(res, "playlist removal").await?;
        Ok(())
    }

    /// Creates a playlist and fills it with `uris`, in that order.
    ///
    /// Every write is checked; the first failure is logged and ends the
    /// sequence. When the tracks cannot be added, the empty playlist is left in
    /// place or removed depending on `orphan_policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::NothingToAdd`] without writing anything when
    /// `uris` is empty. Every other failure is reported through the returned
    /// [`PlaylistOutcome`].
    pub async fn create_with_tracks(
        &self,
        token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
        uris: Vec<String>,
        orphan_policy: OrphanPolicy,
    ) -> Result<PlaylistOutcome, SpotifyError> {
        if uris.is_empty() {
            return Err(SpotifyError::NothingToAdd);
        }

        let created = match self.create_playlist(token, user_id, playlist).await {
            Ok(created) => created,
            Err(e) => {
                warning!("Error creating playlist: {}", e);
                return Ok(PlaylistOutcome::NotCreated(e));
            }
        };
        debug!("Created playlist with id {}", created.id);

        let track_count = uris.len();
        match self.add_tracks(token, &created.id, uris).await {
            Ok(snapshot_id) => Ok(PlaylistOutcome::Created {
                playlist: created,
                snapshot_id,
                track_count,
            }),
            Err(error) => {
                warning!("Error adding tracks: {}", error);
                let removed = match orphan_policy {
                    OrphanPolicy::Keep => false,
                    OrphanPolicy::Remove => match self.remove_playlist(token, &created.id).await {
                        Ok(()) => true,
                        Err(e) => {
                            warning!("Error removing empty playlist {}: {}", created.id, e);
                            false
                        }
                    },
                };

                Ok(PlaylistOutcome::TracksNotAdded {
                    playlist: created,
                    error,
                    removed,
                })
            }
        }
    }
}
