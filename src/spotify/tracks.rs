use crate::types::{TimeRange, TopTracksResponse, Track};

use super::{SpotifyClient, SpotifyError, read_json};

impl SpotifyClient {
    /// Retrieves the user's most played tracks, best first.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token of the user
    /// * `time_range` - Listening window the ranking is computed over
    /// * `limit` - Number of tracks to return (1-50)
    ///
    /// Only the first page is read; `limit` never exceeds one page.
    pub async fn top_tracks(
        &self,
        token: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Track>, SpotifyError> {
        let res = self
            .http
            .get(self.api("/me/top/tracks"))
            .query(&[
                ("time_range", time_range.as_str().to_string()),
                ("limit", limit.to_string()),
            ])
            .bearer_auth(token)
            .send()
            .await?;

        let body: TopTracksResponse = read_json(res, "top tracks").await?;
        Ok(body.items)
    }
}
