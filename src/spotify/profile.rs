use crate::types::Profile;

use super::{SpotifyClient, SpotifyError, read_json};

impl SpotifyClient {
    /// Fetches the profile of the user the token belongs to.
    pub async fn fetch_profile(&self, token: &str) -> Result<Profile, SpotifyError> {
        let res = self
            .http
            .get(self.api("/me"))
            .bearer_auth(token)
            .send()
            .await?;

        read_json(res, "profile").await
    }
}
