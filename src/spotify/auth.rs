use reqwest::Url;

use crate::{config::Config, debug, types::TokenResponse, utils};

use super::{SpotifyClient, SpotifyError};

/// Builds the URL of Spotify's authorization page for a PKCE login.
///
/// The user is sent here with the challenge derived from a freshly generated
/// verifier. After consent, Spotify redirects back to the configured redirect
/// URI with a `code` query parameter (or `error` if the user declined).
///
/// # Errors
///
/// Fails when the configured authorization URL is not a valid URL.
///
/// # Example
///
/// ```
/// let verifier = utils::generate_code_verifier();
/// let url = authorize_url(&config, &utils::generate_code_challenge(&verifier))?;
/// ```
pub fn authorize_url(config: &Config, code_challenge: &str) -> Result<Url, String> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
        ],
    )
    .map_err(|e| format!("Invalid authorization URL '{}': {}", config.auth_url, e))
}

impl SpotifyClient {
    /// Exchanges an authorization code for an access token using PKCE.
    ///
    /// The verifier proves that whoever started the login is the one finishing
    /// it; it must be the one whose challenge went into [`authorize_url`].
    ///
    /// # Returns
    ///
    /// The access token. Nothing else from the token response is kept: the
    /// token is treated as valid until a request with it fails.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Http`] on network failures
    /// - [`SpotifyError::Auth`] when the accounts service rejects the code
    /// - [`SpotifyError::MissingField`] when the response has no `access_token`,
    ///   so no later call is ever made with an absent token
    pub async fn exchange_code(&self, code: &str, verifier: &str) -> Result<String, SpotifyError> {
        let config = &self.config;
        let res = self
            .http
            .post(&config.token_url)
            .form(&[
                ("client_id", config.client_id.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("code_verifier", verifier),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        let token: TokenResponse = match serde_json::from_str(&body) {
            Ok(token) => token,
            Err(source) if status.is_success() => {
                return Err(SpotifyError::Decode {
                    context: "token",
                    source,
                });
            }
            Err(_) => {
                return Err(SpotifyError::Status {
                    status,
                    context: "token exchange",
                    body,
                });
            }
        };

        if let Some(error) = token.error {
            return Err(SpotifyError::Auth {
                error,
                description: token.error_description,
            });
        }

        if !status.is_success() {
            return Err(SpotifyError::Status {
                status,
                context: "token exchange",
                body,
            });
        }

        let access_token = token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(SpotifyError::MissingField("access_token"))?;

        debug!(
            "Token response: status {}, token {}, scope {}",
            status,
            utils::mask_secret(&access_token),
            token.scope.as_deref().unwrap_or("-")
        );

        Ok(access_token)
    }
}
