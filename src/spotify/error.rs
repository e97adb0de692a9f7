use std::fmt;

use reqwest::StatusCode;

/// Failures of calls against the Spotify accounts service and Web API.
#[derive(Debug)]
pub enum SpotifyError {
    /// Transport failure or unreadable response body.
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Status {
        status: StatusCode,
        context: &'static str,
        body: String,
    },
    /// The accounts service rejected the token request.
    Auth {
        error: String,
        description: Option<String>,
    },
    /// A response was missing a field the next step depends on.
    MissingField(&'static str),
    /// A response body did not have the expected shape.
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },
    /// A playlist was requested for an empty list of tracks.
    NothingToAdd,
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Http(err)
    }
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Http(e) => write!(f, "request failed: {}", e),
            SpotifyError::Status {
                status,
                context,
                body,
            } => {
                write!(f, "{} failed with {}", context, status)?;
                if !body.is_empty() {
                    write!(f, ": {}", body)?;
                }
                Ok(())
            }
            SpotifyError::Auth { error, description } => match description {
                Some(d) => write!(f, "authorization rejected: {} ({})", error, d),
                None => write!(f, "authorization rejected: {}", error),
            },
            SpotifyError::MissingField(field) => {
                write!(f, "response did not contain '{}'", field)
            }
            SpotifyError::Decode { context, source } => {
                write!(f, "unexpected {} response: {}", context, source)
            }
            SpotifyError::NothingToAdd => write!(f, "there are no tracks to add"),
        }
    }
}

impl std::error::Error for SpotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpotifyError::Http(e) => Some(e),
            SpotifyError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
