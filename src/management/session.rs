use std::{fmt, io::Error, path::PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum SessionError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for SessionError {
    fn from(err: Error) -> Self {
        SessionError::IoError(err)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::SerdeError(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::IoError(e) => write!(f, "session file error: {}", e),
            SessionError::SerdeError(e) => write!(f, "malformed session file: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

/// Values that survive a restart of the application.
///
/// The keys match what the browser client kept in local storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier: Option<String>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "authenticatedAt", skip_serializing_if = "Option::is_none")]
    pub authenticated_at: Option<DateTime<Utc>>,
}

pub struct SessionManager {
    path: PathBuf,
    session: Session,
}

impl SessionManager {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            session: Session::default(),
        }
    }

    /// Reads the session stored at `path`. A missing file yields an empty session.
    pub async fn load(path: PathBuf) -> Result<Self, SessionError> {
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::new(path));
            }
            Err(e) => return Err(SessionError::IoError(e)),
        };

        let session: Session = serde_json::from_str(&content)?;
        Ok(Self { path, session })
    }

    pub async fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.session)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Remembers the verifier of a new authorization attempt, replacing any older one.
    pub fn set_verifier(&mut self, verifier: String) -> &mut Self {
        self.session.verifier = Some(verifier);
        self
    }

    /// Hands out the verifier once. A code can only be exchanged with it a single time.
    pub fn take_verifier(&mut self) -> Option<String> {
        self.session.verifier.take()
    }

    pub fn sign_in(&mut self, access_token: String, user_id: String) -> &mut Self {
        self.session.access_token = Some(access_token);
        self.session.user_id = Some(user_id);
        self.session.authenticated_at = Some(Utc::now());
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.user_id.as_deref()
    }

    /// Token and user id together, or nothing. Writes need both.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.access_token()?, self.user_id()?))
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.session.authenticated_at
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Forgets everything and removes the session file.
    pub async fn clear(&mut self) -> Result<(), SessionError> {
        self.session = Session::default();
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::IoError(e)),
        }
    }
}
