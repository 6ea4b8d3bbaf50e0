//! Session management for e-Boekhouden API authentication.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use url::Url;

use super::Credentials;
use crate::client::read_response;
use crate::{Error, Result};

/// Session token returned by the service.
///
/// The token is never shown in `Debug` output.
#[derive(Clone)]
pub struct SessionInfo {
    token: SecretString,
    expires_in: u64,
}

impl SessionInfo {
    /// The bearer token.
    ///
    /// Never log or display this value.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Lifetime of the token in seconds, as reported at creation.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}

impl fmt::Debug for SessionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionInfo")
            .field("token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

enum SessionState {
    NoSession,
    Active(SessionInfo),
}

/// Authentication session for the e-Boekhouden API.
///
/// Holds at most one session token. The token is created lazily by the
/// first authenticated request (or explicitly via [`create`](Self::create))
/// and dropped by [`end`](Self::end). Expiry is not tracked: once the
/// service rejects an expired token, call `create` again.
///
/// # Thread Safety
///
/// The token lives behind an async lock, so a client shared between tasks
/// creates a single session even when the first requests race.
pub struct Session {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
    state: RwLock<SessionState>,
}

impl Session {
    pub(crate) fn new(http: reqwest::Client, endpoint: Url, credentials: Credentials) -> Self {
        Self {
            http,
            endpoint,
            credentials,
            state: RwLock::new(SessionState::NoSession),
        }
    }

    /// Exchange the credentials for a new session token.
    ///
    /// Replaces any token already held; the old token is not revoked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the service rejects the credentials. The
    /// previously held token, if any, is kept in that case.
    pub async fn create(&self) -> Result<SessionInfo> {
        let mut state = self.state.write().await;
        self.create_locked(&mut state).await
    }

    /// Return the held token, creating a session first if none is held.
    pub(crate) async fn ensure(&self) -> Result<SecretString> {
        if let SessionState::Active(info) = &*self.state.read().await {
            return Ok(info.token.clone());
        }

        let mut state = self.state.write().await;
        // Another task may have created the session while we waited
        if let SessionState::Active(info) = &*state {
            return Ok(info.token.clone());
        }
        let info = self.create_locked(&mut state).await?;
        Ok(info.token)
    }

    /// End the session (logout).
    ///
    /// The token is cleared once the service acknowledges the logout with a
    /// 2xx response. Whether the service revokes the token on its side is
    /// up to the service. Does nothing when no session is held.
    pub async fn end(&self) -> Result<()> {
        let mut state = self.state.write().await;
        let token = match &*state {
            SessionState::Active(info) => info.token.clone(),
            SessionState::NoSession => {
                tracing::debug!("No active e-Boekhouden session to end");
                return Ok(());
            }
        };

        let response = self
            .http
            .delete(self.endpoint.clone())
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        read_response(response).await?;

        *state = SessionState::NoSession;
        tracing::info!("Ended e-Boekhouden session");
        Ok(())
    }

    /// Returns `true` if a session token is held.
    pub async fn is_active(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Active(_))
    }

    /// Lifetime in seconds reported when the held token was created.
    pub async fn expires_in(&self) -> Option<u64> {
        match &*self.state.read().await {
            SessionState::Active(info) => Some(info.expires_in),
            SessionState::NoSession => None,
        }
    }

    /// The source identifier this session authenticates as.
    pub fn source(&self) -> &str {
        self.credentials.source()
    }

    async fn create_locked(&self, state: &mut SessionState) -> Result<SessionInfo> {
        let info = self.request_token().await?;
        *state = SessionState::Active(info.clone());
        tracing::info!(
            source = self.credentials.source(),
            expires_in = info.expires_in,
            "Created e-Boekhouden session"
        );
        Ok(info)
    }

    async fn request_token(&self) -> Result<SessionInfo> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&CreateSessionRequest {
                access_token: self.credentials.access_token(),
                source: self.credentials.source(),
            })
            .send()
            .await?;

        let body = read_response(response).await?.ok_or(Error::EmptyResponse)?;
        let session: CreateSessionResponse = serde_json::from_value(body)?;

        Ok(SessionInfo {
            token: SecretString::from(session.token),
            expires_in: session.expires_in,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state.try_read() {
            Ok(guard) => match *guard {
                SessionState::Active(_) => "active",
                SessionState::NoSession => "none",
            },
            Err(_) => "locked",
        };

        f.debug_struct("Session")
            .field("endpoint", &self.endpoint.as_str())
            .field("credentials", &self.credentials)
            .field("state", &state)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionRequest<'a> {
    access_token: &'a str,
    source: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionResponse {
    token: String,
    #[serde(default)]
    expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(
            reqwest::Client::new(),
            Url::parse("https://api.e-boekhouden.nl/v1/session").unwrap(),
            Credentials::new("super-secret-token", "TestApp").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_starts_without_session() {
        let session = test_session();
        assert!(!session.is_active().await);
        assert_eq!(session.expires_in().await, None);
    }

    #[tokio::test]
    async fn test_end_without_session_is_noop() {
        let session = test_session();
        session.end().await.unwrap();
        assert!(!session.is_active().await);
    }

    #[tokio::test]
    async fn test_session_debug_redacts_token() {
        let session = test_session();
        *session.state.write().await = SessionState::Active(SessionInfo {
            token: SecretString::from("live-session-token".to_string()),
            expires_in: 3600,
        });

        let debug_str = format!("{:?}", session);
        assert!(!debug_str.contains("super-secret-token"));
        assert!(!debug_str.contains("live-session-token"));
        assert!(debug_str.contains("active"));
        assert_eq!(session.expires_in().await, Some(3600));
    }

    #[test]
    fn test_session_response_shape() {
        let parsed: CreateSessionResponse = serde_json::from_value(serde_json::json!({
            "token": "abc",
            "expiresIn": 3600,
            "somethingElse": true
        }))
        .unwrap();
        assert_eq!(parsed.token, "abc");
        assert_eq!(parsed.expires_in, 3600);
    }

    #[test]
    fn test_session_request_shape() {
        let body = serde_json::to_value(CreateSessionRequest {
            access_token: "tok",
            source: "TestApp",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "accessToken": "tok", "source": "TestApp" })
        );
    }
}
