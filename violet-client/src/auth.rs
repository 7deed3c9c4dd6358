//! Credential exchange and the access token it yields.

use crate::client::Transport;
use crate::{ApiRequest, AuthError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Relative path of the login endpoint.
pub const LOGIN_PATH: &str = "login";

/// Long-lived credentials for a Violet application.
///
/// The [`Debug`] impl redacts the password and app secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub app_id: String,
    pub app_secret: String,
}

impl Credentials {
    /// Create a new set of credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Credentials plus the access token obtained by logging in.
///
/// The token is only ever written by [`AuthSession::login`]. It is not
/// refreshed on expiry; a new session has to be configured instead.
#[derive(Clone)]
pub struct AuthSession {
    credentials: Credentials,
    token: Option<String>,
}

impl AuthSession {
    /// Create a session that has not logged in yet.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: None,
        }
    }

    /// The credentials this session logs in with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current access token, if login succeeded.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is available.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Exchange username and password for an access token.
    ///
    /// Any previous token is discarded first, so a failed login leaves the
    /// session unauthenticated.
    pub(crate) async fn login(&mut self, transport: &Transport) -> Result<(), AuthError> {
        self.token = None;

        info!(username = %self.credentials.username, "Logging into Violet");

        let request = ApiRequest::post(LOGIN_PATH).json(&LoginRequest {
            username: &self.credentials.username,
            password: &self.credentials.password,
        })?;

        let response = match transport.execute(request, self).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Error making login request");
                return Err(AuthError::Transport(e));
            }
        };

        let data: LoginResponse = response
            .json()
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        match data.token {
            Some(token) if !token.is_empty() => {
                debug!("Obtained Violet access token");
                self.token = Some(token);
                Ok(())
            }
            _ => Err(AuthError::EmptyToken),
        }
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("credentials", &self.credentials)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_token() {
        let session = AuthSession::new(Credentials::new("user", "pass", "11", "secret"));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.credentials().app_id, "11");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut session = AuthSession::new(Credentials::new("user", "hunter2", "11", "s3cr3t"));
        session.token = Some("tok-abc".to_string());

        let debug = format!("{session:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("s3cr3t"));
        assert!(!debug.contains("tok-abc"));
    }
}
