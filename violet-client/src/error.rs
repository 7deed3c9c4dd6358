//! Violet client error types.

use thiserror::Error;

/// Result type for Violet API exchanges.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced by a single HTTP exchange with the Violet API.
///
/// Nothing in this layer is retried. Every variant is surfaced to the caller
/// as-is so the remote diagnostic reaches the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a status code of 400 or above.
    #[error("Error performing request. Response status {}. {body}", status_line(.status, .reason))]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status code.
        reason: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The exchange could not complete (DNS, refused connection, timeout,
    /// truncated body).
    #[error("Transport error: {cause}")]
    Transport {
        /// Underlying cause.
        cause: String,
    },

    /// A request other than login was attempted before a token was obtained.
    #[error("Refusing to call `{path}` without an access token; log in first")]
    MissingToken {
        /// Relative path of the refused request.
        path: String,
    },

    /// The request URL could not be built from the base URL and path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// The HTTP client or a request could not be built from the configured
    /// values, e.g. a credential that is not a valid header value.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Get the HTTP status code if the remote side answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check whether the remote side reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check whether this is a transport failure.
    ///
    /// Transport failures are indeterminate: the remote state is unknown.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Body returned by the API for remote errors.
    pub fn remote_body(&self) -> Option<&str> {
        match self {
            Self::Remote { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn status_line(status: &u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{status} {reason}")
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Configuration(err.to_string())
        } else {
            ApiError::Transport {
                cause: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

/// Errors from exchanging credentials for an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login succeeded at the HTTP level but returned no token.
    #[error("Error getting token. Please check provided credentials.")]
    EmptyToken,

    /// The login exchange failed (network failure or non-2xx answer).
    #[error("Login request failed: {0}")]
    Transport(#[from] ApiError),

    /// The login response was not the expected JSON document.
    #[error("Unable to parse login response: {0}")]
    Decode(String),
}
