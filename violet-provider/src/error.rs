//! Error types for webhook lifecycle operations.

use crate::plan::WebhookField;
use thiserror::Error;
use violet_client::{ApiError, AuthError};
use violet_config::ConfigError;

/// Create failed. The caller must not record the webhook as created.
#[derive(Debug, Error)]
pub enum CreateError {
    /// The create request failed.
    #[error("Unable to create webhook: {0}")]
    Api(#[from] ApiError),

    /// The API accepted the request but its response was not a webhook.
    #[error("Unable to decode created webhook: {0}")]
    Decode(String),
}

/// Read failed for the webhook with the given id.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Unable to read webhook {id}: {source}")]
    Api {
        id: i64,
        #[source]
        source: ApiError,
    },

    #[error("Unable to decode webhook {id}: {message}")]
    Decode { id: i64, message: String },
}

impl ReadError {
    /// The remote side reported that the webhook does not exist.
    ///
    /// A transport failure is never classified as not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { source, .. } if source.is_not_found())
    }

    /// Webhook id the read was issued for.
    pub fn id(&self) -> i64 {
        match self {
            Self::Api { id, .. } | Self::Decode { id, .. } => *id,
        }
    }
}

/// Update rejected. Webhooks have no in-place update.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Webhook {id} must be replaced; changed fields: {}", field_list(.fields))]
    RequiresReplace { id: i64, fields: Vec<WebhookField> },
}

fn field_list(fields: &[WebhookField]) -> String {
    fields
        .iter()
        .map(WebhookField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Delete failed. The webhook must still be considered present.
#[derive(Debug, Error)]
#[error("Unable to delete webhook {id}: {source}")]
pub struct DeleteError {
    pub id: i64,
    #[source]
    pub source: ApiError,
}

impl DeleteError {
    /// The webhook was already gone.
    pub fn is_not_found(&self) -> bool {
        self.source.is_not_found()
    }
}

/// Import identifier could not be used.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid webhook identifier `{identifier}`: expected a positive integer")]
    InvalidIdentifier { identifier: String },
}

/// Provider configuration failed. No resource can be managed.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unable to build Violet client: {0}")]
    Client(#[from] ApiError),

    #[error("Unable to log in to Violet: {0}")]
    Login(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError::Remote {
            status: 404,
            reason: "Not Found".to_string(),
            body: "{}".to_string(),
        }
    }

    #[test]
    fn test_read_error_not_found() {
        let err = ReadError::Api {
            id: 7,
            source: not_found(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.id(), 7);
        assert!(err.to_string().contains("Unable to read webhook 7"));
        assert!(err.to_string().contains("Response status 404"));
    }

    #[test]
    fn test_transport_error_is_not_not_found() {
        let err = ReadError::Api {
            id: 7,
            source: ApiError::Transport {
                cause: "connection refused".to_string(),
            },
        };
        assert!(!err.is_not_found());

        let decode = ReadError::Decode {
            id: 7,
            message: "eof".to_string(),
        };
        assert!(!decode.is_not_found());
    }

    #[test]
    fn test_delete_error_not_found() {
        let err = DeleteError {
            id: 3,
            source: not_found(),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("Unable to delete webhook 3"));
    }

    #[test]
    fn test_requires_replace_lists_fields() {
        let err = UpdateError::RequiresReplace {
            id: 9,
            fields: vec![WebhookField::Event, WebhookField::RemoteEndpoint],
        };
        assert_eq!(
            err.to_string(),
            "Webhook 9 must be replaced; changed fields: event, remote_endpoint"
        );
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = ImportError::InvalidIdentifier {
            identifier: "abc".to_string(),
        };
        assert!(err.to_string().contains("`abc`"));
    }
}
