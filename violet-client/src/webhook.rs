//! Webhook entity model.

use serde::{Deserialize, Deserializer, Serialize};

/// A webhook subscription as stored by Violet.
///
/// `event` and `remote_endpoint` define the subscription and are never changed
/// in place. Every other field is assigned by the remote side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Remote-assigned identifier, non-zero and stable.
    pub id: i64,
    /// Owning application.
    pub app_id: i64,
    /// Subscribed event name.
    pub event: String,
    /// Delivery target URL.
    pub remote_endpoint: String,
    /// Remote lifecycle state.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_created: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_last_modified: String,
}

impl Webhook {
    /// Minimal entity carrying only an identifier, filled in by a later read.
    pub fn imported(id: i64) -> Self {
        Self {
            id,
            app_id: 0,
            event: String::new(),
            remote_endpoint: String::new(),
            status: String::new(),
            date_created: String::new(),
            date_last_modified: String::new(),
        }
    }

    /// The caller-supplied part of this webhook.
    pub fn input(&self) -> CreateWebhookInput {
        CreateWebhookInput {
            event: self.event.clone(),
            remote_endpoint: self.remote_endpoint.clone(),
        }
    }
}

/// Fields supplied by the caller when creating a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookInput {
    pub event: String,
    pub remote_endpoint: String,
}

impl CreateWebhookInput {
    /// Create a new input.
    pub fn new(event: impl Into<String>, remote_endpoint: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            remote_endpoint: remote_endpoint.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_webhook() {
        let body = json!({
            "id": 10234,
            "app_id": 11,
            "event": "ORDER_UPDATED",
            "remote_endpoint": "https://example.com/hook",
            "status": "ACTIVE",
            "date_created": "2023-05-01T10:00:00+0000",
            "date_last_modified": "2023-05-02T10:00:00+0000"
        });

        let webhook: Webhook = serde_json::from_value(body).unwrap();
        assert_eq!(webhook.id, 10234);
        assert_eq!(webhook.app_id, 11);
        assert_eq!(webhook.event, "ORDER_UPDATED");
        assert_eq!(webhook.remote_endpoint, "https://example.com/hook");
        assert_eq!(webhook.status, "ACTIVE");
    }

    #[test]
    fn test_decode_tolerates_missing_remote_managed_fields() {
        let body = json!({
            "id": 1,
            "app_id": 2,
            "event": "ORDER_SHIPPED",
            "remote_endpoint": "https://example.com/hook",
            "date_last_modified": null
        });

        let webhook: Webhook = serde_json::from_value(body).unwrap();
        assert_eq!(webhook.status, "");
        assert_eq!(webhook.date_created, "");
        assert_eq!(webhook.date_last_modified, "");
    }

    #[test]
    fn test_decode_requires_identity_fields() {
        let body = json!({ "app_id": 2, "event": "ORDER_SHIPPED" });
        assert!(serde_json::from_value::<Webhook>(body).is_err());
    }

    #[test]
    fn test_input_serializes_with_snake_case_keys() {
        let input = CreateWebhookInput::new("order.created", "https://example.com/hook");
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({ "event": "order.created", "remote_endpoint": "https://example.com/hook" })
        );
    }

    #[test]
    fn test_imported_carries_only_id() {
        let webhook = Webhook::imported(42);
        assert_eq!(webhook.id, 42);
        assert!(webhook.event.is_empty());
        assert!(webhook.remote_endpoint.is_empty());
        assert_eq!(webhook.app_id, 0);
    }
}
