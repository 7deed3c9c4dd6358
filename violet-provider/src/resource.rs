//! Webhook resource lifecycle.
//!
//! Every operation issues at most one API request. The controller keeps no
//! state beyond the shared client; the caller owns the recorded webhook.

use crate::error::{CreateError, DeleteError, ImportError, ReadError, UpdateError};
use crate::plan::{Drift, changed_fields};
use std::sync::Arc;
use tracing::{debug, info, warn};
use violet_client::{ApiRequest, CreateWebhookInput, VioletClient, Webhook};

/// Path of a single webhook for reads.
pub(crate) fn webhook_path(id: i64) -> String {
    format!("events/webhooks/{id}")
}

/// Decode a webhook payload, rejecting an id that is not positive.
pub(crate) fn decode_webhook(body: &[u8]) -> Result<Webhook, String> {
    let webhook: Webhook = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    if webhook.id <= 0 {
        return Err(format!("webhook id {} is not a positive integer", webhook.id));
    }
    Ok(webhook)
}

/// Fetch one webhook by id.
pub(crate) async fn fetch_webhook(client: &VioletClient, id: i64) -> Result<Webhook, ReadError> {
    let body = client
        .send(ApiRequest::get(webhook_path(id)))
        .await
        .map_err(|source| ReadError::Api { id, source })?;

    decode_webhook(&body).map_err(|message| ReadError::Decode { id, message })
}

/// Outcome of a refresh that found the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refreshed {
    /// State observed on the remote side.
    pub webhook: Webhook,
    /// Fields that moved away from the recorded state.
    pub drift: Drift,
}

/// Controller for the `webhook` resource.
#[derive(Debug, Clone)]
pub struct WebhookResource {
    client: Arc<VioletClient>,
}

impl WebhookResource {
    /// Create a controller over an authenticated client.
    pub fn new(client: Arc<VioletClient>) -> Self {
        Self { client }
    }

    /// Type name of the resource.
    pub fn type_name(&self) -> &'static str {
        "violet_webhook"
    }

    fn collection_path(&self) -> String {
        format!("apps/{}/webhooks", self.client.app_id())
    }

    fn item_path(&self, id: i64) -> String {
        format!("apps/{}/webhooks/{id}", self.client.app_id())
    }

    /// Create a webhook from caller input.
    pub async fn create(&self, input: &CreateWebhookInput) -> Result<Webhook, CreateError> {
        info!(
            event = %input.event,
            remote_endpoint = %input.remote_endpoint,
            "Creating webhook"
        );

        let request = ApiRequest::post(self.collection_path()).json(input)?;
        let body = self.client.send(request).await?;
        let webhook = decode_webhook(&body).map_err(CreateError::Decode)?;

        info!(id = webhook.id, status = %webhook.status, "Created webhook");
        Ok(webhook)
    }

    /// Read a webhook by id.
    ///
    /// A webhook that no longer exists yields an error whose
    /// [`ReadError::is_not_found`] is true.
    pub async fn read(&self, id: i64) -> Result<Webhook, ReadError> {
        info!(id, "Read webhook resource");
        fetch_webhook(&self.client, id).await
    }

    /// Read the recorded webhook again and report drift.
    ///
    /// Returns `Ok(None)` when the webhook is gone. Transport failures stay
    /// errors: the remote state is unknown.
    pub async fn refresh(&self, prior: &Webhook) -> Result<Option<Refreshed>, ReadError> {
        match fetch_webhook(&self.client, prior.id).await {
            Ok(webhook) => {
                let drift = Drift::between(prior, &webhook);
                if !drift.is_empty() {
                    debug!(id = prior.id, fields = ?drift.fields, "Webhook drifted");
                }
                Ok(Some(Refreshed { webhook, drift }))
            }
            Err(err) if err.is_not_found() => {
                warn!(id = prior.id, "Webhook no longer exists");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Apply a configuration change.
    ///
    /// Webhooks cannot be changed in place. Identical configuration returns
    /// the recorded webhook; anything else must be replaced.
    pub fn update(
        &self,
        prior: &Webhook,
        desired: &CreateWebhookInput,
    ) -> Result<Webhook, UpdateError> {
        let fields = changed_fields(prior, desired);
        if fields.is_empty() {
            return Ok(prior.clone());
        }

        Err(UpdateError::RequiresReplace {
            id: prior.id,
            fields,
        })
    }

    /// Delete a webhook by id.
    pub async fn delete(&self, id: i64) -> Result<(), DeleteError> {
        info!(id, "Deleting webhook");

        self.client
            .send(ApiRequest::delete(self.item_path(id)))
            .await
            .map_err(|source| DeleteError { id, source })?;

        info!(id, "Deleted webhook");
        Ok(())
    }

    /// Turn an external identifier into a webhook to be filled by a read.
    pub fn import(&self, identifier: &str) -> Result<Webhook, ImportError> {
        let id = parse_identifier(identifier)?;
        debug!(id, "Imported webhook");
        Ok(Webhook::imported(id))
    }
}

fn parse_identifier(identifier: &str) -> Result<i64, ImportError> {
    identifier
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ImportError::InvalidIdentifier {
            identifier: identifier.to_string(),
        })
}
