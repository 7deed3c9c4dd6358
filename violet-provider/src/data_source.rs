//! Webhook data source.

use crate::error::ReadError;
use crate::resource::fetch_webhook;
use std::sync::Arc;
use tracing::info;
use violet_client::{VioletClient, Webhook};

/// Read-only lookup of an existing webhook by id.
#[derive(Debug, Clone)]
pub struct WebhookDataSource {
    client: Arc<VioletClient>,
}

impl WebhookDataSource {
    pub fn new(client: Arc<VioletClient>) -> Self {
        Self { client }
    }

    /// Type name of the data source.
    pub fn type_name(&self) -> &'static str {
        "violet_webhook"
    }

    /// Fetch the webhook with the given id.
    pub async fn read(&self, id: i64) -> Result<Webhook, ReadError> {
        info!(id, "Read webhook data source");
        fetch_webhook(&self.client, id).await
    }
}
