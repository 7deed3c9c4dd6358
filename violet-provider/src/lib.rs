//! # Violet Provider
//!
//! Reconciles `webhook` resources against the Violet API.
//!
//! [`VioletProvider::configure`] resolves credentials, logs in once and hands
//! the shared client to the [`WebhookResource`] controller and the
//! [`WebhookDataSource`]. Each lifecycle operation issues at most one request;
//! diffing and retries belong to the caller.
//!
//! ```rust,no_run
//! use violet_config::{ENV_PREFIX, EnvLoader, ProviderSettings};
//! use violet_provider::{CreateWebhookInput, VioletProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ProviderSettings::new().sandbox(true);
//! let env = EnvLoader::new(Some(ENV_PREFIX.to_string()));
//! let provider = VioletProvider::configure(&settings, &env).await?;
//!
//! let webhooks = provider.webhook_resource();
//! let created = webhooks
//!     .create(&CreateWebhookInput::new("order.created", "https://example.com/hook"))
//!     .await?;
//! webhooks.delete(created.id).await?;
//! # Ok(())
//! # }
//! ```

mod data_source;
mod error;
mod plan;
mod provider;
mod resource;

pub use data_source::WebhookDataSource;
pub use error::{CreateError, DeleteError, ImportError, ProviderError, ReadError, UpdateError};
pub use plan::{Drift, Plan, WebhookField, changed_fields, plan};
pub use provider::VioletProvider;
pub use resource::{Refreshed, WebhookResource};

pub use violet_client::{CreateWebhookInput, Webhook};
