// Violet - declarative management of Violet webhooks
//
// This library bundles the authenticated API client, the webhook resource
// lifecycle and the configuration layer behind a single dependency.

pub use violet_client as client;
pub use violet_config as config;
pub use violet_provider as provider;

#[cfg(feature = "log")]
pub use violet_log as log;

#[cfg(feature = "testing")]
pub use violet_testing as testing;

pub use violet_client::{ApiError, AuthError, CreateWebhookInput, VioletClient, Webhook};
pub use violet_config::{ConfigError, EnvLoader, ProviderSettings};
pub use violet_provider::{
    CreateError, DeleteError, Drift, ImportError, Plan, ProviderError, ReadError, Refreshed,
    UpdateError, VioletProvider, WebhookDataSource, WebhookField, WebhookResource, plan,
};

/// Prelude for common imports.
///
/// ```
/// use violet::prelude::*;
/// ```
pub mod prelude {
    pub use violet_client::prelude::*;
    pub use violet_config::{ENV_PREFIX, EnvLoader, ProviderSettings};
    pub use violet_provider::{
        Plan, VioletProvider, WebhookDataSource, WebhookField, WebhookResource, plan,
    };
}
