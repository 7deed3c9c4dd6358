//! Provider configure step.

use crate::data_source::WebhookDataSource;
use crate::error::ProviderError;
use crate::resource::WebhookResource;
use std::sync::Arc;
use tracing::{error, info};
use violet_client::{ClientConfig, Credentials, Environment, VioletClient};
use violet_config::{EnvLoader, ProviderSettings, ResolvedSettings};

/// A configured provider holding the authenticated client.
///
/// Controllers are handed the shared client at construction time.
#[derive(Debug, Clone)]
pub struct VioletProvider {
    client: Arc<VioletClient>,
}

impl VioletProvider {
    /// Resolve settings, select the base URL, build the client and log in.
    ///
    /// Any failure, including a rejected login, leaves no provider behind.
    pub async fn configure(
        settings: &ProviderSettings,
        env: &EnvLoader,
    ) -> Result<Self, ProviderError> {
        let resolved = settings.resolve(env)?;
        Self::connect(resolved).await
    }

    /// Configure from settings, falling back to the process environment.
    pub async fn configure_from_env(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let resolved = settings.resolve_from_env()?;
        Self::connect(resolved).await
    }

    /// Build the client for resolved settings and log in.
    pub async fn connect(settings: ResolvedSettings) -> Result<Self, ProviderError> {
        let config = client_config(&settings);
        let credentials = Credentials::new(
            settings.username,
            settings.password,
            settings.app_id,
            settings.app_secret,
        );

        info!(base_url = %config.base_url, "Configuring Violet client");

        let mut client = VioletClient::new(config, credentials)?;
        if let Err(e) = client.login().await {
            error!(error = %e, "Violet login failed");
            return Err(e.into());
        }

        info!(base_url = client.base_url(), "Configured Violet client");
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Wrap an already authenticated client.
    pub fn from_client(client: Arc<VioletClient>) -> Self {
        Self { client }
    }

    /// The shared client.
    pub fn client(&self) -> &Arc<VioletClient> {
        &self.client
    }

    /// Controller for webhook resources.
    pub fn webhook_resource(&self) -> WebhookResource {
        WebhookResource::new(Arc::clone(&self.client))
    }

    /// Webhook data source.
    pub fn webhook_data_source(&self) -> WebhookDataSource {
        WebhookDataSource::new(Arc::clone(&self.client))
    }
}

fn client_config(settings: &ResolvedSettings) -> ClientConfig {
    let mut builder = ClientConfig::builder();
    builder = match settings.endpoint {
        Some(ref endpoint) => builder.base_url(endpoint.as_str()),
        None => builder.environment(Environment::from_sandbox(settings.sandbox)),
    };
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use violet_client::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

    fn resolved() -> ResolvedSettings {
        ResolvedSettings {
            username: "user".to_string(),
            password: "pass".to_string(),
            app_id: "11".to_string(),
            app_secret: "secret".to_string(),
            sandbox: false,
            endpoint: None,
            timeout: None,
        }
    }

    #[test]
    fn test_production_by_default() {
        assert_eq!(client_config(&resolved()).base_url, PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_sandbox_flag_selects_sandbox() {
        let settings = ResolvedSettings {
            sandbox: true,
            ..resolved()
        };
        assert_eq!(client_config(&settings).base_url, SANDBOX_BASE_URL);
    }

    #[test]
    fn test_endpoint_overrides_sandbox() {
        let settings = ResolvedSettings {
            sandbox: true,
            endpoint: Some("http://127.0.0.1:9000/v1".to_string()),
            timeout: Some(Duration::from_secs(5)),
            ..resolved()
        };
        let config = client_config(&settings);
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v1/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
