//! Violet client configuration.

use std::time::Duration;

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.violet.io/v1/";

/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.violet.io/v1/";

/// Violet deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live API.
    #[default]
    Production,
    /// Sandbox API for testing integrations.
    Sandbox,
}

impl Environment {
    /// Select the environment from a sandbox flag.
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Base URL of this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// Violet client configuration.
///
/// The base URL is fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all relative paths are joined onto. Always ends with `/`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Environment::Production.base_url().to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("violet-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client configuration.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Use the base URL of a Violet environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.base_url = environment.base_url().to_string();
        self
    }

    /// Use a custom base URL (private deployments, tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = normalize_base_url(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// `Url::join` drops the last segment of a base without a trailing slash.
fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
