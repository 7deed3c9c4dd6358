// Provider settings and their layering over the environment

use crate::{ConfigError, ConfigValidator, EnvLoader, MissingCredential, Result, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prefix of the environment variables that back unset settings.
pub const ENV_PREFIX: &str = "VIOLET";

/// Provider settings as written by the user. Every field is optional; unset
/// fields fall back to `VIOLET_*` environment variables on [`resolve`].
///
/// [`resolve`]: ProviderSettings::resolve
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSettings {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_secret: Option<String>,
    /// Use the sandbox API.
    #[serde(default)]
    pub sandbox: Option<bool>,
    /// Base URL override. Takes precedence over `sandbox`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(value.into());
        self
    }

    pub fn app_id(mut self, value: impl Into<String>) -> Self {
        self.app_id = Some(value.into());
        self
    }

    pub fn app_secret(mut self, value: impl Into<String>) -> Self {
        self.app_secret = Some(value.into());
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Layer these settings over `fallback`: every field set here wins.
    pub fn merge(self, fallback: ProviderSettings) -> ProviderSettings {
        ProviderSettings {
            username: self.username.or(fallback.username),
            password: self.password.or(fallback.password),
            app_id: self.app_id.or(fallback.app_id),
            app_secret: self.app_secret.or(fallback.app_secret),
            sandbox: self.sandbox.or(fallback.sandbox),
            endpoint: self.endpoint.or(fallback.endpoint),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
        }
    }

    /// Fill unset fields from the environment and check that every required
    /// credential ended up non-empty.
    ///
    /// A field set explicitly (even to an empty string) is never replaced by
    /// its environment variable. All missing credentials are reported together.
    pub fn resolve(&self, env: &EnvLoader) -> Result<ResolvedSettings> {
        let mut missing = Vec::new();
        let mut credential = |value: &Option<String>, attribute: &'static str| -> String {
            let resolved = value
                .clone()
                .or_else(|| env.load_var(attribute).ok())
                .unwrap_or_default();
            if resolved.is_empty() {
                missing.push(MissingCredential {
                    attribute,
                    env_var: env.var_name(attribute),
                });
            }
            resolved
        };

        let username = credential(&self.username, "username");
        let password = credential(&self.password, "password");
        let app_id = credential(&self.app_id, "app_id");
        let app_secret = credential(&self.app_secret, "app_secret");

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let sandbox = match self.sandbox {
            Some(sandbox) => sandbox,
            None => match env.load_non_empty("sandbox") {
                Some(raw) => ConfigValidator::parse_bool(&raw, &env.var_name("sandbox"))?,
                None => false,
            },
        };

        let endpoint = self
            .endpoint
            .clone()
            .or_else(|| env.load_non_empty("endpoint"))
            .filter(|e| !e.is_empty());

        let resolved = ResolvedSettings {
            username,
            password,
            app_id,
            app_secret,
            sandbox,
            endpoint,
            timeout: self.timeout_secs.map(Duration::from_secs),
        };
        resolved.validate()?;

        Ok(resolved)
    }

    /// Resolve against the process environment.
    pub fn resolve_from_env(&self) -> Result<ResolvedSettings> {
        self.resolve(&EnvLoader::new(Some(ENV_PREFIX.to_string())))
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("app_id", &self.app_id)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "[REDACTED]"))
            .field("sandbox", &self.sandbox)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Settings with every required credential present.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub username: String,
    pub password: String,
    pub app_id: String,
    pub app_secret: String,
    pub sandbox: bool,
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
}

impl Validate for ResolvedSettings {
    fn validate(&self) -> Result<()> {
        if let Some(ref endpoint) = self.endpoint {
            ConfigValidator::is_url(endpoint, "endpoint")?;
        }
        if let Some(timeout) = self.timeout {
            ConfigValidator::positive(timeout.as_secs(), "timeout_secs")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ResolvedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSettings")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .field("sandbox", &self.sandbox)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
