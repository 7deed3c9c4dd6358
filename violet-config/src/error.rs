// Error types for configuration management

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{}", missing_message(.0))]
    MissingCredentials(Vec<MissingCredential>),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),
}

/// A required credential absent from every configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCredential {
    /// Attribute name, e.g. `app_secret`.
    pub attribute: &'static str,
    /// Environment variable that can supply it, e.g. `VIOLET_APP_SECRET`.
    pub env_var: String,
}

fn missing_message(missing: &[MissingCredential]) -> String {
    missing
        .iter()
        .map(|m| {
            format!(
                "Unknown Violet {attr}: the provider cannot create the Violet API client without a \
                 value for {attr}. Set the value in the configuration or use the {env} \
                 environment variable.",
                attr = m.attribute,
                env = m.env_var
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, ConfigError>;
