//! # Violet Client
//!
//! Authenticated client for the Violet REST API.
//!
//! The client exchanges a username and password for an access token once,
//! then attaches the application headers and that token to every request.
//! Each call is a single exchange: responses with a status of 400 or above
//! become [`ApiError::Remote`], network failures become
//! [`ApiError::Transport`], and nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use violet_client::{ClientConfig, Credentials, Environment, Method, VioletClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder()
//!         .environment(Environment::Sandbox)
//!         .build();
//!     let credentials = Credentials::new("user", "password", "11", "app-secret");
//!
//!     let client = VioletClient::connect(config, credentials).await?;
//!
//!     let body = client.request(Method::GET, "events/webhooks/42", None).await?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod request;
mod response;
mod webhook;

pub use auth::{AuthSession, Credentials, LOGIN_PATH};
pub use client::{VioletClient, APP_ID_HEADER, APP_SECRET_HEADER, TOKEN_HEADER};
pub use config::{
    ClientConfig, ClientConfigBuilder, Environment, PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
pub use error::{ApiError, AuthError, Result};
pub use request::ApiRequest;
pub use response::Response;
pub use webhook::{CreateWebhookInput, Webhook};

// Re-export common types
pub use bytes::Bytes;
pub use http::{Method, StatusCode};

/// Prelude for common imports.
///
/// ```
/// use violet_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AuthSession, Credentials};
    pub use crate::client::VioletClient;
    pub use crate::config::{ClientConfig, ClientConfigBuilder, Environment};
    pub use crate::error::{ApiError, AuthError};
    pub use crate::webhook::{CreateWebhookInput, Webhook};
    pub use http::Method;
}
