//! Violet API client implementation.

use bytes::Bytes;
use http::Method;
use std::sync::Arc;
use tracing::{debug, error, trace};
use url::Url;

use crate::{
    ApiError, ApiRequest, AuthError, AuthSession, ClientConfig, Credentials, Response, Result,
};

/// Header carrying the application identifier.
pub const APP_ID_HEADER: &str = "X-Violet-App-Id";

/// Header carrying the application secret.
pub const APP_SECRET_HEADER: &str = "X-Violet-App-Secret";

/// Header carrying the access token once logged in.
pub const TOKEN_HEADER: &str = "X-Violet-Token";

/// Sends single requests to the configured base URL with the session headers.
#[derive(Clone)]
pub(crate) struct Transport {
    inner: reqwest::Client,
    base_url: Url,
    config: Arc<ClientConfig>,
}

impl Transport {
    fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            inner,
            base_url,
            config: Arc::new(config),
        })
    }

    /// Execute one exchange. Statuses of 400 and above become [`ApiError::Remote`].
    pub(crate) async fn execute(
        &self,
        mut request: ApiRequest,
        session: &AuthSession,
    ) -> Result<Response> {
        let url = request.url(&self.base_url)?;
        let credentials = session.credentials();

        debug!(method = %request.method(), url = %url, "Sending request to Violet");

        let mut builder = self
            .inner
            .request(request.method().clone(), url)
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(APP_ID_HEADER, credentials.app_id.as_str())
            .header(APP_SECRET_HEADER, credentials.app_secret.as_str());

        if let Some(token) = session.token() {
            builder = builder.header(TOKEN_HEADER, token);
        }

        if let Some(body) = request.take_body() {
            builder = builder.body(body);
        }

        let response = Response::from_reqwest(builder.send().await?).await?;

        debug!(
            method = %request.method(),
            path = request.path(),
            status = %response.status(),
            "Received response from Violet"
        );

        response.error_for_status()
    }
}

/// Authenticated client for the Violet API.
///
/// Log in once with [`VioletClient::login`], then share the client by
/// reference (typically behind an [`Arc`]); it is read-only afterwards.
#[derive(Clone)]
pub struct VioletClient {
    transport: Transport,
    session: AuthSession,
}

impl VioletClient {
    /// Create a client that has not logged in yet.
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
            session: AuthSession::new(credentials),
        })
    }

    /// Create a client and log in immediately.
    pub async fn connect(
        config: ClientConfig,
        credentials: Credentials,
    ) -> std::result::Result<Self, AuthError> {
        let mut client = Self::new(config, credentials)?;
        client.login().await?;
        Ok(client)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.transport.config
    }

    /// Base URL every path is resolved against.
    pub fn base_url(&self) -> &str {
        self.transport.base_url.as_str()
    }

    /// Application the client acts for.
    pub fn app_id(&self) -> &str {
        &self.session.credentials().app_id
    }

    /// The authentication session.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Whether login succeeded and a token is attached to requests.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Exchange the configured credentials for an access token.
    pub async fn login(&mut self) -> std::result::Result<(), AuthError> {
        self.session.login(&self.transport).await
    }

    /// Perform one authenticated exchange and return the raw response body.
    ///
    /// Decoding the body is left to the caller.
    pub async fn request(&self, method: Method, path: &str, body: Option<&[u8]>) -> Result<Bytes> {
        let mut request = ApiRequest::new(method, path);
        if let Some(body) = body {
            request = request.body(body);
        }
        self.send(request).await
    }

    /// Send a prepared request and return the raw response body.
    ///
    /// Refuses with [`ApiError::MissingToken`] before login.
    pub async fn send(&self, request: ApiRequest) -> Result<Bytes> {
        if !self.session.is_authenticated() {
            error!(path = request.path(), "Request attempted without an access token");
            return Err(ApiError::MissingToken {
                path: request.path().to_string(),
            });
        }

        let method = request.method().clone();
        let path = request.path().to_string();

        match self.transport.execute(request, &self.session).await {
            Ok(response) => {
                let body = response.into_bytes();
                trace!(%method, path = %path, body = %String::from_utf8_lossy(&body), "Response body");
                Ok(body)
            }
            Err(e) => {
                error!(%method, path = %path, error = %e, "Violet request failed");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for VioletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VioletClient")
            .field("base_url", &self.base_url())
            .field("session", &self.session)
            .finish()
    }
}
