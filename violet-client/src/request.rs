//! Request description.

use crate::{ApiError, Result};
use http::Method;
use serde::Serialize;
use url::Url;

/// A single call against the Violet API, relative to the client's base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Create a request with a custom method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set the request body as raw JSON bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize a value as the JSON request body.
    pub fn json<T: Serialize>(mut self, json: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(json).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn take_body(&mut self) -> Option<Vec<u8>> {
        self.body.take()
    }

    /// Resolve the absolute URL against a base ending in `/`.
    pub(crate) fn url(&self, base: &Url) -> Result<Url> {
        // A leading slash would replace the base path (`/v1/`) instead of extending it.
        Ok(base.join(self.path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://sandbox-api.violet.io/v1/").unwrap()
    }

    #[test]
    fn test_url_joins_under_base_path() {
        let request = ApiRequest::get("events/webhooks/17");
        assert_eq!(
            request.url(&base()).unwrap().as_str(),
            "https://sandbox-api.violet.io/v1/events/webhooks/17"
        );
    }

    #[test]
    fn test_url_ignores_leading_slash() {
        let request = ApiRequest::delete("/apps/11/webhooks/17");
        assert_eq!(
            request.url(&base()).unwrap().as_str(),
            "https://sandbox-api.violet.io/v1/apps/11/webhooks/17"
        );
    }

    #[test]
    fn test_json_body() {
        let mut request = ApiRequest::post("login")
            .json(&serde_json::json!({"username": "u", "password": "p"}))
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        let body: serde_json::Value = serde_json::from_slice(&request.take_body().unwrap()).unwrap();
        assert_eq!(body["username"], "u");
    }
}
