//! HTTP response wrapper.

use crate::{ApiError, Result};
use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

/// A fully read API response.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    /// Read a reqwest response to the end.
    ///
    /// A body that cannot be read is a transport failure, never an empty body.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let body = response.bytes().await?;

        Ok(Self { status, body })
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response body as bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response and return the body as bytes.
    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Turn a status of 400 or above into [`ApiError::Remote`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.as_u16() >= 400 {
            Err(ApiError::Remote {
                status: self.status.as_u16(),
                reason: self.status.canonical_reason().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        } else {
            Ok(self)
        }
    }
}
