use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;

use super::{Transport, TransportError, TransportResponse};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Blocking `reqwest` client that posts form values as JSON.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Client without a request timeout; a submission runs until the server answers.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|source| TransportError::Body {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(url, status, "submission answered");
        Ok(TransportResponse { status, body })
    }
}
