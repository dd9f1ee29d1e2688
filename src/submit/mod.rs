//! Outbound submission of form values.

mod error;
mod http;
mod server_errors;

use serde_json::Value;

pub use error::TransportError;
pub use http::HttpTransport;
pub use server_errors::map_server_errors;

/// Status code a backend uses to reject individual fields.
pub const FIELD_REJECTION_STATUS: u16 = 400;

/// Raw answer of the endpoint a form posts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_field_rejection(&self) -> bool {
        self.status == FIELD_REJECTION_STATUS
    }
}

/// Posts a JSON document and hands back the raw response.
///
/// Implementations must be shareable with the worker thread that runs a submission.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&str, &Value) -> Result<TransportResponse, TransportError> + Send + Sync,
{
    fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        self(url, body)
    }
}
