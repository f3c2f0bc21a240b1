//! The wire transport seam.
//!
//! [`Transport`] separates request execution from the executor's
//! encode/classify/decode logic: the executor builds a [`PreparedRequest`],
//! the transport performs one blocking round-trip and hands back a
//! [`RawResponse`]. The default implementation wraps `reqwest::blocking`;
//! tests inject fakes to script statuses, split error/body streams, and
//! count connection lifecycles.
//!
//! A transport owns the connection for the whole call: opened, used, and
//! closed before `send` returns, on success and on failure alike.

use http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::{Error, Result};

/// A fully assembled request, ready to put on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// The HTTP verb.
    pub method: Method,
    /// The absolute target URL.
    pub url: Url,
    /// All headers, fixed and per-call.
    pub headers: HeaderMap,
    /// The encoded body, `None` when the call sends none.
    pub body: Option<Vec<u8>>,
}

/// The raw result of one round-trip.
///
/// Some transports expose a separate stream for error responses and only
/// populate one of the two slots depending on status; the executor prefers
/// `error_body` and falls back to `body`.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The numeric status code.
    pub status: StatusCode,
    /// The normal response body, when the transport read one.
    pub body: Option<String>,
    /// The error-stream body, when the transport exposes one.
    pub error_body: Option<String>,
}

impl RawResponse {
    /// The response text: the error stream when present, else the normal
    /// body, else empty. The choice is availability-driven, never
    /// status-driven.
    pub fn text(self) -> String {
        self.error_body.or(self.body).unwrap_or_default()
    }
}

/// Performs one blocking HTTP round-trip.
pub trait Transport: Send + Sync {
    /// Sends the request and reads the full response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the connection cannot be opened, the
    /// body cannot be written, or the response cannot be read. The error's
    /// `raw_response` should carry whatever response text was collected
    /// before the failure; the default transport reads the body in a single
    /// step, so its read-failure errors carry none.
    fn send(&self, request: PreparedRequest) -> Result<RawResponse>;
}

/// The default transport, backed by a blocking `reqwest` client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the transport with reqwest's default connect/read timeouts.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: PreparedRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(|e| Error::Http {
            message: format!("I/O error while sending request: {e}"),
            raw_response: String::new(),
            status: None,
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| Error::Http {
            message: format!("I/O error while reading response: {e}"),
            raw_response: String::new(),
            status: Some(status),
            source: Some(Box::new(e)),
        })?;

        // reqwest exposes a single body stream for all statuses, so the
        // error slot stays empty here.
        Ok(RawResponse {
            status,
            body: Some(body),
            error_body: None,
        })
    }
}
