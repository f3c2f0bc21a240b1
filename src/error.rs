//! Error types for API calls.
//!
//! Every failure mode preserves the raw response text and HTTP status when
//! they are known, so callers can log or surface the exact server output.

use http::StatusCode;

/// The main error type for API calls.
///
/// # Examples
///
/// ```no_run
/// use bookhal::{ApiConfig, Client, Error, RequestOptions};
///
/// # fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .config(ApiConfig::new("my-app/1.0", "app-id", "app-key"))
///     .build()?;
///
/// match client.get("https://api.example.com/companies/1", RequestOptions::new()) {
///     Ok(envelope) => println!("properties: {:?}", envelope.properties()),
///     Err(Error::Http { status, raw_response, .. }) => {
///         eprintln!("HTTP error {:?}: {}", status, raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The content type is not one of the supported tags (form-urlencoded
    /// or JSON).
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// A parameter value could not be encoded into the request body.
    #[error("Failed to encode request body: {0}")]
    Encoding(String),

    /// The response body is not well-formed HAL+JSON.
    ///
    /// Preserves both the raw response text and the serde error message so
    /// decode failures can be debugged from logs alone.
    #[error("Failed to decode HAL response: {serde_error}")]
    Decoding {
        /// The raw response body that failed to decode.
        raw_response: String,
        /// The serde error message.
        serde_error: String,
    },

    /// Umbrella for transport and server-reported failures.
    ///
    /// Raised for I/O errors, body-encoding failures during request
    /// construction, and any HTTP status >= 400.
    #[error("{message}")]
    Http {
        /// Human-readable description of the failure.
        message: String,
        /// The raw response text read so far, empty if none was received.
        raw_response: String,
        /// The HTTP status code, when one was obtained.
        status: Option<StatusCode>,
        /// The underlying transport error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid client or request configuration, such as a header value that
    /// cannot be represented on the wire.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The endpoint string could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the raw response body if this error carries one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Http { raw_response, .. } => Some(raw_response),
            Error::Decoding { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// A specialized `Result` type for API calls.
pub type Result<T> = std::result::Result<T, Error>;
