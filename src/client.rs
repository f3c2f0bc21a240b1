//! The request executor.
//!
//! [`Client`] is the single entry point that performs every network call:
//! it encodes request parameters, sets the fixed API headers, hands the
//! request to the [`Transport`], classifies the response, and wraps the
//! decoded body in an [`Envelope`].

use std::borrow::Cow;
use std::sync::Arc;

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, Method};
use url::Url;

use crate::encoding;
use crate::hal::Representation;
use crate::request::RequestOptions;
use crate::transport::{HttpTransport, PreparedRequest, Transport};
use crate::{Envelope, Error, Result};

const APP_ID: HeaderName = HeaderName::from_static("app-id");
const APP_KEY: HeaderName = HeaderName::from_static("app-key");
const AUTH_TOKEN: HeaderName = HeaderName::from_static("auth-token");

/// Static API credentials and identity, sent as fixed headers on every call.
///
/// Constructed explicitly and injected at client build time, never read from
/// ambient globals, so tests can supply fakes freely.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// The `User-Agent` header value.
    pub user_agent: String,
    /// The `App-Id` header value.
    pub app_id: String,
    /// The `App-Key` header value.
    pub app_key: String,
}

impl ApiConfig {
    /// Creates a configuration from the three fixed header values.
    pub fn new(
        user_agent: impl Into<String>,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        ApiConfig {
            user_agent: user_agent.into(),
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }
}

/// A synchronous HAL+JSON API client.
///
/// The client is cheap to clone and reusable across calls; each call is a
/// full blocking request/response cycle with no shared mutable state between
/// invocations.
///
/// # Examples
///
/// ```no_run
/// use bookhal::{ApiConfig, Client, RequestOptions};
///
/// # fn example() -> Result<(), bookhal::Error> {
/// let client = Client::builder()
///     .config(ApiConfig::new("my-app/1.0", "app-id", "app-key"))
///     .build()?;
///
/// let company = client.get(
///     "https://api.example.com/companies/37028",
///     RequestOptions::new().with_auth_token("TOKEN"),
/// )?;
///
/// println!("name: {:?}", company.property("name"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

struct ClientInner {
    transport: Box<dyn Transport>,
    config: ApiConfig,
}

impl Client {
    /// Creates a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Executes one API call.
    ///
    /// Encodes `options.params` (when present) with `options.content_type`,
    /// sends the request with the fixed headers plus any auth token, reads
    /// the response, and classifies it: status < 400 decodes into an
    /// [`Envelope`], status >= 400 fails with [`Error::Http`] carrying the
    /// status and raw response text.
    ///
    /// Every call opens and closes exactly one connection, on success and
    /// failure paths alike; no path returns without an envelope or an error.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidUrl`]: `endpoint` is not an absolute URL.
    /// * [`Error::Http`]: transport I/O failure, body-encoding failure, or
    ///   server-reported status >= 400.
    /// * [`Error::Decoding`]: success status but a body that is not
    ///   well-formed HAL+JSON.
    pub fn execute(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Envelope> {
        let url = Url::parse(endpoint)?;
        self.call(method, url, options)
    }

    /// GET convenience wrapper around [`execute`](Client::execute).
    pub fn get(&self, endpoint: &str, options: RequestOptions) -> Result<Envelope> {
        self.execute(Method::GET, endpoint, options)
    }

    /// POST convenience wrapper around [`execute`](Client::execute).
    pub fn post(&self, endpoint: &str, options: RequestOptions) -> Result<Envelope> {
        self.execute(Method::POST, endpoint, options)
    }

    /// PUT convenience wrapper around [`execute`](Client::execute).
    pub fn put(&self, endpoint: &str, options: RequestOptions) -> Result<Envelope> {
        self.execute(Method::PUT, endpoint, options)
    }

    /// DELETE convenience wrapper around [`execute`](Client::execute).
    pub fn delete(&self, endpoint: &str, options: RequestOptions) -> Result<Envelope> {
        self.execute(Method::DELETE, endpoint, options)
    }

    fn call(&self, method: Method, url: Url, options: RequestOptions) -> Result<Envelope> {
        let RequestOptions {
            auth_token,
            params,
            content_type,
            testing_mode,
        } = options;

        let config = &self.inner.config;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(APP_ID, header_value("App-Id", &config.app_id)?);
        headers.insert(APP_KEY, header_value("App-Key", &config.app_key)?);
        if let Some(token) = &auth_token {
            headers.insert(AUTH_TOKEN, header_value("Auth-Token", token)?);
        }

        // No params means no body, regardless of method.
        let body = match &params {
            Some(params) => {
                let bytes = encoding::encode(params, content_type).map_err(|e| {
                    let message = format!("Error when writing body params: {e}");
                    Error::Http {
                        message,
                        raw_response: String::new(),
                        status: None,
                        source: Some(Box::new(e)),
                    }
                })?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
                Some(bytes)
            }
            None => None,
        };

        tracing::debug!(method = %method, url = %url, "Executing HTTP request");

        let raw = self.inner.transport.send(PreparedRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body: body.clone(),
        })?;
        let status = raw.status;

        if !testing_mode {
            tracing::info!(status = status.as_u16(), "Received HTTP response");
        }

        // Read the error stream when the transport populated one, else the
        // normal body; the choice is availability-driven, not status-driven.
        let text = raw.text();

        if status.as_u16() < 400 || testing_mode {
            let representation = Representation::decode(&text).inspect_err(|e| {
                tracing::error!(error = %e, raw_response = %text, "Failed to decode response");
            })?;
            return Ok(Envelope::new(
                representation,
                method,
                content_type,
                params,
                auth_token,
            ));
        }

        let sent = body
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or(Cow::Borrowed(""));
        let message = format!(
            "The call to {url} with parameters '{sent}' returned {status}. Error message: {text}"
        );
        if status.is_client_error() {
            tracing::error!(status = status.as_u16(), response = %text, "Client error (4xx)");
        } else {
            tracing::warn!(status = status.as_u16(), response = %text, "Server error (5xx)");
        }

        // Any path that did not return an envelope above lands here with
        // whatever message, text, and status were accumulated.
        Err(Error::Http {
            message,
            raw_response: text,
            status: Some(status),
            source: None,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::ConfigurationError(format!("Invalid {name} header value: {e}")))
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use bookhal::{ApiConfig, ClientBuilder};
///
/// # fn example() -> Result<(), bookhal::Error> {
/// let client = ClientBuilder::new()
///     .config(ApiConfig::new("my-app/1.0", "app-id", "app-key"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    config: Option<ApiConfig>,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with no configuration.
    pub fn new() -> Self {
        ClientBuilder {
            config: None,
            transport: None,
        }
    }

    /// Sets the API configuration. Required.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the default transport, typically with a fake in tests.
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if no [`ApiConfig`] was
    /// provided or the default transport cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let config = self
            .config
            .ok_or_else(|| Error::ConfigurationError("API configuration is required".to_string()))?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new()?),
        };
        Ok(Client {
            inner: Arc::new(ClientInner { transport, config }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
