//! Response envelope: a decoded representation plus the call context that
//! produced it.

use http::Method;

use crate::encoding::{ContentType, Params};
use crate::hal::Representation;

/// A successful API response.
///
/// Bundles the decoded [`Representation`] with the method, content type,
/// original parameters, and auth token of the call that produced it, so
/// domain models can chain follow-up calls without re-specifying context.
/// Immutable after construction.
///
/// Derefs to the representation, so properties and links are readable
/// directly on the envelope.
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
/// let envelope = client.get(
///     "https://api.example.com/companies/37028",
///     RequestOptions::new().with_auth_token("TOKEN"),
/// )?;
///
/// println!("name: {:?}", envelope.property("name"));
/// if let Some(link) = envelope.link("settings") {
///     let settings = client.get(&link.href, RequestOptions::new()
///         .with_auth_token(envelope.auth_token().unwrap()))?;
///     println!("settings: {:?}", settings.properties());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Envelope {
    representation: Representation,
    method: Method,
    content_type: ContentType,
    params: Option<Params>,
    auth_token: Option<String>,
}

impl Envelope {
    pub(crate) fn new(
        representation: Representation,
        method: Method,
        content_type: ContentType,
        params: Option<Params>,
        auth_token: Option<String>,
    ) -> Self {
        Envelope {
            representation,
            method,
            content_type,
            params,
            auth_token,
        }
    }

    /// The decoded HAL representation.
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// The HTTP method of the originating call.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The content type the originating call's body was encoded with.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The parameters sent with the originating call, if any.
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// The auth token the originating call carried, if any.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl AsRef<Representation> for Envelope {
    fn as_ref(&self) -> &Representation {
        &self.representation
    }
}

impl std::ops::Deref for Envelope {
    type Target = Representation;

    fn deref(&self) -> &Self::Target {
        &self.representation
    }
}
