//! Per-call request configuration.

use serde_json::Value;

use crate::encoding::{ContentType, Params};

/// Optional configuration for a single [`Client::execute`] call.
///
/// Replaces a family of per-verb call shapes with one structure of named
/// optional fields: every combination of auth token, body parameters, and
/// content type is expressed by setting the corresponding field.
///
/// Defaults: no auth token, no body, form-urlencoded content type, testing
/// mode off.
///
/// [`Client::execute`]: crate::Client::execute
///
/// # Examples
///
/// ```
/// use bookhal::{ContentType, RequestOptions};
///
/// let options = RequestOptions::new()
///     .with_auth_token("TOKEN")
///     .with_param("name", "Acme")
///     .with_content_type(ContentType::Json);
///
/// assert_eq!(options.auth_token.as_deref(), Some("TOKEN"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Opaque auth token sent as the `Auth-Token` header; `None` makes the
    /// call anonymously.
    pub auth_token: Option<String>,

    /// Body parameters. `None` sends no body regardless of method.
    pub params: Option<Params>,

    /// Body encoding and `Content-Type` header value.
    pub content_type: ContentType,

    /// Suppresses response-code logging and returns error bodies as decoded
    /// envelopes instead of failing on status >= 400. Used by test
    /// scaffolding that inspects error payloads.
    pub testing_mode: bool,
}

impl RequestOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Sets the full parameter mapping, replacing any previously set fields.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Adds a single body parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the body content type.
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Enables or disables testing mode.
    pub fn testing_mode(mut self, enabled: bool) -> Self {
        self.testing_mode = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_anonymous_form_encoded_no_body() {
        let options = RequestOptions::new();
        assert!(options.auth_token.is_none());
        assert!(options.params.is_none());
        assert_eq!(options.content_type, ContentType::FormUrlEncoded);
        assert!(!options.testing_mode);
    }

    #[test]
    fn with_param_accumulates_into_one_mapping() {
        let options = RequestOptions::new()
            .with_param("name", "Acme")
            .with_param("size", 3);

        let params = options.params.unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["name"], "Acme");
        assert_eq!(params["size"], 3);
    }
}
