//! Request parameter encoding.
//!
//! The API accepts request bodies as either URL-encoded forms or JSON
//! objects. [`encode`] turns a parameter mapping into the UTF-8 byte
//! sequence for the selected [`ContentType`]; the transform is pure and the
//! mapping is never mutated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{Error, Result};

/// Request parameters: field name to scalar value.
///
/// An ordered map so form-encoded bodies are byte-for-byte deterministic.
pub type Params = BTreeMap<String, Value>;

/// The request body content type, selecting the encoder strategy and the
/// `Content-Type` header value.
///
/// Parse one from a MIME string with [`FromStr`]; anything outside the two
/// supported tags fails with [`Error::UnknownContentType`].
///
/// # Examples
///
/// ```
/// use bookhal::ContentType;
///
/// let ct: ContentType = "application/json".parse().unwrap();
/// assert_eq!(ct, ContentType::Json);
/// assert!("text/html".parse::<ContentType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// `application/x-www-form-urlencoded`, the API default.
    #[default]
    FormUrlEncoded,
    /// `application/json`.
    Json,
}

impl ContentType {
    /// The MIME string sent in the `Content-Type` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::Json => "application/json",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Ignore MIME parameters such as "; charset=utf-8".
        let mime = s.split(';').next().unwrap_or(s).trim();
        match mime {
            "application/x-www-form-urlencoded" => Ok(ContentType::FormUrlEncoded),
            "application/json" => Ok(ContentType::Json),
            _ => Err(Error::UnknownContentType(s.to_string())),
        }
    }
}

/// Encodes `params` as a request body for `content_type`.
///
/// Form encoding percent-escapes each key and value per standard form rules;
/// JSON encoding serializes the mapping as a JSON object. Both produce UTF-8
/// bytes.
///
/// # Errors
///
/// Returns [`Error::Encoding`] when a value cannot be represented in the
/// chosen encoding, such as a nested array or object in a form body.
pub fn encode(params: &Params, content_type: ContentType) -> Result<Vec<u8>> {
    match content_type {
        ContentType::FormUrlEncoded => {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (key, value) in params {
                serializer.append_pair(key, &form_value(key, value)?);
            }
            Ok(serializer.finish().into_bytes())
        }
        ContentType::Json => {
            serde_json::to_vec(params).map_err(|e| Error::Encoding(e.to_string()))
        }
    }
}

/// Renders a scalar parameter value as form-field text.
fn form_value(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::Encoding(format!(
            "value for field '{key}' is not a scalar"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn form_encoding_round_trips() {
        let input = params(&[
            ("name", json!("Acme & Sons")),
            ("size", json!(42)),
            ("active", json!(true)),
        ]);

        let bytes = encode(&input, ContentType::FormUrlEncoded).unwrap();
        let body = String::from_utf8(bytes).unwrap();

        let decoded: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            decoded,
            vec![
                ("active".to_string(), "true".to_string()),
                ("name".to_string(), "Acme & Sons".to_string()),
                ("size".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn form_encoding_percent_escapes() {
        let input = params(&[("name", json!("Acme"))]);
        let bytes = encode(&input, ContentType::FormUrlEncoded).unwrap();
        assert_eq!(bytes, b"name=Acme");

        let input = params(&[("q", json!("a b&c"))]);
        let bytes = encode(&input, ContentType::FormUrlEncoded).unwrap();
        assert_eq!(bytes, b"q=a+b%26c");
    }

    #[test]
    fn json_encoding_round_trips() {
        let input = params(&[("name", json!("Acme")), ("size", json!(42))]);

        let bytes = encode(&input, ContentType::Json).unwrap();
        let decoded: Params = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn unsupported_content_type_string_is_rejected() {
        for s in ["text/html", "application/xml", "application/hal+json", ""] {
            match s.parse::<ContentType>() {
                Err(Error::UnknownContentType(got)) => assert_eq!(got, s),
                other => panic!("expected UnknownContentType for {s:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn content_type_parse_ignores_mime_parameters() {
        let ct: ContentType = "application/json; charset=utf-8".parse().unwrap();
        assert_eq!(ct, ContentType::Json);
    }

    #[test]
    fn non_scalar_form_value_fails_with_encoding_error() {
        let input = params(&[("tags", json!(["a", "b"]))]);
        match encode(&input, ContentType::FormUrlEncoded) {
            Err(Error::Encoding(msg)) => assert!(msg.contains("tags")),
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }

    #[test]
    fn null_form_value_encodes_as_empty_field() {
        let input = params(&[("note", Value::Null)]);
        let bytes = encode(&input, ContentType::FormUrlEncoded).unwrap();
        assert_eq!(bytes, b"note=");
    }
}
