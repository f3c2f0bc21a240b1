//! HAL+JSON decoding.
//!
//! A HAL document is a JSON object whose `_links` member names navigable
//! relations, whose `_embedded` member nests sub-resources, and whose
//! remaining members are plain properties. [`Representation`] is the decoded
//! in-memory form; domain models read properties and follow links from it.
//!
//! Link hrefs may be URI templates (`{placeholder}` syntax); template
//! expansion is the caller's job, the decoder only preserves the string and
//! the `templated` flag.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{Error, Result};

/// A single link relation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The target endpoint, possibly a URI template.
    pub href: String,
    /// Whether `href` contains `{placeholder}` template expressions.
    pub templated: bool,
}

impl Link {
    fn from_value(value: &Value) -> Option<Link> {
        match value {
            Value::Object(object) => {
                let href = object.get("href")?.as_str()?.to_string();
                let templated = object
                    .get("templated")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                Some(Link { href, templated })
            }
            // A relation may hold an array of link objects; the first entry
            // is the one this API navigates.
            Value::Array(entries) => entries.first().and_then(Link::from_value),
            _ => None,
        }
    }
}

/// The decoded form of a HAL+JSON document.
///
/// Null-valued properties are stripped during decoding and never surface.
///
/// # Examples
///
/// ```
/// use bookhal::Representation;
///
/// let rep = Representation::decode(
///     r#"{"id":1,"name":"Acme","phone":null,
///         "_links":{"self":{"href":"/companies/1"}}}"#,
/// ).unwrap();
///
/// assert_eq!(rep.property("name").unwrap(), "Acme");
/// assert!(rep.property("phone").is_none());
/// assert_eq!(rep.link("self").unwrap().href, "/companies/1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    properties: Map<String, Value>,
    links: BTreeMap<String, Link>,
    embedded: BTreeMap<String, Vec<Representation>>,
}

impl Representation {
    /// Decodes a HAL+JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decoding`] when `body` is not well-formed JSON or is
    /// not a JSON object.
    pub fn decode(body: &str) -> Result<Representation> {
        let value: Value = serde_json::from_str(body).map_err(|e| Error::Decoding {
            raw_response: body.to_string(),
            serde_error: e.to_string(),
        })?;
        match value {
            Value::Object(object) => Ok(Representation::from_object(object)),
            other => Err(Error::Decoding {
                raw_response: body.to_string(),
                serde_error: format!("expected a JSON object, got {}", type_name(&other)),
            }),
        }
    }

    fn from_object(object: Map<String, Value>) -> Representation {
        let mut rep = Representation::default();
        for (key, value) in object {
            if key == "_links" {
                if let Value::Object(rels) = value {
                    for (rel, target) in rels {
                        if let Some(link) = Link::from_value(&target) {
                            rep.links.insert(rel, link);
                        }
                    }
                }
            } else if key == "_embedded" {
                if let Value::Object(rels) = value {
                    for (rel, nested) in rels {
                        rep.embedded.insert(rel, embedded_from_value(nested));
                    }
                }
            } else if !value.is_null() {
                rep.properties.insert(key, value);
            }
        }
        rep
    }

    /// All non-null properties of this resource.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// All link relations of this resource.
    pub fn links(&self) -> &BTreeMap<String, Link> {
        &self.links
    }

    /// Looks up a link by relation name.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }

    /// The embedded resources for a relation, in document order.
    pub fn embedded(&self, rel: &str) -> Option<&[Representation]> {
        self.embedded.get(rel).map(Vec::as_slice)
    }

    /// The first embedded resource for a relation.
    pub fn embedded_single(&self, rel: &str) -> Option<&Representation> {
        self.embedded.get(rel).and_then(|reps| reps.first())
    }
}

/// `_embedded` relations hold either a single resource object or an array of
/// them; both decode to a list. Non-object entries are dropped.
fn embedded_from_value(value: Value) -> Vec<Representation> {
    match value {
        Value::Object(object) => vec![Representation::from_object(object)],
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(object) => Some(Representation::from_object(object)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
