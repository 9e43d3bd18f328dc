//! # Operation Records
//!
//! [`Operation`] is one HTTP method + path pair handed over by the specification
//! parser. The grouping pass owns each record while it runs and only ever touches
//! three fields: [`Operation::path`], [`Operation::base_name`] and
//! [`Operation::subresource_operation`]. Everything else is carried through for
//! the rendering stage.

use http::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single API operation awaiting resource grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation identifier from the spec (e.g. `list_pets`)
    #[serde(default)]
    pub operation_id: String,
    /// HTTP method
    #[serde(with = "method_serde")]
    pub method: Method,
    /// Path template, relative to the group base path once grouped
    pub path: String,
    /// Declared grouping tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Short description, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Group key or shared base path resolved by the grouping pass
    #[serde(default)]
    pub base_name: String,
    /// True when the path left after base-path stripping is non-empty
    #[serde(default)]
    pub subresource_operation: bool,
    /// Vendor extensions (`x-*`) and any other generator metadata
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
}

impl Operation {
    /// Create an operation with no tag, summary or extensions.
    pub fn new(operation_id: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Operation {
            operation_id: operation_id.into(),
            method,
            path: path.into(),
            tag: None,
            summary: None,
            base_name: String::new(),
            subresource_operation: false,
            extensions: Map::new(),
        }
    }

    /// Attach a grouping tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach a summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Human-readable `METHOD path` label used in logs and validation output.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Recompute the subresource flag from the current path.
    pub(crate) fn mark_subresource(&mut self) {
        self.subresource_operation = !self.path.is_empty();
    }
}

/// Serialize [`Method`] as its upper-case token and accept any case on input.
mod method_serde {
    use http::Method;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let upper = raw.to_ascii_uppercase();
        match upper.as_str() {
            "GET" | "POST" | "PUT" | "DELETE" | "PATCH" | "OPTIONS" | "HEAD" | "TRACE" => {
                Method::from_bytes(upper.as_bytes()).map_err(D::Error::custom)
            }
            _ => Err(D::Error::custom(format!("unsupported HTTP method '{raw}'"))),
        }
    }
}
