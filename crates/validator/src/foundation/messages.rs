//! Message overrides
//!
//! Atomic validators ship English default messages. A [`Messages`] table
//! replaces them per message key, either built in code or loaded from JSON:
//!
//! ```
//! use validatish::foundation::Messages;
//!
//! let messages = Messages::from_json(r#"{ "required": "please fill this in" }"#).unwrap();
//! assert_eq!(messages.get("required"), Some("please fill this in"));
//! ```
//!
//! Templates may reference the failure's parameters as `{name}`, e.g.
//! `"at least {min} {unit}"`.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::{BuildError, Invalid};

/// A mapping from message key to message template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages {
    templates: BTreeMap<String, String>,
}

impl Messages {
    /// Creates an empty table; every validator keeps its defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from a JSON object of strings.
    pub fn from_json(source: &str) -> Result<Self, BuildError> {
        serde_json::from_str(source).map_err(|e| BuildError::Messages(e.to_string()))
    }

    /// Overrides the template for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }

    /// Returns the override for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Returns true if no overrides are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Builds a leaf failure for `key`, rendering the override or `default`
    /// with `params`.
    pub(crate) fn invalid(
        &self,
        key: &'static str,
        default: &'static str,
        params: &[(&'static str, String)],
    ) -> Invalid {
        let message = self.render(key, default, params);
        params
            .iter()
            .fold(Invalid::new(key, message), |error, (name, value)| {
                error.with_param(*name, value.clone())
            })
    }

    fn render(
        &self,
        key: &str,
        default: &'static str,
        params: &[(&'static str, String)],
    ) -> Cow<'static, str> {
        let template = match self.get(key) {
            Some(template) => template,
            None if !default.contains('{') => return Cow::Borrowed(default),
            None => default,
        };
        Cow::Owned(interpolate(template, params))
    }
}

fn interpolate(template: &str, params: &[(&'static str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
