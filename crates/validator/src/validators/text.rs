//! Plain text validator
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let slug = plain_text_with("-").unwrap();
//! assert!(slug.validate(&json!("hello-world")).is_ok());
//! assert!(slug.validate(&json!("hello_world")).is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::types::{TYPE_STRING, TYPE_STRING_DEFAULT};
use crate::foundation::{BuildError, Invalid, Messages, Rule, ValidatorKind};

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*$").unwrap());

/// Validates that a string consists of ASCII letters, digits and a fixed set
/// of extra characters.
///
/// The empty string passes.
#[derive(Debug, Clone)]
pub struct PlainText {
    pattern: Regex,
    extra: String,
    messages: Messages,
}

impl PlainText {
    /// Creates a validator allowing letters and digits only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: ALPHANUMERIC_REGEX.clone(),
            extra: String::new(),
            messages: Messages::new(),
        }
    }

    /// Creates a validator that also allows each character of `extra`.
    ///
    /// The characters are taken literally, so `"-"` or `"]"` are safe.
    pub fn with_extra(extra: impl Into<String>) -> Result<Self, BuildError> {
        let extra = extra.into();
        if extra.is_empty() {
            return Ok(Self::new());
        }
        let pattern = Regex::new(&format!(r"^[a-zA-Z0-9{}]*$", regex::escape(&extra)))?;
        Ok(Self {
            pattern,
            extra,
            messages: Messages::new(),
        })
    }

    /// Returns the extra allowed characters.
    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Default for PlainText {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PlainText {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::PlainText
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        let Some(text) = value.as_str() else {
            return Err(self.messages.invalid(TYPE_STRING, TYPE_STRING_DEFAULT, &[]));
        };
        if self.pattern.is_match(text) {
            Ok(())
        } else {
            Err(self.messages.invalid(
                "characters",
                "must consist of characters and numbers only",
                &[],
            ))
        }
    }
}

/// Creates a `PlainText` validator allowing letters and digits.
#[must_use]
pub fn plain_text() -> PlainText {
    PlainText::new()
}

/// Creates a `PlainText` validator that also allows the characters of `extra`.
pub fn plain_text_with(extra: impl Into<String>) -> Result<PlainText, BuildError> {
    PlainText::with_extra(extra)
}
