//! String format validators
//!
//! Email addresses, domain names and URLs, checked against patterns compiled
//! once per process.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::types::{TYPE_STRING, TYPE_STRING_DEFAULT};
use crate::foundation::{Invalid, Messages, Rule, ValidatorKind};

const LABEL: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?";

static DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{LABEL}(?:\.{LABEL})+$")).unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{{|}}~-]+@{LABEL}(?:\.{LABEL})+$"
    ))
    .unwrap()
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:(?:https?|ftp)://)?{LABEL}(?:\.{LABEL})+(?::\d{{1,5}})?(?:[/?#]\S*)?$"
    ))
    .unwrap()
});

static URL_WITH_SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:https?|ftp)://{LABEL}(?:\.{LABEL})+(?::\d{{1,5}})?(?:[/?#]\S*)?$"
    ))
    .unwrap()
});

fn matches_str(
    messages: &Messages,
    value: &Value,
    pattern: &Regex,
    key: &'static str,
    default: &'static str,
) -> Result<(), Invalid> {
    let Some(text) = value.as_str() else {
        return Err(messages.invalid(TYPE_STRING, TYPE_STRING_DEFAULT, &[]));
    };
    if pattern.is_match(text) {
        Ok(())
    } else {
        Err(messages.invalid(key, default, &[]))
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::macros::rule! {
    /// Validates email format: `local@domain.tld`.
    ///
    /// The domain must contain at least one dot, and there must be exactly
    /// one `@`.
    pub Email => Email;
    check(self, value) {
        matches_str(&self.messages, value, &EMAIL_REGEX, "email", "must be an email")
    }
    fn email();
}

// ============================================================================
// DOMAIN NAME VALIDATOR
// ============================================================================

crate::macros::rule! {
    /// Validates a dotted host name such as `example.co.uk`.
    pub DomainName => DomainName;
    check(self, value) {
        matches_str(
            &self.messages,
            value,
            &DOMAIN_REGEX,
            "domain_name",
            "must be a valid domain name",
        )
    }
    fn domain_name();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates URL format: `[scheme://]domain.tld[:port][/path]`.
///
/// Accepted schemes are `http`, `https` and `ftp`. The scheme is optional
/// unless the validator was built with [`url_with_scheme`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// assert!(url().validate(&json!("foo.com")).is_ok());
/// assert!(url().validate(&json!("https://foo.com:8080/a?b=c")).is_ok());
///
/// let err = url_with_scheme().validate(&json!("foo.com")).unwrap_err();
/// assert_eq!(err.code, "url_scheme");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Url {
    with_scheme: bool,
    messages: Messages,
}

impl Url {
    /// Creates a validator for which the scheme is optional.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that rejects URLs without a scheme.
    #[must_use]
    pub fn with_scheme() -> Self {
        Self {
            with_scheme: true,
            messages: Messages::new(),
        }
    }

    /// Returns true if a scheme is mandatory.
    pub fn requires_scheme(&self) -> bool {
        self.with_scheme
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Rule for Url {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Url
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        matches_str(&self.messages, value, &URL_REGEX, "url", "must be a url")?;

        if self.with_scheme {
            matches_str(
                &self.messages,
                value,
                &URL_WITH_SCHEME_REGEX,
                "url_scheme",
                "must include a scheme such as http://",
            )?;
        }
        Ok(())
    }
}

/// Creates a `Url` validator with an optional scheme.
#[must_use]
pub fn url() -> Url {
    Url::new()
}

/// Creates a `Url` validator that requires a scheme.
#[must_use]
pub fn url_with_scheme() -> Url {
    Url::with_scheme()
}

// ============================================================================
// TESTS
// ============================================================================
