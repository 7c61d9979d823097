//! Error types for validation failures
//!
//! [`Invalid`] is the single outcome type of a failed validation. Atomic
//! validators produce leaf errors (no causes); the `All` and `Any`
//! combinators wrap their children's errors as causes, forming a tree that
//! can be flattened into an ordered list of leaf messages.
//!
//! [`BuildError`] is separate: it reports a validator that could not be
//! constructed, and is never produced while validating.
//!
//! String fields use `Cow<'static, str>` so static codes and default messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;
use std::slice;

use smallvec::SmallVec;

use crate::foundation::Validator;

/// Ordered key/value parameters attached to an [`Invalid`].
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// INVALID
// ============================================================================

/// A validation failure.
///
/// # Examples
///
/// ```
/// use validatish::foundation::Invalid;
///
/// let leaf = Invalid::new("required", "is required");
/// assert!(leaf.is_leaf());
///
/// let parent = Invalid::new("all", "is required").with_causes(vec![leaf]);
/// assert_eq!(parent.errors(), vec!["is required"]);
/// ```
#[derive(Debug, Clone)]
pub struct Invalid {
    /// Message key, usable for programmatic handling and message overrides.
    ///
    /// Examples: "required", "type_string", "all"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Parameters the message was rendered from.
    ///
    /// Example: `[("min", "3"), ("unit", "characters")]`
    pub params: Params,

    causes: Option<Vec<Invalid>>,
    origin: Option<Validator>,
}

impl Invalid {
    /// Creates a leaf failure with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            causes: None,
            origin: None,
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches child failures, turning this into a compound failure.
    ///
    /// An empty vector still marks the error as compound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_causes(mut self, causes: Vec<Invalid>) -> Self {
        self.causes = Some(causes);
        self
    }

    /// Records the validator that produced this failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_origin(mut self, origin: Validator) -> Self {
        self.origin = Some(origin);
        self
    }

    pub(crate) fn or_origin(mut self, origin: impl FnOnce() -> Validator) -> Self {
        if self.origin.is_none() {
            self.origin = Some(origin());
        }
        self
    }

    /// Returns the child failures, or `None` for a leaf.
    #[must_use]
    pub fn causes(&self) -> Option<&[Invalid]> {
        self.causes.as_deref()
    }

    /// Returns the validator that produced this failure, if recorded.
    #[must_use]
    pub fn origin(&self) -> Option<&Validator> {
        self.origin.as_ref()
    }

    /// Returns true if this failure came from an atomic validator.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.causes.is_none()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Iterates over leaf messages, depth-first, in cause order.
    ///
    /// Nothing is collected up front; duplicates are kept.
    pub fn leaf_messages(&self) -> LeafMessages<'_> {
        LeafMessages {
            root: Some(self),
            stack: Vec::new(),
        }
    }

    /// Flattens the cause tree into its leaf messages.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.leaf_messages().collect()
    }

    /// Returns the number of leaf failures in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.causes {
            None => 1,
            Some(causes) => causes.iter().map(Invalid::leaf_count).sum(),
        }
    }

    /// Converts the failure tree to a JSON report.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "params": params,
            "origin": self.origin.as_ref().map(|v| v.kind().to_string()),
            "causes": self
                .causes
                .as_ref()
                .map(|causes| causes.iter().map(Invalid::to_json_value).collect::<Vec<_>>()),
        })
    }
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Invalid {}

// ============================================================================
// FLATTENING
// ============================================================================

/// Depth-first iterator over the leaf messages of an [`Invalid`].
///
/// Created by [`Invalid::leaf_messages`].
#[derive(Debug, Clone)]
pub struct LeafMessages<'a> {
    root: Option<&'a Invalid>,
    stack: Vec<slice::Iter<'a, Invalid>>,
}

impl<'a> Iterator for LeafMessages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if let Some(root) = self.root.take() {
            match root.causes.as_deref() {
                None => return Some(root.message.as_ref()),
                Some(causes) => self.stack.push(causes.iter()),
            }
        }

        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(error) => match error.causes.as_deref() {
                    None => return Some(error.message.as_ref()),
                    Some(causes) => self.stack.push(causes.iter()),
                },
            }
        }

        None
    }
}

// ============================================================================
// BUILD ERROR
// ============================================================================

/// A validator could not be constructed from the given configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Lower bound exceeds upper bound.
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: String, max: String },

    /// A numeric bound is NaN or infinite.
    #[error("bound {0} is not a finite number")]
    NonFiniteBound(String),

    /// A pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A message table could not be parsed.
    #[error("invalid message table: {0}")]
    Messages(String),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(message: &'static str) -> Invalid {
        Invalid::new("leaf", message)
    }

    #[test]
    fn test_simple_error() {
        let error = Invalid::new("required", "is required");
        assert_eq!(error.code, "required");
        assert_eq!(error.to_string(), "is required");
        assert!(error.is_leaf());
        assert!(error.causes().is_none());
        assert!(error.origin().is_none());
    }

    #[test]
    fn test_error_with_params() {
        let error = Invalid::new("length_more", "must have 3 or more characters")
            .with_param("min", "3")
            .with_param("unit", "characters");

        assert_eq!(error.param("min"), Some("3"));
        assert_eq!(error.param("unit"), Some("characters"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_leaf_flattens_to_itself() {
        assert_eq!(leaf("a").errors(), vec!["a"]);
        assert_eq!(leaf("a").leaf_count(), 1);
    }

    #[test]
    fn test_flatten_depth_first() {
        let error = Invalid::new("all", "root").with_causes(vec![
            Invalid::new("all", "inner").with_causes(vec![leaf("a"), leaf("b")]),
            leaf("c"),
            Invalid::new("any", "deep").with_causes(vec![
                Invalid::new("all", "deeper").with_causes(vec![leaf("d")]),
                leaf("a"),
            ]),
        ]);

        assert_eq!(error.errors(), vec!["a", "b", "c", "d", "a"]);
        assert_eq!(error.leaf_count(), 5);
    }

    #[test]
    fn test_empty_causes_flatten_to_nothing() {
        let error = Invalid::new("any", "Please fix any of: ").with_causes(Vec::new());
        assert!(!error.is_leaf());
        assert!(error.errors().is_empty());
        assert_eq!(error.leaf_count(), 0);
    }

    #[test]
    fn test_flatten_is_repeatable() {
        let error = Invalid::new("all", "x; y").with_causes(vec![leaf("x"), leaf("y")]);
        assert_eq!(error.errors(), error.errors());
        assert_eq!(error.leaf_messages().count(), 2);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = Invalid::new("required", "is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_json_report() {
        let error = Invalid::new("all", "must be a string")
            .with_causes(vec![Invalid::new("type_string", "must be a string")]);
        let report = error.to_json_value();

        assert_eq!(report["code"], "all");
        assert_eq!(report["causes"][0]["code"], "type_string");
        assert!(report["causes"][0]["causes"].is_null());
        assert!(report["origin"].is_null());
    }

    #[test]
    fn test_build_error_display() {
        let error = BuildError::InvertedBounds {
            min: "5".into(),
            max: "3".into(),
        };
        assert_eq!(error.to_string(), "minimum 5 is greater than maximum 3");
    }
}
