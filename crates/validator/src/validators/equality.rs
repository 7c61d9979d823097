//! Equality validators
//!
//! Numbers compare by numeric value, so `equal(1)` accepts `1.0`. Arrays
//! compare element-wise.

use serde_json::Value;

use super::{display_value, values_equal};
use crate::foundation::{Invalid, Messages, Rule, ValidatorKind};

// ============================================================================
// EQUAL
// ============================================================================

/// Validates that a value equals a fixed value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let validator = equal("matches this");
/// assert!(validator.validate(&json!("matches this")).is_ok());
///
/// let err = validator.validate(&json!("foo")).unwrap_err();
/// assert_eq!(err.message, "must equal matches this");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Equal {
    expected: Value,
    messages: Messages,
}

impl Equal {
    /// Creates a validator accepting only values equal to `expected`.
    #[must_use]
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            messages: Messages::new(),
        }
    }

    /// Returns the value compared against.
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Rule for Equal {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Equal
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        if values_equal(value, &self.expected) {
            Ok(())
        } else {
            Err(self.messages.invalid(
                "incorrect",
                "must equal {expected}",
                &[("expected", display_value(&self.expected))],
            ))
        }
    }
}

/// Creates an `Equal` validator.
#[must_use]
pub fn equal(expected: impl Into<Value>) -> Equal {
    Equal::new(expected)
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a value is a member of a fixed set.
///
/// An empty set rejects every present value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let odd = one_of([3, 5, 7, 9]);
/// assert!(odd.validate(&json!(5)).is_ok());
///
/// let err = odd.validate(&json!(2)).unwrap_err();
/// assert_eq!(err.message, "must be one of 3, 5, 7, 9");
///
/// let answer = OneOf::chars("yn");
/// assert!(answer.validate(&json!("y")).is_ok());
/// assert!(answer.validate(&json!("yn")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    values: Vec<Value>,
    messages: Messages,
}

impl OneOf {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            messages: Messages::new(),
        }
    }

    /// Creates a set whose members are the single characters of `chars`.
    pub fn chars(chars: &str) -> Self {
        Self::new(chars.chars().map(String::from))
    }

    /// Returns the allowed values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Rule for OneOf {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::OneOf
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        if self.values.iter().any(|allowed| values_equal(value, allowed)) {
            return Ok(());
        }

        let values = self
            .values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", ");
        Err(self
            .messages
            .invalid("one_of", "must be one of {values}", &[("values", values)]))
    }
}

/// Creates a `OneOf` validator.
pub fn one_of<I, V>(values: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    fn non_members() -> Vec<Value> {
        vec![
            json!("foo"),
            json!(["a", "b", "c"]),
            json!("1"),
            json!(2),
            json!(4),
            json!(6),
            json!(8),
            json!(10),
            json!(""),
            json!([]),
        ]
    }

    #[test]
    fn test_equal() {
        let validator = equal("matches this");
        assert!(validator.validate(&json!("matches this")).is_ok());
        assert!(validator.validate(&Value::Null).is_ok());
        for value in non_members() {
            let err = validator.validate(&value).unwrap_err();
            assert_eq!(err.code, "incorrect");
            assert_eq!(err.param("expected"), Some("matches this"));
        }
    }

    #[rstest]
    #[case(json!(1), json!(1.0), true)]
    #[case(json!(1), json!("1"), false)]
    #[case(json!([1, 2]), json!([1, 2]), true)]
    #[case(json!(true), json!(1), false)]
    fn test_equal_cases(#[case] expected: Value, #[case] input: Value, #[case] ok: bool) {
        assert_eq!(equal(expected).validate(&input).is_ok(), ok);
    }

    #[test]
    fn test_one_of_numbers() {
        let validator = one_of([3, 5, 7, 9]);
        for n in [3, 5, 7, 9] {
            assert!(validator.validate(&json!(n)).is_ok());
        }
        assert!(validator.validate(&Value::Null).is_ok());
        for value in non_members() {
            assert!(validator.validate(&value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_one_of_chars() {
        let validator = OneOf::chars("ynsbl");
        for c in ["y", "b", "l", "n"] {
            assert!(validator.validate(&json!(c)).is_ok());
        }
        for value in non_members()
            .into_iter()
            .chain([json!("x"), json!("yy"), json!("yn")])
        {
            assert!(validator.validate(&value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_one_of_lists() {
        let validator = one_of([json!([1, 2]), json!([3, 4]), json!([5, 6])]);
        assert!(validator.validate(&json!([1, 2])).is_ok());
        assert!(validator.validate(&json!([5, 6])).is_ok());
        assert!(validator.validate(&json!([2, 1])).is_err());
        for value in non_members() {
            assert!(validator.validate(&value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_one_of_empty_set() {
        let validator = one_of(Vec::<Value>::new());
        for value in [json!([1, 2]), json!([3, 4]), json!("x")] {
            assert!(validator.validate(&value).is_err());
        }
        assert!(validator.validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_one_of_message() {
        let err = one_of(["a", "b"]).validate(&json!("c")).unwrap_err();
        assert_eq!(err.message, "must be one of a, b");
        assert_eq!(err.param("values"), Some("a, b"));
    }
}
