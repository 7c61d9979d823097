//! Presence validator
//!
//! [`Required`] is the only built-in validator that sees absent values.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let validator = required();
//! assert!(validator.validate(&json!("x")).is_ok());
//! assert!(validator.validate(&json!(0)).is_ok());
//! assert!(validator.validate(&json!("")).is_err());
//! assert!(validator.validate(&json!(null)).is_err());
//! ```

use serde_json::Value;

use crate::foundation::{Invalid, Messages, Rule, ValidatorKind};

const KEY: &str = "required";
const DEFAULT: &str = "is required";

/// Validates that a value is present.
///
/// Missing means `null`, an empty string, an empty array or an empty object.
/// Zero, `false` and whitespace-only strings are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Required {
    messages: Messages,
}

impl Required {
    /// Creates a presence validator with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Rule for Required {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Required
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        if is_missing(value) {
            Err(self.messages.invalid(KEY, DEFAULT, &[]))
        } else {
            Ok(())
        }
    }

    fn checks_absent(&self) -> bool {
        true
    }
}

fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Creates a `Required` validator.
#[must_use]
pub fn required() -> Required {
    Required::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(0.0))]
    #[case(json!(0))]
    #[case(json!(false))]
    #[case(json!(" "))]
    #[case(json!([""]))]
    #[case(json!("0"))]
    #[case(json!([null]))]
    #[case(json!("None"))]
    #[case(json!({"a": null}))]
    fn test_required_pass(#[case] value: Value) {
        assert!(required().validate(&value).is_ok(), "{value} should pass");
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(""))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn test_required_fail(#[case] value: Value) {
        let err = required().validate(&value).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "is required");
    }

    #[test]
    fn test_required_custom_message() {
        let validator = required().with_messages(Messages::new().with("required", "fill me in"));
        let err = validator.validate(&json!("")).unwrap_err();
        assert_eq!(err.message, "fill me in");
    }

    #[test]
    fn test_required_checks_absent() {
        assert!(required().checks_absent());
        assert_eq!(required().kind(), ValidatorKind::Required);
    }
}
