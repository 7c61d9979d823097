//! Length validators
//!
//! Strings are measured in Unicode scalar values (chars); arrays and objects
//! by their number of items.

use serde_json::Value;

use crate::foundation::{BuildError, Invalid, Messages, Rule, ValidatorKind};

/// What the measured length counts, used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Unit {
    Characters,
    Items,
}

impl Unit {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Items => "items",
        }
    }
}

fn measure(value: &Value) -> Option<(usize, Unit)> {
    match value {
        Value::String(s) => Some((s.chars().count(), Unit::Characters)),
        Value::Array(items) => Some((items.len(), Unit::Items)),
        Value::Object(map) => Some((map.len(), Unit::Items)),
        _ => None,
    }
}

/// Validates that a string or collection has a length within inclusive
/// bounds.
///
/// With neither bound set every value passes, including values that have no
/// length.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let validator = length(2, 4).unwrap();
/// assert!(validator.validate(&json!("abc")).is_ok());
/// assert!(validator.validate(&json!(["a", "b"])).is_ok());
///
/// let err = validator.validate(&json!("abcde")).unwrap_err();
/// assert_eq!(err.message, "must have between 2 and 4 characters");
///
/// assert!(length(5, 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
    messages: Messages,
}

impl Length {
    /// Creates a length validator from optional bounds.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, BuildError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(BuildError::InvertedBounds {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(Self {
            min,
            max,
            messages: Messages::new(),
        })
    }

    /// Returns the lower bound.
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    fn out_of_bounds(&self, unit: Unit, actual: usize) -> Invalid {
        let mut params = Vec::with_capacity(4);
        if let Some(min) = self.min {
            params.push(("min", min.to_string()));
        }
        if let Some(max) = self.max {
            params.push(("max", max.to_string()));
        }
        params.push(("unit", unit.as_str().to_string()));
        params.push(("actual", actual.to_string()));

        let (key, default) = match (self.min, self.max) {
            (Some(_), Some(_)) => ("length_between", "must have between {min} and {max} {unit}"),
            (None, _) => ("length_fewer", "must have {max} or fewer {unit}"),
            (_, None) => ("length_more", "must have {min} or more {unit}"),
        };
        self.messages.invalid(key, default, &params)
    }
}

impl Rule for Length {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Length
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        if self.min.is_none() && self.max.is_none() {
            return Ok(());
        }

        let Some((len, unit)) = measure(value) else {
            return Err(self.messages.invalid(
                "type_sized",
                "must be a string or a collection",
                &[],
            ));
        };

        let too_long = self.max.is_some_and(|max| len > max);
        let too_short = self.min.is_some_and(|min| len < min);
        if too_long || too_short {
            Err(self.out_of_bounds(unit, len))
        } else {
            Ok(())
        }
    }
}

/// Creates a length validator with both bounds.
///
/// Returns an error if `min > max`.
pub fn length(min: usize, max: usize) -> Result<Length, BuildError> {
    Length::new(Some(min), Some(max))
}

/// Creates a length validator with a lower bound.
#[must_use]
pub fn min_length(min: usize) -> Length {
    Length {
        min: Some(min),
        ..Length::default()
    }
}

/// Creates a length validator with an upper bound.
#[must_use]
pub fn max_length(max: usize) -> Length {
    Length {
        max: Some(max),
        ..Length::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("abc"), true)]
    #[case(json!(["a", "b", "c"]), true)]
    #[case(json!("a"), false)]
    #[case(json!("ab"), false)]
    #[case(json!(""), false)]
    #[case(json!([]), false)]
    #[case(json!(["a"]), false)]
    #[case(json!(["ab"]), false)]
    fn test_min_length(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(min_length(3).validate(&value).is_ok(), ok, "{value}");
    }

    #[rstest]
    #[case(json!("abc"), true)]
    #[case(json!(["a", "b", "c"]), true)]
    #[case(json!(""), true)]
    #[case(json!([]), true)]
    #[case(json!(["abcd"]), true)]
    #[case(json!("abcde"), false)]
    #[case(json!("abcd"), false)]
    #[case(json!(["a", "b", "c", "d"]), false)]
    fn test_max_length(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(max_length(3).validate(&value).is_ok(), ok, "{value}");
    }

    #[test]
    fn test_length_messages() {
        let err = min_length(3).validate(&json!("")).unwrap_err();
        assert_eq!(err.code, "length_more");
        assert_eq!(err.message, "must have 3 or more characters");

        let err = max_length(3).validate(&json!("aaaaaaaaaa")).unwrap_err();
        assert_eq!(err.code, "length_fewer");
        assert_eq!(err.message, "must have 3 or fewer characters");
        assert_eq!(err.param("actual"), Some("10"));

        let err = max_length(1).validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.message, "must have 1 or fewer items");
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(max_length(2).validate(&json!("日本")).is_ok());
        assert!(max_length(1).validate(&json!("日本")).is_err());
    }

    #[test]
    fn test_length_objects() {
        assert!(min_length(1).validate(&json!({"a": 1})).is_ok());
        assert!(min_length(1).validate(&json!({})).is_err());
    }

    #[test]
    fn test_length_without_bounds() {
        let validator = Length::new(None, None).unwrap();
        assert!(validator.validate(&json!(1)).is_ok());
        assert!(validator.validate(&json!("anything")).is_ok());
    }

    #[test]
    fn test_length_wrong_type() {
        let err = min_length(1).validate(&json!(12)).unwrap_err();
        assert_eq!(err.code, "type_sized");
    }

    #[test]
    fn test_length_inverted_bounds() {
        assert_eq!(
            length(5, 2).unwrap_err(),
            BuildError::InvertedBounds {
                min: "5".into(),
                max: "2".into()
            }
        );
        assert!(length(2, 2).is_ok());
    }
}
