//! Numeric range validator

use serde_json::Value;

use super::types::{TYPE_NUMBER, TYPE_NUMBER_DEFAULT};
use crate::foundation::{BuildError, Invalid, Messages, Rule, ValidatorKind};

/// Validates that a number lies within inclusive bounds.
///
/// With neither bound set any number passes. Non-numbers fail with the
/// number type message.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let validator = range(1.0, 3.0).unwrap();
/// assert!(validator.validate(&json!(2.23)).is_ok());
/// assert!(validator.validate(&json!(3)).is_ok());
///
/// let err = validator.validate(&json!(4)).unwrap_err();
/// assert_eq!(err.message, "must be between 1 and 3");
///
/// assert!(range(3.0, 1.0).is_err());
/// assert!(range(f64::NAN, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
    min: Option<f64>,
    max: Option<f64>,
    messages: Messages,
}

impl Range {
    /// Creates a range validator from optional bounds.
    ///
    /// Returns an error if a bound is not finite or `min > max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, BuildError> {
        for bound in [min, max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(BuildError::NonFiniteBound(bound.to_string()));
            }
        }
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
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Replaces default messages with `messages`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    fn out_of_bounds(&self, actual: f64) -> Invalid {
        let mut params = Vec::with_capacity(3);
        if let Some(min) = self.min {
            params.push(("min", min.to_string()));
        }
        if let Some(max) = self.max {
            params.push(("max", max.to_string()));
        }
        params.push(("actual", actual.to_string()));

        let (key, default) = match (self.min, self.max) {
            (Some(_), Some(_)) => ("range_between", "must be between {min} and {max}"),
            (None, _) => ("range_less", "must be less than or equal to {max}"),
            (_, None) => ("range_greater", "must be greater than or equal to {min}"),
        };
        self.messages.invalid(key, default, &params)
    }
}

impl Rule for Range {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Range
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        let Some(n) = value.as_f64() else {
            return Err(self.messages.invalid(TYPE_NUMBER, TYPE_NUMBER_DEFAULT, &[]));
        };

        let too_big = self.max.is_some_and(|max| n > max);
        let too_small = self.min.is_some_and(|min| n < min);
        if too_big || too_small {
            Err(self.out_of_bounds(n))
        } else {
            Ok(())
        }
    }
}

/// Creates a range validator with both bounds.
///
/// Returns an error if a bound is not finite or `min > max`.
pub fn range(min: f64, max: f64) -> Result<Range, BuildError> {
    Range::new(Some(min), Some(max))
}

/// Creates a range validator with a lower bound.
///
/// A NaN bound never rejects; use [`Range::new`] to have bounds checked.
#[must_use]
pub fn min_value(min: f64) -> Range {
    Range {
        min: Some(min),
        ..Range::default()
    }
}

/// Creates a range validator with an upper bound.
///
/// A NaN bound never rejects; use [`Range::new`] to have bounds checked.
#[must_use]
pub fn max_value(max: f64) -> Range {
    Range {
        max: Some(max),
        ..Range::default()
    }
}
