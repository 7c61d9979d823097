//! Core traits for the validation system
//!
//! - [`Rule`] is what an atomic validator implements: one check over a
//!   present value.
//! - [`Validate`] is the contract every validator exposes, atomic or
//!   compound. It is implemented for every `Rule` and applies the
//!   skip-on-absent policy in one place.
//! - [`ValidateExt`] adds `.and()` / `.or()` composition.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::foundation::{Invalid, Validator, ValidatorKind};

// ============================================================================
// ATOMIC RULE TRAIT
// ============================================================================

/// An atomic validator: judges a value directly against one rule.
///
/// `check` is only called with `Value::Null` when [`Rule::checks_absent`]
/// returns true; otherwise absent values are accepted before the rule runs.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use validatish::foundation::{Invalid, Rule, Validate, ValidatorKind};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Rule for Even {
///     fn kind(&self) -> ValidatorKind {
///         ValidatorKind::custom("even")
///     }
///
///     fn check(&self, value: &Value) -> Result<(), Invalid> {
///         match value.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(()),
///             _ => Err(Invalid::new("even", "must be even")),
///         }
///     }
/// }
///
/// assert!(Even.validate(&json!(4)).is_ok());
/// assert!(Even.validate(&json!(3)).is_err());
/// assert!(Even.validate(&Value::Null).is_ok());
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// The kind reported to graph introspection.
    fn kind(&self) -> ValidatorKind;

    /// Checks a value.
    fn check(&self, value: &Value) -> Result<(), Invalid>;

    /// Returns true if this rule judges absent values itself.
    ///
    /// Only presence checks should return true.
    fn checks_absent(&self) -> bool {
        false
    }

    /// Returns true for the no-op default validator.
    fn is_noop(&self) -> bool {
        false
    }
}

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The contract shared by every validator.
///
/// `validate` never panics on unexpected input types: type mismatches are
/// reported as [`Invalid`].
pub trait Validate {
    /// Validates a value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is valid
    /// * `Err(Invalid)` describing every applicable failure otherwise
    fn validate(&self, value: &Value) -> Result<(), Invalid>;

    /// Validates any serializable value by converting it to a [`Value`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// use validatish::prelude::*;
    ///
    /// let validator = min_length(3);
    /// assert!(validator.validate_any("hello").is_ok());
    /// assert!(validator.validate_any(&vec![1, 2]).is_err());
    /// assert!(validator.validate_any(&None::<String>).is_ok());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), Invalid>
    where
        Self: Sized,
        S: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| {
            Invalid::new(
                "serialize",
                format!("cannot be represented as a value: {e}"),
            )
        })?;
        self.validate(&value)
    }
}

impl<R: Rule + ?Sized> Validate for R {
    fn validate(&self, value: &Value) -> Result<(), Invalid> {
        if value.is_null() && !self.checks_absent() {
            return Ok(());
        }
        self.check(value)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for everything convertible into a
/// [`Validator`].
///
/// # Examples
///
/// ```
/// use validatish::prelude::*;
/// use serde_json::json;
///
/// let validator = required().and(string());
/// assert!(validator.validate(&json!("x")).is_ok());
/// assert!(validator.validate(&json!("")).is_err());
///
/// let validator = string().or(integer());
/// assert!(validator.validate(&json!(1)).is_ok());
/// ```
pub trait ValidateExt: Into<Validator> + Sized {
    /// Combines two validators with logical AND: `All([self, other])`.
    ///
    /// Both are always evaluated so every failure is reported.
    fn and<V: Into<Validator>>(self, other: V) -> Validator {
        Validator::all([self.into(), other.into()])
    }

    /// Combines two validators with logical OR: `Any([self, other])`.
    ///
    /// Short-circuits on the first success.
    fn or<V: Into<Validator>>(self, other: V) -> Validator {
        Validator::any([self.into(), other.into()])
    }
}

impl<T: Into<Validator>> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
