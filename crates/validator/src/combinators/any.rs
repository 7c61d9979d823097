//! ANY combinator - logical disjunction of validators
//!
//! This module provides the [`Any`] combinator: at least one child must
//! accept the value. Children run in construction order and the first
//! success ends evaluation.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::combinators::any;
//! use validatish::prelude::*;
//!
//! let validator = any([Validator::from(string()), integer().into()]);
//! assert!(validator.validate(&json!("1")).is_ok());
//! assert!(validator.validate(&json!(1)).is_ok());
//!
//! let err = validator.validate(&json!(0.5)).unwrap_err();
//! assert_eq!(err.message, "Please fix any of: must be a string; must be an integer");
//! ```

use std::sync::Arc;

use serde_json::Value;

use super::all::join_messages;
use crate::foundation::{Invalid, Validate, Validator};

/// Prefix of the message reported when every alternative fails.
pub const ANY_PREFIX: &str = "Please fix any of: ";

/// Combines validators with logical OR.
///
/// Returns `Ok(())` on the first child that accepts the value; later
/// children are not evaluated. If every child fails, the error carries one
/// cause per child.
///
/// An empty `Any` has no child to accept the value, so it always fails. Use
/// [`always`](crate::validators::always) for a validator that accepts
/// everything.
#[derive(Debug, Clone)]
pub struct Any {
    children: Arc<[Validator]>,
}

impl Any {
    /// Creates a new `Any` combinator.
    pub fn new<I, V>(children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Validator>,
    {
        Self {
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the child validators.
    pub fn children(&self) -> &[Validator] {
        &self.children
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.children, &other.children)
    }
}

impl Validate for Any {
    fn validate(&self, value: &Value) -> Result<(), Invalid> {
        let mut errors = Vec::with_capacity(self.children.len());

        for (index, child) in self.children.iter().enumerate() {
            match child.validate(value) {
                Ok(()) => {
                    tracing::trace!(index, "any: alternative accepted value");
                    return Ok(());
                }
                Err(e) => errors.push(e),
            }
        }

        tracing::trace!(children = self.children.len(), "any: every alternative rejected value");

        let message = format!("{ANY_PREFIX}{}", join_messages(&errors));
        Err(Invalid::new("any", message)
            .with_causes(errors)
            .with_origin(Validator::Any(self.clone())))
    }
}

/// Creates an `Any` combinator from a list of validators.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::combinators::any;
/// use validatish::prelude::*;
///
/// let validator = any([equal("yes"), equal("no")]);
/// assert!(validator.validate(&json!("no")).is_ok());
/// assert!(validator.validate(&json!("maybe")).is_err());
/// ```
pub fn any<I, V>(children: I) -> Any
where
    I: IntoIterator<Item = V>,
    V: Into<Validator>,
{
    Any::new(children)
}
