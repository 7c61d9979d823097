//! ALL combinator - logical conjunction of validators
//!
//! This module provides the [`All`] combinator: every child must accept the
//! value. All children are evaluated, so the failure reports every applicable
//! error, in child order.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::combinators::all;
//! use validatish::prelude::*;
//!
//! let validator = all([Validator::from(string()), required().into()]);
//! assert!(validator.validate(&json!("abc")).is_ok());
//!
//! let err = validator.validate(&json!(1)).unwrap_err();
//! assert_eq!(err.errors(), vec!["must be a string"]);
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Invalid, Validate, Validator};

/// Combines validators with logical AND.
///
/// Returns `Ok(())` when no child fails. Otherwise the error's message is the
/// children's messages joined with `"; "`, and its causes are the children's
/// errors in order. An empty `All` accepts every value.
#[derive(Debug, Clone)]
pub struct All {
    children: Arc<[Validator]>,
}

impl All {
    /// Creates a new `All` combinator.
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

impl Validate for All {
    fn validate(&self, value: &Value) -> Result<(), Invalid> {
        let errors: Vec<Invalid> = self
            .children
            .iter()
            .filter_map(|child| child.validate(value).err())
            .collect();

        if errors.is_empty() {
            return Ok(());
        }

        tracing::trace!(
            failed = errors.len(),
            children = self.children.len(),
            "all: children rejected value"
        );

        let message = join_messages(&errors);
        Err(Invalid::new("all", message)
            .with_causes(errors)
            .with_origin(Validator::All(self.clone())))
    }
}

pub(crate) fn join_messages(errors: &[Invalid]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_ref())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Creates an `All` combinator from a list of validators.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::combinators::all;
/// use validatish::prelude::*;
///
/// let validator = all([min_length(3), max_length(5)]);
/// assert!(validator.validate(&json!("abcd")).is_ok());
/// assert!(validator.validate(&json!("ab")).is_err());
/// ```
pub fn all<I, V>(children: I) -> All
where
    I: IntoIterator<Item = V>,
    V: Into<Validator>,
{
    All::new(children)
}
