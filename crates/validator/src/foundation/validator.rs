//! The validator graph node
//!
//! [`Validator`] is a tagged variant: an atomic rule, or one of the two
//! compound combinators owning an immutable list of children. Clones are
//! cheap (reference-counted) and a `Validator` can be shared across threads.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{All, Any};
use crate::foundation::{Invalid, Rule, Validate, ValidatorKind};

/// A node in a validation graph.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let either = Validator::any([Validator::from(string()), integer().into()]);
/// let validator = Validator::all([required().into(), either]);
/// assert!(validator.validate(&json!(1)).is_ok());
/// assert!(validator.validate(&json!(0.5)).is_err());
/// assert_eq!(validator.kind(), ValidatorKind::All);
/// ```
#[derive(Debug, Clone)]
pub enum Validator {
    /// A leaf judging values directly.
    Atomic(Arc<dyn Rule>),
    /// Every child must accept the value.
    All(All),
    /// At least one child must accept the value.
    Any(Any),
}

impl Validator {
    /// Wraps an atomic rule.
    pub fn atomic(rule: impl Rule + 'static) -> Self {
        Self::Atomic(Arc::new(rule))
    }

    /// Builds a conjunction of `children`.
    pub fn all<I, V>(children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Validator>,
    {
        Self::All(All::new(children))
    }

    /// Builds a disjunction of `children`.
    pub fn any<I, V>(children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Validator>,
    {
        Self::Any(Any::new(children))
    }

    /// Builds an atomic validator from a closure.
    ///
    /// The closure is not called for absent values.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use validatish::prelude::*;
    ///
    /// let even = Validator::from_fn("even", |v| match v.as_i64() {
    ///     Some(n) if n % 2 == 0 => Ok(()),
    ///     _ => Err(Invalid::new("even", "must be even")),
    /// });
    /// assert!(even.validate(&json!(2)).is_ok());
    /// assert!(even.validate(&json!(3)).is_err());
    /// assert_eq!(even.kind(), ValidatorKind::custom("even"));
    /// ```
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), Invalid> + Send + Sync + 'static,
    {
        Self::atomic(FnRule {
            name: name.into(),
            check: Box::new(check),
        })
    }

    /// Returns this node's kind.
    #[must_use]
    pub fn kind(&self) -> ValidatorKind {
        match self {
            Self::Atomic(rule) => rule.kind(),
            Self::All(_) => ValidatorKind::All,
            Self::Any(_) => ValidatorKind::Any,
        }
    }

    /// Returns the children of a compound node, `None` for atomics.
    #[must_use]
    pub fn children(&self) -> Option<&[Validator]> {
        match self {
            Self::Atomic(_) => None,
            Self::All(all) => Some(all.children()),
            Self::Any(any) => Some(any.children()),
        }
    }

    /// Returns true for the no-op default validator.
    ///
    /// This is a capability check; it never runs validation.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Atomic(rule) => rule.is_noop(),
            Self::All(_) | Self::Any(_) => false,
        }
    }

    /// Returns true if a validator of `kind` is guaranteed to apply.
    ///
    /// See [`validation_includes`](crate::introspect::validation_includes).
    #[must_use]
    pub fn includes(&self, kind: &ValidatorKind) -> bool {
        crate::introspect::validation_includes(Some(self), kind)
    }

    /// Returns true if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atomic(a), Self::Atomic(b)) => Arc::ptr_eq(a, b),
            (Self::All(a), Self::All(b)) => a.ptr_eq(b),
            (Self::Any(a), Self::Any(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Validate for Validator {
    fn validate(&self, value: &Value) -> Result<(), Invalid> {
        match self {
            Self::Atomic(rule) => {
                Validate::validate(&**rule, value).map_err(|e| e.or_origin(|| self.clone()))
            }
            Self::All(all) => all.validate(value),
            Self::Any(any) => any.validate(value),
        }
    }
}

impl<R: Rule + 'static> From<R> for Validator {
    fn from(rule: R) -> Self {
        Self::atomic(rule)
    }
}

impl From<All> for Validator {
    fn from(all: All) -> Self {
        Self::All(all)
    }
}

impl From<Any> for Validator {
    fn from(any: Any) -> Self {
        Self::Any(any)
    }
}

// ============================================================================
// CLOSURE RULE
// ============================================================================

type CheckFn = dyn Fn(&Value) -> Result<(), Invalid> + Send + Sync;

struct FnRule {
    name: Cow<'static, str>,
    check: Box<CheckFn>,
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

impl Rule for FnRule {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Custom(self.name.clone())
    }

    fn check(&self, value: &Value) -> Result<(), Invalid> {
        (self.check)(value)
    }
}
