//! The no-op validator
//!
//! [`Always`] accepts every value. It is the default validator for fields
//! with no rules, and reports [`is_noop`](crate::foundation::Rule::is_noop)
//! so callers can tell "no validation configured" apart from a real rule
//! without running it.

use serde_json::Value;

use crate::foundation::{Invalid, Rule, ValidatorKind};

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Always;

impl Rule for Always {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Always
    }

    fn check(&self, _value: &Value) -> Result<(), Invalid> {
        Ok(())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// Creates the no-op validator.
#[must_use]
pub const fn always() -> Always {
    Always
}
