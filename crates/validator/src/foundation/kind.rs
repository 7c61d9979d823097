//! Validator kinds
//!
//! Every validator reports an explicit [`ValidatorKind`]. Graph introspection
//! (see [`crate::introspect`]) switches on this discriminant instead of
//! inspecting concrete types.

use std::borrow::Cow;
use std::fmt;

/// The discriminant of a validator.
///
/// Built-in atomic validators each have their own variant. Validators built
/// from closures via [`Validator::from_fn`](crate::foundation::Validator::from_fn)
/// report [`ValidatorKind::Custom`] with the name they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidatorKind {
    /// Presence check.
    Required,
    /// Value must be a string.
    String,
    /// Value must be an integral number.
    Integer,
    /// Value must be a number.
    Number,
    /// String restricted to letters, digits and configured extras.
    PlainText,
    /// Email address format.
    Email,
    /// Domain name format.
    DomainName,
    /// URL format.
    Url,
    /// Equality with a fixed value.
    Equal,
    /// Membership in a fixed set.
    OneOf,
    /// String or collection length bounds.
    Length,
    /// Numeric bounds.
    Range,
    /// Always passes.
    Always,
    /// Conjunction of child validators.
    All,
    /// Disjunction of child validators.
    Any,
    /// Caller-defined validator, identified by name.
    Custom(Cow<'static, str>),
}

impl ValidatorKind {
    /// Creates a custom kind.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(name.into())
    }

    /// Returns a stable snake_case name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::PlainText => "plain_text",
            Self::Email => "email",
            Self::DomainName => "domain_name",
            Self::Url => "url",
            Self::Equal => "equal",
            Self::OneOf => "one_of",
            Self::Length => "length",
            Self::Range => "range",
            Self::Always => "always",
            Self::All => "all",
            Self::Any => "any",
            Self::Custom(name) => name,
        }
    }

    /// Returns true for kinds that own child validators.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::All | Self::Any)
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_kinds() {
        assert!(ValidatorKind::All.is_compound());
        assert!(ValidatorKind::Any.is_compound());
        assert!(!ValidatorKind::Required.is_compound());
        assert!(!ValidatorKind::custom("all").is_compound());
    }

    #[test]
    fn test_custom_kind_equality() {
        assert_eq!(ValidatorKind::custom("slug"), ValidatorKind::custom("slug"));
        assert_ne!(ValidatorKind::custom("slug"), ValidatorKind::custom("other"));
        assert_eq!(ValidatorKind::custom("slug").to_string(), "slug");
    }
}
