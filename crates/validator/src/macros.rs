//! Macros for building validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`all!`]: conjunction of validators of any type
//! - [`any!`]: disjunction of validators of any type
//! - `rule!` (crate-internal): struct + `Rule` impl + factory fn for
//!   atomic validators configured only by a message table
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let validator = all![required(), any![string(), integer()]];
//! assert!(validator.validate(&json!(12)).is_ok());
//! assert!(validator.validate(&json!(null)).is_err());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates an atomic validator whose only configuration is its message table.
///
/// Generates the struct (`Debug, Clone, Default, PartialEq, Eq`), `new`,
/// `with_messages`, the [`Rule`](crate::foundation::Rule) impl and a factory
/// function.
///
/// ```rust,ignore
/// rule! {
///     /// Checks that a value is a string.
///     pub IsString => String;
///     check(self, value) {
///         if value.is_string() { Ok(()) } else { Err(self.messages.invalid("type_string", "must be a string", &[])) }
///     }
///     fn string();
/// }
/// ```
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $kind:ident;
        check($self_:ident, $value:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        $vis struct $name {
            messages: $crate::foundation::Messages,
        }

        impl $name {
            /// Creates the validator with default messages.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Replaces default messages with `messages`.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_messages(mut self, messages: $crate::foundation::Messages) -> Self {
                self.messages = messages;
                self
            }
        }

        impl $crate::foundation::Rule for $name {
            fn kind(&self) -> $crate::foundation::ValidatorKind {
                $crate::foundation::ValidatorKind::$kind
            }

            fn check(
                &$self_,
                $value: &::serde_json::Value,
            ) -> ::std::result::Result<(), $crate::foundation::Invalid> $body
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };
}

pub(crate) use rule;

// ============================================================================
// ALL MACRO
// ============================================================================

/// Builds an `All` validator from validators of mixed types.
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let validator = all![string(), required()];
/// assert!(validator.validate(&json!("x")).is_ok());
/// assert!(all![].validate(&json!(1)).is_ok());
/// ```
#[macro_export]
macro_rules! all {
    () => {
        $crate::foundation::Validator::all(
            ::std::vec::Vec::<$crate::foundation::Validator>::new(),
        )
    };
    ($($child:expr),+ $(,)?) => {
        $crate::foundation::Validator::all([
            $($crate::foundation::Validator::from($child)),+
        ])
    };
}

// ============================================================================
// ANY MACRO
// ============================================================================

/// Builds an `Any` validator from validators of mixed types.
///
/// ```
/// use serde_json::json;
/// use validatish::prelude::*;
///
/// let validator = any![string(), integer()];
/// assert!(validator.validate(&json!(1)).is_ok());
/// assert!(any![].validate(&json!(1)).is_err());
/// ```
#[macro_export]
macro_rules! any {
    () => {
        $crate::foundation::Validator::any(
            ::std::vec::Vec::<$crate::foundation::Validator>::new(),
        )
    };
    ($($child:expr),+ $(,)?) => {
        $crate::foundation::Validator::any([
            $($crate::foundation::Validator::from($child)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================
