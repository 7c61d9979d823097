//! # validatish
//!
//! Composable validators for form-style values, with `All` / `Any`
//! combinators and nested error reports.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let age = all![required(), any![string(), integer()]];
//! assert!(age.validate(&json!(42)).is_ok());
//!
//! let err = age.validate(&json!(0.5)).unwrap_err();
//! assert_eq!(
//!     err.errors(),
//!     vec!["must be a string", "must be an integer"],
//! );
//! ```
//!
//! ## Concepts
//!
//! - A candidate value is a [`serde_json::Value`]; `null` means "absent".
//!   Every atomic validator except [`Required`](validators::Required)
//!   accepts the absent value.
//! - [`All`](combinators::All) evaluates every child and reports every
//!   failure. [`Any`](combinators::Any) stops at the first child that
//!   accepts the value.
//! - A failure is an [`Invalid`](foundation::Invalid) tree. Call
//!   [`errors`](foundation::Invalid::errors) for the flat list of leaf
//!   messages.
//! - [`validation_includes`](introspect::validation_includes) answers
//!   whether a rule kind is guaranteed to apply, without validating.
//!
//! ## Creating Validators
//!
//! Implement [`Rule`](foundation::Rule) for a reusable atomic check, or wrap
//! a closure with [`Validator::from_fn`](foundation::Validator::from_fn).
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Type**: [`IsString`](validators::IsString),
//!   [`IsInteger`](validators::IsInteger), [`IsNumber`](validators::IsNumber)
//! - **Text**: [`PlainText`](validators::PlainText), [`Email`](validators::Email),
//!   [`DomainName`](validators::DomainName), [`Url`](validators::Url)
//! - **Equality**: [`Equal`](validators::Equal), [`OneOf`](validators::OneOf)
//! - **Bounds**: [`Length`](validators::Length), [`Range`](validators::Range)
//! - **No-op**: [`Always`](validators::Always)

pub mod combinators;
pub mod foundation;
pub mod introspect;
mod macros;
pub mod prelude;
pub mod validators;
