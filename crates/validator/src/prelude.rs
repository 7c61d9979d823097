//! Prelude module for convenient imports.
//!
//! Provides a single `use validatish::prelude::*;` import that brings in the
//! traits, the graph and error types, every built-in validator and the
//! `all!` / `any!` macros.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let username = all![required(), plain_text_with("_").unwrap(), max_length(20)];
//! assert!(username.validate(&json!("ferris_the_crab")).is_ok());
//! assert!(is_required(Some(&username)));
//! ```

// ============================================================================
// FOUNDATION: Core traits, graph, errors
// ============================================================================

pub use crate::foundation::{
    BuildError, Invalid, Messages, Rule, Validate, ValidateExt, Validator, ValidatorKind,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Types and macros
// ============================================================================

pub use crate::combinators::{ANY_PREFIX, All, Any};
pub use crate::{all, any};

// ============================================================================
// INTROSPECTION
// ============================================================================

pub use crate::introspect::{is_required, validation_includes};
