//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Rule`], [`Validate`], [`ValidateExt`]
//! - **Graph**: [`Validator`], [`ValidatorKind`]
//! - **Errors**: [`Invalid`], [`BuildError`]
//! - **Configuration**: [`Messages`]
//!
//! # Architecture
//!
//! ## 1. One value type
//!
//! Every validator judges a [`serde_json::Value`]. `Value::Null` is the absent
//! value, and every atomic rule except `Required` accepts it:
//!
//! ```
//! use serde_json::Value;
//! use validatish::prelude::*;
//!
//! assert!(email().validate(&Value::Null).is_ok());
//! assert!(required().validate(&Value::Null).is_err());
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose into trees with `All` / `Any`:
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let validator = all![required(), any![string(), integer()]];
//! assert!(validator.validate(&json!("abc")).is_ok());
//! ```
//!
//! ## 3. Failures are data
//!
//! A failed validation returns an [`Invalid`] tree. Callers flatten it for
//! display or walk the causes for structured reporting:
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let validator = all![string(), required()];
//! let err = validator.validate(&json!("")).unwrap_err();
//! assert_eq!(err.errors(), vec!["is required"]);
//! ```

pub mod error;
pub mod kind;
pub mod messages;
pub mod traits;
pub mod validator;

pub use error::{BuildError, Invalid, LeafMessages, Params};
pub use kind::ValidatorKind;
pub use messages::Messages;
pub use traits::{Rule, Validate, ValidateExt};
pub use validator::Validator;
