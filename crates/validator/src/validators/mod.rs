//! Built-in validators
//!
//! Atomic validators for common form-field checks. Every validator here
//! accepts the absent value (`Value::Null`) except [`Required`], and reports
//! a type message instead of panicking when handed the wrong kind of value.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Type**: [`IsString`], [`IsInteger`], [`IsNumber`]
//! - **Text**: [`PlainText`], [`Email`], [`DomainName`], [`Url`]
//! - **Equality**: [`Equal`], [`OneOf`]
//! - **Bounds**: [`Length`], [`Range`]
//! - **No-op**: [`Always`]
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use validatish::prelude::*;
//!
//! let username = all![required(), plain_text(), length(3, 20).unwrap()];
//! assert!(username.validate(&json!("ferris")).is_ok());
//! assert!(username.validate(&json!("no spaces")).is_err());
//!
//! let age = all![integer(), range(18.0, 130.0).unwrap()];
//! assert!(age.validate(&json!(42)).is_ok());
//! ```

pub mod always;
pub mod content;
pub mod equality;
pub mod length;
pub mod nullable;
pub mod range;
pub mod text;
pub mod types;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use always::{Always, always};
pub use content::{DomainName, Email, Url, domain_name, email, url, url_with_scheme};
pub use equality::{Equal, OneOf, equal, one_of};
pub use length::{Length, length, max_length, min_length};
pub use nullable::{Required, required};
pub use range::{Range, max_value, min_value, range};
pub use text::{PlainText, plain_text, plain_text_with};
pub use types::{IsInteger, IsNumber, IsString, integer, number, string};

// ============================================================================
// SHARED HELPERS
// ============================================================================

use serde_json::Value;

/// Renders a value for use in a message: strings unquoted, everything else
/// as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compares two values, treating numbers by numeric value so `1` equals
/// `1.0`. Arrays compare element-wise with the same rule.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else {
                x.as_f64() == y.as_f64()
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| values_equal(x, y))
        }
        _ => a == b,
    }
}
