//! Validator combinators
//!
//! - [`All`] - conjunction, reports every failing child
//! - [`Any`] - disjunction, passes on the first accepting child
//!
//! Both own their children as an immutable, shared list fixed at
//! construction. Children may themselves be compound.

pub mod all;
pub mod any;

pub use all::{All, all};
pub use any::{ANY_PREFIX, Any, any};
