//! Static inspection of validation graphs
//!
//! These helpers look only at the shape of a graph (kinds and children) and
//! never run validation. A form layer uses them to answer questions such as
//! "will this field always be checked for presence?".

use crate::foundation::{Validator, ValidatorKind};

/// Tests whether a validator of `kind` is guaranteed to apply somewhere in
/// the graph.
///
/// - no validator: never included
/// - the node itself has `kind`: included
/// - `All`: included if any child includes it, since every child applies
/// - `Any`: included only if every immediate child has exactly `kind` and at
///   least one child includes it; a mixed `Any` can be satisfied by a branch
///   that never enforces `kind`
/// - any other node: not included
///
/// # Examples
///
/// ```
/// use validatish::introspect::validation_includes;
/// use validatish::prelude::*;
///
/// let field = all![required()];
/// assert!(validation_includes(Some(&field), &ValidatorKind::Required));
///
/// let either = any![required(), email()];
/// assert!(!validation_includes(Some(&either), &ValidatorKind::Required));
///
/// assert!(!validation_includes(None, &ValidatorKind::Required));
/// ```
pub fn validation_includes(validator: Option<&Validator>, kind: &ValidatorKind) -> bool {
    let Some(validator) = validator else {
        return false;
    };

    if validator.kind() == *kind {
        return true;
    }

    match validator {
        Validator::All(all) => all
            .children()
            .iter()
            .any(|child| validation_includes(Some(child), kind)),
        Validator::Any(any) => {
            let children = any.children();
            let same_kind = children.iter().all(|child| child.kind() == *kind);
            same_kind
                && children
                    .iter()
                    .any(|child| validation_includes(Some(child), kind))
        }
        Validator::Atomic(_) => false,
    }
}

/// Tests whether presence is always enforced by the graph.
///
/// Shorthand for `validation_includes(validator, &ValidatorKind::Required)`.
pub fn is_required(validator: Option<&Validator>) -> bool {
    validation_includes(validator, &ValidatorKind::Required)
}
