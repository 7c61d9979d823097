//! Integration tests for All / Any graphs built from the built-in validators.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use validatish::prelude::*;

fn string_and_required() -> Validator {
    all![string(), required()]
}

fn string_or_integer() -> Validator {
    any![string(), integer()]
}

fn required_and_integer_or_string() -> Validator {
    all![required(), any![string(), integer()]]
}

// ============================================================================
// ALL(STRING, REQUIRED)
// ============================================================================

#[rstest]
#[case(json!("1"))]
#[case(json!("4"))]
#[case(json!("3"))]
fn all_string_required_pass(#[case] value: Value) {
    assert!(string_and_required().validate(&value).is_ok());
}

#[rstest]
#[case(json!(""))]
#[case(json!(0))]
fn all_string_required_fail(#[case] value: Value) {
    assert!(string_and_required().validate(&value).is_err());
}

#[test]
fn all_string_required_messages() {
    let validator = string_and_required();

    let err = validator.validate(&json!("")).unwrap_err();
    assert_eq!(err.errors(), vec!["is required"]);

    let err = validator.validate(&json!(1)).unwrap_err();
    assert_eq!(err.errors(), vec!["must be a string"]);

    let err = validator.validate(&Value::Null).unwrap_err();
    assert_eq!(err.errors(), vec!["is required"]);
}

#[test]
fn all_reports_every_failing_child() {
    let validator = all![string(), min_length(3), required()];
    let err = validator.validate(&json!([])).unwrap_err();

    assert_eq!(
        err.errors(),
        vec!["must be a string", "must have 3 or more items", "is required"]
    );
    assert_eq!(
        err.message,
        "must be a string; must have 3 or more items; is required"
    );
}

// ============================================================================
// ANY(STRING, INTEGER)
// ============================================================================

#[rstest]
#[case(json!("1"))]
#[case(json!(1))]
#[case(json!(i64::MAX))]
#[case(json!(null))]
fn any_string_integer_pass(#[case] value: Value) {
    assert!(string_or_integer().validate(&value).is_ok());
}

#[rstest]
#[case(json!(0.5))]
#[case(json!({"year": 2024}))]
fn any_string_integer_fail(#[case] value: Value) {
    assert!(string_or_integer().validate(&value).is_err());
}

#[test]
fn any_string_integer_messages() {
    let err = string_or_integer().validate(&json!(0.5)).unwrap_err();

    assert_eq!(err.errors(), vec!["must be a string", "must be an integer"]);
    assert_eq!(
        err.message,
        "Please fix any of: must be a string; must be an integer"
    );
    assert!(err.message.starts_with(ANY_PREFIX));
}

// ============================================================================
// ANY(RANGE(MIN=8), INTEGER)
// ============================================================================

#[rstest]
#[case(json!(4), true)]
#[case(json!(12.3), true)]
#[case(json!(15), true)]
#[case(json!(null), true)]
#[case(json!(3.4), false)]
fn any_range_integer(#[case] value: Value, #[case] ok: bool) {
    let validator = any![min_value(8.0), integer()];
    assert_eq!(validator.validate(&value).is_ok(), ok, "{value}");
}

// ============================================================================
// ALL(REQUIRED, ANY(STRING, INTEGER))
// ============================================================================

#[rstest]
#[case(json!("1"))]
#[case(json!(1))]
fn required_and_integer_or_string_pass(#[case] value: Value) {
    assert!(required_and_integer_or_string().validate(&value).is_ok());
}

#[rstest]
#[case(json!(0.5))]
#[case(json!([1]))]
#[case(json!(null))]
fn required_and_integer_or_string_fail(#[case] value: Value) {
    assert!(required_and_integer_or_string().validate(&value).is_err());
}

#[test]
fn required_and_integer_or_string_messages() {
    let validator = required_and_integer_or_string();

    let err = validator.validate(&json!(0.5)).unwrap_err();
    assert_eq!(err.errors(), vec!["must be a string", "must be an integer"]);
    assert_eq!(
        err.message,
        "Please fix any of: must be a string; must be an integer"
    );

    let causes = err.causes().expect("compound failure");
    assert_eq!(causes.len(), 1);
    assert_eq!(causes[0].code, "any");

    let err = validator.validate(&Value::Null).unwrap_err();
    assert_eq!(err.errors(), vec!["is required"]);
}

// ============================================================================
// ORIGINS AND FLUENT COMPOSITION
// ============================================================================

#[test]
fn leaf_origins_point_at_the_failing_child() {
    let string_rule = Validator::from(string());
    let required_rule = Validator::from(required());
    let validator = Validator::all([string_rule.clone(), required_rule.clone()]);

    let err = validator.validate(&json!("")).unwrap_err();
    assert!(err.origin().is_some_and(|o| o.ptr_eq(&validator)));

    let causes = err.causes().expect("compound failure");
    assert_eq!(causes.len(), 1);
    assert!(causes[0].origin().is_some_and(|o| o.ptr_eq(&required_rule)));
    assert!(!causes[0].origin().is_some_and(|o| o.ptr_eq(&string_rule)));
}

#[test]
fn fluent_and_or_match_macros() {
    let fluent = required().and(string().or(integer()));
    let macro_built = required_and_integer_or_string();

    for value in [json!("1"), json!(1), json!(0.5), json!(null), json!("")] {
        let a = fluent.validate(&value).map_err(|e| e.to_string());
        let b = macro_built.validate(&value).map_err(|e| e.to_string());
        assert_eq!(a, b, "{value}");
    }
}

#[test]
fn and_does_not_flatten_nested_all() {
    let validator = all![string()].and(required());
    let children = validator.children().expect("compound");
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].kind(), ValidatorKind::All);
}

#[test]
fn graphs_are_shareable_across_threads() {
    let validator = required_and_integer_or_string();

    std::thread::scope(|scope| {
        for n in 0..4 {
            let validator = &validator;
            scope.spawn(move || {
                assert!(validator.validate(&json!(n)).is_ok());
                assert!(validator.validate(&json!(0.5)).is_err());
            });
        }
    });
}

// ============================================================================
// TYPED VALUES
// ============================================================================

#[derive(serde::Serialize)]
struct Signup<'a> {
    username: &'a str,
    tags: Vec<&'a str>,
}

#[test]
fn validate_any_accepts_typed_values() {
    let validator = all![required(), min_length(2)];

    assert!(validator.validate_any(&Some("ok")).is_ok());
    assert_eq!(
        validator.validate_any(&None::<&str>).unwrap_err().errors(),
        vec!["is required"]
    );

    let signup = Signup {
        username: "ferris",
        tags: vec!["rust"],
    };
    assert!(validator.validate_any(&signup).is_ok());
    assert!(validator.validate_any(&signup.tags).is_err());
}
