//! Type validators

use serde_json::Value;

pub(crate) const TYPE_STRING: &str = "type_string";
pub(crate) const TYPE_STRING_DEFAULT: &str = "must be a string";
pub(crate) const TYPE_NUMBER: &str = "type_number";
pub(crate) const TYPE_NUMBER_DEFAULT: &str = "must be a number";

crate::macros::rule! {
    /// Validates that a value is a string.
    pub IsString => String;
    check(self, value) {
        if value.is_string() {
            Ok(())
        } else {
            Err(self.messages.invalid(TYPE_STRING, TYPE_STRING_DEFAULT, &[]))
        }
    }
    fn string();
}

crate::macros::rule! {
    /// Validates that a value is an integral number.
    ///
    /// Floats with no fractional part (`1.0`) are integers. Numeric strings
    /// and booleans are not.
    pub IsInteger => Integer;
    check(self, value) {
        if is_integral(value) {
            Ok(())
        } else {
            Err(self.messages.invalid("type_integer", "must be an integer", &[]))
        }
    }
    fn integer();
}

crate::macros::rule! {
    /// Validates that a value is a number.
    pub IsNumber => Number;
    check(self, value) {
        if value.is_number() {
            Ok(())
        } else {
            Err(self.messages.invalid(TYPE_NUMBER, TYPE_NUMBER_DEFAULT, &[]))
        }
    }
    fn number();
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}
