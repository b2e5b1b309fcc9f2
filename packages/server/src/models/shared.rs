use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationError};

/// Location used for issues that concern the body as a whole.
pub const ROOT_LOC: &str = "__root__";

/// Require the body to be a JSON object.
pub fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| {
        ValidationError::single(ROOT_LOC, "value is not a valid dict", "type_error.dict")
    })
}

/// Read a field that must be present and hold a string.
pub fn required_str(
    fields: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(name) {
        None => {
            issues.push(FieldError::new(name, "field required", "value_error.missing"));
            None
        }
        Some(Value::Null) => {
            issues.push(FieldError::new(
                name,
                "none is not an allowed value",
                "type_error.none.not_allowed",
            ));
            None
        }
        Some(value) => string_value(name, value, issues),
    }
}

/// Read a field that may be absent. `null` counts as absent.
pub fn optional_str(
    fields: &Map<String, Value>,
    name: &str,
    issues: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => string_value(name, value, issues),
    }
}

fn string_value(name: &str, value: &Value, issues: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        _ => {
            issues.push(FieldError::new(name, "str type expected", "type_error.str"));
            None
        }
    }
}

/// Check a string against `min..=max` Unicode characters.
pub fn check_char_len(
    name: &str,
    value: Option<String>,
    min: usize,
    max: usize,
    issues: &mut Vec<FieldError>,
) -> Option<String> {
    let value = value?;
    let len = value.chars().count();
    if len < min {
        issues.push(FieldError::new(
            name,
            format!("ensure this value has at least {min} characters"),
            "value_error.any_str.min_length",
        ));
        return None;
    }
    if len > max {
        issues.push(FieldError::new(
            name,
            format!("ensure this value has at most {max} characters"),
            "value_error.any_str.max_length",
        ));
        return None;
    }
    Some(value)
}
