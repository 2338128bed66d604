//! Positional parameter decoding
//!
//! Every `personal_*` method takes its arguments as a JSON array. This module
//! turns the raw `params` value into a slice of untyped elements and checks
//! arity; it performs no coercion. Coercion happens in the argument shapes,
//! through the `JsonKind` inspection helpers defined here.
//!
//! # Examples
//!
//! ```rust
//! use keyrpc_core::params::{positional, JsonKind};
//! use serde_json::json;
//!
//! let raw = json!(["0xabc", 30]);
//! let elems = positional(Some(&raw), 1).unwrap();
//! assert_eq!(JsonKind::of(&elems[1]), JsonKind::Number);
//! ```

use crate::error::DecodeError;
use serde_json::Value;
use std::fmt;

/// Runtime JSON type of a single parameter element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    String,
    Number,
    Bool,
    Null,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Bool,
            Value::Null => JsonKind::Null,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Bool => "boolean",
            JsonKind::Null => "null",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpret `raw` as a positional parameter list of at least `min` elements
///
/// An absent `params` member is treated as an empty list so that arity
/// decides the outcome.
///
/// # Errors
///
/// - `DecodeError::DecodeParam` if `raw` is present but not an array
/// - `DecodeError::InsufficientParams` if the array is shorter than `min`
pub fn positional(raw: Option<&Value>, min: usize) -> Result<&[Value], DecodeError> {
    let elems: &[Value] = match raw {
        None => &[],
        Some(Value::Array(elems)) => elems,
        Some(other) => {
            return Err(DecodeError::decode_param(format!(
                "expected array, got {}",
                JsonKind::of(other)
            )))
        }
    };

    if elems.len() < min {
        return Err(DecodeError::insufficient_params(elems.len(), min));
    }

    Ok(elems)
}

/// Parse raw `params` text into a JSON value
///
/// Malformed JSON is reported as `DecodeError::DecodeParam` carrying the
/// parser's message.
pub fn parse_params(text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(text).map_err(|e| DecodeError::decode_param(e.to_string()))
}

fn mismatch(field: &str, expected: JsonKind, got: &Value) -> DecodeError {
    DecodeError::invalid_type(field, format!("expected {}, got {}", expected, JsonKind::of(got)))
}

/// Require `value` to be a JSON string
pub fn expect_str(value: &Value, field: &str) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(field, JsonKind::String, other)),
    }
}

/// Read an optional string at `idx`
///
/// Absent and explicit null both yield `None`; any other non-string type is
/// an error.
pub fn optional_str(elems: &[Value], idx: usize, field: &str) -> Result<Option<String>, DecodeError> {
    match elems.get(idx) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => expect_str(value, field).map(Some),
    }
}

/// Read an optional number at `idx` without ever failing
///
/// Anything other than a JSON number yields `None`.
pub fn optional_f64(elems: &[Value], idx: usize) -> Option<f64> {
    elems.get(idx).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_returns_elements_unchanged() {
        let raw = json!(["a", 1, null, {"k": true}]);
        let elems = positional(Some(&raw), 2).unwrap();

        assert_eq!(elems.len(), 4);
        assert_eq!(elems[3], json!({"k": true}));
    }

    #[test]
    fn test_positional_rejects_non_array() {
        for raw in [json!({"address": "0x1"}), json!("0x1"), json!(7), json!(null)] {
            match positional(Some(&raw), 1) {
                Err(DecodeError::DecodeParam(detail)) => assert!(detail.starts_with("expected array")),
                other => panic!("Expected DecodeParam, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_positional_arity() {
        let raw = json!(["only"]);
        assert_eq!(
            positional(Some(&raw), 2),
            Err(DecodeError::insufficient_params(1, 2))
        );
    }

    #[test]
    fn test_positional_missing_params() {
        assert!(positional(None, 0).unwrap().is_empty());
        assert_eq!(positional(None, 1), Err(DecodeError::insufficient_params(0, 1)));
    }

    #[test]
    fn test_parse_params_malformed() {
        let err = parse_params("[\"a\",").unwrap_err();
        assert!(matches!(err, DecodeError::DecodeParam(_)));
    }

    #[test]
    fn test_parse_params_then_positional() {
        let raw = parse_params(r#"["a", "b"]"#).unwrap();
        let elems = positional(Some(&raw), 2).unwrap();
        assert_eq!(elems, &[json!("a"), json!("b")]);
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(JsonKind::of(&json!("s")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!(false)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_expect_str_mismatch_detail() {
        let err = expect_str(&json!(42), "address").unwrap_err();
        assert_eq!(err, DecodeError::invalid_type("address", "expected string, got number"));
    }

    #[test]
    fn test_optional_helpers() {
        let elems = [json!("addr"), json!(null), json!("soon")];

        assert_eq!(optional_str(&elems, 1, "passphrase"), Ok(None));
        assert_eq!(optional_str(&elems, 5, "passphrase"), Ok(None));
        assert_eq!(optional_f64(&elems, 2), None);
        assert_eq!(optional_f64(&[json!(30)], 0), Some(30.0));
    }
}
