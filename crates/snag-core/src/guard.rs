//! Runtime checks over dynamic [`Value`]s.
//!
//! Every guard is total: it answers `false` (or `None`) for malformed input
//! instead of panicking, so it can be the first thing applied to a value of
//! unknown shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::code::{ErrorCode, Kind};

/// The primitive kinds a field can be checked against.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveKind {
  Boolean,
  Number,
  String,
}

impl PrimitiveKind {
  /// The primitive kind of `value`, or `None` for null and structured values.
  pub fn of(value: &Value) -> Option<Self> {
    match value {
      Value::Bool(_) => Some(Self::Boolean),
      Value::Number(_) => Some(Self::Number),
      Value::String(_) => Some(Self::String),
      Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
  }
}

/// True for objects and arrays, false for null and every primitive.
///
/// This is most useful as the first condition in a more specific guard:
///
/// ```
/// # use serde_json::json;
/// # use snag_core::guard::is_non_null_object;
/// let value = json!({ "bar": 1 });
/// if is_non_null_object(&value) && value.get("bar").is_some() {
///   // safe to inspect `bar`
/// }
/// ```
pub fn is_non_null_object(value: &Value) -> bool {
  matches!(value, Value::Object(_) | Value::Array(_))
}

/// True iff `value` is structured, has a field named `key`, and that field is
/// of primitive kind `kind`.
///
/// Arrays expose their indices (`"0"`, `"1"`, ...) and `length` as fields.
///
/// ```
/// # use serde_json::json;
/// # use snag_core::guard::{PrimitiveKind, is_object_with_key};
/// let err = json!({ "message": "boom" });
/// assert!(is_object_with_key(&err, "message", PrimitiveKind::String));
/// ```
pub fn is_object_with_key(value: &Value, key: &str, kind: PrimitiveKind) -> bool {
  if let Value::Array(_) = value
    && key == "length"
  {
    return kind == PrimitiveKind::Number;
  }
  field(value, key).and_then(PrimitiveKind::of) == Some(kind)
}

/// The string field `key` of `value`, if [`is_object_with_key`] holds for it.
pub fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
  field(value, key).and_then(Value::as_str)
}

/// The number field `key` of `value`, as `f64`.
pub fn number_field(value: &Value, key: &str) -> Option<f64> {
  if let Value::Array(items) = value
    && key == "length"
  {
    return Some(items.len() as f64);
  }
  field(value, key).and_then(Value::as_f64)
}

pub fn bool_field(value: &Value, key: &str) -> Option<bool> {
  field(value, key).and_then(Value::as_bool)
}

/// The code of a dynamic value shaped like a coded error: a `kind` field equal
/// to `CODED_ERROR` and a `code` field naming a known [`ErrorCode`].
pub fn coded_error_code(value: &Value) -> Option<ErrorCode> {
  let kind = string_field(value, "kind")?;
  Kind::parse(kind).ok()?;
  ErrorCode::parse(string_field(value, "code")?).ok()
}

pub fn is_unidentified_error(value: &Value) -> bool {
  coded_error_code(value) == Some(ErrorCode::UnidentifiedError)
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
  match value {
    Value::Object(map) => map.get(key),
    Value::Array(items) => index_key(key).and_then(|i| items.get(i)),
    _ => None,
  }
}

/// A canonical decimal array index: no sign, no leading zeros.
fn index_key(key: &str) -> Option<usize> {
  key.parse::<usize>().ok().filter(|i| i.to_string() == key)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn primitives_and_null_are_not_objects() {
    for value in [json!(null), json!(true), json!(0), json!(1.5), json!("s")] {
      assert!(!is_non_null_object(&value), "{value} counted as object");
    }
  }

  #[test]
  fn structured_values_are_objects_even_when_empty() {
    for value in [json!({}), json!([]), json!({ "a": 1 }), json!([1, 2])] {
      assert!(is_non_null_object(&value), "{value} not counted as object");
    }
  }

  #[test]
  fn object_with_key_checks_presence_and_kind() {
    let value = json!({ "message": "x", "count": 3, "ok": false, "nil": null });

    assert!(is_object_with_key(&value, "message", PrimitiveKind::String));
    assert!(is_object_with_key(&value, "count", PrimitiveKind::Number));
    assert!(is_object_with_key(&value, "ok", PrimitiveKind::Boolean));

    assert!(!is_object_with_key(&value, "message", PrimitiveKind::Number));
    assert!(!is_object_with_key(&value, "missing", PrimitiveKind::String));
    assert!(!is_object_with_key(&value, "nil", PrimitiveKind::String));
  }

  #[test]
  fn object_with_key_is_false_for_non_objects() {
    for value in [json!(null), json!("message"), json!(42), json!(true)] {
      assert!(!is_object_with_key(&value, "message", PrimitiveKind::String));
    }
  }

  #[test]
  fn arrays_expose_indices_and_length() {
    let value = json!(["a", 2]);
    assert!(is_object_with_key(&value, "0", PrimitiveKind::String));
    assert!(is_object_with_key(&value, "1", PrimitiveKind::Number));
    assert!(is_object_with_key(&value, "length", PrimitiveKind::Number));
    assert!(!is_object_with_key(&value, "2", PrimitiveKind::String));
    assert_eq!(number_field(&value, "length"), Some(2.0));
  }

  #[test]
  fn arrays_reject_non_canonical_indices() {
    let value = json!(["a", "b"]);
    for key in ["01", "+1", "-0", "+0", " 1", "1.0", ""] {
      assert!(
        !is_object_with_key(&value, key, PrimitiveKind::String),
        "{key:?} accepted as an index"
      );
      assert_eq!(string_field(&value, key), None, "{key:?} narrowed");
    }
    assert_eq!(string_field(&value, "1"), Some("b"));
  }

  #[test]
  fn narrowing_helpers_return_typed_fields() {
    let value = json!({ "message": "boom", "status": 404, "retry": true });
    assert_eq!(string_field(&value, "message"), Some("boom"));
    assert_eq!(number_field(&value, "status"), Some(404.0));
    assert_eq!(bool_field(&value, "retry"), Some(true));
    assert_eq!(string_field(&value, "status"), None);
  }

  #[test]
  fn primitive_kind_text() {
    assert_eq!(PrimitiveKind::String.to_string(), "string");
    assert_eq!("boolean".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Boolean);
  }

  #[test]
  fn recognises_coded_error_shapes() {
    let unidentified = json!({
      "kind": "CODED_ERROR",
      "code": "UNIDENTIFIED_ERROR",
      "message": "There was an unexpected error."
    });
    assert!(is_unidentified_error(&unidentified));

    let validation = json!({ "kind": "CODED_ERROR", "code": "VALIDATION_ERROR" });
    assert_eq!(coded_error_code(&validation), Some(ErrorCode::ValidationError));
    assert!(!is_unidentified_error(&validation));

    assert_eq!(coded_error_code(&json!({ "kind": "OTHER", "code": "NOT_FOUND" })), None);
    assert_eq!(coded_error_code(&json!({ "kind": "CODED_ERROR", "code": 1 })), None);
    assert_eq!(coded_error_code(&json!("CODED_ERROR")), None);
  }
}
