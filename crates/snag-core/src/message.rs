//! Extraction of a human-readable message from a raised value.

use crate::{guard::string_field, thrown::Thrown};

/// Fallback used by [`Thrown::message`].
pub const DEFAULT_FALLBACK: &str = "There was an unexpected error";

/// Best message for `thrown`. Never fails.
///
/// Strings are returned as they are; structured errors and objects with a
/// string `message` field give that message. Anything else yields `fallback`,
/// or with `stringify` set, `"{fallback}: {json}"`. A value with no JSON form
/// falls back to its [`Display`](std::fmt::Display) coercion after the same
/// prefix.
pub fn message_from_error(thrown: &Thrown, stringify: bool, fallback: &str) -> String {
  match thrown {
    Thrown::Value(serde_json::Value::String(s)) => return s.clone(),
    Thrown::Error(error) => return error.to_string(),
    Thrown::Value(value) => {
      if let Some(message) = string_field(value, "message") {
        return message.to_string();
      }
    }
    Thrown::Opaque(_) => {}
  }

  if !stringify {
    return fallback.to_string();
  }

  let serialized = match thrown {
    Thrown::Value(value) => serde_json::to_string(value).ok(),
    _ => None,
  };
  match serialized {
    Some(json) => format!("{fallback}: {json}"),
    None => format!("{fallback}: {thrown}"),
  }
}

impl Thrown {
  /// [`message_from_error`] with [`DEFAULT_FALLBACK`] and no stringification.
  pub fn message(&self) -> String { message_from_error(self, false, DEFAULT_FALLBACK) }
}

#[cfg(test)]
mod tests {
  use std::io;

  use serde_json::json;

  use super::*;

  #[test]
  fn strings_are_returned_directly() {
    assert_eq!(Thrown::value("oops").message(), "oops");
  }

  #[test]
  fn message_fields_are_used() {
    assert_eq!(Thrown::value(json!({ "message": "x" })).message(), "x");
    assert_eq!(Thrown::error(io::Error::other("io failed")).message(), "io failed");
  }

  #[test]
  fn non_string_message_field_is_ignored() {
    let thrown = Thrown::value(json!({ "message": 5 }));
    assert_eq!(thrown.message(), DEFAULT_FALLBACK);
  }

  #[test]
  fn other_values_give_the_fallback() {
    assert_eq!(Thrown::value(42).message(), DEFAULT_FALLBACK);
    assert_eq!(message_from_error(&Thrown::value(42), false, "nope"), "nope");
  }

  #[test]
  fn stringify_appends_json() {
    let msg = message_from_error(&Thrown::value(42), true, DEFAULT_FALLBACK);
    assert_eq!(msg, "There was an unexpected error: 42");

    let msg = message_from_error(&Thrown::value(json!({ "code": 7 })), true, "failed");
    assert_eq!(msg, r#"failed: {"code":7}"#);
  }

  #[test]
  fn stringify_coerces_what_cannot_be_serialized() {
    let thrown = Thrown::opaque(Box::new(()));
    let msg = message_from_error(&thrown, true, "failed");
    assert_eq!(msg, "failed: [opaque value]");
    assert_eq!(message_from_error(&thrown, false, "failed"), "failed");
  }
}
