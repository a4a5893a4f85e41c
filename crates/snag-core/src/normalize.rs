//! Conversion of an arbitrary raised value into an [`UnidentifiedError`].

use crate::{coded::UnidentifiedError, thrown::Thrown};

/// The message used when the raised value carries none of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "There was an unexpected error.";

/// Convert a raised value into an [`UnidentifiedError`].
///
/// A structured error lends its message and becomes the
/// [`cause`](UnidentifiedError::cause). Any other value gets
/// [`UNEXPECTED_ERROR_MESSAGE`] and is kept verbatim as the
/// [`unknown_cause`](UnidentifiedError::unknown_cause).
pub fn create_unidentified_error(thrown: impl Into<Thrown>) -> UnidentifiedError {
  let thrown = thrown.into();
  let message = match thrown.as_error() {
    Some(error) => error.to_string(),
    None => UNEXPECTED_ERROR_MESSAGE.to_string(),
  };
  UnidentifiedError::new(message, thrown)
}

#[cfg(test)]
mod tests {
  use std::io;

  use serde_json::{Value, json};

  use super::*;
  use crate::{
    code::{ErrorCode, Kind},
    coded::Coded,
    thrown::Panicked,
  };

  #[test]
  fn structured_error_lends_message_and_cause() {
    let err = create_unidentified_error(Thrown::error(io::Error::other("boom")));

    assert_eq!(err.kind(), Kind::CodedError);
    assert_eq!(err.code(), ErrorCode::UnidentifiedError);
    assert_eq!(err.message(), "boom");
    assert!(err.cause().unwrap().is::<io::Error>());
    assert!(err.unknown_cause().is_none());
  }

  #[test]
  fn plain_value_keeps_generic_message() {
    let err = create_unidentified_error(json!(42));

    assert_eq!(err.code(), ErrorCode::UnidentifiedError);
    assert_eq!(err.message(), "There was an unexpected error.");
    assert!(err.cause().is_none());
    assert_eq!(err.unknown_cause().and_then(Thrown::as_value), Some(&json!(42)));
  }

  #[test]
  fn null_and_nested_values_are_handled() {
    for value in [Value::Null, json!({ "a": [{ "b": null }] }), json!("text")] {
      let err = create_unidentified_error(value.clone());
      assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
      assert_eq!(err.unknown_cause().and_then(Thrown::as_value), Some(&value));
    }
  }

  #[test]
  fn same_input_takes_the_same_branch() {
    let make = || Thrown::error(Panicked { message: "again".into() });
    let (a, b) = (create_unidentified_error(make()), create_unidentified_error(make()));
    assert_eq!(a.message(), b.message());
    assert_eq!(a.code(), b.code());
    assert_eq!(a.kind(), b.kind());
    assert_eq!(a.cause().is_some(), b.cause().is_some());
    assert_eq!(a.unknown_cause().is_some(), b.unknown_cause().is_some());

    let (c, d) = (create_unidentified_error(json!(1)), create_unidentified_error(json!(1)));
    assert_eq!(c.message(), d.message());
    assert_eq!(
      c.unknown_cause().and_then(Thrown::as_value),
      d.unknown_cause().and_then(Thrown::as_value)
    );
  }

  #[test]
  fn opaque_payload_is_an_unknown_cause() {
    let err = create_unidentified_error(Thrown::opaque(Box::new(vec![1_u8])));
    assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    assert!(matches!(err.unknown_cause(), Some(Thrown::Opaque(_))));
    assert!(matches!(err.into_thrown(), Thrown::Opaque(_)));
  }
}
