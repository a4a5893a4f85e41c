//! `Thrown` — a raised value of unknown shape.
//!
//! A computation can fail by returning an error or by panicking with an
//! arbitrary payload. Both are captured as a [`Thrown`] before normalisation.

use std::{
  any::Any,
  error::Error as StdError,
  fmt,
  sync::{Mutex, PoisonError},
};

use serde_json::Value;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A raised value, classified only as far as its type allows.
pub enum Thrown {
  /// A structured error: it carries a message and may have a source chain.
  Error(BoxError),
  /// Any other value that has a dynamic representation.
  Value(Value),
  /// A panic payload of a type nothing is known about.
  Opaque(Opaque),
}

/// A panic payload kept verbatim. The mutex only makes it `Sync`; nothing
/// mutates it.
pub struct Opaque(Mutex<Box<dyn Any + Send + 'static>>);

impl Opaque {
  pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self { Self(Mutex::new(payload)) }

  pub fn is<T: Any>(&self) -> bool {
    let payload = self.0.lock().unwrap_or_else(PoisonError::into_inner);
    (**payload).is::<T>()
  }

  pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

/// The error a panic with a textual payload is captured as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Panicked {
  pub message: String,
}

impl Thrown {
  pub fn error<E>(error: E) -> Self
  where
    E: StdError + Send + Sync + 'static,
  {
    Self::Error(Box::new(error))
  }

  pub fn value(value: impl Into<Value>) -> Self { Self::Value(value.into()) }

  pub fn opaque(payload: Box<dyn Any + Send + 'static>) -> Self {
    Self::Opaque(Opaque::new(payload))
  }

  /// Classify a panic payload as returned by
  /// [`std::panic::catch_unwind`].
  ///
  /// Textual payloads (`panic!("...")`) become a [`Panicked`] error, boxed
  /// errors and JSON values are unwrapped, and the common primitive types are
  /// converted to [`Value`]. Anything else is kept verbatim as
  /// [`Thrown::Opaque`].
  pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
    let payload = match payload.downcast::<&'static str>() {
      Ok(message) => return Self::error(Panicked { message: (*message).to_string() }),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<String>() {
      Ok(message) => return Self::error(Panicked { message: *message }),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<BoxError>() {
      Ok(error) => return Self::Error(*error),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<Value>() {
      Ok(value) => return Self::Value(*value),
      Err(payload) => payload,
    };

    match primitive_payload(&*payload) {
      Some(value) => Self::Value(value),
      None => Self::opaque(payload),
    }
  }

  pub fn is_error(&self) -> bool { matches!(self, Self::Error(_)) }

  pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
    match self {
      Self::Error(error) => Some(&**error),
      _ => None,
    }
  }

  pub fn as_value(&self) -> Option<&Value> {
    match self {
      Self::Value(value) => Some(value),
      _ => None,
    }
  }
}

fn primitive_payload(payload: &(dyn Any + Send)) -> Option<Value> {
  macro_rules! lift {
    ($($ty:ty),*) => {
      $(
        if let Some(v) = payload.downcast_ref::<$ty>() {
          return Some(Value::from(*v));
        }
      )*
    };
  }

  // Non-finite floats become `null`, same as `Value::from`.
  lift!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

  payload
    .downcast_ref::<char>()
    .map(|c| Value::String(c.to_string()))
}

impl From<Value> for Thrown {
  fn from(value: Value) -> Self { Self::Value(value) }
}

impl From<BoxError> for Thrown {
  fn from(error: BoxError) -> Self { Self::Error(error) }
}

impl fmt::Debug for Thrown {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
      Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
      Self::Opaque(_) => f.write_str("Opaque(..)"),
    }
  }
}

/// Best-effort textual coercion. Strings are written bare, other values in
/// their JSON form.
impl fmt::Display for Thrown {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Error(error) => write!(f, "{error}"),
      Self::Value(Value::String(s)) => f.write_str(s),
      Self::Value(value) => write!(f, "{value}"),
      Self::Opaque(_) => f.write_str("[opaque value]"),
    }
  }
}
