//! Coded errors — failures represented as data rather than raised.
//!
//! Every coded error reports a message, one [`ErrorCode`] and the
//! [`Kind::CodedError`] discriminant. Values are built once per failure and
//! never mutated.

use std::{error::Error as StdError, fmt};

use thiserror::Error;

use crate::{
  code::{ErrorCode, Kind},
  thrown::Thrown,
};

/// The shape shared by every coded error.
pub trait Coded {
  fn message(&self) -> &str;

  fn code(&self) -> ErrorCode;

  fn kind(&self) -> Kind { Kind::CodedError }
}

// ─── Unidentified ────────────────────────────────────────────────────────────

/// The default coded error an unknown failure is converted into when nothing
/// more specific applies.
///
/// It keeps the raised value it was built from. If that value was a
/// structured error it is exposed as [`cause`](Self::cause); otherwise as
/// [`unknown_cause`](Self::unknown_cause). Exactly one of the two is `Some`.
#[derive(Debug)]
pub struct UnidentifiedError {
  message: String,
  origin:  Thrown,
}

impl UnidentifiedError {
  /// Callers should go through
  /// [`create_unidentified_error`](crate::create_unidentified_error), which
  /// chooses the message.
  pub(crate) fn new(message: String, origin: Thrown) -> Self {
    Self { message, origin }
  }

  /// The original error, if the raised value was a structured error.
  pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
    self.origin.as_error()
  }

  /// The original raised value, if it was not a structured error.
  pub fn unknown_cause(&self) -> Option<&Thrown> {
    (!self.origin.is_error()).then_some(&self.origin)
  }

  /// Give back the raised value this error was built from.
  pub fn into_thrown(self) -> Thrown { self.origin }
}

impl Coded for UnidentifiedError {
  fn message(&self) -> &str { &self.message }

  fn code(&self) -> ErrorCode { ErrorCode::UnidentifiedError }
}

impl fmt::Display for UnidentifiedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

impl StdError for UnidentifiedError {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    self.cause().map(|cause| cause as &(dyn StdError + 'static))
  }
}

// ─── Message-only variants ───────────────────────────────────────────────────

macro_rules! message_error {
  ($(#[$meta:meta])* $name:ident => $code:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("{message}")]
    pub struct $name {
      message: String,
    }

    impl $name {
      pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
      }
    }

    impl Coded for $name {
      fn message(&self) -> &str { &self.message }

      fn code(&self) -> ErrorCode { ErrorCode::$code }
    }
  };
}

message_error! {
  /// Caller input violated a constraint.
  ValidationError => ValidationError
}

message_error! {
  NotFoundError => NotFound
}

message_error! {
  InvalidIdError => InvalidId
}

// ─── Sum type ────────────────────────────────────────────────────────────────

/// Any coded error. Match on the variant (or on [`Coded::code`]) before using
/// variant-specific data.
#[derive(Debug, Error)]
pub enum CodedError {
  #[error(transparent)]
  Unidentified(#[from] UnidentifiedError),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  NotFound(#[from] NotFoundError),

  #[error(transparent)]
  InvalidId(#[from] InvalidIdError),
}

impl CodedError {
  pub fn is_unidentified(&self) -> bool { matches!(self, Self::Unidentified(_)) }

  fn inner(&self) -> &dyn Coded {
    match self {
      Self::Unidentified(e) => e,
      Self::Validation(e) => e,
      Self::NotFound(e) => e,
      Self::InvalidId(e) => e,
    }
  }
}

impl Coded for CodedError {
  fn message(&self) -> &str { self.inner().message() }

  fn code(&self) -> ErrorCode { self.inner().code() }
}
