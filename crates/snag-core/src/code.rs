//! The coded-error discriminant and the closed set of error codes.
//!
//! Both enums have a fixed textual form (`CODED_ERROR`, `NOT_FOUND`, ...)
//! shared by `Display`, `FromStr` and serde, so a coded error read back from a
//! dynamic value can be matched against them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// The discriminant every coded error carries.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
  CodedError,
}

impl Kind {
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownKind(s.to_string()))
  }
}

/// Error codes. Each code belongs to exactly one
/// [`CodedError`](crate::CodedError) variant.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
  /// A failure nothing more specific was known about.
  UnidentifiedError,
  NotFound,
  InvalidId,
  /// The caller supplied input that violates a constraint.
  ValidationError,
}

impl ErrorCode {
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownCode(s.to_string()))
  }

  pub fn as_str(self) -> &'static str { self.into() }
}
