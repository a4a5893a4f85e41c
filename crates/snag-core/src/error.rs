//! Error types for `snag-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown error code: {0:?}")]
  UnknownCode(String),

  #[error("unknown error kind discriminant: {0:?}")]
  UnknownKind(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
