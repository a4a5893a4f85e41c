//! Core types for `snag`: coded errors and the normalisation of raised values.
//!
//! This crate has no async or logging dependencies. The safe-invocation
//! wrappers live in `snag-invoke`; they depend on this crate for the
//! [`Thrown`] value and [`create_unidentified_error`].

pub mod code;
pub mod coded;
pub mod error;
pub mod guard;
pub mod message;
pub mod normalize;
pub mod thrown;

pub use code::{ErrorCode, Kind};
pub use coded::{
  Coded, CodedError, InvalidIdError, NotFoundError, UnidentifiedError,
  ValidationError,
};
pub use error::{Error, Result};
pub use message::{DEFAULT_FALLBACK, message_from_error};
pub use normalize::{UNEXPECTED_ERROR_MESSAGE, create_unidentified_error};
pub use thrown::{BoxError, Opaque, Panicked, Thrown};
