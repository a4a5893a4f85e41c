//! Wrappers for computations that run to completion in the calling step.

use std::{
  error::Error as StdError,
  panic::{AssertUnwindSafe, catch_unwind},
};

use snag_core::Thrown;

use crate::{Attempt, normalise};

/// Run `f`, converting a panic into an
/// [`UnidentifiedError`](snag_core::UnidentifiedError).
pub fn try_sync<T, F>(f: F) -> Attempt<T>
where
  F: FnOnce() -> T,
{
  catch_unwind(AssertUnwindSafe(f)).map_err(|payload| normalise(Thrown::from_panic(payload)))
}

/// Run a fallible `f`. Both `Err(e)` and a panic are normalised; the error
/// `e` becomes the [`cause`](snag_core::UnidentifiedError::cause).
pub fn try_sync_fallible<T, E, F>(f: F) -> Attempt<T>
where
  F: FnOnce() -> Result<T, E>,
  E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
  try_sync(f)?.map_err(|e| normalise(Thrown::Error(e.into())))
}
