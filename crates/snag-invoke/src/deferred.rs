//! Wrappers for computations that settle at a later point.

use std::{
  error::Error as StdError,
  future::Future,
  panic::{AssertUnwindSafe, catch_unwind},
};

use futures::FutureExt as _;
use snag_core::Thrown;

use crate::{Attempt, normalise};

/// Build the future with `f` and await it, converting a panic (while
/// building or while polling) into an
/// [`UnidentifiedError`](snag_core::UnidentifiedError).
///
/// The only suspension point is the await of the inner future. The returned
/// future always completes with an [`Attempt`].
pub async fn try_async<T, F, Fut>(f: F) -> Attempt<T>
where
  F: FnOnce() -> Fut,
  Fut: Future<Output = T>,
{
  let future = catch_unwind(AssertUnwindSafe(f))
    .map_err(|payload| normalise(Thrown::from_panic(payload)))?;

  AssertUnwindSafe(future)
    .catch_unwind()
    .await
    .map_err(|payload| normalise(Thrown::from_panic(payload)))
}

/// [`try_async`] for a fallible future: an `Err(e)` it resolves to is
/// normalised with `e` as the cause.
pub async fn try_async_fallible<T, E, F, Fut>(f: F) -> Attempt<T>
where
  F: FnOnce() -> Fut,
  Fut: Future<Output = Result<T, E>>,
  E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
  try_async(f)
    .await?
    .map_err(|e| normalise(Thrown::Error(e.into())))
}
