//! Safe-invocation wrappers.
//!
//! Each wrapper runs a caller-supplied computation and turns any failure
//! (an `Err` or a panic) into an [`UnidentifiedError`] returned as data. The
//! wrappers themselves never panic and never propagate.
//!
//! Panic capture relies on unwinding; under `panic = "abort"` a panicking
//! computation still aborts the process. The panic hook runs as usual before
//! the panic is caught; [`install_tracing_panic_hook`] sends it to `tracing`
//! instead of stderr.

mod deferred;
mod hook;
mod immediate;

use snag_core::{Coded, Thrown, UnidentifiedError, create_unidentified_error};

pub use deferred::{try_async, try_async_fallible};
pub use hook::install_tracing_panic_hook;
pub use immediate::{try_sync, try_sync_fallible};

/// A computation's own value, or the error its failure was normalised into.
pub type Attempt<T> = Result<T, UnidentifiedError>;

fn normalise(thrown: Thrown) -> UnidentifiedError {
  let error = create_unidentified_error(thrown);
  tracing::debug!(
    code = %error.code(),
    has_cause = error.cause().is_some(),
    "computation failed: {}",
    error.message()
  );
  error
}
