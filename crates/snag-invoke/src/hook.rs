//! Routing panic reports through `tracing`.

use std::{any::Any, panic::Location};

/// Replace the process panic hook with one that emits a `tracing` event.
///
/// Panics caught by the wrappers are then reported once, at `debug`, in the
/// subscriber's format instead of the default hook's stderr message. Call it
/// once, after the subscriber is installed.
pub fn install_tracing_panic_hook() {
  std::panic::set_hook(Box::new(|info| {
    let report = describe_panic(info.payload(), info.location());
    tracing::debug!(target: "snag::panic", "{report}");
  }));
}

pub(crate) fn describe_panic(
  payload: &(dyn Any + Send),
  location: Option<&Location<'_>>,
) -> String {
  let message = payload
    .downcast_ref::<&'static str>()
    .copied()
    .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    .unwrap_or("non-textual payload");
  match location {
    Some(at) => format!("panicked at {}:{}: {message}", at.file(), at.line()),
    None => format!("panicked: {message}"),
  }
}
