//! A user-creation service built on coded errors.
//!
//! [`UserService::create_user`] validates its input itself and runs the
//! database call through [`snag_invoke::try_async_fallible`], so every
//! failure reaches the caller as a [`snag_core::CodedError`].

pub mod db;
pub mod service;

use serde::Deserialize;

pub use db::{DbError, FakeDb, User};
pub use service::UserService;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `snag.toml` and `SNAG_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DemoConfig {
  /// Shortest username accepted, in characters.
  pub min_username_len:    usize,
  /// Make every database call fail.
  pub simulate_db_failure: bool,
}

impl Default for DemoConfig {
  fn default() -> Self {
    Self {
      min_username_len:    3,
      simulate_db_failure: false,
    }
  }
}
