//! An in-process stand-in for a user database.

use chrono::{DateTime, Utc};
use rand_core::{OsRng, RngCore};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct User {
  pub id:         Uuid,
  pub username:   String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum DbError {
  #[error("Db: username must be unique")]
  NonUnique,

  #[error("Db: timed out.")]
  TimedOut,
}

#[derive(Debug, Default, Clone)]
pub struct FakeDb;

impl FakeDb {
  /// Insert a user. With `should_fail` set the call fails with either
  /// [`DbError::NonUnique`] or [`DbError::TimedOut`], chosen at random.
  pub async fn create_user(
    &self,
    username: &str,
    should_fail: bool,
  ) -> Result<User, DbError> {
    tokio::task::yield_now().await;

    if should_fail {
      return Err(if OsRng.next_u32() % 2 == 0 {
        DbError::NonUnique
      } else {
        DbError::TimedOut
      });
    }

    Ok(User {
      id:         Uuid::new_v4(),
      username:   username.to_string(),
      created_at: Utc::now(),
    })
  }
}
