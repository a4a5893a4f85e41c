//! User creation with validation and normalised database failures.

use snag_core::{CodedError, ValidationError};
use snag_invoke::try_async_fallible;

use crate::{
  DemoConfig,
  db::{FakeDb, User},
};

pub struct UserService {
  db:     FakeDb,
  config: DemoConfig,
}

impl UserService {
  pub fn new(db: FakeDb, config: DemoConfig) -> Self { Self { db, config } }

  /// Create a user called `username`.
  ///
  /// A name shorter than the configured minimum yields a
  /// [`CodedError::Validation`] without touching the database. A database
  /// failure yields [`CodedError::Unidentified`] with the [`DbError`]
  /// as its cause.
  ///
  /// [`DbError`]: crate::db::DbError
  pub async fn create_user(&self, username: &str) -> Result<User, CodedError> {
    let min = self.config.min_username_len;
    if username.chars().count() < min {
      return Err(
        ValidationError::new(format!(
          "Username must be at least {min} characters long."
        ))
        .into(),
      );
    }

    let fail = self.config.simulate_db_failure;
    let user = try_async_fallible(|| self.db.create_user(username, fail)).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "created user");
    Ok(user)
  }
}
