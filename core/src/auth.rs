// core/src/auth.rs

//! The persisted sign-in session.
//!
//! Register and login both return a token bundle; storing it makes the
//! client "signed in" for every authenticated endpoint. The storage keys
//! are the ones the web storefront uses, so a pre-existing state file is
//! picked up as-is.

use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::storage::{KeyValueStore, StorageError};

const ACCESS_TOKEN_KEY: &str = "access_token";
// Older clients stored the access token under the raw serializer field
// name; reads fall back to it.
const LEGACY_ACCESS_KEY: &str = "access";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USERNAME_KEY: &str = "username";
const USER_ID_KEY: &str = "user_id";
const IS_ADMIN_KEY: &str = "is_admin";

/// Token bundle returned by `POST /auth/register/` and `POST /auth/login/`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTokens {
  pub access: String,
  pub refresh: String,
  pub username: String,
  #[serde(rename = "isAdmin")]
  pub is_admin: bool,
  #[serde(rename = "userId")]
  pub user_id: i64,
}

/// The signed-in identity reconstructed from persisted state.
#[derive(Debug, Clone)]
pub struct Session {
  pub username: String,
  pub user_id: i64,
  pub is_admin: bool,
  pub access_token: String,
}

#[derive(Clone)]
pub struct SessionStore {
  state: Arc<dyn KeyValueStore>,
}

impl SessionStore {
  pub fn new(state: Arc<dyn KeyValueStore>) -> Self {
    Self { state }
  }

  /// Persists a fresh token bundle, signing the user in.
  pub fn store(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
    self.state.put(ACCESS_TOKEN_KEY, &tokens.access)?;
    self.state.put(REFRESH_TOKEN_KEY, &tokens.refresh)?;
    self.state.put(USERNAME_KEY, &tokens.username)?;
    self.state.put(USER_ID_KEY, &tokens.user_id.to_string())?;
    self.state.put(IS_ADMIN_KEY, if tokens.is_admin { "true" } else { "false" })?;
    debug!(username = %tokens.username, "Session stored");
    Ok(())
  }

  /// The bearer credential, if any. Its absence is the fatal precondition
  /// that aborts checkout before any network call.
  pub fn access_token(&self) -> Option<String> {
    self
      .state
      .get(ACCESS_TOKEN_KEY)
      .or_else(|| self.state.get(LEGACY_ACCESS_KEY))
  }

  pub fn is_signed_in(&self) -> bool {
    self.access_token().is_some()
  }

  pub fn is_admin(&self) -> bool {
    self.state.get(IS_ADMIN_KEY).as_deref() == Some("true")
  }

  /// Reconstructs the full identity, or `None` when signed out.
  pub fn current(&self) -> Option<Session> {
    let access_token = self.access_token()?;
    let username = self.state.get(USERNAME_KEY)?;
    let user_id = self
      .state
      .get(USER_ID_KEY)
      .and_then(|raw| raw.parse::<i64>().ok())
      .unwrap_or_default();
    Some(Session {
      username,
      user_id,
      is_admin: self.is_admin(),
      access_token,
    })
  }

  /// Signs out: removes every session key, leaving the cart untouched.
  pub fn clear(&self) -> Result<(), StorageError> {
    for key in [
      ACCESS_TOKEN_KEY,
      LEGACY_ACCESS_KEY,
      REFRESH_TOKEN_KEY,
      USERNAME_KEY,
      USER_ID_KEY,
      IS_ADMIN_KEY,
    ] {
      self.state.remove(key)?;
    }
    Ok(())
  }
}
