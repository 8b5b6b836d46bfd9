// core/src/error.rs
use thiserror::Error;

use crate::api::ApiError;
use crate::checkout::CheckoutError;
use crate::storage::StorageError;

/// Top-level error for the storefront core.
///
/// Each layer keeps its own focused enum (`ApiError`, `StorageError`,
/// `CheckoutError`); this type exists so applications can hold a single
/// error at their outer edge.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Local state storage error: {source}")]
  Storage {
    #[from]
    source: StorageError,
  },

  #[error("Store backend error: {source}")]
  Api {
    #[from]
    source: ApiError,
  },

  #[error("Checkout error: {source}")]
  Checkout {
    #[from]
    source: CheckoutError,
  },

  #[error("Internal error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be folded into StoreError at application seams,
// so binaries using `anyhow::Result` can still hand errors back to us.
impl From<anyhow::Error> for StoreError {
  fn from(err: anyhow::Error) -> Self {
    StoreError::Internal(err.to_string())
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
