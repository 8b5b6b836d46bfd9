// core/src/api/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Request to the store backend failed: {0}")]
  Network(#[from] reqwest::Error),

  /// The backend rejected an order because a line exceeds available stock.
  /// Kept distinct so the storefront can show the exact shortage message.
  #[error("{detail}")]
  OutOfStock { detail: String },

  #[error("Authentication failed: {message}")]
  Unauthorized { message: String },

  #[error("Server returned status {status}: {message}")]
  Status { status: u16, message: String },

  #[error("Response body could not be decoded: {source}")]
  MalformedResponse {
    #[source]
    source: serde_json::Error,
  },

  #[error("No signed-in session; a bearer credential is required")]
  MissingCredential,
}

impl ApiError {
  /// Classifies a non-2xx response from its status and raw body.
  ///
  /// The backend reports failures in several shapes: a `detail` string
  /// (framework-level), an `error` string (hand-written views), or an
  /// `items` string for order validation, which is where the
  /// insufficient-stock rejection lives. Non-JSON bodies (a 404 HTML page,
  /// a proxy error) fall back to the bare status.
  pub(crate) fn from_response(status: u16, body: &str) -> Self {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
      Ok(value) => {
        if let Some(items) = value.get("items").and_then(|v| v.as_str()) {
          if items.contains("Not enough stock") {
            return ApiError::OutOfStock {
              detail: items.to_string(),
            };
          }
        }
        value
          .get("detail")
          .or_else(|| value.get("error"))
          .and_then(|v| v.as_str())
          .map(str::to_string)
          .unwrap_or_else(|| value.to_string())
      }
      Err(_) => "no parseable error body".to_string(),
    };

    if status == 401 || status == 403 {
      ApiError::Unauthorized { message }
    } else {
      ApiError::Status { status, message }
    }
  }

  pub fn is_out_of_stock(&self) -> bool {
    matches!(self, ApiError::OutOfStock { .. })
  }
}
