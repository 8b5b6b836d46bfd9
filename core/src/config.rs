// core/src/config.rs

use dotenvy::dotenv;
use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};

/// Runtime configuration for the storefront client.
///
/// Every field has a development default matching the store's reference
/// deployment, so a bare `from_env()` works against a locally running
/// backend.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  /// Base URL of the store's REST backend, e.g. `http://localhost:8000/api`.
  pub api_base_url: String,
  /// Publishable key id for the hosted payment widget.
  pub razorpay_key_id: String,
  /// Path of the JSON file backing cart and session state.
  pub state_file: PathBuf,
  /// Flat delivery charge the backend adds to non-empty orders. Held
  /// client-side only to display the same total the server will compute.
  pub delivery_fee: Decimal,
}

impl StoreConfig {
  pub fn from_env() -> StoreResult<Self> {
    dotenv().ok(); // Load .env file if present

    let api_base_url = env::var("NEXUS_API_BASE_URL")
      .unwrap_or_else(|_| "http://localhost:8000/api".to_string())
      .trim_end_matches('/')
      .to_string();

    let razorpay_key_id =
      env::var("NEXUS_RAZORPAY_KEY_ID").unwrap_or_else(|_| "rzp_test_rxQ8YMdQHxknXd".to_string());

    let state_file = env::var("NEXUS_STATE_FILE")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(".nexus-storefront.json"));

    let delivery_fee = env::var("NEXUS_DELIVERY_FEE")
      .unwrap_or_else(|_| "40.00".to_string())
      .parse::<Decimal>()
      .map_err(|e| StoreError::Config(format!("Invalid NEXUS_DELIVERY_FEE: {}", e)))?;

    tracing::info!(api_base_url = %api_base_url, state_file = %state_file.display(), "Storefront configuration loaded");

    Ok(Self {
      api_base_url,
      razorpay_key_id,
      state_file,
      delivery_fee,
    })
  }
}
