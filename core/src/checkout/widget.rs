// core/src/checkout/widget.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{PaymentConfirmation, PaymentSession};

#[derive(Debug, Error)]
pub enum WidgetError {
  /// The externally loaded gateway script is missing; no payment can be
  /// attempted at all.
  #[error("Payment gateway is not available: {0}")]
  Unavailable(String),

  #[error("Payment widget failed: {0}")]
  Failed(String),
}

/// Contact fields prefilled into the payment widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
  pub name: String,
  pub email: String,
  pub phone: String,
}

impl ContactDetails {
  /// The gateway accepts digits only in the contact field.
  pub fn phone_digits(&self) -> String {
    self.phone.chars().filter(char::is_ascii_digit).collect()
  }
}

/// Everything needed to construct and open the hosted widget.
#[derive(Debug, Clone)]
pub struct WidgetRequest {
  /// Publishable key id the widget is constructed with.
  pub key_id: String,
  pub session: PaymentSession,
  /// Human-readable description shown in the widget, referencing the
  /// order id.
  pub description: String,
  /// Prefill with the phone already reduced to digits.
  pub prefill: ContactDetails,
}

/// What the widget reported back, observed asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
  /// The shopper completed payment; the gateway returned its signed
  /// fields.
  Completed(PaymentConfirmation),
  /// The shopper closed the widget without paying. Non-fatal: the order
  /// stays pending and the bag is kept.
  Dismissed,
}

/// Capability seam over the externally rendered, modal payment widget.
/// The client does not control its UI; it only opens it and waits for one
/// of the two outcomes.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
  /// Whether the external widget script is present. Checked once per
  /// attempt; absence is fatal for that attempt.
  fn is_loaded(&self) -> bool;

  async fn open(&self, request: WidgetRequest) -> Result<WidgetOutcome, WidgetError>;
}
