// core/src/models/payment.rs

use serde::{Deserialize, Serialize};

/// A gateway checkout session issued by `POST /payment/create-order/`,
/// tied 1:1 to a pending order. Used exactly once to open the hosted
/// widget and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
  pub razorpay_order_id: String,
  /// Amount in the smallest currency unit (paise for INR), computed
  /// server-side from the order total. The client never supplies this.
  pub amount: i64,
  pub currency: String,
  /// Merchant display name for the widget header.
  #[serde(default)]
  pub name: String,
  /// Publishable key echoed by the backend; the client may prefer its own
  /// configured key id.
  #[serde(default)]
  pub key: Option<String>,
}

/// The signed triple the widget hands back on successful payment. Opaque
/// to the client; forwarded verbatim to `POST /payment/verify/` and then
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
  pub razorpay_order_id: String,
  pub razorpay_payment_id: String,
  pub razorpay_signature: String,
}
