// core/src/checkout/gateway.rs

use async_trait::async_trait;

use crate::api::{ApiError, HttpClient};
use crate::cart::CartLine;
use crate::models::{NewOrder, Order, PaymentConfirmation, PaymentSession};

/// The three backend operations the checkout flow depends on, as a seam so
/// the flow can run against a scripted double in tests.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
  /// Submit the bag for purchase; returns the pending order with its
  /// server-computed total.
  async fn submit_order(&self, lines: &[CartLine]) -> Result<Order, ApiError>;

  /// Request a gateway session scoped to the order's confirmed total.
  async fn open_payment_session(&self, order_id: i64) -> Result<PaymentSession, ApiError>;

  /// Forward the widget's signed triple for server-side verification.
  async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<(), ApiError>;
}

#[async_trait]
impl CheckoutGateway for HttpClient {
  async fn submit_order(&self, lines: &[CartLine]) -> Result<Order, ApiError> {
    let order = NewOrder {
      items: lines.iter().map(CartLine::to_order_line).collect(),
    };
    self.create_order(&order).await
  }

  async fn open_payment_session(&self, order_id: i64) -> Result<PaymentSession, ApiError> {
    self.create_payment_session(order_id).await
  }

  async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<(), ApiError> {
    HttpClient::verify_payment(self, confirmation).await
  }
}
