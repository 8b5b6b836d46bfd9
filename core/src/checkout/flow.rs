// core/src/checkout/flow.rs

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::api::ApiError;
use crate::auth::SessionStore;
use crate::cart::CartStore;
use crate::models::PaymentConfirmation;

use super::gateway::CheckoutGateway;
use super::phase::CheckoutPhase;
use super::shell::{Route, Shell};
use super::widget::{ContactDetails, PaymentWidget, WidgetError, WidgetOutcome, WidgetRequest};

#[derive(Debug, Error)]
pub enum CheckoutError {
  #[error("The bag is empty; nothing to order")]
  EmptyCart,

  #[error("No signed-in session; sign in before placing an order")]
  NotSignedIn,

  #[error("Payment gateway is not available")]
  GatewayUnavailable,

  #[error("Order creation failed: {source}")]
  OrderCreation {
    #[source]
    source: ApiError,
  },

  #[error("Payment session creation failed for order {order_id}: {source}")]
  SessionCreation {
    order_id: i64,
    #[source]
    source: ApiError,
  },

  #[error(transparent)]
  Widget(#[from] WidgetError),

  /// The payment may already be captured even though the backend refused
  /// to confirm it. The bag is kept and the order id surfaced so the
  /// shopper can follow up with support; the confirmation triple rides
  /// along for a manual re-submission.
  #[error("Payment verification failed for order {order_id}: {source}")]
  Verification {
    order_id: i64,
    confirmation: PaymentConfirmation,
    #[source]
    source: ApiError,
  },
}

/// How a completed attempt ended. Errors are the third possibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
  /// Payment verified; the order is processing and the bag was emptied.
  Confirmed { order_id: i64 },
  /// The shopper closed the widget; the order stays PENDING on the
  /// backend and the bag is kept untouched.
  Cancelled { order_id: i64 },
}

/// Orchestrates one checkout attempt end to end.
///
/// The two pre-flight checks (non-empty bag, signed-in session) run before
/// any network call and leave the phase at `Idle`: they reject the
/// attempt rather than fail it. From `OrderCreating` onward every error is
/// terminal for the attempt; calling [`CheckoutFlow::place_order`] again
/// starts over from `Idle`.
pub struct CheckoutFlow {
  cart: CartStore,
  session: SessionStore,
  gateway: Arc<dyn CheckoutGateway>,
  widget: Arc<dyn PaymentWidget>,
  shell: Arc<dyn Shell>,
  gateway_key_id: String,
  phase: CheckoutPhase,
}

impl CheckoutFlow {
  pub fn new(
    cart: CartStore,
    session: SessionStore,
    gateway: Arc<dyn CheckoutGateway>,
    widget: Arc<dyn PaymentWidget>,
    shell: Arc<dyn Shell>,
    gateway_key_id: impl Into<String>,
  ) -> Self {
    Self {
      cart,
      session,
      gateway,
      widget,
      shell,
      gateway_key_id: gateway_key_id.into(),
      phase: CheckoutPhase::Idle,
    }
  }

  pub fn phase(&self) -> CheckoutPhase {
    self.phase
  }

  fn advance(&mut self, next: CheckoutPhase) {
    debug_assert!(
      self.phase.can_follow(next),
      "illegal checkout transition {:?} -> {:?}",
      self.phase,
      next
    );
    debug!(from = ?self.phase, to = ?next, "Checkout phase transition");
    self.phase = next;
  }

  fn fail(&mut self, message: &str) {
    self.shell.alert(message);
    self.advance(CheckoutPhase::Failed);
  }

  /// Runs one attempt: submit the bag, open a payment session, hand
  /// control to the widget, verify the confirmation, and only then clear
  /// the bag and move the shopper to their order history.
  #[instrument(name = "checkout::place_order", skip_all)]
  pub async fn place_order(&mut self, contact: ContactDetails) -> Result<CheckoutOutcome, CheckoutError> {
    self.phase = CheckoutPhase::Idle; // every call is a fresh attempt

    let lines = self.cart.lines();
    if lines.is_empty() {
      self.shell.alert("Your bag is empty. Please add items to place an order.");
      return Err(CheckoutError::EmptyCart);
    }

    if self.session.access_token().is_none() {
      self.shell.alert("You must be signed in to place an order.");
      self.shell.navigate(Route::SignIn);
      return Err(CheckoutError::NotSignedIn);
    }

    self.advance(CheckoutPhase::OrderCreating);
    let order = match self.gateway.submit_order(&lines).await {
      Ok(order) => order,
      Err(source) => {
        self.fail(&format!("Error during order creation: {}", source));
        return Err(CheckoutError::OrderCreation { source });
      }
    };
    info!(order_id = order.id, total = %order.total_price, "Pending order created");
    self.advance(CheckoutPhase::OrderCreated);

    self.advance(CheckoutPhase::SessionCreating);
    let session = match self.gateway.open_payment_session(order.id).await {
      Ok(session) => session,
      Err(source) => {
        self.fail(&format!("Error creating payment session: {}", source));
        return Err(CheckoutError::SessionCreation {
          order_id: order.id,
          source,
        });
      }
    };
    self.advance(CheckoutPhase::SessionCreated);

    // The widget script loads independently of this flow; its absence is
    // only detectable here, once we actually need it.
    if !self.widget.is_loaded() {
      self.fail("Payment gateway is not available. Please try again later.");
      return Err(CheckoutError::GatewayUnavailable);
    }

    let request = WidgetRequest {
      key_id: self.gateway_key_id.clone(),
      description: format!("Order ID: {}", order.id),
      prefill: ContactDetails {
        phone: contact.phone_digits(),
        ..contact
      },
      session,
    };

    self.advance(CheckoutPhase::WidgetOpen);
    let outcome = match self.widget.open(request).await {
      Ok(outcome) => outcome,
      Err(err) => {
        self.fail(&format!("Payment gateway error: {}", err));
        return Err(CheckoutError::Widget(err));
      }
    };

    match outcome {
      WidgetOutcome::Dismissed => {
        self.advance(CheckoutPhase::Cancelled);
        self
          .shell
          .alert("Payment process interrupted. Your order status remains PENDING.");
        Ok(CheckoutOutcome::Cancelled { order_id: order.id })
      }
      WidgetOutcome::Completed(confirmation) => {
        self.advance(CheckoutPhase::VerifyingPayment);
        match self.gateway.verify_payment(&confirmation).await {
          Ok(()) => {
            // The payment is captured either way; failing to clear the
            // local bag must not demote a confirmed order.
            if let Err(err) = self.cart.clear() {
              warn!(error = %err, "Payment confirmed but the local bag could not be cleared");
            }
            self.advance(CheckoutPhase::Confirmed);
            self.shell.alert("Payment successful! Your order is now PROCESSING.");
            self.shell.navigate(Route::OrderHistory);
            Ok(CheckoutOutcome::Confirmed { order_id: order.id })
          }
          Err(source) => {
            // Deliberately keep the bag: the money may have moved.
            self.fail(&format!(
              "Payment verification error: {}. Please contact support with order ID {}.",
              source, order.id
            ));
            Err(CheckoutError::Verification {
              order_id: order.id,
              confirmation,
              source,
            })
          }
        }
      }
    }
  }
}
