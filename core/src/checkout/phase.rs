// core/src/checkout/phase.rs

//! Progress of a single checkout attempt.

/// Phases of one checkout attempt. `Confirmed`, `Cancelled` and `Failed`
/// are terminal: there is no automatic retry, a new attempt starts over
/// from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
  Idle,
  OrderCreating,
  OrderCreated,
  SessionCreating,
  SessionCreated,
  WidgetOpen,
  VerifyingPayment,
  Confirmed,
  Cancelled,
  Failed,
}

impl CheckoutPhase {
  pub fn is_terminal(self) -> bool {
    matches!(
      self,
      CheckoutPhase::Confirmed | CheckoutPhase::Cancelled | CheckoutPhase::Failed
    )
  }

  /// Whether `next` is a legal successor of `self`. Any live phase may
  /// fail; only `WidgetOpen` may be cancelled (that is the one point where
  /// the shopper can back out).
  pub fn can_follow(self, next: CheckoutPhase) -> bool {
    use CheckoutPhase::*;
    match (self, next) {
      (from, Failed) => !from.is_terminal(),
      (Idle, OrderCreating) => true,
      (OrderCreating, OrderCreated) => true,
      (OrderCreated, SessionCreating) => true,
      (SessionCreating, SessionCreated) => true,
      (SessionCreated, WidgetOpen) => true,
      (WidgetOpen, VerifyingPayment) => true,
      (WidgetOpen, Cancelled) => true,
      (VerifyingPayment, Confirmed) => true,
      _ => false,
    }
  }
}
