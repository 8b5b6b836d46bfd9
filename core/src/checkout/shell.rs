// core/src/checkout/shell.rs

/// Storefront destinations the flow can send the shopper to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  Home,
  SignIn,
  Checkout,
  OrderHistory,
  AdminDashboard,
}

impl Route {
  /// The web storefront's route paths, kept for display and logging.
  pub fn path(self) -> &'static str {
    match self {
      Route::Home => "/",
      Route::SignIn => "/auth",
      Route::Checkout => "/checkout",
      Route::OrderHistory => "/orders",
      Route::AdminDashboard => "/admin",
    }
  }
}

/// Blocking user feedback plus navigation; the one place the flow is
/// allowed to talk to the shopper. Swapping this for a recording double is
/// what makes the orchestration unit-testable.
pub trait Shell: Send + Sync {
  fn alert(&self, message: &str);
  fn navigate(&self, route: Route);
}
