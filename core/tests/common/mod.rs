// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;

use nexus_storefront::api::ApiError;
use nexus_storefront::auth::{AuthTokens, SessionStore};
use nexus_storefront::cart::{CartLine, CartStore};
use nexus_storefront::checkout::{
  CheckoutGateway, PaymentWidget, Route, Shell, WidgetError, WidgetOutcome, WidgetRequest,
};
use nexus_storefront::models::{Order, PaymentConfirmation, PaymentSession, Product};
use nexus_storefront::storage::{KeyValueStore, MemoryStore};

// --- Tracing setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Sample wire payloads ---
// Built through serde so the fixtures double as wire-format checks.

pub fn sample_product(id: i64, name: &str, price: &str, stock: i32) -> Product {
  serde_json::from_str(&format!(
    r#"{{
      "id": {},
      "name": "{}",
      "description": "",
      "price": "{}",
      "stock": {},
      "image": null,
      "category": "tshirts",
      "is_featured": false,
      "is_trending": false,
      "is_bestseller": false,
      "created_at": "2025-07-01T09:30:00Z"
    }}"#,
    id, name, price, stock
  ))
  .unwrap()
}

pub fn sample_order(id: i64) -> Order {
  serde_json::from_str(&format!(
    r#"{{
      "id": {},
      "customer": null,
      "created_at": "2025-08-01T12:05:33Z",
      "total_price": "1038.00",
      "status": "PENDING",
      "items": [],
      "razorpay_order_id": null
    }}"#,
    id
  ))
  .unwrap()
}

pub fn sample_payment_session() -> PaymentSession {
  serde_json::from_str(
    r#"{
      "razorpay_order_id": "order_PBb9zMpGkvk3Ty",
      "amount": 103800,
      "currency": "INR",
      "name": "T-Shirt Store",
      "key": "rzp_test_rxQ8YMdQHxknXd"
    }"#,
  )
  .unwrap()
}

pub fn sample_confirmation() -> PaymentConfirmation {
  PaymentConfirmation {
    razorpay_order_id: "order_PBb9zMpGkvk3Ty".to_string(),
    razorpay_payment_id: "pay_PBbA6FSmRkUxCs".to_string(),
    razorpay_signature: "9ef4dffbfd84f1318f6739a3ce19f9d85851857ae648f114332d8401e0949a3d".to_string(),
  }
}

pub fn signed_in_tokens() -> AuthTokens {
  serde_json::from_str(
    r#"{
      "access": "acc.jwt",
      "refresh": "ref.jwt",
      "username": "asha",
      "isAdmin": false,
      "userId": 3
    }"#,
  )
  .unwrap()
}

// --- Shared state fixtures ---

/// A cart and session store sharing one in-memory state file, the way the
/// real client shares one local-storage area.
pub struct TestState {
  pub state: Arc<MemoryStore>,
  pub cart: CartStore,
  pub session: SessionStore,
}

pub fn test_state() -> TestState {
  let state = Arc::new(MemoryStore::new());
  let dyn_state: Arc<dyn KeyValueStore> = state.clone();
  TestState {
    cart: CartStore::open(dyn_state.clone()),
    session: SessionStore::new(dyn_state),
    state,
  }
}

pub fn signed_in_state() -> TestState {
  let fixture = test_state();
  fixture.session.store(&signed_in_tokens()).unwrap();
  fixture
}

pub fn lines_of(cart: &CartStore) -> Vec<CartLine> {
  cart.lines()
}

// --- Scripted checkout gateway ---

/// Scripted backend double. Unscripted calls answer with the sample
/// payloads above; scripted errors are consumed on first use.
#[derive(Default)]
pub struct FakeGateway {
  pub submit_calls: AtomicUsize,
  pub session_calls: AtomicUsize,
  pub verify_calls: AtomicUsize,
  submit_error: Mutex<Option<ApiError>>,
  session_error: Mutex<Option<ApiError>>,
  verify_error: Mutex<Option<ApiError>>,
  pub submitted_lines: Mutex<Vec<Vec<CartLine>>>,
  pub verified: Mutex<Vec<PaymentConfirmation>>,
}

impl FakeGateway {
  pub fn happy() -> Self {
    Self::default()
  }

  pub fn failing_submit(err: ApiError) -> Self {
    let gateway = Self::default();
    *gateway.submit_error.lock().unwrap() = Some(err);
    gateway
  }

  pub fn failing_session(err: ApiError) -> Self {
    let gateway = Self::default();
    *gateway.session_error.lock().unwrap() = Some(err);
    gateway
  }

  pub fn failing_verify(err: ApiError) -> Self {
    let gateway = Self::default();
    *gateway.verify_error.lock().unwrap() = Some(err);
    gateway
  }

  pub fn total_calls(&self) -> usize {
    self.submit_calls.load(Ordering::SeqCst)
      + self.session_calls.load(Ordering::SeqCst)
      + self.verify_calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl CheckoutGateway for FakeGateway {
  async fn submit_order(&self, lines: &[CartLine]) -> Result<Order, ApiError> {
    self.submit_calls.fetch_add(1, Ordering::SeqCst);
    self.submitted_lines.lock().unwrap().push(lines.to_vec());
    if let Some(err) = self.submit_error.lock().unwrap().take() {
      return Err(err);
    }
    Ok(sample_order(41))
  }

  async fn open_payment_session(&self, _order_id: i64) -> Result<PaymentSession, ApiError> {
    self.session_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(err) = self.session_error.lock().unwrap().take() {
      return Err(err);
    }
    Ok(sample_payment_session())
  }

  async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<(), ApiError> {
    self.verify_calls.fetch_add(1, Ordering::SeqCst);
    self.verified.lock().unwrap().push(confirmation.clone());
    if let Some(err) = self.verify_error.lock().unwrap().take() {
      return Err(err);
    }
    Ok(())
  }
}

// --- Scripted payment widget ---

pub struct FakeWidget {
  loaded: bool,
  outcome: Mutex<Option<WidgetOutcome>>,
  pub open_calls: AtomicUsize,
  pub last_request: Mutex<Option<WidgetRequest>>,
}

impl FakeWidget {
  pub fn completing() -> Self {
    Self {
      loaded: true,
      outcome: Mutex::new(Some(WidgetOutcome::Completed(sample_confirmation()))),
      open_calls: AtomicUsize::new(0),
      last_request: Mutex::new(None),
    }
  }

  pub fn dismissing() -> Self {
    Self {
      loaded: true,
      outcome: Mutex::new(Some(WidgetOutcome::Dismissed)),
      open_calls: AtomicUsize::new(0),
      last_request: Mutex::new(None),
    }
  }

  /// The external script never loaded; `open` must never be reached.
  pub fn not_loaded() -> Self {
    Self {
      loaded: false,
      outcome: Mutex::new(None),
      open_calls: AtomicUsize::new(0),
      last_request: Mutex::new(None),
    }
  }
}

#[async_trait]
impl PaymentWidget for FakeWidget {
  fn is_loaded(&self) -> bool {
    self.loaded
  }

  async fn open(&self, request: WidgetRequest) -> Result<WidgetOutcome, WidgetError> {
    self.open_calls.fetch_add(1, Ordering::SeqCst);
    *self.last_request.lock().unwrap() = Some(request);
    self
      .outcome
      .lock()
      .unwrap()
      .take()
      .ok_or_else(|| WidgetError::Failed("no scripted outcome".to_string()))
  }
}

// --- Recording shell ---

#[derive(Default)]
pub struct RecordingShell {
  alerts: Mutex<Vec<String>>,
  routes: Mutex<Vec<Route>>,
}

impl RecordingShell {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn alerts(&self) -> Vec<String> {
    self.alerts.lock().unwrap().clone()
  }

  pub fn routes(&self) -> Vec<Route> {
    self.routes.lock().unwrap().clone()
  }
}

impl Shell for RecordingShell {
  fn alert(&self, message: &str) {
    self.alerts.lock().unwrap().push(message.to_string());
  }

  fn navigate(&self, route: Route) {
    self.routes.lock().unwrap().push(route);
  }
}
