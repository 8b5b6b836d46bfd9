// core/src/cart/store.rs

use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::Product;
use crate::storage::{KeyValueStore, StorageError};

use super::line::CartLine;

/// Storage key for the persisted bag. Kept identical to the web
/// storefront's key so existing state files carry over.
pub const CART_KEY: &str = "mockCart";

/// Handle returned by [`CartStore::subscribe`]; pass it back to
/// [`CartStore::unsubscribe`] to stop receiving snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&[CartLine]) + Send + Sync>;

struct CartInner {
  lines: Vec<CartLine>,
  listeners: Vec<(u64, Listener)>,
  next_listener: u64,
}

/// The persisted shopping bag.
///
/// Invariant: at most one line per `(product_id, size)` pair; adding an
/// existing pair increments its quantity instead of duplicating the line.
/// Every mutation persists the full collection through the injected
/// [`KeyValueStore`] before the in-memory state is updated, then notifies
/// subscribers with a snapshot.
///
/// Listener callbacks run on the mutating thread with the store's lock
/// released, but they MUST NOT mutate the store re-entrantly.
#[derive(Clone)]
pub struct CartStore {
  state: Arc<dyn KeyValueStore>,
  inner: Arc<RwLock<CartInner>>,
}

impl CartStore {
  /// Loads the bag from persisted state. A corrupt payload is logged and
  /// treated as an empty bag, never as a fatal error.
  pub fn open(state: Arc<dyn KeyValueStore>) -> Self {
    let lines = match state.get(CART_KEY) {
      Some(raw) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => lines,
        Err(err) => {
          warn!(error = %err, "Persisted cart could not be decoded; starting with an empty bag");
          Vec::new()
        }
      },
      None => Vec::new(),
    };

    Self {
      state,
      inner: Arc::new(RwLock::new(CartInner {
        lines,
        listeners: Vec::new(),
        next_listener: 0,
      })),
    }
  }

  // --- Mutations ---

  /// Merges the product/size pair into the bag: an existing line gains one
  /// unit, a new pair is appended with quantity 1.
  pub fn add_line(&self, product: &Product, size: &str) -> Result<(), StorageError> {
    self.commit(|lines| {
      if let Some(line) = lines.iter_mut().find(|l| l.matches(product.id, size)) {
        line.quantity += 1;
      } else {
        lines.push(CartLine::for_product(product, size));
      }
      true
    })
  }

  /// Sets the quantity of an existing line. A requested quantity of zero
  /// or below removes the line; unknown lines are a no-op.
  pub fn set_quantity(&self, product_id: i64, size: &str, quantity: i32) -> Result<(), StorageError> {
    self.commit(|lines| {
      let Some(pos) = lines.iter().position(|l| l.matches(product_id, size)) else {
        return false;
      };
      if quantity <= 0 {
        lines.remove(pos);
      } else {
        lines[pos].quantity = quantity as u32;
      }
      true
    })
  }

  /// Adds one unit to an existing line.
  pub fn increment(&self, product_id: i64, size: &str) -> Result<(), StorageError> {
    self.commit(|lines| match lines.iter_mut().find(|l| l.matches(product_id, size)) {
      Some(line) => {
        line.quantity += 1;
        true
      }
      None => false,
    })
  }

  /// Removes one unit from an existing line, with a floor of 1. Dropping
  /// the last unit requires [`CartStore::remove_line`] or an explicit
  /// `set_quantity(.., 0)`.
  pub fn decrement(&self, product_id: i64, size: &str) -> Result<(), StorageError> {
    self.commit(|lines| match lines.iter_mut().find(|l| l.matches(product_id, size)) {
      Some(line) if line.quantity > 1 => {
        line.quantity -= 1;
        true
      }
      _ => false,
    })
  }

  /// Deletes the line unconditionally, whatever its quantity.
  pub fn remove_line(&self, product_id: i64, size: &str) -> Result<(), StorageError> {
    self.commit(|lines| {
      let before = lines.len();
      lines.retain(|l| !l.matches(product_id, size));
      lines.len() != before
    })
  }

  /// Empties the bag. Called by the checkout flow after a confirmed
  /// payment, and never on failure or cancellation.
  pub fn clear(&self) -> Result<(), StorageError> {
    self.commit(|lines| {
      if lines.is_empty() {
        return false;
      }
      lines.clear();
      true
    })
  }

  // --- Reads ---

  pub fn lines(&self) -> Vec<CartLine> {
    self.inner.read().lines.clone()
  }

  /// Number of lines in the bag; the badge count the navbar shows.
  pub fn line_count(&self) -> usize {
    self.inner.read().lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.read().lines.is_empty()
  }

  pub fn subtotal(&self) -> Decimal {
    self
      .inner
      .read()
      .lines
      .iter()
      .fold(Decimal::ZERO, |acc, line| acc + line.line_total())
  }

  /// Display totals: the delivery charge applies only to a non-empty bag,
  /// matching what the backend will add at order time.
  pub fn summary(&self, delivery_fee: Decimal) -> CartSummary {
    let lines = self.lines();
    let subtotal = lines
      .iter()
      .fold(Decimal::ZERO, |acc, line| acc + line.line_total());
    let delivery_fee = if lines.is_empty() { Decimal::ZERO } else { delivery_fee };
    CartSummary {
      subtotal,
      delivery_fee,
      total: subtotal + delivery_fee,
      lines,
    }
  }

  // --- Change notification ---

  /// Registers a listener invoked with a snapshot after every committed
  /// mutation. This replaces the interval polling the web storefront
  /// used for its badge count.
  pub fn subscribe(&self, listener: impl Fn(&[CartLine]) + Send + Sync + 'static) -> ListenerId {
    let mut inner = self.inner.write();
    let id = inner.next_listener;
    inner.next_listener += 1;
    inner.listeners.push((id, Box::new(listener)));
    ListenerId(id)
  }

  pub fn unsubscribe(&self, id: ListenerId) {
    self.inner.write().listeners.retain(|(lid, _)| *lid != id.0);
  }

  // --- Internals ---

  /// Applies `mutate` to a working copy, persists it, then swaps it in and
  /// notifies. A storage failure leaves the in-memory bag untouched, so
  /// memory never runs ahead of disk.
  fn commit<F>(&self, mutate: F) -> Result<(), StorageError>
  where
    F: FnOnce(&mut Vec<CartLine>) -> bool,
  {
    let snapshot = {
      let mut inner = self.inner.write();
      let mut next = inner.lines.clone();
      if !mutate(&mut next) {
        return Ok(());
      }
      let encoded = serde_json::to_string(&next)?;
      self.state.put(CART_KEY, &encoded)?;
      inner.lines = next;
      inner.lines.clone()
    };

    debug!(lines = snapshot.len(), "Cart committed");
    self.notify(&snapshot);
    Ok(())
  }

  fn notify(&self, snapshot: &[CartLine]) {
    let inner = self.inner.read();
    for (_, listener) in &inner.listeners {
      listener(snapshot);
    }
  }
}

/// Totals for display, computed from a consistent snapshot of the bag.
#[derive(Debug, Clone)]
pub struct CartSummary {
  pub lines: Vec<CartLine>,
  pub subtotal: Decimal,
  pub delivery_fee: Decimal,
  pub total: Decimal,
}
