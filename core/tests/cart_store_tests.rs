// tests/cart_store_tests.rs
mod common;

use common::*;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use nexus_storefront::cart::{CartStore, CART_KEY};
use nexus_storefront::storage::{JsonFileStore, KeyValueStore, MemoryStore};

fn fee() -> Decimal {
  "40.00".parse().unwrap()
}

#[test]
fn repeated_adds_merge_into_one_line_per_pair() {
  setup_tracing();
  let fixture = test_state();
  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);

  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "L").unwrap();

  let lines = fixture.cart.lines();
  assert_eq!(lines.len(), 2);

  let medium = lines.iter().find(|l| l.size == "M").unwrap();
  assert_eq!(medium.quantity, 3);
  let large = lines.iter().find(|l| l.size == "L").unwrap();
  assert_eq!(large.quantity, 1);
}

#[test]
fn set_quantity_zero_or_below_removes_the_line() {
  setup_tracing();
  let fixture = test_state();
  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);

  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.set_quantity(7, "M", 0).unwrap();
  assert!(fixture.cart.is_empty());

  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.set_quantity(7, "M", -5).unwrap();
  assert!(fixture.cart.is_empty());
}

#[test]
fn set_quantity_updates_an_existing_line() {
  let fixture = test_state();
  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);

  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.set_quantity(7, "M", 4).unwrap();
  assert_eq!(fixture.cart.lines()[0].quantity, 4);

  // Unknown pair is a no-op, not a phantom line.
  fixture.cart.set_quantity(99, "M", 4).unwrap();
  assert_eq!(fixture.cart.line_count(), 1);
}

#[test]
fn decrement_clamps_at_one_but_removal_bypasses_the_floor() {
  let fixture = test_state();
  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);

  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.decrement(7, "M").unwrap();
  assert_eq!(fixture.cart.lines()[0].quantity, 1, "floor clamp holds");

  fixture.cart.increment(7, "M").unwrap();
  assert_eq!(fixture.cart.lines()[0].quantity, 2);
  fixture.cart.decrement(7, "M").unwrap();
  assert_eq!(fixture.cart.lines()[0].quantity, 1);

  fixture.cart.remove_line(7, "M").unwrap();
  assert!(fixture.cart.is_empty());
}

#[test]
fn summary_applies_delivery_only_to_a_non_empty_bag() {
  let fixture = test_state();
  let empty = fixture.cart.summary(fee());
  assert_eq!(empty.subtotal, Decimal::ZERO);
  assert_eq!(empty.delivery_fee, Decimal::ZERO);
  assert_eq!(empty.total, Decimal::ZERO);

  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);
  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "M").unwrap();

  let summary = fixture.cart.summary(fee());
  assert_eq!(summary.subtotal.to_string(), "998.00");
  assert_eq!(summary.delivery_fee.to_string(), "40.00");
  assert_eq!(summary.total.to_string(), "1038.00");
}

#[test]
fn mutations_persist_synchronously_and_reload() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("state.json");

  {
    let state: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).unwrap());
    let cart = CartStore::open(state);
    let tee = sample_product(7, "Monochrome Tee", "499.00", 12);
    cart.add_line(&tee, "M").unwrap();
    cart.add_line(&tee, "M").unwrap();
  }

  // A fresh store over the same file sees the committed bag.
  let state: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).unwrap());
  let cart = CartStore::open(state);
  let lines = cart.lines();
  assert_eq!(lines.len(), 1);
  assert_eq!(lines[0].quantity, 2);
  assert_eq!(lines[0].product_id, 7);
}

#[test]
fn corrupt_persisted_cart_loads_as_empty() {
  setup_tracing();
  let state = Arc::new(MemoryStore::new());
  state.put(CART_KEY, "definitely not json").unwrap();

  let cart = CartStore::open(state);
  assert!(cart.is_empty());
}

#[test]
fn subscribers_observe_every_commit_until_unsubscribed() {
  let fixture = test_state();
  let notifications = Arc::new(AtomicUsize::new(0));
  let last_seen = Arc::new(Mutex::new(0usize));

  let id = {
    let notifications = notifications.clone();
    let last_seen = last_seen.clone();
    fixture.cart.subscribe(move |snapshot| {
      notifications.fetch_add(1, Ordering::SeqCst);
      *last_seen.lock().unwrap() = snapshot.len();
    })
  };

  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);
  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "L").unwrap();
  assert_eq!(notifications.load(Ordering::SeqCst), 2);
  assert_eq!(*last_seen.lock().unwrap(), 2);

  // A no-op mutation does not notify.
  fixture.cart.decrement(7, "M").unwrap();
  assert_eq!(notifications.load(Ordering::SeqCst), 2);

  fixture.cart.unsubscribe(id);
  fixture.cart.remove_line(7, "M").unwrap();
  assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[test]
fn badge_count_tracks_lines_not_units() {
  let fixture = test_state();
  let tee = sample_product(7, "Monochrome Tee", "499.00", 12);
  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "M").unwrap();
  fixture.cart.add_line(&tee, "L").unwrap();
  assert_eq!(fixture.cart.line_count(), 2);
}
