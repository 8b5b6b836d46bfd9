// core/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::product::Product;
use super::user::UserProfile;

/// Lifecycle of an order on the backend. Orders are created `PENDING`
/// ("awaiting payment") and move to `PROCESSING` once the payment
/// signature verifies; the later states are set by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
  Pending,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      OrderStatus::Pending => "PENDING",
      OrderStatus::Processing => "PROCESSING",
      OrderStatus::Shipped => "SHIPPED",
      OrderStatus::Delivered => "DELIVERED",
      OrderStatus::Cancelled => "CANCELLED",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl std::str::FromStr for OrderStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .into_iter()
      .find(|status| status.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| format!("unknown order status '{}'", s))
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub id: i64,
  /// Nested read-only product representation; absent if the product was
  /// deleted after the order was placed.
  #[serde(default)]
  pub product: Option<Product>,
  pub quantity: u32,
  /// Unit price the server charged at order time.
  #[serde(with = "rust_decimal::serde::str")]
  pub price: Decimal,
}

/// An order as returned by the backend. The client never computes
/// `total_price`; the server reprices every line and adds the delivery
/// charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: i64,
  #[serde(default)]
  pub customer: Option<UserProfile>,
  pub created_at: DateTime<Utc>,
  #[serde(with = "rust_decimal::serde::str")]
  pub total_price: Decimal,
  pub status: OrderStatus,
  #[serde(default)]
  pub items: Vec<OrderItem>,
  #[serde(default)]
  pub razorpay_order_id: Option<String>,
}

/// Payload for `POST /orders/`. The per-line price is the client's display
/// snapshot; the server ignores it in favor of the catalog price.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
  pub items: Vec<NewOrderLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOrderLine {
  pub product_id: i64,
  pub quantity: u32,
  #[serde(with = "rust_decimal::serde::str")]
  pub price: Decimal,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_backend_order_payload() {
    let raw = r#"{
      "id": 41,
      "customer": {"id": 3, "username": "asha", "email": "asha@gmail.com", "is_staff": false},
      "created_at": "2025-08-01T12:05:33.201000Z",
      "total_price": "1038.00",
      "status": "PENDING",
      "items": [
        {"id": 77, "product": null, "quantity": 2, "price": "499.00"}
      ],
      "razorpay_order_id": null
    }"#;

    let order: Order = serde_json::from_str(raw).unwrap();
    assert_eq!(order.id, 41);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total_price.to_string(), "1038.00");
  }

  #[test]
  fn status_serializes_uppercase() {
    assert_eq!(
      serde_json::to_string(&OrderStatus::Processing).unwrap(),
      "\"PROCESSING\""
    );
    let status: OrderStatus = serde_json::from_str("\"DELIVERED\"").unwrap();
    assert_eq!(status, OrderStatus::Delivered);
  }

  #[test]
  fn status_parses_case_insensitively() {
    assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
    assert_eq!("SHIPPED".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
    assert!("teleported".parse::<OrderStatus>().is_err());
  }
}
