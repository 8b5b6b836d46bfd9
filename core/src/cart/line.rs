// core/src/cart/line.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NewOrderLine, Product};

/// One line of the bag: a product variant (`product_id` + `size`) plus a
/// quantity. Name, price and image are display snapshots taken when the
/// line was added; the backend reprices every line at order submission.
///
/// The serialized field names (`id`, `price`) match the web storefront's
/// cart format, so an existing state file keeps working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  #[serde(rename = "id")]
  pub product_id: i64,
  pub name: String,
  pub size: String,
  #[serde(rename = "price", with = "rust_decimal::serde::str")]
  pub unit_price: Decimal,
  #[serde(default)]
  pub image: Option<String>,
  pub quantity: u32,
}

impl CartLine {
  pub fn for_product(product: &Product, size: &str) -> Self {
    Self {
      product_id: product.id,
      name: product.name.clone(),
      size: size.to_string(),
      unit_price: product.price,
      image: product.image.clone(),
      quantity: 1,
    }
  }

  pub fn matches(&self, product_id: i64, size: &str) -> bool {
    self.product_id == product_id && self.size == size
  }

  pub fn line_total(&self) -> Decimal {
    self.unit_price * Decimal::from(self.quantity)
  }

  pub fn to_order_line(&self) -> NewOrderLine {
    NewOrderLine {
      product_id: self.product_id,
      quantity: self.quantity,
      price: self.unit_price,
    }
  }
}
