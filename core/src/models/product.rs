// core/src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as served by `GET /products/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(with = "rust_decimal::serde::str")]
  pub price: Decimal,
  pub stock: i32,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub is_featured: bool,
  #[serde(default)]
  pub is_trending: bool,
  #[serde(default)]
  pub is_bestseller: bool,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

impl Product {
  pub fn in_stock(&self) -> bool {
    self.stock > 0
  }
}

/// Payload for `POST /products/`: any signed-in user may submit one; this
/// is how the garment customizer publishes a one-off design.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDraft {
  pub name: String,
  pub description: String,
  #[serde(with = "rust_decimal::serde::str")]
  pub price: Decimal,
  pub stock: i32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

/// Partial update for `PATCH /products/{id}/` (admin only). The category
/// flags are what the admin dashboard toggles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
  pub price: Option<Decimal>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stock: Option<i32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_featured: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_trending: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_bestseller: Option<bool>,
}

/// Server-side filters accepted by the product list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogFilter {
  pub featured: bool,
  pub trending: bool,
  pub bestseller: bool,
}

impl CatalogFilter {
  pub(crate) fn query(&self) -> Vec<(&'static str, &'static str)> {
    let mut params = Vec::new();
    if self.featured {
      params.push(("is_featured", "true"));
    }
    if self.trending {
      params.push(("is_trending", "true"));
    }
    if self.bestseller {
      params.push(("is_bestseller", "true"));
    }
    params
  }
}
