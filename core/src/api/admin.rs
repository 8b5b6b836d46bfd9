// core/src/api/admin.rs

//! Admin dashboard endpoints. Every call here requires a staff session;
//! the backend answers 403 otherwise and the error surfaces as
//! [`ApiError::Unauthorized`].

use serde_json::json;
use tracing::instrument;

use crate::models::{DashboardStats, Order, OrderStatus, ProductAnalytics, UserPatch, UserProfile};

use super::client::HttpClient;
use super::error::ApiError;

impl HttpClient {
  /// `GET /admin/stats/`: order volume, status distribution, revenue.
  #[instrument(name = "api::dashboard_stats", skip(self))]
  pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
    let request = self.get_authed("/admin/stats/")?;
    Self::read_json(request.send().await?).await
  }

  /// `GET /admin/product-analytics/`: low-stock alerts and top sellers.
  #[instrument(name = "api::product_analytics", skip(self))]
  pub async fn product_analytics(&self) -> Result<ProductAnalytics, ApiError> {
    let request = self.get_authed("/admin/product-analytics/")?;
    Self::read_json(request.send().await?).await
  }

  /// `GET /admin/users/`.
  #[instrument(name = "api::users", skip(self))]
  pub async fn users(&self) -> Result<Vec<UserProfile>, ApiError> {
    let request = self.get_authed("/admin/users/")?;
    Self::read_json(request.send().await?).await
  }

  /// `PATCH /admin/users/{id}/`.
  #[instrument(name = "api::update_user", skip(self, patch))]
  pub async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<UserProfile, ApiError> {
    let request = self.patch_authed(&format!("/admin/users/{}/", id))?.json(patch);
    Self::read_json(request.send().await?).await
  }

  /// `DELETE /admin/users/{id}/`.
  #[instrument(name = "api::delete_user", skip(self))]
  pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
    let request = self.delete_authed(&format!("/admin/users/{}/", id))?;
    Self::expect_success(request.send().await?).await
  }

  /// `GET /admin/orders/`: every customer's orders, newest first.
  #[instrument(name = "api::all_orders", skip(self))]
  pub async fn all_orders(&self) -> Result<Vec<Order>, ApiError> {
    let request = self.get_authed("/admin/orders/")?;
    Self::read_json(request.send().await?).await
  }

  /// `PATCH /admin/orders/{id}/status/`: move an order through its
  /// fulfilment lifecycle.
  #[instrument(name = "api::set_order_status", skip(self))]
  pub async fn set_order_status(&self, order_id: i64, status: OrderStatus) -> Result<Order, ApiError> {
    let request = self
      .patch_authed(&format!("/admin/orders/{}/status/", order_id))?
      .json(&json!({ "status": status }));
    Self::read_json(request.send().await?).await
  }
}
