// core/src/models/mod.rs

//! Wire types for the store backend's JSON API.
//!
//! Field names and representations follow the backend exactly: identifiers
//! are server-assigned integers, money travels as decimal strings
//! (`"499.00"`), timestamps as RFC 3339.

pub mod admin;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use admin::{
  DailyCount, DashboardStats, HourlyCount, LowStockAlert, MonthlyCount, ProductAnalytics,
  StatusCount, TopSeller, WeekdayCount, YearlyCount,
};
pub use order::{NewOrder, NewOrderLine, Order, OrderItem, OrderStatus};
pub use payment::{PaymentConfirmation, PaymentSession};
pub use product::{CatalogFilter, Product, ProductDraft, ProductPatch};
pub use user::{UserPatch, UserProfile};
