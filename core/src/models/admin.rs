// core/src/models/admin.rs

//! Read models for the admin dashboard endpoints.
//!
//! These mirror the aggregation payloads the backend assembles for
//! `GET /admin/stats/` and `GET /admin/product-analytics/`. Period labels
//! stay strings: the backend emits truncated datetimes (`"2025-08-01..."`),
//! plain dates, and `"HH:00"` hour buckets, and the dashboard only ever
//! displays them.

use serde::Deserialize;

use super::order::OrderStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyCount {
  pub month: String,
  pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YearlyCount {
  pub year: String,
  pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyCount {
  pub date: String,
  pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyCount {
  pub hour: String,
  pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCount {
  pub status: OrderStatus,
  pub count: i64,
}

/// Day-of-week buckets; 1 = Sunday through 7 = Saturday, as extracted by
/// the backend's database.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekdayCount {
  #[serde(rename = "day_of_week_num")]
  pub day_of_week: i64,
  pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
  #[serde(default)]
  pub monthly_orders: Vec<MonthlyCount>,
  #[serde(default)]
  pub yearly_orders: Vec<YearlyCount>,
  #[serde(default)]
  pub status_distribution: Vec<StatusCount>,
  /// Revenue summed over delivered orders. Emitted as a bare JSON number
  /// by the backend's aggregation path, unlike the string-decimal order
  /// totals.
  pub total_revenue: f64,
  #[serde(default)]
  pub daily_orders: Vec<DailyCount>,
  #[serde(default)]
  pub hourly_orders_today: Vec<HourlyCount>,
  #[serde(default)]
  pub orders_by_day_of_week: Vec<WeekdayCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LowStockAlert {
  pub id: i64,
  pub name: String,
  pub current_stock: i32,
  pub threshold: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopSeller {
  pub id: i64,
  pub name: String,
  pub total_sold: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductAnalytics {
  #[serde(default)]
  pub low_stock_alerts: Vec<LowStockAlert>,
  #[serde(default)]
  pub top_selling_products: Vec<TopSeller>,
  #[serde(default)]
  pub low_stock_count: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_dashboard_stats_payload() {
    let raw = r#"{
      "monthly_orders": [{"month": "2025-07-01T00:00:00Z", "count": 18}],
      "yearly_orders": [{"year": "2025-01-01T00:00:00Z", "count": 120}],
      "status_distribution": [{"status": "DELIVERED", "count": 64}],
      "total_revenue": 61244.0,
      "daily_orders": [{"date": "2025-08-01", "count": 3}],
      "hourly_orders_today": [{"hour": "14:00", "count": 2}],
      "orders_by_day_of_week": [{"day_of_week_num": 2, "count": 31}]
    }"#;

    let stats: DashboardStats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.monthly_orders[0].count, 18);
    assert_eq!(stats.status_distribution[0].status, OrderStatus::Delivered);
    assert_eq!(stats.orders_by_day_of_week[0].day_of_week, 2);
    assert!((stats.total_revenue - 61244.0).abs() < f64::EPSILON);
  }

  #[test]
  fn decodes_product_analytics_payload() {
    let raw = r#"{
      "low_stock_alerts": [{"id": 9, "name": "Monochrome Tee", "current_stock": 4, "threshold": 10}],
      "top_selling_products": [{"id": 2, "name": "Nexus Classic", "total_sold": 240}],
      "low_stock_count": 1
    }"#;

    let analytics: ProductAnalytics = serde_json::from_str(raw).unwrap();
    assert_eq!(analytics.low_stock_count, 1);
    assert_eq!(analytics.low_stock_alerts[0].threshold, 10);
    assert_eq!(analytics.top_selling_products[0].total_sold, 240);
  }
}
