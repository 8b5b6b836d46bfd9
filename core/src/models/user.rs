// core/src/models/user.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: i64,
  pub username: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub is_staff: bool,
}

/// Partial update for `PATCH /admin/users/{id}/`. A `password` value is
/// hashed server-side; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_staff: Option<bool>,
}
