// core/src/api/client.rs

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{info, instrument};

use crate::auth::{AuthTokens, Session, SessionStore};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{
  CatalogFilter, NewOrder, Order, PaymentConfirmation, PaymentSession, Product, ProductDraft,
  ProductPatch,
};

use super::error::ApiError;

/// Typed client for the store's REST backend.
///
/// Holds the persisted session and attaches its bearer credential at call
/// time, the way the web storefront reads the token from local storage
/// for every request.
pub struct HttpClient {
  http: Client,
  base_url: String,
  session: SessionStore,
}

impl HttpClient {
  pub fn new(config: &StoreConfig, session: SessionStore) -> StoreResult<Self> {
    let http = Client::builder()
      .user_agent(concat!("nexus-storefront/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| StoreError::Config(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Self {
      http,
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      session,
    })
  }

  pub fn session(&self) -> &SessionStore {
    &self.session
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  fn authed(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = self.session.access_token().ok_or(ApiError::MissingCredential)?;
    Ok(builder.bearer_auth(token))
  }

  pub(crate) fn get_authed(&self, path: &str) -> Result<RequestBuilder, ApiError> {
    self.authed(self.http.get(self.url(path)))
  }

  pub(crate) fn patch_authed(&self, path: &str) -> Result<RequestBuilder, ApiError> {
    self.authed(self.http.patch(self.url(path)))
  }

  pub(crate) fn delete_authed(&self, path: &str) -> Result<RequestBuilder, ApiError> {
    self.authed(self.http.delete(self.url(path)))
  }

  pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
      return Err(ApiError::from_response(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse { source })
  }

  pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
      return Ok(());
    }
    let body = response.text().await?;
    Err(ApiError::from_response(status.as_u16(), &body))
  }

  // --- Authentication ---

  /// `POST /auth/register/`: create an account; the backend signs the new
  /// user in immediately by returning a token bundle.
  #[instrument(name = "api::register", skip(self, password))]
  pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthTokens, ApiError> {
    let response = self
      .http
      .post(self.url("/auth/register/"))
      .json(&json!({ "username": username, "email": email, "password": password }))
      .send()
      .await?;
    Self::read_json(response).await
  }

  /// `POST /auth/login/`.
  #[instrument(name = "api::login", skip(self, password))]
  pub async fn login(&self, username: &str, password: &str) -> Result<AuthTokens, ApiError> {
    let response = self
      .http
      .post(self.url("/auth/login/"))
      .json(&json!({ "username": username, "password": password }))
      .send()
      .await?;
    Self::read_json(response).await
  }

  /// Logs in and persists the session.
  pub async fn sign_in(&self, username: &str, password: &str) -> StoreResult<Session> {
    let tokens = self.login(username, password).await?;
    self.session.store(&tokens)?;
    info!(username = %tokens.username, "Signed in");
    Ok(Session {
      username: tokens.username,
      user_id: tokens.user_id,
      is_admin: tokens.is_admin,
      access_token: tokens.access,
    })
  }

  /// Registers and persists the session.
  pub async fn sign_up(&self, username: &str, email: &str, password: &str) -> StoreResult<Session> {
    let tokens = self.register(username, email, password).await?;
    self.session.store(&tokens)?;
    info!(username = %tokens.username, "Registered and signed in");
    Ok(Session {
      username: tokens.username,
      user_id: tokens.user_id,
      is_admin: tokens.is_admin,
      access_token: tokens.access,
    })
  }

  // --- Catalog ---

  /// `GET /products/`, optionally narrowed by the category flags.
  #[instrument(name = "api::products", skip(self))]
  pub async fn products(&self, filter: CatalogFilter) -> Result<Vec<Product>, ApiError> {
    let mut request = self.http.get(self.url("/products/"));
    let params = filter.query();
    if !params.is_empty() {
      request = request.query(&params);
    }
    Self::read_json(request.send().await?).await
  }

  /// `GET /products/{id}/`.
  #[instrument(name = "api::product", skip(self))]
  pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
    let response = self.http.get(self.url(&format!("/products/{}/", id))).send().await?;
    Self::read_json(response).await
  }

  /// `POST /products/`: authenticated; used by the garment customizer to
  /// publish a one-off design.
  #[instrument(name = "api::create_product", skip(self, draft), fields(name = %draft.name))]
  pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
    let request = self.authed(self.http.post(self.url("/products/")))?.json(draft);
    Self::read_json(request.send().await?).await
  }

  /// `PATCH /products/{id}/`: admin only.
  #[instrument(name = "api::update_product", skip(self, patch))]
  pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<Product, ApiError> {
    let request = self
      .authed(self.http.patch(self.url(&format!("/products/{}/", id))))?
      .json(patch);
    Self::read_json(request.send().await?).await
  }

  /// `DELETE /products/{id}/`: admin only.
  #[instrument(name = "api::delete_product", skip(self))]
  pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
    let request = self.authed(self.http.delete(self.url(&format!("/products/{}/", id))))?;
    Self::expect_success(request.send().await?).await
  }

  // --- Orders ---

  /// `GET /orders/`: the signed-in user's own orders, newest first.
  #[instrument(name = "api::my_orders", skip(self))]
  pub async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
    let request = self.authed(self.http.get(self.url("/orders/")))?;
    Self::read_json(request.send().await?).await
  }

  /// `POST /orders/`: submit cart lines; the server reprices every line,
  /// validates stock, and returns the pending order with its final total.
  #[instrument(name = "api::create_order", skip(self, order), fields(lines = order.items.len()))]
  pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
    let request = self.authed(self.http.post(self.url("/orders/")))?.json(order);
    Self::read_json(request.send().await?).await
  }

  // --- Payment ---

  /// `POST /payment/create-order/`: ask the backend for a gateway session
  /// scoped to the order. The amount is recomputed server-side; sending a
  /// client total here would mean trusting client-side pricing.
  #[instrument(name = "api::create_payment_session", skip(self))]
  pub async fn create_payment_session(&self, order_id: i64) -> Result<PaymentSession, ApiError> {
    let request = self
      .authed(self.http.post(self.url("/payment/create-order/")))?
      .json(&json!({ "order_id": order_id }));
    Self::read_json(request.send().await?).await
  }

  /// `POST /payment/verify/`: forward the widget's signed triple for
  /// server-side signature verification. 2xx means the order moved to
  /// PROCESSING and stock was decremented.
  #[instrument(name = "api::verify_payment", skip(self, confirmation), fields(gateway_order = %confirmation.razorpay_order_id))]
  pub async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<(), ApiError> {
    let request = self
      .authed(self.http.post(self.url("/payment/verify/")))?
      .json(confirmation);
    Self::expect_success(request.send().await?).await
  }
}
