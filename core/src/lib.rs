// src/lib.rs

//! Client-side core for the NEXUS storefront.
//!
//! Everything that decides anything (pricing, stock, authorization,
//! payment verification) lives in the store's REST backend. This crate is
//! the client half:
//!  - A locally persisted shopping bag with merge semantics and change
//!    notification.
//!  - A persisted sign-in session (bearer tokens + identity).
//!  - Typed HTTP bindings for the backend (auth, catalog, orders, payment,
//!    admin dashboard).
//!  - The checkout/payment orchestration flow as an explicit state
//!    machine, with the payment widget and the user-facing surface behind
//!    capability traits.

pub mod api;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

// --- Re-exports for the Public API ---

pub use crate::api::{ApiError, HttpClient};
pub use crate::auth::{AuthTokens, Session, SessionStore};
pub use crate::cart::{CartLine, CartStore, CartSummary, ListenerId};
pub use crate::checkout::{
  CheckoutError, CheckoutFlow, CheckoutGateway, CheckoutOutcome, CheckoutPhase, ContactDetails,
  PaymentWidget, Route, Shell, WidgetError, WidgetOutcome, WidgetRequest,
};
pub use crate::config::StoreConfig;
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{
  CatalogFilter, NewOrder, Order, OrderStatus, PaymentConfirmation, PaymentSession, Product,
  ProductDraft, UserProfile,
};
pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
