// core/src/api/mod.rs

//! Typed HTTP bindings for the store backend.
//!
//! Thin request/response plumbing only: the backend owns pricing, stock,
//! authorization and payment verification. Errors carry whatever message
//! the backend put in its body so the UI layer can surface it verbatim.

pub mod admin;
pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::ApiError;
