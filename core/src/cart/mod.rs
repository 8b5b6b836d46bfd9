// core/src/cart/mod.rs

//! The locally persisted shopping bag.
//!
//! Nothing in here talks to the backend: the bag is purely client-side
//! display state, re-priced by the server at order submission. Observers
//! subscribe to the store and are notified with a snapshot after every
//! committed mutation.

pub mod line;
pub mod store;

pub use line::CartLine;
pub use store::{CartStore, CartSummary, ListenerId, CART_KEY};
