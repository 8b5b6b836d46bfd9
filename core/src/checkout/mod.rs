// core/src/checkout/mod.rs

//! The checkout/payment orchestration flow.
//!
//! One attempt walks a strictly sequential machine:
//!
//! ```text
//! Idle -> OrderCreating -> OrderCreated -> SessionCreating -> SessionCreated
//!      -> WidgetOpen -> { VerifyingPayment -> Confirmed } | Cancelled | Failed
//! ```
//!
//! Each stage returns a plain `Result`; a single orchestrator
//! ([`flow::CheckoutFlow`]) composes them and owns the only side effects
//! (alerts, navigation, clearing the bag). The backend, the hosted payment
//! widget, and the user-facing surface are all capability traits so the
//! whole flow runs under test with synthetic doubles.

pub mod flow;
pub mod gateway;
pub mod phase;
pub mod shell;
pub mod widget;

pub use flow::{CheckoutError, CheckoutFlow, CheckoutOutcome};
pub use gateway::CheckoutGateway;
pub use phase::CheckoutPhase;
pub use shell::{Route, Shell};
pub use widget::{ContactDetails, PaymentWidget, WidgetError, WidgetOutcome, WidgetRequest};
