// demos/storefront_app/src/console.rs

//! Console realizations of the storefront's capability seams: blocking
//! alerts on stderr, navigation rendered as the web client's route paths,
//! and a stand-in payment widget driven from stdin.

use async_trait::async_trait;
use std::io::{self, BufRead, Write};

use nexus_storefront::checkout::{PaymentWidget, Route, Shell, WidgetError, WidgetOutcome, WidgetRequest};
use nexus_storefront::models::PaymentConfirmation;

pub struct ConsoleShell;

impl Shell for ConsoleShell {
  fn alert(&self, message: &str) {
    eprintln!("[store] {}", message);
  }

  fn navigate(&self, route: Route) {
    println!("-> {}", route.path());
  }
}

/// Drives the hosted-widget hand-off from the terminal: the operator pays
/// in the real gateway (or a sandbox) and pastes the confirmation fields
/// back, or submits a blank line to back out, matching the two outcomes
/// the modal widget reports.
pub struct ConsolePaymentWidget;

#[async_trait]
impl PaymentWidget for ConsolePaymentWidget {
  fn is_loaded(&self) -> bool {
    true
  }

  async fn open(&self, request: WidgetRequest) -> Result<WidgetOutcome, WidgetError> {
    // stdin is blocking; keep it off the async runtime's workers.
    tokio::task::spawn_blocking(move || prompt_for_outcome(&request))
      .await
      .map_err(|e| WidgetError::Failed(format!("widget task aborted: {}", e)))?
  }
}

fn prompt_for_outcome(request: &WidgetRequest) -> Result<WidgetOutcome, WidgetError> {
  println!();
  let header = if request.session.name.is_empty() {
    "Payment"
  } else {
    request.session.name.as_str()
  };
  println!("=== {} ===", header);
  println!("{}", request.description);
  println!(
    "Amount due: {:.2} {}  (gateway order {}, key {})",
    request.session.amount as f64 / 100.0,
    request.session.currency,
    request.session.razorpay_order_id,
    request.key_id
  );
  if !request.prefill.email.is_empty() {
    println!("Contact on file: {} <{}> {}", request.prefill.name, request.prefill.email, request.prefill.phone);
  }

  let payment_id =
    prompt_line("Payment id (blank to close the widget): ").map_err(|e| WidgetError::Failed(e.to_string()))?;
  if payment_id.is_empty() {
    return Ok(WidgetOutcome::Dismissed);
  }
  let signature = prompt_line("Signature: ").map_err(|e| WidgetError::Failed(e.to_string()))?;

  Ok(WidgetOutcome::Completed(PaymentConfirmation {
    razorpay_order_id: request.session.razorpay_order_id.clone(),
    razorpay_payment_id: payment_id,
    razorpay_signature: signature,
  }))
}

pub fn prompt_line(label: &str) -> io::Result<String> {
  print!("{}", label);
  io::stdout().flush()?;
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line.trim().to_string())
}
