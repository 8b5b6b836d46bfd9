// demos/storefront_app/src/main.rs

// Console storefront for the NEXUS shop: browse the catalog, manage the
// bag, sign in, and run the full checkout/payment flow against a running
// backend.

mod console;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use nexus_storefront::api::HttpClient;
use nexus_storefront::auth::SessionStore;
use nexus_storefront::cart::{CartStore, CartSummary};
use nexus_storefront::checkout::{CheckoutFlow, CheckoutGateway, CheckoutOutcome, ContactDetails};
use nexus_storefront::config::StoreConfig;
use nexus_storefront::models::{CatalogFilter, Order, OrderStatus};
use nexus_storefront::storage::{JsonFileStore, KeyValueStore};

use console::{prompt_line, ConsolePaymentWidget, ConsoleShell};

#[derive(Parser)]
#[command(name = "storefront_app", about = "Console storefront for the NEXUS shop")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List catalog products
  Products {
    #[arg(long)]
    featured: bool,
    #[arg(long)]
    trending: bool,
    #[arg(long)]
    bestseller: bool,
  },
  /// Show one product
  Product { id: i64 },
  /// Create an account and sign in
  Register { username: String, email: String },
  /// Sign in
  Login { username: String },
  /// Sign out
  Logout,
  /// Manage the bag
  #[command(subcommand)]
  Bag(BagCommand),
  /// Place the order and pay
  Checkout {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
  },
  /// Your order history
  Orders,
  /// Admin dashboard
  #[command(subcommand)]
  Admin(AdminCommand),
}

#[derive(Subcommand)]
enum BagCommand {
  /// Add one unit of a product/size to the bag
  Add {
    product_id: i64,
    #[arg(long)]
    size: String,
  },
  /// Show the bag with totals
  Show,
  /// Set a line's quantity (0 removes it)
  Set {
    product_id: i64,
    #[arg(long)]
    size: String,
    #[arg(long)]
    quantity: i32,
  },
  /// Remove a line outright
  Remove {
    product_id: i64,
    #[arg(long)]
    size: String,
  },
  /// Empty the bag
  Clear,
}

#[derive(Subcommand)]
enum AdminCommand {
  /// Order volume, status distribution, revenue
  Stats,
  /// Low-stock alerts and top sellers
  Analytics,
  /// All registered users
  Users,
  /// Every customer's orders
  Orders,
  /// Move an order through its lifecycle
  SetStatus { order_id: i64, status: OrderStatus },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();
  let config = StoreConfig::from_env()?;

  let state: Arc<dyn KeyValueStore> =
    Arc::new(JsonFileStore::open(&config.state_file).context("opening state file")?);
  let cart = CartStore::open(state.clone());
  let session = SessionStore::new(state);
  let client = HttpClient::new(&config, session.clone())?;
  tracing::debug!(state_file = %config.state_file.display(), "Storefront client wired");

  match cli.command {
    Command::Products {
      featured,
      trending,
      bestseller,
    } => {
      let filter = CatalogFilter {
        featured,
        trending,
        bestseller,
      };
      for product in client.products(filter).await? {
        println!(
          "#{:<4} {:<32} {:>10}  stock {}",
          product.id, product.name, product.price, product.stock
        );
      }
    }

    Command::Product { id } => {
      let product = client.product(id).await?;
      println!("{} (#{})", product.name, product.id);
      if let Some(category) = &product.category {
        println!("Category: {}", category);
      }
      println!("Price: {}", product.price);
      println!(
        "{}",
        if product.in_stock() {
          format!("{} units in stock", product.stock)
        } else {
          "Out of stock".to_string()
        }
      );
    }

    Command::Register { username, email } => {
      let password = prompt_line("Password: ")?;
      let session = client.sign_up(&username, &email, &password).await?;
      println!("Welcome, {}!", session.username);
    }

    Command::Login { username } => {
      let password = prompt_line("Password: ")?;
      let session = client.sign_in(&username, &password).await?;
      println!(
        "Signed in as {}{}",
        session.username,
        if session.is_admin { " (admin)" } else { "" }
      );
    }

    Command::Logout => {
      session.clear()?;
      println!("Signed out.");
    }

    Command::Bag(bag_command) => {
      run_bag_command(bag_command, &cart, &client, &config).await?;
    }

    Command::Checkout { name, email, phone } => {
      print_summary(&cart.summary(config.delivery_fee));
      let gateway: Arc<dyn CheckoutGateway> = Arc::new(client);
      let mut flow = CheckoutFlow::new(
        cart,
        session,
        gateway,
        Arc::new(ConsolePaymentWidget),
        Arc::new(ConsoleShell),
        config.razorpay_key_id.clone(),
      );
      match flow.place_order(ContactDetails { name, email, phone }).await {
        Ok(CheckoutOutcome::Confirmed { order_id }) => {
          println!("Order {} confirmed and processing.", order_id)
        }
        Ok(CheckoutOutcome::Cancelled { order_id }) => {
          println!("Order {} left pending; your bag is unchanged.", order_id)
        }
        Err(err) => return Err(err.into()),
      }
    }

    Command::Orders => {
      for order in client.my_orders().await? {
        print_order(&order);
      }
    }

    Command::Admin(admin_command) => {
      run_admin_command(admin_command, &client).await?;
    }
  }

  Ok(())
}

async fn run_bag_command(
  command: BagCommand,
  cart: &CartStore,
  client: &HttpClient,
  config: &StoreConfig,
) -> anyhow::Result<()> {
  match command {
    BagCommand::Add { product_id, size } => {
      // Snapshot the catalog entry so the bag can render offline.
      let product = client.product(product_id).await?;
      if !product.in_stock() {
        anyhow::bail!("{} is out of stock", product.name);
      }
      cart.add_line(&product, &size)?;
      println!("Added {} (Size: {}) to the bag.", product.name, size);
    }
    BagCommand::Show => print_summary(&cart.summary(config.delivery_fee)),
    BagCommand::Set {
      product_id,
      size,
      quantity,
    } => {
      cart.set_quantity(product_id, &size, quantity)?;
      println!("Bag updated.");
    }
    BagCommand::Remove { product_id, size } => {
      cart.remove_line(product_id, &size)?;
      println!("Line removed.");
    }
    BagCommand::Clear => {
      cart.clear()?;
      println!("Bag emptied.");
    }
  }
  Ok(())
}

async fn run_admin_command(command: AdminCommand, client: &HttpClient) -> anyhow::Result<()> {
  match command {
    AdminCommand::Stats => {
      let stats = client.dashboard_stats().await?;
      println!("Total revenue (delivered): {:.2}", stats.total_revenue);
      for bucket in &stats.status_distribution {
        println!("{:<12} {}", bucket.status, bucket.count);
      }
      for bucket in &stats.daily_orders {
        println!("{} {}", bucket.date, bucket.count);
      }
    }
    AdminCommand::Analytics => {
      let analytics = client.product_analytics().await?;
      println!("{} products below threshold:", analytics.low_stock_count);
      for alert in &analytics.low_stock_alerts {
        println!(
          "  #{} {}: {} left (threshold {})",
          alert.id, alert.name, alert.current_stock, alert.threshold
        );
      }
      println!("Top sellers:");
      for seller in &analytics.top_selling_products {
        println!("  #{} {}: {} sold", seller.id, seller.name, seller.total_sold);
      }
    }
    AdminCommand::Users => {
      for user in client.users().await? {
        println!(
          "#{:<4} {:<24} {:<32} {}",
          user.id,
          user.username,
          user.email,
          if user.is_staff { "admin" } else { "customer" }
        );
      }
    }
    AdminCommand::Orders => {
      for order in client.all_orders().await? {
        print_order(&order);
      }
    }
    AdminCommand::SetStatus { order_id, status } => {
      let order = client.set_order_status(order_id, status).await?;
      println!("Order {} is now {}.", order.id, order.status);
    }
  }
  Ok(())
}

fn print_summary(summary: &CartSummary) {
  if summary.lines.is_empty() {
    println!("Your bag is currently empty.");
    return;
  }
  for line in &summary.lines {
    println!(
      "#{:<4} {:<28} Size: {:<4} Qty: {:<3} {:>10}",
      line.product_id,
      line.name,
      line.size,
      line.quantity,
      line.line_total()
    );
  }
  println!("{:>52} {:>10}", "Subtotal", summary.subtotal);
  println!("{:>52} {:>10}", "Delivery", summary.delivery_fee);
  println!("{:>52} {:>10}", "Total", summary.total);
}

fn print_order(order: &Order) {
  println!(
    "Order #{:<5} {}  {:<10} total {}",
    order.id,
    order.created_at.format("%Y-%m-%d %H:%M"),
    order.status,
    order.total_price
  );
  for item in &order.items {
    let name = item
      .product
      .as_ref()
      .map(|p| p.name.as_str())
      .unwrap_or("(removed product)");
    println!("    {} x{} @ {}", name, item.quantity, item.price);
  }
}
