// trolley/examples/basic_cart.rs

use std::sync::Arc;
use tracing::info;
use trolley::{
  CartError, CartStore, MemoryCartTable, PricingConfig, ProductSnapshot, SessionProvider, StaticSession,
  TracingNotifier,
};

#[tokio::main]
async fn main() -> Result<(), CartError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Seed a product catalog behind an in-memory cart table
  let table = Arc::new(MemoryCartTable::with_products([
    ProductSnapshot::new("prod-desk", "Walnut Desk Organizer", 10.00, "seller-ada"),
    ProductSnapshot::new("prod-kettle", "Gooseneck Kettle", 42.00, "seller-ada"),
  ]));

  // 2. Pricing: defaults, or CART_TAX_RATE / CART_SHIPPING_FLAT_FEE from the environment
  let pricing = PricingConfig::from_env()?;

  // 3. Open a store scoped to one signed-in user; this performs the first load
  let session: Arc<dyn SessionProvider> = Arc::new(StaticSession::user("casey"));
  let store = CartStore::open(session, table, Arc::new(TracingNotifier), pricing).await;
  info!("Cart opened with {} line(s)", store.items().len());

  // 4. Add items; a second add of the same product merges into one line
  store.add_to_cart("prod-desk", 2).await;
  store.add_to_cart("prod-kettle", 1).await;
  store.add_to_cart("prod-desk", 1).await; // folds into the existing line
  for line in store.items() {
    info!(
      "{} x{} @ {:.2} = {:.2}",
      line.product.title,
      line.quantity,
      line.product.price,
      line.line_total()
    );
  }

  // 5. The summary is derived fresh from the cached lines on every read
  let summary = store.summary();
  info!(
    "subtotal {:.2} + tax {:.2} + shipping {:.2} = {:.2} ({} items)",
    summary.subtotal, summary.tax, summary.shipping, summary.total, summary.item_count
  );

  // 6. Set an absolute quantity, then empty the cart
  let desk_line = store
    .items()
    .into_iter()
    .find(|line| line.product_id == "prod-desk")
    .unwrap();
  store.update_quantity(desk_line.id, 5).await;
  info!("desk organizer quantity is now {}", store.item_quantity("prod-desk"));

  store.clear_cart().await;
  info!("cart cleared; {} line(s) remain", store.items().len());

  // Two products, desk organizer merged to 3 then set to 5, finally cleared.
  assert_eq!(store.items().len(), 0);
  assert_eq!(store.summary().item_count, 0);
  assert_eq!(store.summary().shipping, 0.0);

  Ok(())
}
