// trolley/examples/two_consumers.rs

use std::sync::Arc;
use tracing::info;
use trolley::{
  CartStore, MemoryCartTable, PricingConfig, ProductSnapshot, SessionProvider, StaticSession, TracingNotifier,
};

// Each store keeps a private cache over the shared table, the way two
// mounted views of the same cart each hold their own fetched copy. They
// reconcile on refresh, not by push.

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Two Consumers Example ---");

  let table = Arc::new(MemoryCartTable::with_products([
    ProductSnapshot::new("prod-desk", "Walnut Desk Organizer", 10.00, "seller-ada"),
    ProductSnapshot::new("prod-kettle", "Gooseneck Kettle", 42.00, "seller-ada"),
  ]));

  // 1. Two stores for the same user over the same table
  let open = |table: Arc<MemoryCartTable>| async move {
    let session: Arc<dyn SessionProvider> = Arc::new(StaticSession::user("casey"));
    CartStore::open(session, table, Arc::new(TracingNotifier), PricingConfig::default()).await
  };
  let header_badge = open(table.clone()).await;
  let cart_page = open(table.clone()).await;

  // 2. A mutation through one store refetches only that store
  cart_page.add_to_cart("prod-desk", 2).await;
  info!(
    "cart page sees {} line(s); header badge sees {}",
    cart_page.items().len(),
    header_badge.items().len()
  );
  assert_eq!(cart_page.items().len(), 1);
  assert_eq!(header_badge.items().len(), 0); // stale until it refetches

  // 3. Refresh reconciles the second consumer
  header_badge.refresh().await;
  assert_eq!(header_badge.items().len(), 1);
  assert_eq!(header_badge.summary(), cart_page.summary());
  info!("after refresh both consumers agree: {} item(s)", header_badge.summary().item_count);
}
