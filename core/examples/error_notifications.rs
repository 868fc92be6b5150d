// trolley/examples/error_notifications.rs

use std::sync::Arc;
use tracing::info;
use trolley::{CartStore, MemoryCartTable, Notifier, PricingConfig, ProductSnapshot, StaticSession};

// A notifier standing in for a UI toast system: the store never returns
// errors from mutations, it reports through this seam instead.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
  fn success(&self, message: &str) {
    println!("[toast/success] {}", message);
  }

  fn error(&self, message: &str) {
    println!("[toast/error] {}", message);
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Error Notifications Example ---");

  let table = Arc::new(MemoryCartTable::with_products([ProductSnapshot::new(
    "prod-desk",
    "Walnut Desk Organizer",
    10.00,
    "seller-ada",
  )]));

  // 1. Signed out: adding notifies a failure, clearing is silently rejected
  let session = Arc::new(StaticSession::anonymous());
  let store = CartStore::open(
    session.clone(),
    table.clone(),
    Arc::new(ConsoleNotifier),
    PricingConfig::default(),
  )
  .await;

  store.add_to_cart("prod-desk", 1).await; // -> [toast/error] Failed to add item to cart
  store.clear_cart().await; // -> nothing; no session means no clear, no toast
  assert!(store.items().is_empty());

  // 2. Signed in: the same store now accepts mutations
  session.set_user(Some("casey".to_string()));
  store.add_to_cart("prod-desk", 2).await; // -> [toast/success] Item added to cart
  assert_eq!(store.item_quantity("prod-desk"), 2);

  // 3. Backend failures leave the cached lines exactly as the last
  //    successful fetch produced them
  table.set_failing(true);
  store.add_to_cart("prod-desk", 3).await; // -> [toast/error] Failed to add item to cart
  assert_eq!(store.item_quantity("prod-desk"), 2); // unchanged

  table.set_failing(false);
  store.add_to_cart("prod-desk", 3).await; // -> [toast/success] Item added to cart
  assert_eq!(store.item_quantity("prod-desk"), 5);

  info!("final quantity: {}", store.item_quantity("prod-desk"));
}
