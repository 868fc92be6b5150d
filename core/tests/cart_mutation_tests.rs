// tests/cart_mutation_tests.rs
mod common; // Reference the common module

use common::*;
use uuid::Uuid;

#[tokio::test]
async fn test_add_creates_line_and_notifies() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 2).await;

  let items = store.items();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].product_id, DESK_ORGANIZER);
  assert_eq!(items[0].quantity, 2);
  assert_eq!(items[0].product.title, "Walnut Desk Organizer");
  // The join carries the catalog's snapshot whole, image list included.
  assert_eq!(
    items[0].product.images,
    vec!["https://img.example/desk-front.jpg", "https://img.example/desk-side.jpg"]
  );
  assert!(store.is_in_cart(DESK_ORGANIZER));
  assert_eq!(store.item_quantity(DESK_ORGANIZER), 2);
  assert_eq!(notifier.successes(), vec!["Item added to cart"]);
  assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn test_add_same_product_merges_into_one_line() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 2).await;
  let first_id = store.items()[0].id;
  store.add_to_cart(DESK_ORGANIZER, 3).await;

  // Still one line, quantities summed, same line id as the first add.
  let items = store.items();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].quantity, 5);
  assert_eq!(items[0].id, first_id);
  assert_eq!(notifier.successes(), vec!["Item added to cart", "Item added to cart"]);
}

#[tokio::test]
async fn test_add_distinct_products_make_distinct_lines_newest_first() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 1).await;
  store.add_to_cart(POUR_OVER_SET, 1).await;

  let items = store.items();
  assert_eq!(items.len(), 2);
  assert_eq!(items[0].product_id, POUR_OVER_SET); // most recent first
  assert_eq!(items[1].product_id, DESK_ORGANIZER);
}

#[tokio::test]
async fn test_add_zero_quantity_is_rejected_before_the_table() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table.clone(), notifier.clone()).await;
  let fetches_after_open = table.list_calls();

  store.add_to_cart(DESK_ORGANIZER, 0).await;

  assert!(store.items().is_empty());
  assert_eq!(notifier.errors(), vec!["Failed to add item to cart"]);
  assert!(notifier.successes().is_empty());
  // Failed mutations do not refetch.
  assert_eq!(table.list_calls(), fetches_after_open);
}

#[tokio::test]
async fn test_add_unknown_product_notifies_failure() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart("prod-nope", 1).await;

  assert!(store.items().is_empty());
  assert_eq!(notifier.errors(), vec!["Failed to add item to cart"]);
}

#[tokio::test]
async fn test_update_quantity_sets_absolute_value_silently() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 2).await;
  let line_id = store.items()[0].id;
  notifier.clear();

  store.update_quantity(line_id, 4).await;

  // Absolute, not additive: 4, not 6. And success shows no notification.
  assert_eq!(store.item_quantity(DESK_ORGANIZER), 4);
  assert!(notifier.is_silent());
}

#[tokio::test]
async fn test_update_to_zero_deletes_the_line() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table.clone(), notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 2).await;
  let line_id = store.items()[0].id;

  store.update_quantity(line_id, 0).await;

  assert!(store.items().is_empty());
  assert!(!store.is_in_cart(DESK_ORGANIZER));
  // Physically deleted, not zeroed: the table itself holds no row.
  let rows = trolley::CartTable::list(table.as_ref(), "user-a").await.unwrap();
  assert!(rows.is_empty());
}

#[tokio::test]
async fn test_update_to_negative_deletes_the_line() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(POUR_OVER_SET, 3).await;
  let line_id = store.items()[0].id;

  store.update_quantity(line_id, -1).await;

  assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_remove_is_idempotent() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 1).await;
  let line_id = store.items()[0].id;
  notifier.clear();

  store.remove_from_cart(line_id).await;
  store.remove_from_cart(line_id).await; // already gone; confirms as a no-op

  assert!(store.items().is_empty());
  assert_eq!(
    notifier.successes(),
    vec!["Item removed from cart", "Item removed from cart"]
  );
  assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn test_update_of_missing_line_confirms_as_noop() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 2).await;
  notifier.clear();

  store.update_quantity(Uuid::new_v4(), 7).await;

  // Unknown id: confirmed as a no-op, nothing changes, nothing is notified.
  assert_eq!(store.item_quantity(DESK_ORGANIZER), 2);
  assert!(notifier.is_silent());
}

#[tokio::test]
async fn test_clear_cart_removes_every_line() {
  setup_tracing();
  let table = seeded_table();
  let notifier = RecordingNotifier::new();
  let store = open_store("user-a", table, notifier.clone()).await;

  store.add_to_cart(DESK_ORGANIZER, 2).await;
  store.add_to_cart(POUR_OVER_SET, 1).await;
  store.add_to_cart(THROW_PILLOW, 4).await;
  notifier.clear();

  store.clear_cart().await;

  assert!(store.items().is_empty());
  assert_eq!(store.summary().item_count, 0);
  assert_eq!(notifier.successes(), vec!["Cart cleared"]);
}
