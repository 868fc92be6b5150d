// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;
use trolley::{
  CartStore, MemoryCartTable, Notifier, PricingConfig, ProductSnapshot, SessionProvider, StaticSession,
};

// --- Seed catalog ---
//
// Prices are picked so the summary arithmetic in the suites works out to
// exact cents: 5 x 10.00 = 50.00, tax at 8% = 4.00, etc.

pub const DESK_ORGANIZER: &str = "prod-1"; // 10.00
pub const POUR_OVER_SET: &str = "prod-2"; // 25.50
pub const THROW_PILLOW: &str = "prod-3"; // 7.25

pub fn seeded_table() -> Arc<MemoryCartTable> {
  Arc::new(MemoryCartTable::with_products([
    ProductSnapshot::new(DESK_ORGANIZER, "Walnut Desk Organizer", 10.00, "seller-1").with_images(vec![
      "https://img.example/desk-front.jpg".to_string(),
      "https://img.example/desk-side.jpg".to_string(),
    ]),
    ProductSnapshot::new(POUR_OVER_SET, "Ceramic Pour-Over Set", 25.50, "seller-1"),
    ProductSnapshot::new(THROW_PILLOW, "Linen Throw Pillow", 7.25, "seller-2"),
  ]))
}

// --- Recording notifier ---

/// Captures every notification the store emits, in order, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
  successes: Mutex<Vec<String>>,
  errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn successes(&self) -> Vec<String> {
    self.successes.lock().clone()
  }

  pub fn errors(&self) -> Vec<String> {
    self.errors.lock().clone()
  }

  pub fn is_silent(&self) -> bool {
    self.successes.lock().is_empty() && self.errors.lock().is_empty()
  }

  pub fn clear(&self) {
    self.successes.lock().clear();
    self.errors.lock().clear();
  }
}

impl Notifier for RecordingNotifier {
  fn success(&self, message: &str) {
    self.successes.lock().push(message.to_string());
  }

  fn error(&self, message: &str) {
    self.errors.lock().push(message.to_string());
  }
}

// --- Store builders ---

/// Store for `user_id` over `table`, notifications captured, default pricing.
/// Performs the initial load before returning.
pub async fn open_store(
  user_id: &str,
  table: Arc<MemoryCartTable>,
  notifier: Arc<RecordingNotifier>,
) -> CartStore {
  let session: Arc<dyn SessionProvider> = Arc::new(StaticSession::user(user_id));
  CartStore::open(session, table, notifier, PricingConfig::default()).await
}

/// Store with a swappable session, for sign-in/sign-out tests. The returned
/// `StaticSession` handle is the same one the store consults.
pub async fn open_store_with_session(
  session: Arc<StaticSession>,
  table: Arc<MemoryCartTable>,
  notifier: Arc<RecordingNotifier>,
) -> CartStore {
  CartStore::open(session, table, notifier, PricingConfig::default()).await
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
