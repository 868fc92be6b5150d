// trolley/src/cart.rs

//! The cart store: cached lines, confirm-then-refresh mutations, derived
//! summary.
//!
//! Every mutation follows the same arc: run the fallible core against the
//! remote table, and only on confirmation refetch the full line list. There
//! is no optimistic local edit and therefore nothing to roll back; a failed
//! mutation leaves the cache exactly as the last successful fetch left it.
//!
//! Errors never escape a mutation. The fallible core reports through
//! `CartResult`; the public operation catches, logs, and translates the
//! failure into a notification on the injected sink.

use crate::cache::LineCache;
use crate::config::PricingConfig;
use crate::error::{CartError, CartResult};
use crate::model::{CartLine, CartSummary};
use crate::notify::Notifier;
use crate::session::SessionProvider;
use crate::table::CartTable;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// In-flight operation counters backing the `is_*` pending flags.
///
/// Counters, not booleans: overlapping calls are legal (no queuing, see the
/// concurrency notes on [`CartStore`]), so a flag only clears when the last
/// overlapping operation of its kind finishes.
#[derive(Debug, Default)]
struct PendingFlags {
  loading: AtomicUsize,
  adding: AtomicUsize,
  updating: AtomicUsize,
  removing: AtomicUsize,
  clearing: AtomicUsize,
}

/// Increments a pending counter for the guard's lifetime, error paths
/// included.
struct PendingGuard<'a> {
  counter: &'a AtomicUsize,
}

impl<'a> PendingGuard<'a> {
  fn enter(counter: &'a AtomicUsize) -> Self {
    counter.fetch_add(1, Ordering::SeqCst);
    Self { counter }
  }
}

impl Drop for PendingGuard<'_> {
  fn drop(&mut self) {
    self.counter.fetch_sub(1, Ordering::SeqCst);
  }
}

/// A session-scoped cart over a remote table.
///
/// One `CartStore` per mounted consumer: the cached line list is private to
/// the instance, while the session, table, and notifier collaborators are
/// shared `Arc`s injected at construction. Two consumers over the same table
/// can transiently disagree until each refetches; there is no shared
/// subscription.
///
/// Mutations are not serialized against each other. Overlapping un-awaited
/// calls touching the same line are last-write-wins: `add_to_cart` reads the
/// base quantity from the last-loaded snapshot, so two overlapping adds for
/// one product can each observe the same base and the later confirmation
/// overwrites rather than compounds. Sequential awaited calls always
/// compound.
pub struct CartStore {
  session: Arc<dyn SessionProvider>,
  table: Arc<dyn CartTable>,
  notifier: Arc<dyn Notifier>,
  pricing: PricingConfig,
  cache: LineCache,
  pending: PendingFlags,
}

impl CartStore {
  /// Creates a store with an empty cache. Call [`refresh`](Self::refresh)
  /// (or construct via [`open`](Self::open)) before reading.
  pub fn new(
    session: Arc<dyn SessionProvider>,
    table: Arc<dyn CartTable>,
    notifier: Arc<dyn Notifier>,
    pricing: PricingConfig,
  ) -> Self {
    Self {
      session,
      table,
      notifier,
      pricing,
      cache: LineCache::new(),
      pending: PendingFlags::default(),
    }
  }

  /// Creates a store and performs the initial load.
  pub async fn open(
    session: Arc<dyn SessionProvider>,
    table: Arc<dyn CartTable>,
    notifier: Arc<dyn Notifier>,
    pricing: PricingConfig,
  ) -> Self {
    let store = Self::new(session, table, notifier, pricing);
    store.refresh().await;
    store
  }

  // --- Load ---

  /// Refetches the cached line list from the table.
  ///
  /// No session: the cache becomes the empty list, without error. A fetch
  /// failure keeps the last-known-good cache and logs a warning; load
  /// failures are not notified (notifications belong to mutations).
  #[instrument(name = "CartStore::refresh", skip(self))]
  pub async fn refresh(&self) {
    let _pending = PendingGuard::enter(&self.pending.loading);

    let Some(user_id) = self.session.current_user_id().await else {
      event!(Level::DEBUG, "No session; cart is empty.");
      self.cache.replace(Vec::new());
      return;
    };

    match self.table.list(&user_id).await {
      Ok(lines) => {
        event!(Level::DEBUG, count = lines.len(), "Cart lines refreshed.");
        self.cache.replace(lines);
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Cart refresh failed; keeping last-known-good lines.");
      }
    }
  }

  // --- Mutations ---

  /// Adds `quantity` of `product_id`, merging into an existing line.
  ///
  /// The existing-line lookup reads the last-loaded snapshot, not the table;
  /// see the type docs for the overlap caveat.
  #[instrument(name = "CartStore::add_to_cart", skip(self), fields(product_id = %product_id, quantity))]
  pub async fn add_to_cart(&self, product_id: &str, quantity: u32) {
    let _pending = PendingGuard::enter(&self.pending.adding);

    match self.try_add(product_id, quantity).await {
      Ok(()) => {
        self.refresh().await;
        self.notifier.success("Item added to cart");
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Add to cart failed.");
        self.notifier.error("Failed to add item to cart");
      }
    }
  }

  async fn try_add(&self, product_id: &str, quantity: u32) -> CartResult<()> {
    if quantity == 0 {
      return Err(CartError::InvalidQuantity { quantity: 0 });
    }
    let user_id = self
      .session
      .current_user_id()
      .await
      .ok_or(CartError::Unauthenticated)?;

    // Owned copy out of the cache; no guard is alive across the await below.
    match self.cache.find_by_product(product_id) {
      Some((line_id, existing)) => {
        event!(Level::DEBUG, line_id = %line_id, existing, "Merging into existing line.");
        self.table.update_quantity(line_id, existing.saturating_add(quantity)).await
      }
      None => self.table.insert(&user_id, product_id, quantity).await.map(|_| ()),
    }
  }

  /// Sets a line's quantity to exactly `quantity`; `quantity <= 0` deletes
  /// the line. Success is silent (no notification), unlike add/remove.
  #[instrument(name = "CartStore::update_quantity", skip(self), fields(line_id = %line_id, quantity))]
  pub async fn update_quantity(&self, line_id: Uuid, quantity: i32) {
    let _pending = PendingGuard::enter(&self.pending.updating);

    let result = if quantity <= 0 {
      event!(Level::DEBUG, "Quantity dropped to zero or below; deleting line.");
      self.table.delete(line_id).await
    } else {
      self.table.update_quantity(line_id, quantity as u32).await
    };

    match result {
      Ok(()) => self.refresh().await,
      Err(err) => {
        event!(Level::WARN, error = %err, "Quantity update failed.");
        self.notifier.error("Failed to update quantity");
      }
    }
  }

  /// Unconditionally deletes a line by id. Naturally idempotent: removing an
  /// already-removed id confirms as a no-op.
  #[instrument(name = "CartStore::remove_from_cart", skip(self), fields(line_id = %line_id))]
  pub async fn remove_from_cart(&self, line_id: Uuid) {
    let _pending = PendingGuard::enter(&self.pending.removing);

    match self.table.delete(line_id).await {
      Ok(()) => {
        self.refresh().await;
        self.notifier.success("Item removed from cart");
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Remove from cart failed.");
        self.notifier.error("Failed to remove item from cart");
      }
    }
  }

  /// Deletes every line owned by the current user in one operation.
  ///
  /// Requires a session: with none, the call is rejected locally before any
  /// network round-trip, silently (no notification).
  #[instrument(name = "CartStore::clear_cart", skip(self))]
  pub async fn clear_cart(&self) {
    let _pending = PendingGuard::enter(&self.pending.clearing);

    let Some(user_id) = self.session.current_user_id().await else {
      event!(Level::DEBUG, "clear_cart without a session; silently rejected.");
      return;
    };

    match self.table.delete_all(&user_id).await {
      Ok(()) => {
        self.refresh().await;
        self.notifier.success("Cart cleared");
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Clear cart failed.");
        self.notifier.error("Failed to clear cart");
      }
    }
  }

  // --- Derived reads (pure over the cache, no I/O) ---

  /// Cloned snapshot of the cached lines, newest-first.
  pub fn items(&self) -> Vec<CartLine> {
    self.cache.snapshot()
  }

  /// Summary derived fresh from the cached lines on every call.
  pub fn summary(&self) -> CartSummary {
    self.cache.summarize(&self.pricing)
  }

  pub fn is_in_cart(&self, product_id: &str) -> bool {
    self.cache.contains_product(product_id)
  }

  /// Quantity of the cached line for `product_id`, or 0 if absent.
  pub fn item_quantity(&self, product_id: &str) -> u32 {
    self.cache.quantity_of(product_id)
  }

  /// The pricing parameters every summary from this store is derived with.
  pub fn pricing(&self) -> &PricingConfig {
    &self.pricing
  }

  // --- Pending flags ---

  pub fn is_loading(&self) -> bool {
    self.pending.loading.load(Ordering::SeqCst) > 0
  }

  pub fn is_adding(&self) -> bool {
    self.pending.adding.load(Ordering::SeqCst) > 0
  }

  pub fn is_updating(&self) -> bool {
    self.pending.updating.load(Ordering::SeqCst) > 0
  }

  pub fn is_removing(&self) -> bool {
    self.pending.removing.load(Ordering::SeqCst) > 0
  }

  pub fn is_clearing(&self) -> bool {
    self.pending.clearing.load(Ordering::SeqCst) > 0
  }
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartStore")
      .field("cached_lines", &self.cache.len())
      .field("pricing", &self.pricing)
      .finish()
  }
}
