// trolley/src/memory.rs

//! In-process `CartTable` for tests, examples, and headless development.
//!
//! Behaves like the hosted table the production client talks to: inserts
//! fold into an existing (user, product) row additively instead of
//! duplicating it, updates and deletes of absent rows succeed as no-ops
//! (row-count semantics), and listing joins the product snapshot at fetch
//! time, newest-first.

use crate::error::{CartError, CartResult};
use crate::model::{CartLine, ProductSnapshot};
use crate::table::CartTable;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// One stored row. The product join happens on read, so rows only carry the
/// product id.
#[derive(Debug, Clone)]
struct StoredRow {
  id: Uuid,
  user_id: String,
  product_id: String,
  quantity: u32,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  /// Tie-breaker for newest-first ordering when timestamps collide.
  seq: u64,
}

/// In-memory cart table with a seedable product catalog.
#[derive(Debug, Default)]
pub struct MemoryCartTable {
  products: RwLock<HashMap<String, ProductSnapshot>>,
  rows: RwLock<Vec<StoredRow>>,
  next_seq: AtomicU64,
  /// Number of `list` calls served; tests assert refetch-after-write with it.
  list_calls: AtomicU64,
  /// While set, every operation fails with a table rejection.
  failing: AtomicBool,
}

impl MemoryCartTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products<I>(products: I) -> Self
  where
    I: IntoIterator<Item = ProductSnapshot>,
  {
    let table = Self::new();
    for product in products {
      table.seed_product(product);
    }
    table
  }

  /// Adds (or replaces) a product in the join catalog.
  pub fn seed_product(&self, product: ProductSnapshot) {
    self.products.write().insert(product.id.clone(), product);
  }

  /// Toggles blanket failure injection for every subsequent operation.
  pub fn set_failing(&self, failing: bool) {
    self.failing.store(failing, Ordering::SeqCst);
  }

  /// How many times `list` has been served.
  pub fn list_calls(&self) -> u64 {
    self.list_calls.load(Ordering::SeqCst)
  }

  fn check_failing(&self, operation: &'static str) -> CartResult<()> {
    if self.failing.load(Ordering::SeqCst) {
      return Err(CartError::table(operation, anyhow!("injected table failure")));
    }
    Ok(())
  }

  fn join(&self, row: &StoredRow) -> Option<CartLine> {
    let product = self.products.read().get(&row.product_id).cloned();
    match product {
      Some(product) => Some(CartLine {
        id: row.id,
        user_id: row.user_id.clone(),
        product_id: row.product_id.clone(),
        quantity: row.quantity,
        created_at: row.created_at,
        updated_at: row.updated_at,
        product,
      }),
      None => {
        // A product deleted after being carted would join to nothing; the
        // row is skipped rather than fabricating a snapshot.
        event!(
          Level::WARN,
          product_id = %row.product_id,
          line_id = %row.id,
          "Cart row references a product missing from the catalog; skipping."
        );
        None
      }
    }
  }
}

#[async_trait]
impl CartTable for MemoryCartTable {
  #[instrument(name = "MemoryCartTable::list", skip(self), fields(user_id = %user_id))]
  async fn list(&self, user_id: &str) -> CartResult<Vec<CartLine>> {
    self.check_failing("list")?;
    self.list_calls.fetch_add(1, Ordering::SeqCst);

    let mut rows: Vec<StoredRow> = self
      .rows
      .read()
      .iter()
      .filter(|row| row.user_id == user_id)
      .cloned()
      .collect();
    // Newest first; seq breaks same-instant ties.
    rows.sort_by(|a, b| (b.created_at, b.seq).cmp(&(a.created_at, a.seq)));

    let lines: Vec<CartLine> = rows.iter().filter_map(|row| self.join(row)).collect();
    event!(Level::DEBUG, count = lines.len(), "Listed cart lines.");
    Ok(lines)
  }

  #[instrument(
    name = "MemoryCartTable::insert",
    skip(self),
    fields(user_id = %user_id, product_id = %product_id, quantity)
  )]
  async fn insert(&self, user_id: &str, product_id: &str, quantity: u32) -> CartResult<CartLine> {
    self.check_failing("insert")?;
    if quantity == 0 {
      return Err(CartError::InvalidQuantity { quantity: 0 });
    }
    if !self.products.read().contains_key(product_id) {
      return Err(CartError::ProductNotFound {
        product_id: product_id.to_string(),
      });
    }

    let now = Utc::now();
    let mut rows = self.rows.write();

    // One row per (user, product): a colliding insert folds in additively,
    // the same shape as `ON CONFLICT (user_id, product_id) DO UPDATE
    // SET quantity = cart_items.quantity + excluded.quantity`.
    if let Some(row) = rows
      .iter_mut()
      .find(|row| row.user_id == user_id && row.product_id == product_id)
    {
      row.quantity = row.quantity.saturating_add(quantity);
      row.updated_at = now;
      let stored = row.clone();
      drop(rows);
      event!(Level::DEBUG, line_id = %stored.id, new_quantity = stored.quantity, "Insert folded into existing row.");
      return self
        .join(&stored)
        .ok_or_else(|| CartError::ProductNotFound {
          product_id: product_id.to_string(),
        });
    }

    let row = StoredRow {
      id: Uuid::new_v4(),
      user_id: user_id.to_string(),
      product_id: product_id.to_string(),
      quantity,
      created_at: now,
      updated_at: now,
      seq: self.next_seq.fetch_add(1, Ordering::SeqCst),
    };
    rows.push(row.clone());
    drop(rows);

    event!(Level::DEBUG, line_id = %row.id, "Inserted cart row.");
    self.join(&row).ok_or_else(|| CartError::ProductNotFound {
      product_id: product_id.to_string(),
    })
  }

  #[instrument(name = "MemoryCartTable::update_quantity", skip(self), fields(line_id = %line_id, quantity))]
  async fn update_quantity(&self, line_id: Uuid, quantity: u32) -> CartResult<()> {
    self.check_failing("update_quantity")?;
    if quantity == 0 {
      // The table never stores a non-positive quantity; deletion is the
      // caller's move, not an update to zero.
      return Err(CartError::InvalidQuantity { quantity: 0 });
    }

    let mut rows = self.rows.write();
    match rows.iter_mut().find(|row| row.id == line_id) {
      Some(row) => {
        row.quantity = quantity;
        row.updated_at = Utc::now();
        event!(Level::DEBUG, "Updated cart row quantity.");
      }
      None => {
        // 0 rows matched; remote tables report success here, so do we.
        event!(Level::DEBUG, "Update matched no row.");
      }
    }
    Ok(())
  }

  #[instrument(name = "MemoryCartTable::delete", skip(self), fields(line_id = %line_id))]
  async fn delete(&self, line_id: Uuid) -> CartResult<()> {
    self.check_failing("delete")?;
    let mut rows = self.rows.write();
    let before = rows.len();
    rows.retain(|row| row.id != line_id);
    event!(Level::DEBUG, removed = before - rows.len(), "Deleted cart row.");
    Ok(())
  }

  #[instrument(name = "MemoryCartTable::delete_all", skip(self), fields(user_id = %user_id))]
  async fn delete_all(&self, user_id: &str) -> CartResult<()> {
    self.check_failing("delete_all")?;
    let mut rows = self.rows.write();
    let before = rows.len();
    rows.retain(|row| row.user_id != user_id);
    event!(Level::DEBUG, removed = before - rows.len(), "Cleared user's cart rows.");
    Ok(())
  }
}
