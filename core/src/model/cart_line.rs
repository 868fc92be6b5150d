// trolley/src/model/cart_line.rs

use crate::model::product::ProductSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cart row: a (user, product) pair with a quantity.
///
/// At most one line exists per (user_id, product_id); adding a product that is
/// already carted increments the existing line instead of creating a second
/// one. `quantity` is >= 1 for as long as the line exists: a line whose
/// quantity would drop to zero is deleted by the persistence layer, never
/// stored non-positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  /// Opaque, stable for the lifetime of the line, assigned by the
  /// persistence layer on creation.
  pub id: Uuid,
  pub user_id: String,
  pub product_id: String,
  pub quantity: u32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  /// Joined product snapshot, read-only, captured at fetch time.
  pub product: ProductSnapshot,
}

impl CartLine {
  /// Price of this line: unit price times quantity.
  pub fn line_total(&self) -> f64 {
    self.product.price * f64::from(self.quantity)
  }
}
