// trolley/src/table.rs

//! The persistence contract for the `cart` collection.
//!
//! The cart store treats its backing store as a remote table reached by
//! asynchronous calls with eventual confirmation: it issues a write, awaits
//! the confirmation, and refetches. Implementations decide where rows
//! actually live (a hosted Postgres-backed table in production,
//! `MemoryCartTable` in tests and examples).
//!
//! Row-level access control is a backend concern: `update_quantity` and
//! `delete` address a line by id and trust the backend to scope what a caller
//! may touch, which is why they carry no user id.

use crate::error::CartResult;
use crate::model::CartLine;
use async_trait::async_trait;
use uuid::Uuid;

/// Remote table holding cart rows, product-joined on read.
#[async_trait]
pub trait CartTable: Send + Sync {
  /// All of `user_id`'s lines, each joined with its product snapshot,
  /// ordered newest-first (creation time descending).
  async fn list(&self, user_id: &str) -> CartResult<Vec<CartLine>>;

  /// Creates a line for (`user_id`, `product_id`) with `quantity`.
  ///
  /// The backend enforces the one-line-per-(user, product) invariant; an
  /// insert that collides with an existing pair folds into it additively
  /// rather than producing a duplicate row.
  async fn insert(&self, user_id: &str, product_id: &str, quantity: u32) -> CartResult<CartLine>;

  /// Sets the line's quantity to exactly `quantity` (absolute, not a delta).
  /// `quantity` must be >= 1; a drop to zero is expressed as `delete`, the
  /// table never stores a non-positive quantity. Updating a line that no
  /// longer exists is a no-op success, matching remote row-count semantics.
  async fn update_quantity(&self, line_id: Uuid, quantity: u32) -> CartResult<()>;

  /// Deletes the line. Deleting an absent id is a no-op success, which is
  /// what makes removal naturally idempotent.
  async fn delete(&self, line_id: Uuid) -> CartResult<()>;

  /// Deletes every line owned by `user_id` in one operation. Other users'
  /// lines are untouched.
  async fn delete_all(&self, user_id: &str) -> CartResult<()>;
}
