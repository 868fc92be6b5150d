// trolley/src/cache.rs

//! The store's private cached line list.
//!
//! One `LineCache` exists per `CartStore`; consumers sharing a table each own
//! their own cache and fetch lifecycle. The cache is only ever rewritten
//! wholesale from a fetch. Mutations never edit it in place, so a failed
//! mutation leaves the last-known-good snapshot intact.
//!
//! IMPORTANT: the lock inside is blocking. Guards MUST NOT be held across
//! `.await` suspension points; every method here takes and releases the lock
//! before returning so callers never touch a guard.

use crate::config::PricingConfig;
use crate::model::{CartLine, CartSummary};
use parking_lot::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub(crate) struct LineCache {
  lines: RwLock<Vec<CartLine>>,
}

impl LineCache {
  pub(crate) fn new() -> Self {
    Self {
      lines: RwLock::new(Vec::new()),
    }
  }

  /// Replaces the entire cached list with a fresh fetch result.
  pub(crate) fn replace(&self, lines: Vec<CartLine>) {
    *self.lines.write() = lines;
  }

  /// Clones the current list. The clone reflects the backing store as of the
  /// last fetch, not any in-flight mutation.
  pub(crate) fn snapshot(&self) -> Vec<CartLine> {
    self.lines.read().clone()
  }

  /// The cached line for `product_id`, if one exists, as (line id, quantity).
  pub(crate) fn find_by_product(&self, product_id: &str) -> Option<(Uuid, u32)> {
    self
      .lines
      .read()
      .iter()
      .find(|line| line.product_id == product_id)
      .map(|line| (line.id, line.quantity))
  }

  pub(crate) fn contains_product(&self, product_id: &str) -> bool {
    self.lines.read().iter().any(|line| line.product_id == product_id)
  }

  /// Quantity of the cached line for `product_id`, or 0 if absent.
  pub(crate) fn quantity_of(&self, product_id: &str) -> u32 {
    self
      .lines
      .read()
      .iter()
      .find(|line| line.product_id == product_id)
      .map_or(0, |line| line.quantity)
  }

  pub(crate) fn len(&self) -> usize {
    self.lines.read().len()
  }

  /// Derives the summary from the cached lines under one read lock.
  /// Pure over the cache: never stale relative to it.
  pub(crate) fn summarize(&self, pricing: &PricingConfig) -> CartSummary {
    CartSummary::derive(self.lines.read().iter(), pricing)
  }
}
