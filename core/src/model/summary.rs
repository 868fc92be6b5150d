// trolley/src/model/summary.rs

//! The derived cart summary and its arithmetic.
//!
//! A summary is a pure function of a set of cart lines plus a
//! `PricingConfig`; it is recomputed on every read and never persisted, so it
//! cannot be stale relative to the lines it was derived from.

use crate::config::PricingConfig;
use crate::model::cart_line::CartLine;
use serde::Serialize;

/// Totals derived from the current cart lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
  /// Σ line.product.price × line.quantity
  pub subtotal: f64,
  /// subtotal × tax_rate
  pub tax: f64,
  /// Flat fee when the cart is non-empty, 0.0 when it is empty.
  pub shipping: f64,
  /// subtotal + tax + shipping
  pub total: f64,
  /// Σ line.quantity, saturating at `u32::MAX`
  pub item_count: u32,
}

impl CartSummary {
  /// Derives a summary from `lines` under `pricing`.
  pub fn derive<'a, I>(lines: I, pricing: &PricingConfig) -> Self
  where
    I: IntoIterator<Item = &'a CartLine>,
  {
    let mut subtotal = 0.0;
    let mut item_count: u32 = 0;
    let mut any_line = false;
    for line in lines {
      any_line = true;
      subtotal += line.line_total();
      item_count = item_count.saturating_add(line.quantity);
    }

    let tax = subtotal * pricing.tax_rate;
    let shipping = if any_line { pricing.shipping_flat_fee } else { 0.0 };

    Self {
      subtotal,
      tax,
      shipping,
      total: subtotal + tax + shipping,
      item_count,
    }
  }

  /// A summary with no lines: all amounts zero, including shipping.
  pub fn empty() -> Self {
    Self {
      subtotal: 0.0,
      tax: 0.0,
      shipping: 0.0,
      total: 0.0,
      item_count: 0,
    }
  }
}
