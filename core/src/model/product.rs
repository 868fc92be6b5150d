// trolley/src/model/product.rs

use serde::{Deserialize, Serialize};

/// Read-only view of a product, joined onto a cart line at fetch time.
///
/// The cart does not own products; this snapshot reflects the product table
/// as of the fetch that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
  pub id: String,
  pub title: String,
  /// Unit price; never negative.
  pub price: f64,
  /// Ordered image URLs, possibly empty.
  pub images: Vec<String>,
  pub seller_id: String,
}

impl ProductSnapshot {
  pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64, seller_id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      price,
      images: Vec::new(),
      seller_id: seller_id.into(),
    }
  }

  pub fn with_images(mut self, images: Vec<String>) -> Self {
    self.images = images;
    self
  }
}
