// trolley/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors produced by the cart store and its persistence contract.
///
/// The store never lets these escape a mutation: they are caught at the
/// mutation boundary and translated into a user-facing notification. They are
/// still the currency of the internal fallible layer and of every `CartTable`
/// implementation.
#[derive(Debug, Error)]
pub enum CartError {
  /// A mutation that requires an authenticated session ran without one.
  #[error("No authenticated session")]
  Unauthenticated,

  #[error("Invalid quantity: {quantity}. Quantity must be a positive number.")]
  InvalidQuantity { quantity: i64 },

  /// The product a cart line would reference does not exist.
  #[error("Product not found: {product_id}")]
  ProductNotFound { product_id: String },

  /// The backing table store rejected an operation. The cause is kept for
  /// logging; end users only ever see the generic "failed" notification.
  #[error("Cart table rejected '{operation}'. Source: {source}")]
  Table {
    operation: &'static str,
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration error: {message}")]
  Config { message: String },
}

impl CartError {
  /// Wraps an arbitrary backend failure as a table rejection for `operation`.
  pub fn table(operation: &'static str, source: impl Into<AnyhowError>) -> Self {
    CartError::Table {
      operation,
      source: source.into(),
    }
  }
}

// Lets table implementations use `?` on anyhow-producing backends without
// naming an operation at every call site.
impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    CartError::Table {
      operation: "backend",
      source: err,
    }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
