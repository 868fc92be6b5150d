// trolley/src/config.rs

//! Pricing parameters for summary derivation.
//!
//! The original storefront hard-coded an 8% tax rate and a flat 9.99 shipping
//! fee. Here they are configuration: construct a `PricingConfig` directly, or
//! load one from the environment. No externally-fetched rate table exists.

use crate::error::{CartError, CartResult};
use dotenvy::dotenv;
use std::env;

/// Rates applied when deriving a `CartSummary` from cart lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
  /// Fraction of the subtotal charged as tax (0.08 = 8%).
  pub tax_rate: f64,
  /// Flat shipping fee charged whenever the cart is non-empty.
  pub shipping_flat_fee: f64,
}

impl Default for PricingConfig {
  fn default() -> Self {
    Self {
      tax_rate: 0.08,
      shipping_flat_fee: 9.99,
    }
  }
}

impl PricingConfig {
  /// Loads pricing from `CART_TAX_RATE` / `CART_SHIPPING_FLAT_FEE`,
  /// falling back to the defaults for any variable that is unset.
  ///
  /// A variable that is set but does not parse is a configuration error, not
  /// a silent fallback.
  pub fn from_env() -> CartResult<Self> {
    dotenv().ok(); // Load .env file if present

    let parse_var = |var_name: &str, default: f64| -> CartResult<f64> {
      match env::var(var_name) {
        Ok(raw) => raw
          .parse::<f64>()
          .map_err(|e| CartError::Config {
            message: format!("Invalid {}: {}", var_name, e),
          }),
        Err(_) => Ok(default),
      }
    };

    let defaults = Self::default();
    let tax_rate = parse_var("CART_TAX_RATE", defaults.tax_rate)?;
    let shipping_flat_fee = parse_var("CART_SHIPPING_FLAT_FEE", defaults.shipping_flat_fee)?;

    if tax_rate < 0.0 {
      return Err(CartError::Config {
        message: format!("CART_TAX_RATE must be non-negative, got {}", tax_rate),
      });
    }
    if shipping_flat_fee < 0.0 {
      return Err(CartError::Config {
        message: format!("CART_SHIPPING_FLAT_FEE must be non-negative, got {}", shipping_flat_fee),
      });
    }

    tracing::info!(tax_rate, shipping_flat_fee, "Pricing configuration loaded.");
    Ok(Self {
      tax_rate,
      shipping_flat_fee,
    })
  }
}
