// src/lib.rs

//! Trolley: a session-scoped, confirm-then-refresh shopping cart store.
//!
//! Trolley keeps a per-consumer cache of a user's cart lines over a remote
//! table and exposes:
//!  - Mutations (add, update quantity, remove, clear) that confirm against
//!    the table first and refetch the full list after, never editing the
//!    cache optimistically.
//!  - Merge-on-add: one line per product per user, adds fold into the
//!    existing line's quantity.
//!  - A summary (subtotal, tax, shipping, total, item count) derived fresh
//!    from the cached lines on every read.
//!  - Per-operation pending flags and notification-only error reporting;
//!    no mutation ever panics or returns an error to the caller.
//!
//! The session, persistence, and notification collaborators are traits
//! injected at construction, so the store runs identically over the bundled
//! in-memory table or a real backend.

// Declare modules according to the planned structure
mod cache;
pub mod cart;
pub mod config;
pub mod error;
pub mod memory;
pub mod model;
pub mod notify;
pub mod session;
pub mod table;

// --- Re-exports for the Public API ---

// The store itself, the type consumers hold.
pub use crate::cart::CartStore;

// Data model: lines as fetched, and the derived summary.
pub use crate::model::{CartLine, CartSummary, ProductSnapshot};

// Collaborator seams and the bundled implementations.
pub use crate::notify::{Notifier, TracingNotifier};
pub use crate::session::{SessionProvider, StaticSession};
pub use crate::table::CartTable;
pub use crate::memory::MemoryCartTable;

pub use crate::config::PricingConfig;
pub use crate::error::{CartError, CartResult};
