// trolley/src/model/mod.rs

//! Data structures held by the cart: persisted lines, their joined product
//! snapshots, and the derived (never persisted) summary.

pub mod cart_line;
pub mod product;
pub mod summary;

// Re-export the model structs for convenient access
pub use cart_line::CartLine;
pub use product::ProductSnapshot;
pub use summary::CartSummary;
