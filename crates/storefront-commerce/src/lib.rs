//! E-commerce domain types and cart logic for the storefront.
//!
//! This crate holds the pure, I/O-free half of the storefront core:
//!
//! - **Catalog**: the [`Product`](catalog::Product) record as delivered by
//!   the external catalog API, plus the paged wire response.
//! - **Cart**: an in-memory [`CartStore`](cart::CartStore) with line items
//!   keyed by product id, quantity management, and price/quantity totals.
//!
//! Fetching products is the job of the `storefront-data` crate; everything
//! here is deterministic state manipulation.
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let product = Product {
//!     id: 1,
//!     name: "Meteora Shard".to_string(),
//!     description: "A rare shard".to_string(),
//!     image: "/shard.png".to_string(),
//!     price: "29.90".to_string(),
//!     created_at: "2024-01-01T00:00:00Z".to_string(),
//! };
//!
//! let mut cart = CartStore::new();
//! cart.add(product.clone());
//! cart.add(product);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_quantity(), 2);
//! ```

pub mod cart;
pub mod catalog;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartStore, LineItem};
    pub use crate::catalog::{Product, ProductPage};
}
