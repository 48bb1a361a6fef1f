//! Product catalog module.
//!
//! Contains the product record and the paged response shape used by the
//! external catalog API.

mod product;

pub use product::{Product, ProductPage};
