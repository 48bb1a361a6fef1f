//! Shopping cart module.
//!
//! Contains the cart store, its line items, and the total aggregators.

mod store;

pub use store::{CartStore, LineItem};
