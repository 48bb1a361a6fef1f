//! Cart store and line item types.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A line item in the cart: a product plus the quantity being purchased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product, copied whole into the cart at add time.
    pub product: Product,
    /// Quantity, always >= 1. Removal is the only way out of the cart;
    /// quantity updates clamp at 1.
    pub quantity: u32,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price_amount() * f64::from(self.quantity)
    }
}

/// The in-memory shopping cart.
///
/// Holds the authoritative set of items the user intends to purchase plus
/// the cart panel's visibility flag. Items are unique by product id and
/// keep first-add order. Every operation is a total function: nothing here
/// can fail, absent ids are no-ops.
///
/// The store is a plain value with a single owner; callers that need cart
/// access receive a handle to it explicitly rather than going through any
/// process-wide state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<LineItem>,
    is_open: bool,
}

impl CartStore {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same product id already exists its quantity
    /// is incremented by 1; otherwise a new line item with quantity 1 is
    /// appended. Whether adding also opens the panel is the caller's call.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::new(product));
        }
    }

    /// Remove the line item matching `id`.
    ///
    /// Returns whether anything was removed; an absent id is a no-op, not
    /// an error, so removing twice is idempotent.
    pub fn remove(&mut self, id: u64) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() < len_before
    }

    /// Adjust the quantity of the line item matching `id` by `delta`,
    /// clamping at 1.
    ///
    /// A delta of -1 on a quantity-1 item leaves it at 1: decrementing a
    /// line out of the cart must go through [`CartStore::remove`]. Returns
    /// whether a matching item existed; an absent id is a no-op.
    pub fn update_quantity(&mut self, id: u64, delta: i32) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            let adjusted = i64::from(item.quantity) + i64::from(delta);
            item.quantity = adjusted.clamp(1, i64::from(u32::MAX)) as u32;
            true
        } else {
            false
        }
    }

    /// Set the cart panel visibility.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Flip the cart panel visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether the cart panel is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Empty the item list. Visibility is unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by product id.
    pub fn get(&self, id: u64) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all line items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Total price across all line items.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|i| i.line_total()).sum()
    }
}
