//! Product types.

use serde::{Deserialize, Serialize};

/// A product as delivered by the external catalog API.
///
/// The record is read-only from the storefront's point of view; the cart
/// copies whole products into its line items rather than referencing them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Image URI or path.
    pub image: String,
    /// Decimal amount as a string, exactly as received from the API.
    /// The source makes no fixed-point guarantee; parse on demand via
    /// [`Product::price_amount`].
    pub price: String,
    /// Creation timestamp string. Carried for display, unused by cart
    /// or pagination logic.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Product {
    /// Parse the price string into a floating-point amount.
    ///
    /// An unparseable price reads as `0.0` rather than failing; the
    /// upstream feed is the authority on formatting and the cart totals
    /// must stay total functions.
    pub fn price_amount(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }
}

/// One page of catalog results: the products on the page plus the total
/// number of products the server reports for the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    /// Products on this page, in server order.
    pub products: Vec<Product>,
    /// Total product count across all pages, as reported by the server.
    pub count: u64,
}

impl ProductPage {
    /// Number of products on this page (which may be smaller than the
    /// requested page size on the final page).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the page carries no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: &str) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: "A test product".to_string(),
            image: "/test.png".to_string(),
            price: price.to_string(),
            created_at: "2023-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_price_amount_parses_decimal() {
        assert_eq!(product(1, "29.90").price_amount(), 29.90);
        assert_eq!(product(2, "10").price_amount(), 10.0);
    }

    #[test]
    fn test_price_amount_tolerates_garbage() {
        assert_eq!(product(1, "not-a-price").price_amount(), 0.0);
        assert_eq!(product(2, "").price_amount(), 0.0);
    }

    #[test]
    fn test_wire_rename_created_at() {
        let json = r#"{
            "id": 7,
            "name": "Shard",
            "description": "Rare",
            "image": "/shard.png",
            "price": "12.50",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.created_at, "2024-05-01T12:00:00Z");

        let back = serde_json::to_value(&p).unwrap();
        assert!(back.get("createdAt").is_some());
        assert!(back.get("created_at").is_none());
    }

    #[test]
    fn test_page_deserializes_products_and_count() {
        let json = r#"{
            "products": [{
                "id": 1,
                "name": "A",
                "description": "a",
                "image": "/a.png",
                "price": "1.00",
                "createdAt": "2024-01-01T00:00:00Z"
            }],
            "count": 42
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.count, 42);
    }
}
