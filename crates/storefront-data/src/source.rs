//! The catalog source trait.

use async_trait::async_trait;
use storefront_commerce::catalog::{Product, ProductPage};

use crate::error::CatalogError;
use crate::request::PageRequest;

/// How many rows the fallback per-id scan pulls in one request.
///
/// The upstream API has no get-by-id endpoint, so the scan fetches one
/// bounded page and searches it. 50 rows matches the window the original
/// storefront used; products past that window are reported as not found.
pub const SCAN_ROWS: u32 = 50;

/// A read-only source of catalog products.
///
/// The one operation every source must provide is [`fetch_page`]. The
/// per-id lookup has a default implementation that scans a bounded page
/// client-side; a source backed by an API with a real per-id endpoint
/// overrides [`product_by_id`] and the rest of the storefront never
/// notices the difference.
///
/// [`fetch_page`]: CatalogSource::fetch_page
/// [`product_by_id`]: CatalogSource::product_by_id
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of products.
    async fn fetch_page(&self, request: &PageRequest) -> Result<ProductPage, CatalogError>;

    /// Look up a single product by id.
    ///
    /// Default: fetch the first [`SCAN_ROWS`] products under the default
    /// sort and linear-scan for the id. Misses surface as
    /// [`CatalogError::NotFound`].
    async fn product_by_id(&self, id: u64) -> Result<Product, CatalogError> {
        let request = PageRequest::page(1).with_rows(SCAN_ROWS);
        let page = self.fetch_page(&request).await?;
        page.products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Product;

    /// In-memory source over a fixed product list, paged like the real
    /// endpoint would page it.
    struct FixedCatalog {
        products: Vec<Product>,
    }

    impl FixedCatalog {
        fn with_ids(ids: impl IntoIterator<Item = u64>) -> Self {
            let products = ids
                .into_iter()
                .map(|id| Product {
                    id,
                    name: format!("Product {}", id),
                    description: "Test".to_string(),
                    image: "/p.png".to_string(),
                    price: "5.00".to_string(),
                    created_at: "2024-01-01T00:00:00Z".to_string(),
                })
                .collect();
            Self { products }
        }
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn fetch_page(&self, request: &PageRequest) -> Result<ProductPage, CatalogError> {
            let start = (request.page as usize - 1) * request.rows as usize;
            let products = self
                .products
                .iter()
                .skip(start)
                .take(request.rows as usize)
                .cloned()
                .collect();
            Ok(ProductPage {
                products,
                count: self.products.len() as u64,
            })
        }
    }

    #[tokio::test]
    async fn test_scan_finds_product_in_window() {
        let catalog = FixedCatalog::with_ids(1..=20);
        let product = catalog.product_by_id(17).await.unwrap();
        assert_eq!(product.id, 17);
    }

    #[tokio::test]
    async fn test_scan_misses_report_not_found() {
        let catalog = FixedCatalog::with_ids(1..=20);
        let err = catalog.product_by_id(999).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_scan_is_bounded_to_one_window() {
        // Products beyond the scan window exist upstream but are not
        // reachable through the fallback lookup.
        let catalog = FixedCatalog::with_ids(1..=80);
        let err = catalog.product_by_id(60).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(60)));
    }
}
