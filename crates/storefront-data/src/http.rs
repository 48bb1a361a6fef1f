//! HTTP-backed catalog source.

use async_trait::async_trait;
use storefront_commerce::catalog::ProductPage;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::request::PageRequest;
use crate::source::CatalogSource;

/// Catalog source over the REST listing endpoint.
///
/// Issues `GET {base}/products?page=&rows=&sortBy=&orderBy=` and parses
/// the `{ products, count }` body. The per-id lookup is the trait's
/// default bounded scan, since this API has no per-id endpoint.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Base URL of the public catalog the storefront ships against.
    pub const DEFAULT_BASE_URL: &'static str = "https://api-challenge.starsoft.games/api/v1";

    /// Create a catalog source against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a catalog source with an existing reqwest client, so the
    /// connection pool can be shared with other consumers.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL of the product listing endpoint.
    fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, request: &PageRequest) -> Result<ProductPage, CatalogError> {
        let url = self.products_url();
        debug!(
            page = request.page,
            rows = request.rows,
            sort_by = request.sort_by.as_str(),
            order_by = request.order_by.as_str(),
            "fetching catalog page"
        );

        let response = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| CatalogError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %url, "catalog returned non-success status");
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let page: ProductPage = response
            .json()
            .await
            .map_err(|e| CatalogError::Deserialization(e.to_string()))?;

        debug!(
            received = page.len(),
            total = page.count,
            "catalog page fetched"
        );
        Ok(page)
    }
}
