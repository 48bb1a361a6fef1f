//! The product feed: an append-only page accumulator behind "load more".

use storefront_commerce::catalog::{Product, ProductPage};
use tracing::debug;

use crate::error::FeedError;
use crate::request::{PageRequest, SortField, SortOrder};
use crate::source::CatalogSource;

/// Whether a page load is in flight.
///
/// The guard is explicit state rather than something inferred from caller
/// timing: a load-more trigger arriving while `Loading` is rejected, not
/// queued and not parallelized, so pages can never be appended twice or
/// out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    /// No load in flight; the next page may be requested.
    #[default]
    Idle,
    /// A page fetch is outstanding.
    Loading,
}

/// Incrementally accumulates catalog pages into one ordered product list.
///
/// Pages are fetched strictly in increasing page-number order and never
/// re-fetched or reordered. Whether more pages remain is decided by the
/// server-reported total `count`, never by the size of the last page, so
/// a final partial page terminates the feed correctly.
///
/// The feed can be driven two ways:
///
/// - [`load_next`](ProductFeed::load_next) does the whole
///   begin/fetch/settle cycle against a [`CatalogSource`].
/// - [`begin`](ProductFeed::begin), [`complete`](ProductFeed::complete)
///   and [`fail`](ProductFeed::fail) expose the state machine directly
///   for callers that own their own fetch scheduling.
///
/// A failed fetch leaves every previously accumulated page intact and
/// does not advance the page counter; the same page is handed out again
/// on the next `begin`.
#[derive(Debug)]
pub struct ProductFeed {
    pages: Vec<ProductPage>,
    state: FeedState,
    page_size: u32,
    sort_by: SortField,
    order_by: SortOrder,
}

impl ProductFeed {
    /// Create an empty feed with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            pages: Vec::new(),
            state: FeedState::Idle,
            page_size,
            sort_by: SortField::default(),
            order_by: SortOrder::default(),
        }
    }

    /// Override the sort the feed requests pages under.
    ///
    /// The sort is fixed for the lifetime of the feed; mixing sorts across
    /// pages would break the append-in-order invariant.
    pub fn with_sort(mut self, sort_by: SortField, order_by: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order_by = order_by;
        self
    }

    /// Start the next page load.
    ///
    /// Returns the request for the next unfetched page and moves the feed
    /// to `Loading`. Rejects with [`FeedError::LoadInFlight`] if a load is
    /// already outstanding and with [`FeedError::Exhausted`] once the
    /// accumulated pages cover the server-reported count.
    pub fn begin(&mut self) -> Result<PageRequest, FeedError> {
        if self.state == FeedState::Loading {
            return Err(FeedError::LoadInFlight);
        }
        if !self.has_next() {
            return Err(FeedError::Exhausted {
                count: self.total_count().unwrap_or(0),
            });
        }
        self.state = FeedState::Loading;
        let page = self.pages.len() as u32 + 1;
        Ok(PageRequest::page(page)
            .with_rows(self.page_size)
            .with_sort(self.sort_by, self.order_by))
    }

    /// Settle the in-flight load with a fetched page.
    ///
    /// Appends the page in fetch order and returns the feed to idle.
    pub fn complete(&mut self, page: ProductPage) {
        debug!(
            page = self.pages.len() + 1,
            received = page.len(),
            total = page.count,
            "feed page accumulated"
        );
        self.pages.push(page);
        self.state = FeedState::Idle;
    }

    /// Settle the in-flight load as failed.
    ///
    /// No page is appended and the page counter does not advance, so the
    /// next [`begin`](ProductFeed::begin) retries the same page.
    pub fn fail(&mut self) {
        self.state = FeedState::Idle;
    }

    /// Fetch and accumulate the next page from `source`.
    ///
    /// Returns the number of products the page carried. On failure the
    /// catalog error is surfaced to the caller and the feed's accumulated
    /// pages are untouched.
    pub async fn load_next(&mut self, source: &dyn CatalogSource) -> Result<usize, FeedError> {
        let request = self.begin()?;
        match source.fetch_page(&request).await {
            Ok(page) => {
                let received = page.len();
                self.complete(page);
                Ok(received)
            }
            Err(e) => {
                self.fail();
                Err(e.into())
            }
        }
    }

    /// Whether more pages remain to be fetched.
    ///
    /// `pages * page_size < count`, using the count reported on the most
    /// recent page. An empty feed assumes more is available until the
    /// first page says otherwise.
    pub fn has_next(&self) -> bool {
        match self.total_count() {
            None => true,
            Some(count) => (self.pages.len() as u64) * u64::from(self.page_size) < count,
        }
    }

    /// Whether a page load is in flight.
    pub fn is_loading(&self) -> bool {
        self.state == FeedState::Loading
    }

    /// Current guard state.
    pub fn state(&self) -> FeedState {
        self.state
    }

    /// All accumulated products, flattened in page order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.pages.iter().flat_map(|p| p.products.iter())
    }

    /// Number of products accumulated so far.
    pub fn loaded_count(&self) -> usize {
        self.pages.iter().map(ProductPage::len).sum()
    }

    /// Server-reported total count, from the most recent page.
    ///
    /// `None` until the first page has been fetched. The count is assumed
    /// stable across pages within one feed.
    pub fn total_count(&self) -> Option<u64> {
        self.pages.last().map(|p| p.count)
    }

    /// Number of pages fetched so far.
    pub fn pages_loaded(&self) -> usize {
        self.pages.len()
    }

    /// The configured page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::source::CatalogSource;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: "Test".to_string(),
            image: "/p.png".to_string(),
            price: "1.00".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn page(ids: impl IntoIterator<Item = u64>, count: u64) -> ProductPage {
        ProductPage {
            products: ids.into_iter().map(product).collect(),
            count,
        }
    }

    /// Source that replays a script of page results, one per fetch.
    struct ScriptedCatalog {
        script: Mutex<Vec<Result<ProductPage, CatalogError>>>,
        requests: Mutex<Vec<PageRequest>>,
    }

    impl ScriptedCatalog {
        fn new(script: Vec<Result<ProductPage, CatalogError>>) -> Self {
            Self {
                script: Mutex::new(script),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn seen_pages(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|r| r.page).collect()
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedCatalog {
        async fn fetch_page(&self, request: &PageRequest) -> Result<ProductPage, CatalogError> {
            self.requests.lock().unwrap().push(*request);
            self.script.lock().unwrap().remove(0)
        }
    }

    #[test]
    fn test_empty_feed_assumes_more() {
        let feed = ProductFeed::new(10);
        assert!(feed.has_next());
        assert!(!feed.is_loading());
        assert_eq!(feed.total_count(), None);
        assert_eq!(feed.loaded_count(), 0);
    }

    #[test]
    fn test_begin_hands_out_next_page() {
        let mut feed = ProductFeed::new(10);
        let request = feed.begin().unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.rows, 10);
        assert!(feed.is_loading());
    }

    #[test]
    fn test_begin_while_loading_is_rejected() {
        let mut feed = ProductFeed::new(10);
        feed.begin().unwrap();
        let err = feed.begin().unwrap_err();
        assert!(matches!(err, FeedError::LoadInFlight));
        // Still exactly one load outstanding.
        assert!(feed.is_loading());
        assert_eq!(feed.pages_loaded(), 0);
    }

    #[test]
    fn test_fail_allows_retry_of_same_page() {
        let mut feed = ProductFeed::new(10);
        let first = feed.begin().unwrap();
        feed.fail();
        assert!(!feed.is_loading());
        let retry = feed.begin().unwrap();
        assert_eq!(first.page, retry.page);
    }

    #[test]
    fn test_partial_last_page_exhausts_feed() {
        // Page size 10, server count 15: two pages cover everything.
        let mut feed = ProductFeed::new(10);

        feed.begin().unwrap();
        feed.complete(page(1..=10, 15));
        assert!(feed.has_next());

        feed.begin().unwrap();
        feed.complete(page(11..=15, 15));
        assert!(!feed.has_next());

        let ids: Vec<u64> = feed.products().map(|p| p.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<u64>>());
        assert_eq!(feed.loaded_count(), 15);
    }

    #[test]
    fn test_has_next_uses_count_not_page_length() {
        let mut feed = ProductFeed::new(10);
        feed.begin().unwrap();
        // Server sent a short page but reports 30 products overall.
        feed.complete(page(1..=7, 30));
        assert!(feed.has_next());
    }

    #[test]
    fn test_exhausted_begin_is_rejected() {
        let mut feed = ProductFeed::new(10);
        feed.begin().unwrap();
        feed.complete(page(1..=8, 8));
        let err = feed.begin().unwrap_err();
        assert!(matches!(err, FeedError::Exhausted { count: 8 }));
    }

    #[test]
    fn test_begin_carries_feed_sort() {
        let mut feed = ProductFeed::new(10).with_sort(SortField::Price, SortOrder::Desc);
        let request = feed.begin().unwrap();
        assert_eq!(request.sort_by, SortField::Price);
        assert_eq!(request.order_by, SortOrder::Desc);
    }

    #[tokio::test]
    async fn test_load_next_accumulates_in_order() {
        let catalog = ScriptedCatalog::new(vec![
            Ok(page(1..=10, 15)),
            Ok(page(11..=15, 15)),
        ]);
        let mut feed = ProductFeed::new(10);

        feed.load_next(&catalog).await.unwrap();
        assert!(feed.has_next());
        feed.load_next(&catalog).await.unwrap();
        assert!(!feed.has_next());

        assert_eq!(catalog.seen_pages(), vec![1, 2]);
        assert_eq!(feed.total_count(), Some(15));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_prior_pages() {
        let catalog = ScriptedCatalog::new(vec![
            Ok(page(1..=10, 25)),
            Err(CatalogError::Connection("connection reset".to_string())),
            Ok(page(11..=20, 25)),
        ]);
        let mut feed = ProductFeed::new(10);

        feed.load_next(&catalog).await.unwrap();
        let err = feed.load_next(&catalog).await.unwrap_err();
        assert!(matches!(err, FeedError::Catalog(CatalogError::Connection(_))));

        // First page intact, guard released, page 2 retried.
        assert_eq!(feed.loaded_count(), 10);
        assert!(!feed.is_loading());
        feed.load_next(&catalog).await.unwrap();
        assert_eq!(catalog.seen_pages(), vec![1, 2, 2]);
        assert_eq!(feed.loaded_count(), 20);
    }
}
