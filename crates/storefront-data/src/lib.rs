//! Paginated catalog client and product feed for the storefront.
//!
//! The external catalog exposes one read endpoint: a paged product listing
//! taking `page`, `rows`, `sortBy` and `orderBy` query parameters and
//! returning `{ products, count }`. This crate wraps it in three layers:
//!
//! - [`CatalogSource`]: the trait seam over the catalog, with an explicit
//!   per-id lookup capability. The default lookup is a client-side scan
//!   over one bounded page, since the upstream API has no real get-by-id
//!   endpoint; a source backed by a richer API just overrides it.
//! - [`HttpCatalog`]: the reqwest-backed source against the REST endpoint.
//! - [`ProductFeed`]: the append-only page accumulator behind "load more",
//!   with an explicit idle/loading guard so duplicate triggers while a
//!   fetch is in flight are rejected rather than queued.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::prelude::*;
//!
//! let catalog = HttpCatalog::new(HttpCatalog::DEFAULT_BASE_URL);
//! let mut feed = ProductFeed::new(10);
//!
//! while feed.has_next() {
//!     feed.load_next(&catalog).await?;
//! }
//! println!("{} products", feed.products().len());
//! ```

pub mod error;
pub mod feed;
pub mod http;
pub mod request;
pub mod source;

pub use error::{CatalogError, FeedError};
pub use feed::{FeedState, ProductFeed};
pub use http::HttpCatalog;
pub use request::{PageRequest, SortField, SortOrder};
pub use source::CatalogSource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, FeedError};
    pub use crate::feed::{FeedState, ProductFeed};
    pub use crate::http::HttpCatalog;
    pub use crate::request::{PageRequest, SortField, SortOrder};
    pub use crate::source::CatalogSource;
}
