//! Catalog and feed error types.

use thiserror::Error;

/// Errors that can occur when talking to the product catalog.
///
/// None of these are retried automatically; the caller decides whether to
/// try again.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The catalog could not be reached at all.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body did not parse as the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The requested product id was not present in the scanned page set.
    #[error("Product not found: {0}")]
    NotFound(u64),
}

/// Errors that can occur when driving a product feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A page fetch is already in flight; duplicate load-more triggers
    /// are rejected, not queued.
    #[error("A page load is already in flight")]
    LoadInFlight,

    /// Every page the server reported has already been fetched.
    #[error("All {count} products already loaded")]
    Exhausted { count: u64 },

    /// The underlying catalog fetch failed. Previously accumulated pages
    /// are untouched and the same page can be retried.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
