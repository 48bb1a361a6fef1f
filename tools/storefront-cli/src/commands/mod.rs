//! CLI command implementations.

pub mod demo;
pub mod list;
pub mod show;

use clap::Args;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Number of pages to fetch.
    #[arg(short, long, default_value_t = 1, conflicts_with = "all")]
    pub pages: u32,

    /// Keep fetching until the whole catalog is loaded.
    #[arg(long)]
    pub all: bool,

    /// Page size.
    #[arg(short, long, default_value_t = 10)]
    pub rows: u32,

    /// Sort field: name, price or createdAt.
    #[arg(long, default_value = "name")]
    pub sort_by: String,

    /// Sort direction: asc or desc.
    #[arg(long, default_value = "asc")]
    pub order_by: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id to look up.
    pub id: u64,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Page size used when pulling demo products.
    #[arg(short, long, default_value_t = 10)]
    pub rows: u32,
}
