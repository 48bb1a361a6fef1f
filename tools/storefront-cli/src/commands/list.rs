//! The list command: page through the catalog like "load more" would.

use anyhow::{anyhow, Result};
use storefront_data::{CatalogSource, FeedError, ProductFeed, SortField, SortOrder};

use super::ListArgs;
use crate::output::{format_price, truncate, Output};

/// Run the list command.
pub async fn run(args: ListArgs, catalog: &dyn CatalogSource, output: &Output) -> Result<()> {
    let sort_by = SortField::from_str(&args.sort_by)
        .ok_or_else(|| anyhow!("Unknown sort field: {}", args.sort_by))?;
    let order_by = SortOrder::from_str(&args.order_by)
        .ok_or_else(|| anyhow!("Unknown sort direction: {}", args.order_by))?;

    let mut feed = ProductFeed::new(args.rows).with_sort(sort_by, order_by);

    // First page establishes the server-reported total.
    feed.load_next(catalog).await?;
    let total = feed.total_count().unwrap_or(0);
    output.debug(&format!("catalog reports {} products", total));

    let target_pages = if args.all { u32::MAX } else { args.pages };
    let wants_more = |feed: &ProductFeed| feed.has_next() && feed.pages_loaded() < target_pages as usize;

    if wants_more(&feed) {
        let pb = output.progress(total, "loading products");
        pb.set_position(feed.loaded_count() as u64);
        while wants_more(&feed) {
            match feed.load_next(catalog).await {
                Ok(_) => pb.set_position(feed.loaded_count() as u64),
                Err(FeedError::Exhausted { .. }) => break,
                Err(e) => {
                    pb.abandon();
                    return Err(e.into());
                }
            }
        }
        pb.finish_and_clear();
    }

    if output.is_json() {
        let products: Vec<_> = feed.products().collect();
        output.json(&products);
        return Ok(());
    }

    output.header(&format!(
        "Products ({} of {} loaded)",
        feed.loaded_count(),
        total
    ));
    output.table_row(&["ID", "NAME", "PRICE", "DESCRIPTION"], &[6, 32, 10, 40]);
    for product in feed.products() {
        output.table_row(
            &[
                &product.id.to_string(),
                &truncate(&product.name, 32),
                &format_price(product.price_amount()),
                &truncate(&product.description, 40),
            ],
            &[6, 32, 10, 40],
        );
    }

    if feed.has_next() {
        output.info(&format!(
            "{} more products available; re-run with --pages {} or --all",
            total.saturating_sub(feed.loaded_count() as u64),
            feed.pages_loaded() + 1
        ));
    }

    Ok(())
}
