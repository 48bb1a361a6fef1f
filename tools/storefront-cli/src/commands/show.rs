//! The show command: per-id product lookup.

use anyhow::Result;
use storefront_data::{CatalogError, CatalogSource};

use super::ShowArgs;
use crate::output::{format_price, Output};

/// Run the show command.
pub async fn run(args: ShowArgs, catalog: &dyn CatalogSource, output: &Output) -> Result<()> {
    let product = match catalog.product_by_id(args.id).await {
        Ok(product) => product,
        Err(CatalogError::NotFound(id)) => {
            output.error(&format!("Product {} not found in the catalog", id));
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if output.is_json() {
        output.json(&product);
        return Ok(());
    }

    output.header(&product.name);
    output.kv("id", &product.id.to_string());
    output.kv("price", &format_price(product.price_amount()));
    output.kv("image", &product.image);
    output.kv("created", &product.created_at);
    output.kv("description", &product.description);

    Ok(())
}
