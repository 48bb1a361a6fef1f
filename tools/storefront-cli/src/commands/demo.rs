//! The demo command: a scripted cart walkthrough over live catalog data.

use anyhow::{bail, Result};
use storefront_commerce::cart::CartStore;
use storefront_data::{CatalogSource, ProductFeed};

use super::DemoArgs;
use crate::output::{format_price, Output};

/// Run the demo command.
///
/// Pulls one catalog page, then walks the cart through its whole surface:
/// add, add-again (increment), quantity updates with the floor at 1,
/// removal, and the totals.
pub async fn run(args: DemoArgs, catalog: &dyn CatalogSource, output: &Output) -> Result<()> {
    let mut feed = ProductFeed::new(args.rows);
    feed.load_next(catalog).await?;

    let mut products = feed.products().cloned();
    let (first, second) = match (products.next(), products.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => bail!("Catalog returned fewer than two products; nothing to demo"),
    };

    let mut cart = CartStore::new();

    output.header("Cart walkthrough");

    cart.add(first.clone());
    cart.set_open(true);
    output.success(&format!("added \"{}\"", first.name));
    print_cart(&cart, output);

    cart.add(first.clone());
    output.success(&format!("added \"{}\" again (same line item)", first.name));
    print_cart(&cart, output);

    cart.add(second.clone());
    output.success(&format!("added \"{}\"", second.name));
    print_cart(&cart, output);

    cart.update_quantity(first.id, 1);
    output.success(&format!("bumped \"{}\" quantity by 1", first.name));
    print_cart(&cart, output);

    cart.update_quantity(second.id, -5);
    output.success(&format!(
        "tried to drop \"{}\" below one; quantity stays clamped at 1",
        second.name
    ));
    print_cart(&cart, output);

    cart.remove(first.id);
    output.success(&format!("removed \"{}\"", first.name));
    print_cart(&cart, output);

    cart.clear();
    cart.set_open(false);
    output.success("cleared the cart");
    print_cart(&cart, output);

    Ok(())
}

fn print_cart(cart: &CartStore, output: &Output) {
    if output.is_json() {
        output.json(cart);
        return;
    }
    for item in cart.items() {
        output.kv(
            &format!("#{} {}", item.product.id, item.product.name),
            &format!(
                "x{} @ {} = {}",
                item.quantity,
                format_price(item.product.price_amount()),
                format_price(item.line_total())
            ),
        );
    }
    output.kv(
        "totals",
        &format!(
            "{} items, {}",
            cart.total_quantity(),
            format_price(cart.total_price())
        ),
    );
    println!();
}
