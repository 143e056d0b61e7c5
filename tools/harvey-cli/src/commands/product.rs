//! Product detail view.

use anyhow::Result;
use serde::Serialize;

use harvey_commerce::catalog::{Catalog, Product};
use harvey_commerce::ids::ProductId;
use harvey_commerce::order::{OrderIntent, ORDER_HELP, PRODUCT_FEATURES};

use super::ProductArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge};

#[derive(Serialize)]
struct ProductDetail<'a> {
    #[serde(flatten)]
    product: &'a Product,
    order_url: Option<String>,
    features: [&'static str; 3],
}

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::full();
    let product = catalog.require(ProductId::new(args.id))?;
    let order = OrderIntent::for_product(product, &ctx.config.order_channel()).ok();

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail {
            product,
            order_url: order.map(|o| o.url),
            features: PRODUCT_FEATURES,
        });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Category", product.category.name());
    ctx.output.kv("Price", &product.price_label());
    ctx.output.kv(
        "Rating",
        &format!(
            "{} {} ({})",
            stars(product.rating),
            product.rating_label(),
            product.reviews_label()
        ),
    );
    ctx.output.kv("Stock", &stock_badge(product));
    ctx.output.kv("Image", &product.image);

    ctx.output.line("");
    ctx.output.line(&product.description);

    ctx.output.header("Features");
    for feature in PRODUCT_FEATURES {
        ctx.output.list_item(feature);
    }

    ctx.output.line("");
    match order {
        Some(intent) => ctx.output.kv("Order via WhatsApp", &intent.url),
        None => ctx.output.warn("Out of stock. Ordering is unavailable."),
    }
    ctx.output.line(ORDER_HELP);

    Ok(())
}
