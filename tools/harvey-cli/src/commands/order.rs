//! Order hand-off links.

use anyhow::{Context as _, Result};

use harvey_commerce::catalog::Catalog;
use harvey_commerce::ids::ProductId;
use harvey_commerce::order::OrderIntent;

use super::OrderArgs;
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::full();
    let product = catalog.require(ProductId::new(args.id))?;
    let channel = ctx.config.order_channel();

    let intent = OrderIntent::for_product(product, &channel)
        .with_context(|| format!("Cannot order product {}", product.id))?;

    ctx.logger("order")
        .info_builder("Order link built")
        .field_i64("product_id", i64::from(product.id.get()))
        .field("phone", channel.phone.as_str())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&intent);
        return Ok(());
    }

    if args.url_only {
        println!("{}", intent.url);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", product.name));
    ctx.output.kv("Message", &intent.message);
    ctx.output.kv("Link", &intent.url);
    ctx.output
        .success("Open the link to continue the order in WhatsApp.");

    Ok(())
}
