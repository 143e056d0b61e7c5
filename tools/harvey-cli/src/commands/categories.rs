//! Category listing.

use anyhow::Result;
use serde::Serialize;

use harvey_commerce::catalog::{Catalog, Category};

use super::CategoriesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryRow {
    name: &'static str,
    icon: &'static str,
    items: u32,
    in_catalog: usize,
    description: &'static str,
    href: String,
    subcategories: &'static [&'static str],
}

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::full();
    let rows: Vec<CategoryRow> = Category::ALL
        .iter()
        .map(|c| CategoryRow {
            name: c.name(),
            icon: c.icon(),
            items: c.nominal_count(),
            in_catalog: catalog.in_category(*c).count(),
            description: c.description(),
            href: c.products_href(),
            subcategories: c.subcategories(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Shop by Category");
    for row in &rows {
        ctx.output.line(&format!(
            "{} {}  {}",
            row.icon,
            console::style(row.name).bold(),
            console::style(format!("{} items", row.items)).dim()
        ));
        ctx.output.line(&format!("   {}", row.description));
        ctx.output.debug(&format!(
            "{} listed in catalog, {}",
            row.in_catalog, row.href
        ));
        if args.subcategories {
            ctx.output.line(&format!("   {}", row.subcategories.join(" · ")));
        }
    }

    Ok(())
}
