//! Catalog browsing.

use anyhow::Result;

use harvey_commerce::catalog::Catalog;
use harvey_commerce::search::{CatalogQuery, CatalogView, CategoryFilter, SortKey};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = if args.featured {
        Catalog::featured()
    } else {
        Catalog::full()
    };

    let query = build_query(&args);
    ctx.output.debug(&format!(
        "Query: text={:?} category={} sort={}",
        query.text, query.category, query.sort
    ));

    if query.category == CategoryFilter::Unknown {
        ctx.output.warn("Unknown category, no products will match");
    }

    let view = query.apply(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    let heading = match query.category {
        CategoryFilter::All if args.featured => "Featured Products".to_string(),
        CategoryFilter::All => "All Products".to_string(),
        CategoryFilter::Only(category) => category.to_string(),
        CategoryFilter::Unknown => args.category.clone().unwrap_or_else(|| "Products".to_string()),
    };
    ctx.output.header(&heading);
    ctx.output.info(&view.summary());

    if view.is_empty() {
        ctx.output.warn(CatalogView::empty_title());
        ctx.output.line(CatalogView::empty_hint());
        return Ok(());
    }

    if args.list {
        print_list(&view, ctx);
    } else {
        print_grid(&view, ctx);
    }

    Ok(())
}

fn build_query(args: &ProductsArgs) -> CatalogQuery {
    let mut query = match &args.query {
        Some(raw) => CatalogQuery::from_query_string(raw),
        None => CatalogQuery::new(),
    };

    if let Some(text) = &args.search {
        query = query.with_text(text.as_str());
    }
    if let Some(category) = &args.category {
        query = query.with_category(CategoryFilter::parse(category));
    }
    if args.query.is_none() || args.sort != SortKey::Name.as_str() {
        query = query.with_sort(SortKey::parse_or_default(&args.sort));
    }

    query
}

fn print_grid(view: &CatalogView, ctx: &Context) {
    let widths = [4, 24, 12, 10, 6, 12];
    ctx.output
        .table_row(&["ID", "Name", "Category", "Price", "Rating", "Stock"], &widths);

    for product in &view.items {
        let id = product.id.to_string();
        let price = product.price_label();
        let rating = product.rating_label();
        let badge = stock_badge(product);
        ctx.output.table_row(
            &[
                id.as_str(),
                truncate(&product.name, widths[1]).as_str(),
                product.category.name(),
                price.as_str(),
                rating.as_str(),
                badge.as_str(),
            ],
            &widths,
        );
    }
}

fn print_list(view: &CatalogView, ctx: &Context) {
    for product in &view.items {
        ctx.output.line("");
        ctx.output.line(&format!(
            "#{} {}  {}  {}",
            product.id,
            console::style(&product.name).bold(),
            product.category,
            stock_badge(product)
        ));
        ctx.output.line(&format!(
            "{} {} ({})  {}",
            stars(product.rating),
            product.rating_label(),
            product.reviews_label(),
            console::style(product.price_label()).cyan()
        ));
        ctx.output.line(&product.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvey_commerce::catalog::Category;

    fn args() -> ProductsArgs {
        ProductsArgs {
            search: None,
            category: None,
            sort: "name".to_string(),
            query: None,
            featured: false,
            list: false,
        }
    }

    #[test]
    fn test_build_query_from_flags() {
        let mut a = args();
        a.category = Some("Bags".to_string());
        a.sort = "price-high".to_string();
        let query = build_query(&a);
        assert_eq!(query.category, CategoryFilter::Only(Category::Bags));
        assert_eq!(query.sort, SortKey::PriceHigh);
    }

    #[test]
    fn test_query_string_keeps_its_sort() {
        let mut a = args();
        a.query = Some("search=silk&sort=rating".to_string());
        let query = build_query(&a);
        assert_eq!(query.text, "silk");
        assert_eq!(query.sort, SortKey::Rating);
    }

    #[test]
    fn test_unknown_category_flag_selects_nothing() {
        let mut a = args();
        a.category = Some("bags".to_string());
        let query = build_query(&a);
        assert_eq!(query.category, CategoryFilter::Unknown);
        assert!(query.apply(&Catalog::full()).is_empty());
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let mut a = args();
        a.sort = "newest".to_string();
        assert_eq!(build_query(&a).sort, SortKey::Name);
    }
}
