//! Filter and sort functions.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::search::{CategoryFilter, SortKey};

/// Case-insensitive substring match against the product name or its
/// category name. The empty query matches everything.
pub fn matches_text(product: &Product, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.category.name().to_lowercase().contains(&needle)
}

/// Products matching both the text query and the category filter, in
/// source order.
pub fn filter_products(products: &[Product], text: &str, category: CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| category.matches(p) && matches_text(p, text))
        .cloned()
        .collect()
}

/// A sorted copy of `products`. Ties keep their input order.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            // Lowercase before uppercase on case-only differences.
            .then_with(|| b.name.cmp(&a.name)),
        SortKey::PriceLow => a.price.amount_minor.cmp(&b.price.amount_minor),
        SortKey::PriceHigh => b.price.amount_minor.cmp(&a.price.amount_minor),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::money::Money;
    use crate::search::CatalogQuery;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_dress_query_matches_single_product() {
        let catalog = Catalog::full();
        let view = CatalogQuery::new().with_text("dress").apply(&catalog);
        assert_eq!(names(&view.items), vec!["Elegant Evening Dress"]);
        assert_eq!(view.items[0].category, Category::Dresses);
        assert_eq!(view.summary(), "Showing 1 of 8 products");
    }

    #[test]
    fn test_text_matches_category_name() {
        let catalog = Catalog::full();
        let found = filter_products(catalog.products(), "FABRIC", CategoryFilter::All);
        assert_eq!(names(&found), vec!["Premium Cotton Fabric"]);

        let found = filter_products(catalog.products(), "pieces", CategoryFilter::All);
        assert_eq!(names(&found), vec!["Designer Two-Piece Set"]);
    }

    #[test]
    fn test_bags_by_descending_price() {
        let catalog = Catalog::full();
        let view = CatalogQuery::new()
            .with_category(Category::Bags)
            .with_sort(SortKey::PriceHigh)
            .apply(&catalog);
        assert!(view.items.iter().all(|p| p.category == Category::Bags));
        assert_eq!(names(&view.items), vec!["Luxury Handbag"]);
    }

    #[test]
    fn test_several_bags_by_descending_price() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Canvas Tote", Category::Bags, Money::cedis(15000)),
            Product::new(2, "Silk Blouse", Category::Tops, Money::cedis(18000)),
            Product::new(3, "Leather Clutch", Category::Bags, Money::cedis(32050)),
            Product::new(4, "Luxury Handbag", Category::Bags, Money::cedis(99999)),
            Product::new(5, "Mini Crossbody", Category::Bags, Money::cedis(21000)),
        ]);
        let view = CatalogQuery::new()
            .with_category(Category::Bags)
            .with_sort(SortKey::PriceHigh)
            .apply(&catalog);

        assert_eq!(
            names(&view.items),
            vec!["Luxury Handbag", "Leather Clutch", "Mini Crossbody", "Canvas Tote"]
        );
        assert_eq!(view.summary(), "Showing 4 of 5 products");
    }

    #[test]
    fn test_no_matches() {
        let catalog = Catalog::full();
        let view = CatalogQuery::new()
            .with_text("silk")
            .with_category(Category::Shoes)
            .apply(&catalog);
        assert!(view.is_empty());
        assert_eq!(view.total, 8);
    }

    #[test]
    fn test_sort_by_name() {
        let catalog = Catalog::full();
        let sorted = sort_products(catalog.products(), SortKey::Name);
        assert_eq!(
            names(&sorted),
            vec![
                "Comfortable Nightwear",
                "Designer Two-Piece Set",
                "Elegant Evening Dress",
                "Formal Shirt",
                "Luxury Handbag",
                "Premium Cotton Fabric",
                "Silk Blouse",
                "Stylish Sneakers",
            ]
        );
    }

    #[test]
    fn test_name_sort_ignores_case_first() {
        let catalog = Catalog::new(vec![
            Product::new(1, "silk scarf", Category::Tops, Money::cedis(100)),
            Product::new(2, "Bag", Category::Bags, Money::cedis(100)),
            Product::new(3, "Silk Scarf", Category::Tops, Money::cedis(100)),
            Product::new(4, "apron", Category::Tops, Money::cedis(100)),
        ]);
        let sorted = sort_products(catalog.products(), SortKey::Name);
        assert_eq!(names(&sorted), vec!["apron", "Bag", "silk scarf", "Silk Scarf"]);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = Catalog::full();
        let low = sort_products(catalog.products(), SortKey::PriceLow);
        assert_eq!(low[0].name, "Formal Shirt");
        let high = sort_products(catalog.products(), SortKey::PriceHigh);
        assert_eq!(high[0].name, "Luxury Handbag");
        assert_eq!(high[1].name, "Designer Two-Piece Set");
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = Catalog::full();
        let sorted = sort_products(catalog.products(), SortKey::Rating);
        assert_eq!(sorted[0].name, "Designer Two-Piece Set");
        // Evening Dress and Sneakers share 4.8.
        assert_eq!(sorted[1].name, "Elegant Evening Dress");
        assert_eq!(sorted[2].name, "Stylish Sneakers");
    }

    #[test]
    fn test_source_is_not_mutated() {
        let catalog = Catalog::full();
        let before = catalog.clone();
        let _ = CatalogQuery::new().with_sort(SortKey::PriceHigh).apply(&catalog);
        assert_eq!(catalog, before);
    }

    mod proptest_tests {
        use super::*;
        use crate::money::Money;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                1u32..1000,
                "[A-Za-z][A-Za-z -]{0,15}",
                0usize..Category::ALL.len(),
                0i64..200_000,
                0.0f32..=5.0f32,
            )
                .prop_map(|(id, name, category, price, rating)| {
                    Product::new(id, name, Category::ALL[category], Money::cedis(price))
                        .with_rating(rating, 1)
                })
        }

        fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
            (0usize..=Category::ALL.len() + 1).prop_map(|i| match i {
                0 => CategoryFilter::All,
                n if n > Category::ALL.len() => CategoryFilter::Unknown,
                n => CategoryFilter::Only(Category::ALL[n - 1]),
            })
        }

        fn arb_key() -> impl Strategy<Value = SortKey> {
            (0usize..SortKey::ALL.len()).prop_map(|i| SortKey::ALL[i])
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: filtering keeps exactly the products passing both predicates, in order.
            #[test]
            fn filter_is_exact_subset(
                products in prop::collection::vec(arb_product(), 0..12),
                text in "[a-zA-Z ]{0,4}",
                category in arb_filter(),
            ) {
                let expected: Vec<Product> = products
                    .iter()
                    .filter(|p| {
                        let q = text.to_lowercase();
                        let by_text = p.name.to_lowercase().contains(&q)
                            || p.category.name().to_lowercase().contains(&q);
                        let by_category = match category {
                            CategoryFilter::All => true,
                            CategoryFilter::Only(c) => p.category == c,
                            CategoryFilter::Unknown => false,
                        };
                        by_text && by_category
                    })
                    .cloned()
                    .collect();

                prop_assert_eq!(filter_products(&products, &text, category), expected);
            }

            /// Property: sorting twice equals sorting once.
            #[test]
            fn sort_is_idempotent(
                products in prop::collection::vec(arb_product(), 0..12),
                key in arb_key(),
            ) {
                let once = sort_products(&products, key);
                let twice = sort_products(&once, key);
                prop_assert_eq!(once, twice);
            }

            /// Property: adjacent pairs respect the sort direction.
            #[test]
            fn sort_orders_adjacent_pairs(
                products in prop::collection::vec(arb_product(), 0..12),
            ) {
                let low = sort_products(&products, SortKey::PriceLow);
                for pair in low.windows(2) {
                    prop_assert!(pair[0].price.amount_minor <= pair[1].price.amount_minor);
                }

                let high = sort_products(&products, SortKey::PriceHigh);
                for pair in high.windows(2) {
                    prop_assert!(pair[0].price.amount_minor >= pair[1].price.amount_minor);
                }

                let rated = sort_products(&products, SortKey::Rating);
                for pair in rated.windows(2) {
                    prop_assert!(pair[0].rating >= pair[1].rating);
                }
            }

            /// Property: sorting is a permutation of its input.
            #[test]
            fn sort_preserves_length(
                products in prop::collection::vec(arb_product(), 0..12),
                key in arb_key(),
            ) {
                prop_assert_eq!(sort_products(&products, key).len(), products.len());
            }
        }
    }
}
