//! Catalog query builder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Catalog, Category, Product};
use crate::search::{filter_products, sort_products, CatalogView};

/// Sort keys offered on the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name A-Z (default).
    #[default]
    Name,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    /// Value used in URLs and select options.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Rating",
        }
    }

    /// Parse a sort value, falling back to [`SortKey::Name`].
    pub fn parse_or_default(value: &str) -> Self {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == value.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector: everything, a single category, or a name that is
/// not a category at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// Matches no product.
    Unknown,
}

impl CategoryFilter {
    /// Parse `"All"` or an exact category name. An empty value means
    /// `All`; any other value selects nothing.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == "All" {
            return CategoryFilter::All;
        }
        match Category::from_name(value) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.name(),
            CategoryFilter::Unknown => "Unknown",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
            CategoryFilter::Unknown => false,
        }
    }

    /// Options for the category select, "All" first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Products page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// A catalog query: free text, category and sort key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogQuery {
    /// Free-text query, matched against name and category.
    pub text: String,
    /// Category selector.
    pub category: CategoryFilter,
    /// Sort key.
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Initialise from a URL query string such as `search=silk&category=Tops`.
    ///
    /// A leading `?` is ignored. Only `search`, `category` and `sort` are
    /// read; other keys are skipped.
    pub fn from_query_string(query: &str) -> Self {
        let mut result = Self::new();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match key {
                "search" => result.text = value,
                "category" => result.category = CategoryFilter::parse(&value),
                "sort" => result.sort = SortKey::parse_or_default(&value),
                _ => {}
            }
        }

        result
    }

    /// Render the non-default parts as a query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.text.trim().is_empty() {
            parts.push(format!("search={}", urlencoding::encode(&self.text)));
        }
        if self.category != CategoryFilter::All {
            parts.push(format!("category={}", urlencoding::encode(self.category.as_str())));
        }
        if self.sort != SortKey::Name {
            parts.push(format!("sort={}", self.sort.as_str()));
        }
        parts.join("&")
    }

    /// Whether the query narrows the catalog at all.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category == CategoryFilter::All
    }

    /// Run the query against a catalog.
    pub fn apply(&self, catalog: &Catalog) -> CatalogView {
        let filtered = filter_products(catalog.products(), &self.text, self.category);
        let items = sort_products(&filtered, self.sort);
        CatalogView::new(items, catalog.len())
    }
}

fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    match urlencoding::decode(&value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value,
    }
}
