//! Header navigation and the search dropdown.

use serde::{Deserialize, Serialize};

/// A top-level navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Whether this item should be highlighted for `path`.
    pub fn is_active(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        path == self.href
    }
}

/// Header links in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Home", href: "/" },
    NavItem { name: "Categories", href: "/categories" },
    NavItem { name: "Products", href: "/products" },
    NavItem { name: "About", href: "/about" },
    NavItem { name: "Contact", href: "/contact" },
];

/// One-click search suggestions in the dropdown.
pub const QUICK_SEARCH_TERMS: [&str; 4] = ["Dresses", "Fabrics", "Bags", "Shoes"];

/// Products page URL searching for `query`, or `None` for a blank query.
pub fn search_href(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!("/products?search={}", urlencoding::encode(query)))
}

/// Header search dropdown state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDropdown {
    open: bool,
    query: String,
}

impl SearchDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close without clearing the typed query.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Submit the typed query.
    ///
    /// A non-blank query yields the products URL, closes the dropdown and
    /// clears the input. A blank query changes nothing.
    pub fn submit(&mut self) -> Option<String> {
        let href = search_href(&self.query)?;
        self.open = false;
        self.query.clear();
        Some(href)
    }

    /// Submit one of the quick search terms directly.
    pub fn quick_search(&mut self, term: &str) -> Option<String> {
        self.query = term.to_string();
        self.submit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_builds_href_and_resets() {
        let mut search = SearchDropdown::new();
        search.toggle();
        search.set_query("silk blouse");

        assert_eq!(search.submit().as_deref(), Some("/products?search=silk%20blouse"));
        assert!(!search.is_open());
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut search = SearchDropdown::new();
        search.toggle();
        search.set_query("   ");
        assert_eq!(search.submit(), None);
        assert!(search.is_open());
        assert_eq!(search.query(), "   ");
    }

    #[test]
    fn test_quick_search() {
        let mut search = SearchDropdown::new();
        search.toggle();
        assert_eq!(
            search.quick_search(QUICK_SEARCH_TERMS[2]).as_deref(),
            Some("/products?search=Bags")
        );
        assert!(!search.is_open());
    }

    #[test]
    fn test_close_keeps_query() {
        let mut search = SearchDropdown::new();
        search.toggle();
        search.set_query("shoes");
        search.close();
        assert!(!search.is_open());
        assert_eq!(search.query(), "shoes");
    }

    #[test]
    fn test_nav_active() {
        assert!(NAV_ITEMS[0].is_active("/"));
        assert!(NAV_ITEMS[2].is_active("/products?category=Bags"));
        assert!(NAV_ITEMS[4].is_active("/contact/"));
        assert!(!NAV_ITEMS[0].is_active("/about"));
    }
}
