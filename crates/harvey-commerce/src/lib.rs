//! Storefront domain types and logic for Shop with Harvey.
//!
//! Everything here runs over static, in-memory data:
//!
//! - **Catalog**: Products, categories and the seeded product lists
//! - **Search**: Text/category filtering and sorting of the catalog
//! - **Favorites**: Session-local set of favorited products
//! - **Carousel**: Hero slides and the auto-advance state machine
//! - **Order**: WhatsApp deep links carrying an order message
//! - **Contact**: Contact form state, validation and submission sinks
//! - **Navigation**: Header search dropdown and nav items
//! - **Content**: Static about/contact/footer copy
//!
//! # Example
//!
//! ```rust
//! use harvey_commerce::prelude::*;
//!
//! let catalog = Catalog::full();
//! let view = CatalogQuery::new()
//!     .with_category(CategoryFilter::Only(Category::Bags))
//!     .with_sort(SortKey::PriceHigh)
//!     .apply(&catalog);
//!
//! assert_eq!(view.items[0].name, "Luxury Handbag");
//! println!("{}", view.summary());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod config;

pub mod catalog;
pub mod search;
pub mod favorites;
pub mod carousel;
pub mod order;
pub mod contact;
pub mod navigation;
pub mod content;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Search
    pub use crate::search::{CatalogQuery, CatalogView, CategoryFilter, SortKey, ViewMode};

    // Favorites
    pub use crate::favorites::FavoriteSet;

    // Carousel
    pub use crate::carousel::{Carousel, CarouselController, CarouselSlide, PlayState};

    // Order
    pub use crate::order::{OrderChannel, OrderIntent};

    // Contact
    pub use crate::contact::{
        ContactField, ContactForm, ContactSink, ContactSubmission, LoggingContactSink,
    };

    // Navigation
    pub use crate::navigation::{NavItem, SearchDropdown};
}
