//! Hero slides.

use serde::{Deserialize, Serialize};

use crate::ids::SlideId;

/// One hero carousel slide. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSlide {
    pub id: SlideId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Background image reference.
    pub image: String,
    /// Call-to-action button label.
    pub cta_label: String,
    /// Overlay gradient classes.
    pub gradient: String,
}

impl CarouselSlide {
    fn new(
        id: u32,
        title: &str,
        subtitle: &str,
        description: &str,
        cta_label: &str,
        gradient: &str,
    ) -> Self {
        Self {
            id: SlideId::new(id),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            image: format!("/s{}.jpg", id),
            cta_label: cta_label.to_string(),
            gradient: gradient.to_string(),
        }
    }
}

/// The four home-page slides.
pub fn default_slides() -> Vec<CarouselSlide> {
    vec![
        CarouselSlide::new(
            1,
            "Premium Fashion Collection",
            "Discover Elegance",
            "Explore our curated selection of premium dresses and fashion pieces",
            "Shop Dresses",
            "from-pink-500/80 to-purple-600/80",
        ),
        CarouselSlide::new(
            2,
            "Luxury Fabrics & Materials",
            "Craft Your Style",
            "High-quality fabrics for your custom tailoring needs",
            "Browse Fabrics",
            "from-blue-500/80 to-indigo-600/80",
        ),
        CarouselSlide::new(
            3,
            "Designer Accessories",
            "Complete Your Look",
            "Premium bags, shoes, and accessories to complement your style",
            "Shop Accessories",
            "from-indigo-500/80 to-pink-600/80",
        ),
        CarouselSlide::new(
            4,
            "Comfort & Lifestyle",
            "Everyday Essentials",
            "Nightwears, casual wear, and lifestyle products for daily comfort",
            "Explore Collection",
            "from-purple-500/80 to-blue-600/80",
        ),
    ]
}
