//! Static page copy: about, contact and footer.

use serde::Serialize;

use crate::catalog::Category;
use crate::config::ContactConfig;

/// A headline figure on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// A titled blurb (company values, info cards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blurb {
    pub title: String,
    pub description: String,
}

/// A team member card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// A contact channel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub title: &'static str,
    pub details: String,
    pub description: &'static str,
    /// Link behind the card's "Contact" button.
    pub action: String,
}

impl ContactCard {
    /// Web links open in a new tab; `mailto:`/`tel:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.action.starts_with("http")
    }
}

/// Opening hours for one group of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

impl OpeningHours {
    pub fn is_closed(&self) -> bool {
        self.hours == "Closed"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: Vec<&'static str>,
}

pub const ABOUT_TAGLINE: &str = "Your trusted partner in premium fashion and lifestyle products, delivering quality and style since 2019";

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { label: "Happy Customers", value: "10,000+" },
    Stat { label: "Products Sold", value: "50,000+" },
    Stat { label: "Years of Experience", value: "5+" },
    Stat { label: "Countries Served", value: "15+" },
];

pub const OUR_STORY: [&str; 3] = [
    "Founded in 2019 by Joyce Harvey, Shop with Harvey began as a small boutique with a simple mission: to provide high-quality fashion and lifestyle products that combine style, comfort, and affordability.",
    "What started as a passion project has grown into a thriving online marketplace, serving customers across multiple countries. We've built our reputation on trust, quality, and exceptional customer service.",
    "Today, we continue to expand our collection while maintaining our commitment to excellence. Every product in our store is carefully selected to meet our high standards and your expectations.",
];

pub const MISSION: &str = "To democratize access to premium fashion and lifestyle products by providing an exceptional online shopping experience that combines quality, affordability, and outstanding customer service. We believe everyone deserves to look and feel their best, and we're here to make that possible.";

pub const MISSION_ATTRIBUTION: &str = "Joyce Harvey, Founder & CEO";

pub fn company_values() -> Vec<Blurb> {
    [
        ("Customer First", "We prioritize our customers' satisfaction and strive to exceed expectations in every interaction."),
        ("Quality Excellence", "We source only the finest materials and products to ensure premium quality in everything we offer."),
        ("Trust & Security", "Your privacy and security are paramount. We maintain the highest standards of data protection."),
        ("Fast Delivery", "Quick and reliable shipping to get your favorite products to you as soon as possible."),
    ]
    .into_iter()
    .map(|(title, description)| Blurb {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Joyce Harvey",
        role: "Founder & CEO",
        image: "/s3.jpg",
        description: "Visionary leader with 10+ years in fashion retail",
    },
    TeamMember {
        name: "Sarah Williams",
        role: "Head of Design",
        image: "/s2.jpg",
        description: "Creative director with expertise in contemporary fashion",
    },
    TeamMember {
        name: "Eng. Fred",
        role: "Operations Manager",
        image: "/fred.jpg",
        description: "Logistics expert ensuring smooth operations",
    },
    TeamMember {
        name: "Kevin Davis",
        role: "Customer Experience",
        image: "/kevin.jpg",
        description: "Dedicated to providing exceptional customer service",
    },
];

/// Contact page cards, filled from the configured contact details.
pub fn contact_cards(contact: &ContactConfig) -> Vec<ContactCard> {
    let dial: String = contact
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let whatsapp = dial.trim_start_matches('+');

    vec![
        ContactCard {
            title: "Email Us",
            details: contact.email.clone(),
            description: "Send us an email anytime",
            action: format!("mailto:{}", contact.email),
        },
        ContactCard {
            title: "Call Us",
            details: contact.phone.clone(),
            description: "Mon-Fri from 8am to 6pm",
            action: format!("tel:{}", dial),
        },
        ContactCard {
            title: "WhatsApp",
            details: contact.phone.clone(),
            description: "Chat with us instantly",
            action: format!("https://wa.me/{}", whatsapp),
        },
        ContactCard {
            title: "Visit Us",
            details: contact.address.clone(),
            description: "Our physical location",
            action: "#".to_string(),
        },
    ]
}

pub const BUSINESS_HOURS: [OpeningHours; 3] = [
    OpeningHours { days: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
    OpeningHours { days: "Saturday", hours: "9:00 AM - 4:00 PM" },
    OpeningHours { days: "Sunday", hours: "Closed" },
];

pub const WHATSAPP_NOTE: &str = "WhatsApp support is available 24/7 for urgent inquiries.";

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "What are your shipping options?",
        answer: "We offer standard shipping (3-5 business days) and express shipping (1-2 business days) across Ghana and selected African countries.",
    },
    Faq {
        question: "What is your return policy?",
        answer: "We accept returns within 30 days of purchase. Items must be in original condition with tags attached.",
    },
    Faq {
        question: "Do you offer international shipping?",
        answer: "Yes, we ship to over 15 countries across Africa. Shipping costs and delivery times vary by location.",
    },
    Faq {
        question: "How can I track my order?",
        answer: "Once your order ships, you'll receive a tracking number via email and SMS to monitor your package.",
    },
];

pub const FOOTER_BLURB: &str = "Your premier destination for premium fashion, fabrics, and lifestyle products. Experience the future of online shopping with our curated collection.";

pub const NEWSLETTER_TITLE: &str = "Stay in Style";

pub const NEWSLETTER_BLURB: &str = "Subscribe to our newsletter and be the first to know about new arrivals, exclusive offers, and fashion trends.";

pub const SOCIAL_LINKS: [&str; 4] = ["Facebook", "Twitter", "Instagram", "YouTube"];

/// Footer link columns. The shop column lists every category.
pub fn footer_sections() -> Vec<FooterSection> {
    vec![
        FooterSection {
            title: "Shop",
            links: Category::ALL.iter().map(|c| c.name()).collect(),
        },
        FooterSection {
            title: "Customer Service",
            links: vec!["Contact Us", "Size Guide", "Shipping Info", "Returns", "FAQ", "Track Order"],
        },
        FooterSection {
            title: "Company",
            links: vec!["About Us", "Careers", "Press", "Sustainability", "Terms", "Privacy"],
        },
    ]
}

/// Copyright line for `year`.
pub fn copyright(shop_name: &str, year: i32) -> String {
    format!("\u{a9} {} {}. All rights reserved.", year, shop_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_cards_use_config() {
        let mut contact = ContactConfig::default();
        contact.email = "orders@example.com".to_string();
        let cards = contact_cards(&contact);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].details, "orders@example.com");
        assert_eq!(cards[3].details, "123 Fashion Street, Accra, Ghana");
    }

    #[test]
    fn test_contact_card_actions() {
        let cards = contact_cards(&ContactConfig::default());
        assert_eq!(cards[0].action, "mailto:hello@shopwithharvey.com");
        assert_eq!(cards[1].action, "tel:+233241234567");
        assert_eq!(cards[2].action, "https://wa.me/233241234567");
        assert!(cards[2].opens_new_tab());
        assert!(!cards[0].opens_new_tab());
        assert_eq!(cards[3].action, "#");
    }

    #[test]
    fn test_footer_shop_column_lists_categories() {
        let sections = footer_sections();
        assert_eq!(sections[0].links.len(), 10);
        assert_eq!(sections[0].links[2], "Two Pieces");
        assert_eq!(sections[1].links.len(), 6);
    }

    #[test]
    fn test_sunday_closed() {
        assert!(BUSINESS_HOURS[2].is_closed());
        assert!(!BUSINESS_HOURS[0].is_closed());
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            copyright("Shop with Harvey", 2026),
            "\u{a9} 2026 Shop with Harvey. All rights reserved."
        );
    }
}
