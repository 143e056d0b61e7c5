//! Shop with Harvey web storefront.
//!
//! Client-side rendered Leptos app over the in-memory catalog:
//! - Home, Categories, Products, About and Contact pages
//! - Header search dropdown and hero carousel
//! - Product detail modal with WhatsApp order hand-off

mod app;
mod components;
mod pages;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
