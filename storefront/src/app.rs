//! Application shell: router, header and footer.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

use harvey_commerce::config::StorefrontConfig;
use harvey_commerce::content::{
    copyright, footer_sections, FOOTER_BLURB, NEWSLETTER_BLURB, NEWSLETTER_TITLE, SOCIAL_LINKS,
};
use harvey_commerce::navigation::{SearchDropdown, NAV_ITEMS, QUICK_SEARCH_TERMS};

use crate::pages::{AboutPage, CategoriesPage, ContactPage, HomePage, NotFound, ProductsPage};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(StorefrontConfig::default());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Premium fashion, fabrics, and lifestyle products"/>
        <Title text="Shop with Harvey"/>

        <Router>
            <Navigation/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/categories") view=CategoriesPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Storefront config from context, falling back to defaults.
pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>().unwrap_or_default()
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Navigation() -> impl IntoView {
    let config = use_config();
    let location = use_location();
    let navigate = use_navigate();
    let search = RwSignal::new(SearchDropdown::new());
    let (menu_open, set_menu_open) = signal(false);

    let go = move |href: Option<String>| {
        if let Some(href) = href {
            navigate(&href, Default::default());
        }
    };

    let submit = {
        let go = go.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            go(search.try_update(|s| s.submit()).flatten());
        }
    };

    view! {
        <header class="nav">
            <a href="/" class="brand">
                <span class="brand-mark">"H"</span>
                <span>{config.shop.name.clone()}</span>
            </a>

            <nav class="nav-links" class:open=move || menu_open.get()>
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href
                                class:active=move || item.is_active(&location.pathname.get())
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {item.name}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="nav-actions">
                <button
                    class="icon-button"
                    aria-label="Search"
                    on:click=move |_| search.update(|s| s.toggle())
                >
                    "\u{1f50d}"
                </button>
                <button
                    class="icon-button menu-toggle"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || search.with(|s| s.is_open())>
                <div class="search-dropdown">
                    <h3>"Search Products"</h3>
                    <form on:submit=submit.clone()>
                        <input
                            type="text"
                            placeholder="Search for dresses, fabrics, bags..."
                            autofocus=true
                            prop:value=move || search.with(|s| s.query().to_string())
                            on:input=move |ev| search.update(|s| s.set_query(event_target_value(&ev)))
                        />
                        <div class="search-buttons">
                            <button type="submit" class="btn">"Search"</button>
                            <button
                                type="button"
                                class="btn btn-outline"
                                on:click=move |_| search.update(|s| s.close())
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                    <div class="quick-search">
                        <p>"Quick search:"</p>
                        {QUICK_SEARCH_TERMS
                            .into_iter()
                            .map(|term| {
                                let go = go.clone();
                                view! {
                                    <button
                                        class="chip"
                                        on:click=move |_| go(search.try_update(|s| s.quick_search(term)).flatten())
                                    >
                                        {term}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = use_config();
    let year = js_sys::Date::new_0().get_full_year() as i32;

    view! {
        <footer class="footer">
            <section class="newsletter">
                <h3>{NEWSLETTER_TITLE}</h3>
                <p>{NEWSLETTER_BLURB}</p>
                <form class="newsletter-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    <input type="email" placeholder="Enter your email"/>
                    <button type="submit" class="btn">"Subscribe"</button>
                </form>
            </section>

            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="brand">{config.shop.name.clone()}</span>
                    <p>{FOOTER_BLURB}</p>
                    <ul class="footer-contact">
                        <li>{config.contact.email.clone()}</li>
                        <li>{config.contact.phone.clone()}</li>
                        <li>{config.contact.address.clone()}</li>
                    </ul>
                </div>
                {footer_sections()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div class="footer-section">
                                <h4>{section.title}</h4>
                                <ul>
                                    {section
                                        .links
                                        .into_iter()
                                        .map(|link| view! { <li><a href="#">{link}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="footer-bottom">
                <p>{copyright(&config.shop.name, year)}</p>
                <div class="social">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|label| view! { <a href="#" aria-label=label>{label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
