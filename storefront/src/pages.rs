//! Routed pages.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use leptos_router::params::ParamsMap;

use harvey_commerce::catalog::{Catalog, Category, Product};
use harvey_commerce::contact::{ContactField, ContactForm, LoggingContactSink};
use harvey_commerce::content::{
    company_values, contact_cards, ABOUT_STATS, ABOUT_TAGLINE, BUSINESS_HOURS, FAQS, MISSION,
    MISSION_ATTRIBUTION, OUR_STORY, TEAM, WHATSAPP_NOTE,
};
use harvey_commerce::favorites::FavoriteSet;
use harvey_commerce::search::{
    filter_products, CatalogQuery, CatalogView, CategoryFilter, SortKey, ViewMode,
};
use harvey_observability::StructuredLogger;

use crate::app::use_config;
use crate::components::{HeroCarousel, ProductCard, ProductModal};

// ============================================================================
// Home
// ============================================================================

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();
    let catalog = StoredValue::new(Catalog::featured());
    let (text, set_text) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);
    let favorites = RwSignal::new(FavoriteSet::new());
    let selected = RwSignal::new(None::<Product>);

    // Featured products keep catalog order; only the products page sorts.
    let shown = Memo::new(move |_| {
        text.with(|text| {
            catalog.with_value(|c| filter_products(c.products(), text, category.get()))
        })
    });

    let shop_now = move |_| {
        if let Some(section) = document().get_element_by_id("products") {
            section.scroll_into_view();
        }
    };

    let heading = move || match category.get() {
        CategoryFilter::All => "Featured Products".to_string(),
        CategoryFilter::Only(c) => c.name().to_string(),
        CategoryFilter::Unknown => "Products".to_string(),
    };

    view! {
        <section id="home" class="hero">
            <h1 class="hero-title">{config.shop.name.clone()}</h1>
            <p class="hero-tagline">{config.shop.tagline.clone()}</p>
            <div class="hero-actions">
                <input
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button class="btn" on:click=shop_now>"Shop Now"</button>
            </div>
            <HeroCarousel/>
        </section>

        <section id="categories" class="section">
            <h2>"Shop by Category"</h2>
            <div class="category-chips">
                <button
                    class="chip"
                    class:active=move || category.get() == CategoryFilter::All
                    on:click=move |_| set_category.set(CategoryFilter::All)
                >
                    <span class="chip-icon">"\u{1f6cd}\u{fe0f}"</span>
                    <span>"All Products"</span>
                </button>
                {Category::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || category.get() == CategoryFilter::Only(c)
                                on:click=move |_| set_category.set(CategoryFilter::Only(c))
                            >
                                <span class="chip-icon">{c.icon()}</span>
                                <span>{c.name()}</span>
                                <span class="badge">{c.nominal_count()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="products" class="section">
            <div class="section-header">
                <h2>{heading}</h2>
                <span class="muted">{move || format!("{} products found", shown.with(Vec::len))}</span>
            </div>
            <div class="product-grid">
                {move || {
                    shown
                        .get()
                        .into_iter()
                        .map(|product| {
                            view! { <ProductCard product=product favorites=favorites selected=selected/> }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || shown.with(Vec::is_empty)>
                <div class="empty-state">
                    <h3>{CatalogView::empty_title()}</h3>
                    <p>"Try adjusting your search or category filter"</p>
                </div>
            </Show>
        </section>

        <ProductModal selected=selected/>
    }
}

// ============================================================================
// Categories
// ============================================================================

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Shop by Categories"</h1>
            <p>"Explore our diverse collection of premium fashion, fabrics, and lifestyle products"</p>
        </section>

        <section class="section">
            <div class="category-grid">
                {Category::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <a class="category-card" href=c.products_href()>
                                <div class="category-image">
                                    <img src=c.image() alt=c.name()/>
                                    <span class="badge">{format!("{} items", c.nominal_count())}</span>
                                    <span class="category-icon">{c.icon()}</span>
                                </div>
                                <div class="category-body">
                                    <h3>{c.name()}</h3>
                                    <p>{c.description()}</p>
                                    <div class="subcategories">
                                        {c.subcategories()
                                            .iter()
                                            .map(|sub| view! { <span class="badge badge-outline">{*sub}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// ============================================================================
// Products
// ============================================================================

/// Full catalog with search, category filter, sort and layout toggle.
///
/// `search`, `category` and `sort` in the URL seed the filters and are
/// re-read whenever the URL changes, e.g. after a header search.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let params = use_query_map();
    let catalog = StoredValue::new(Catalog::full());
    let query = RwSignal::new(params.with_untracked(query_from_params));
    let view_mode = RwSignal::new(ViewMode::Grid);
    let favorites = RwSignal::new(FavoriteSet::new());
    let selected = RwSignal::new(None::<Product>);

    Effect::new(move |_| {
        let next = params.with(query_from_params);
        if query.with_untracked(|q| *q != next) {
            query.set(next);
        }
    });

    let results = Memo::new(move |_| query.with(|q| catalog.with_value(|c| q.apply(c))));

    view! {
        <section class="page-hero">
            <h1>"Our Products"</h1>
            <p>"Discover our complete collection of premium fashion and lifestyle products"</p>
        </section>

        <section class="section">
            <div class="filters">
                <input
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || query.with(|q| q.text.clone())
                    on:input=move |ev| query.update(|q| q.text = event_target_value(&ev))
                />

                <select
                    aria-label="Category"
                    on:change=move |ev| {
                        query.update(|q| q.category = CategoryFilter::parse(&event_target_value(&ev)))
                    }
                >
                    {CategoryFilter::options()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=move || query.with(|q| q.category == option)
                                >
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    aria-label="Sort by"
                    on:change=move |ev| {
                        query.update(|q| q.sort = SortKey::parse_or_default(&event_target_value(&ev)))
                    }
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| {
                            view! {
                                <option value=key.as_str() selected=move || query.with(|q| q.sort == key)>
                                    {key.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <div class="view-toggle">
                    <button
                        class="btn btn-sm"
                        class:btn-outline=move || view_mode.get() != ViewMode::Grid
                        aria-label="Grid view"
                        on:click=move |_| view_mode.set(ViewMode::Grid)
                    >
                        "\u{25a6}"
                    </button>
                    <button
                        class="btn btn-sm"
                        class:btn-outline=move || view_mode.get() != ViewMode::List
                        aria-label="List view"
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        "\u{2630}"
                    </button>
                </div>
            </div>

            <p class="muted">{move || results.with(CatalogView::summary)}</p>

            <div class=move || match view_mode.get() {
                ViewMode::Grid => "product-grid",
                ViewMode::List => "product-list",
            }>
                {move || {
                    let list = view_mode.get() == ViewMode::List;
                    results
                        .get()
                        .items
                        .into_iter()
                        .map(|product| {
                            view! {
                                <ProductCard
                                    product=product
                                    favorites=favorites
                                    selected=selected
                                    list=list
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || results.with(CatalogView::is_empty)>
                <div class="empty-state">
                    <div class="empty-icon">"\u{1f50d}"</div>
                    <h3>{CatalogView::empty_title()}</h3>
                    <p>{CatalogView::empty_hint()}</p>
                </div>
            </Show>
        </section>

        <ProductModal selected=selected/>
    }
}

fn query_from_params(params: &ParamsMap) -> CatalogQuery {
    let param = |key: &str| params.get(key).unwrap_or_default();
    CatalogQuery::new()
        .with_text(param("search"))
        .with_category(CategoryFilter::parse(&param("category")))
        .with_sort(SortKey::parse_or_default(&param("sort")))
}

// ============================================================================
// About
// ============================================================================

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = use_config();

    view! {
        <section class="page-hero">
            <h1>{format!("About {}", config.shop.name)}</h1>
            <p>{ABOUT_TAGLINE}</p>
        </section>

        <section class="section stats">
            {ABOUT_STATS
                .into_iter()
                .map(|stat| {
                    view! {
                        <div class="card stat">
                            <h3>{stat.value}</h3>
                            <p>{stat.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="section story">
            <div>
                <h2>"Our Story"</h2>
                {OUR_STORY.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
            </div>
            <img src="/s2.jpg" alt="Our Story"/>
        </section>

        <section class="section">
            <h2>"Our Values"</h2>
            <div class="card-grid">
                {company_values()
                    .into_iter()
                    .map(|value| {
                        view! {
                            <div class="card">
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <h2>"Meet Our Team"</h2>
            <div class="card-grid">
                {TEAM
                    .into_iter()
                    .map(|member| {
                        view! {
                            <div class="card team-member">
                                <img src=member.image alt=member.name/>
                                <h3>{member.name}</h3>
                                <span class="badge">{member.role}</span>
                                <p>{member.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section mission">
            <h2>"Our Mission"</h2>
            <div class="card">
                <p class="quote">{format!("\"{}\"", MISSION)}</p>
                <p class="attribution">{format!("- {}", MISSION_ATTRIBUTION)}</p>
            </div>
        </section>
    }
}

// ============================================================================
// Contact
// ============================================================================

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(ContactForm::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let sink = StoredValue::new(LoggingContactSink::new(
        StructuredLogger::browser("contact-form").with_page("contact"),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = sink.with_value(|sink| form.try_update(|f| f.submit(sink)));
        match outcome {
            Some(Ok(_)) => {
                error.set(None);
                sent.set(true);
            }
            Some(Err(err)) => {
                error.set(Some(err.to_string()));
                sent.set(false);
            }
            None => {}
        }
    };

    let field = move |field: ContactField| {
        let value = move || form.with(|f| f.get(field).to_string());
        let input_type = if field == ContactField::Email { "email" } else { "text" };
        let on_input = move |ev: leptos::ev::Event| {
            sent.set(false);
            form.update(|f| f.set(field, event_target_value(&ev)));
        };

        let input = match field {
            ContactField::Message => view! {
                <textarea
                    name=field.as_str()
                    rows="6"
                    required=true
                    placeholder=field.placeholder()
                    prop:value=value
                    on:input=on_input
                ></textarea>
            }
            .into_any(),
            _ => view! {
                <input
                    name=field.as_str()
                    type=input_type
                    required=true
                    placeholder=field.placeholder()
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any(),
        };

        view! {
            <label class="field">
                <span>{field.label()}</span>
                {input}
            </label>
        }
    };

    view! {
        <section class="page-hero">
            <h1>"Get in Touch"</h1>
            <p>"We'd love to hear from you. Send us a message and we'll respond as soon as possible."</p>
        </section>

        <section class="section card-grid">
            {contact_cards(&config.contact)
                .into_iter()
                .map(|card| {
                    let target = if card.opens_new_tab() { "_blank" } else { "_self" };
                    view! {
                        <div class="card contact-card">
                            <h3>{card.title}</h3>
                            <p class="details">{card.details}</p>
                            <p class="muted">{card.description}</p>
                            <a class="btn btn-outline btn-sm" href=card.action target=target>"Contact"</a>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="section contact-layout">
            <div class="card">
                <h2>"Send us a Message"</h2>
                <form class="contact-form" on:submit=on_submit>
                    {ContactField::ALL.into_iter().map(field).collect_view()}
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <Show when=move || sent.get()>
                        <p class="form-success">"Thank you! Your message has been sent."</p>
                    </Show>
                    <button type="submit" class="btn">"Send Message"</button>
                </form>
            </div>

            <div class="contact-aside">
                <div class="card">
                    <h3>"Business Hours"</h3>
                    <ul class="hours">
                        {BUSINESS_HOURS
                            .into_iter()
                            .map(|slot| {
                                view! {
                                    <li>
                                        <span>{slot.days}</span>
                                        <span class="badge badge-outline" class:closed=slot.is_closed()>
                                            {slot.hours}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="note"><strong>"Note: "</strong>{WHATSAPP_NOTE}</p>
                </div>

                <div class="card">
                    <h3>"Quick FAQ"</h3>
                    {FAQS
                        .into_iter()
                        .map(|faq| {
                            view! {
                                <div class="faq">
                                    <h4>{faq.question}</h4>
                                    <p>{faq.answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// ============================================================================
// Not Found
// ============================================================================

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page-hero not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="btn">"Back to Home"</a>
        </section>
    }
}
