//! Shared components: hero carousel, product cards and the detail modal.

use leptos::prelude::*;

use harvey_commerce::carousel::{default_slides, CarouselController};
use harvey_commerce::catalog::Product;
use harvey_commerce::favorites::FavoriteSet;
use harvey_commerce::order::{OrderIntent, ORDER_HELP, PRODUCT_FEATURES};
use harvey_observability::StructuredLogger;

use crate::app::use_config;

// ============================================================================
// Hero Carousel
// ============================================================================

/// Auto-advancing hero slides. Hovering pauses; leaving resumes.
///
/// The interval exists only while auto-playing. It is cleared when the
/// pointer enters and when the component unmounts.
#[component]
pub fn HeroCarousel() -> impl IntoView {
    let config = use_config();
    let slides = StoredValue::new(default_slides());
    let slide_count = slides.with_value(|s| s.len());

    let controller = RwSignal::new(if config.carousel.autoplay {
        CarouselController::new(slide_count)
    } else {
        CarouselController::new(slide_count).paused()
    });

    // Only play-state changes restart the timer, so manual navigation
    // leaves the countdown alone.
    let auto_playing = Memo::new(move |_| controller.with(|c| c.is_auto_playing()));
    let timer = StoredValue::new(None::<IntervalHandle>);
    let period = config.carousel_interval();

    let stop = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
            timer.set_value(None);
        }
    };

    Effect::new(move |_| {
        let playing = auto_playing.get();
        stop();
        if !playing {
            return;
        }
        let logger = StructuredLogger::browser("carousel").with_page("home");
        match set_interval_with_handle(move || controller.update(|c| { c.tick(); }), period) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(_) => logger.warn("Could not start the carousel timer"),
        }
    });

    on_cleanup(stop);

    let current = move || controller.with(|c| c.current());

    view! {
        <section
            class="hero-carousel"
            on:mouseenter=move |_| controller.update(|c| c.pointer_enter())
            on:mouseleave=move |_| controller.update(|c| c.pointer_leave())
        >
            {move || {
                let index = current();
                slides
                    .with_value(|s| s.get(index).cloned())
                    .map(|slide| {
                        view! {
                            <div class="slide" style=format!("background-image: url('{}')", slide.image)>
                                <div class=format!("slide-overlay bg-gradient-to-r {}", slide.gradient)></div>
                                <div class="slide-content">
                                    <p class="slide-subtitle">{slide.subtitle}</p>
                                    <h2 class="slide-title">{slide.title}</h2>
                                    <p class="slide-description">{slide.description}</p>
                                    <a href="/products" class="btn">{slide.cta_label}</a>
                                </div>
                            </div>
                        }
                    })
            }}

            <button
                class="carousel-arrow prev"
                aria-label="Previous slide"
                on:click=move |_| controller.update(|c| c.previous())
            >
                "\u{2039}"
            </button>
            <button
                class="carousel-arrow next"
                aria-label="Next slide"
                on:click=move |_| controller.update(|c| c.next())
            >
                "\u{203a}"
            </button>

            <div class="carousel-dots">
                {(0..slide_count)
                    .map(move |i| {
                        view! {
                            <button
                                class="dot"
                                class:active=move || current() == i
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| controller.update(|c| {
                                    if let Err(err) = c.go_to(i) {
                                        StructuredLogger::browser("carousel")
                                            .with_page("home")
                                            .warn(&err.to_string());
                                    }
                                })
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// ============================================================================
// Product Components
// ============================================================================

/// Grid or list card for one product.
#[component]
pub fn ProductCard(
    product: Product,
    favorites: RwSignal<FavoriteSet>,
    selected: RwSignal<Option<Product>>,
    #[prop(optional)] list: bool,
) -> impl IntoView {
    let id = product.id;
    let in_stock = product.in_stock;
    let is_favorite = move || favorites.with(|f| f.is_favorite(id));
    let price = product.price_label();
    let rating = product.rating_label();
    let reviews = format!("({})", product.review_count);
    let card_class = if list { "product-card list" } else { "product-card" };
    let description = list.then(|| product.description.clone());
    let detail = product.clone();

    view! {
        <div class=card_class>
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone()/>
                {(!in_stock).then(|| view! { <span class="badge badge-danger">"Out of Stock"</span> })}
                <button
                    class="favorite"
                    class:active=is_favorite
                    aria-label="Toggle favorite"
                    on:click=move |_| favorites.update(|f| {
                        f.toggle(id);
                    })
                >
                    {move || if is_favorite() { "\u{2665}" } else { "\u{2661}" }}
                </button>
            </div>
            <div class="product-info">
                <span class="badge">{product.category.name()}</span>
                <h3>{product.name.clone()}</h3>
                {description.map(|text| view! { <p class="product-description">{text}</p> })}
                <div class="rating">
                    <span class="star">"\u{2605}"</span>
                    <span>{rating}</span>
                    <span class="reviews">{reviews}</span>
                </div>
                <div class="product-footer">
                    <span class="price">{price}</span>
                    <button
                        class="btn"
                        disabled=!in_stock
                        on:click=move |_| selected.set(Some(detail.clone()))
                    >
                        "View"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Detail overlay for the selected product.
#[component]
pub fn ProductModal(selected: RwSignal<Option<Product>>) -> impl IntoView {
    let channel = use_config().order_channel();
    let close = move || selected.set(None);

    move || {
        let channel = channel.clone();
        selected.get().map(|product| {
            let order = OrderIntent::for_product(&product, &channel).ok();
            let price = product.price_label();
            let rating = product.rating_label();
            let reviews = product.reviews_label();

            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "\u{2715}"
                        </button>
                        <div class="modal-grid">
                            <img src=product.image.clone() alt=product.name.clone()/>
                            <div class="modal-body">
                                <span class="badge">{product.category.name()}</span>
                                <h2>{product.name.clone()}</h2>
                                <div class="rating">
                                    <span class="star">"\u{2605}"</span>
                                    <span>{rating}</span>
                                    <span class="reviews">{reviews}</span>
                                </div>
                                <p class="price">{price}</p>
                                <p>{product.description.clone()}</p>
                                <ul class="features">
                                    {PRODUCT_FEATURES
                                        .into_iter()
                                        .map(|f| view! { <li>{f}</li> })
                                        .collect_view()}
                                </ul>
                                {match order {
                                    Some(intent) => view! {
                                        <a
                                            class="btn btn-whatsapp"
                                            href=intent.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "Order via WhatsApp"
                                        </a>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <button class="btn" disabled=true>"Out of Stock"</button>
                                    }
                                    .into_any(),
                                }}
                                <p class="help">{ORDER_HELP}</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
