use std::time::Duration;

use leptos::prelude::*;
use mealversity_core::carousel::Carousel;
use mealversity_core::counter::CountUp;
use mealversity_core::modal::{ActiveModal, ModalController};
use mealversity_core::tilt::{Bounds, tilt_transform};
use mealversity_core::wizard::PlanSelector;
use wasm_bindgen::JsCast;

use crate::use_site_config;

const SLIDES: [(&str, &str); 6] = [
    ("/hero1.jpeg", "meal 1"),
    ("/hero2.jpeg", "meal 2"),
    ("/react3.jpeg", "meal 3"),
    ("/react4.jpeg", "meal 4"),
    ("/react5.jpeg", "meal 5"),
    ("/react6.jpeg", "meal 6"),
];

#[component]
pub fn Hero(wizard: RwSignal<PlanSelector>, modals: RwSignal<ModalController>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h2 class="hero-title">
                            <span class="hero-title-accent">"Fresh, Healthy & Affordable — "</span>
                            <span>"Just When You Need It."</span>
                        </h2>
                        <p class="hero-description">
                            "Healthy, mom-quality meals for students, professionals, families, and migrants — "
                            "made with love, priced with respect. Care and comfort without breaking your budget."
                        </p>
                        <div class="hero-actions">
                            <a href="#plans" class="btn btn-primary">"View Plans"</a>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| modals.update(|m| m.open(ActiveModal::Preregister))
                            >
                                "Download App"
                            </button>
                        </div>
                        <div class="hero-stats">
                            <div>
                                <AnimatedCounter />
                                <div class="hero-stat-label">"Happy customers"</div>
                            </div>
                            <div>
                                <div class="hero-stat">"28"</div>
                                <div class="hero-stat-label">"Days sample"</div>
                            </div>
                            <div>
                                <div class="hero-stat">"100%"</div>
                                <div class="hero-stat-label">"Fresh ingredients"</div>
                            </div>
                        </div>
                    </div>
                    <HeroCard wizard=wizard modals=modals />
                </div>
            </div>
        </section>
    }
}

/// Count-up statistic. The interval stops when the ramp lands or the
/// component unmounts.
#[component]
fn AnimatedCounter() -> impl IntoView {
    let config = use_site_config().counter;
    let ramp = StoredValue::new(CountUp::new(config.target, config.divisor));
    let (value, set_value) = signal(0u32);
    let handle = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(h) = handle.try_update_value(Option::take).flatten() {
            h.clear();
        }
    };

    let started = set_interval_with_handle(
        move || match ramp.try_update_value(CountUp::tick).flatten() {
            Some(v) => set_value.set(v),
            None => stop(),
        },
        Duration::from_millis(u64::from(config.interval_ms)),
    );
    match started {
        Ok(h) => handle.set_value(Some(h)),
        Err(_) => {
            tracing::warn!("counter interval unavailable, showing final value");
            set_value.set(config.target);
        }
    }

    on_cleanup(move || {
        ramp.try_update_value(CountUp::cancel);
        stop();
    });

    view! { <div class="hero-stat">{move || value.get()}"+"</div> }
}

/// Tilting card with the image carousel and the quick "Order" button.
#[component]
fn HeroCard(wizard: RwSignal<PlanSelector>, modals: RwSignal<ModalController>) -> impl IntoView {
    let config = use_site_config().carousel;
    let carousel = RwSignal::new(Carousel::new(SLIDES.len()));
    let (tilt, set_tilt) = signal(None::<String>);

    if let Ok(h) = set_interval_with_handle(
        move || {
            carousel.try_update(|c| c.autoplay_tick());
        },
        Duration::from_millis(u64::from(config.autoplay_ms)),
    ) {
        on_cleanup(move || h.clear());
    }

    // First card the wizard currently shows, if any.
    let order = move |_| {
        let plan = wizard.with(|w| w.visible_plans().first().copied());
        modals.update(|m| m.open(ActiveModal::QuickOrder { plan }));
    };

    let on_move = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        set_tilt.set(tilt_transform(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            bounds,
        ));
    };

    view! {
        <div class="hero-card-frame">
            <div
                class="hero-card"
                style=move || tilt.get().map(|t| format!("transform: {t}")).unwrap_or_default()
                on:mousemove=on_move
                on:mouseenter=move |_| carousel.update(|c| c.set_paused(true))
                on:mouseleave=move |_| {
                    set_tilt.set(None);
                    carousel.update(|c| c.set_paused(false));
                }
            >
                <div class="carousel">
                    {SLIDES
                        .iter()
                        .enumerate()
                        .map(|(i, (src, alt))| {
                            view! {
                                <img
                                    src=*src
                                    alt=*alt
                                    loading="lazy"
                                    class="carousel-slide"
                                    class:active=move || carousel.with(|c| c.current() == i)
                                />
                            }
                        })
                        .collect_view()}
                    <button class="carousel-prev" aria-label="Previous" on:click=move |_| carousel.update(Carousel::prev)>
                        "‹"
                    </button>
                    <button class="carousel-next" aria-label="Next" on:click=move |_| carousel.update(Carousel::next)>
                        "›"
                    </button>
                    <div class="carousel-dots">
                        {(0..SLIDES.len())
                            .map(|i| {
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:active=move || carousel.with(|c| c.current() == i)
                                        aria-label=format!("Slide {}", i + 1)
                                        on:click=move |_| {
                                            carousel.update(|c| {
                                                if let Err(e) = c.go_to(i) {
                                                    tracing::debug!(error = %e, "carousel dot ignored");
                                                }
                                            })
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero-card-body">
                    <h3>"Chef's Seasonal Veg Thali"</h3>
                    <p>"Wholesome, balanced, and prepared fresh daily."</p>
                    <div class="hero-card-footer">
                        <div class="hero-card-price">"₹99"</div>
                        <button class="btn btn-primary" on:click=order>"Order"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
