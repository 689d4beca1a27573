use leptos::prelude::*;
use mealversity_core::showcase::{
    DELIVERY_NOTE, FLOW_SLIDE, FlowStep, SHOWCASE_CARDS, SLIDES, ShowcaseCard, SubscriptionFlow,
};

#[component]
pub fn Showcase() -> impl IntoView {
    let flow = RwSignal::new(SubscriptionFlow::default());
    let on_flow_slide = move || flow.with(|f| f.slide() == FLOW_SLIDE);

    view! {
        <section id="subscribe" class="showcase">
            <div class="container">
                <header class="section-header centered">
                    <h4 class="section-title">"Our Meal Plans"</h4>
                    <p class="section-subtitle">"Flexible subscriptions — pause, swap, or cancel anytime."</p>
                </header>

                <div class="showcase-tabs">
                    {SLIDES
                        .iter()
                        .enumerate()
                        .map(|(i, slide)| {
                            view! {
                                <button
                                    class="showcase-tab"
                                    class:active=move || flow.with(|f| f.slide() == i)
                                    on:click=move |_| flow.update(|f| f.select_slide(i))
                                >
                                    {slide.title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="showcase-slide">
                    <button class="carousel-prev" aria-label="Previous" on:click=move |_| flow.update(SubscriptionFlow::prev_slide)>
                        "‹"
                    </button>
                    <Show when=on_flow_slide fallback=move || view! { <ComingSoon flow=flow /> }>
                        <FlowPanel flow=flow />
                    </Show>
                    <button class="carousel-next" aria-label="Next" on:click=move |_| flow.update(SubscriptionFlow::next_slide)>
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FlowPanel(flow: RwSignal<SubscriptionFlow>) -> impl IntoView {
    let step = move || flow.with(|f| f.step());

    view! {
        <div class="flow">
            <div class="flow-header">
                <Show when=move || step() != FlowStep::Frequency>
                    <button class="flow-back" aria-label="Back" on:click=move |_| flow.update(SubscriptionFlow::back)>
                        "←"
                    </button>
                </Show>
                <h2>{move || step().heading()}</h2>
                <p>{move || step().prompt()}</p>
            </div>

            <Show when=move || flow.with(|f| !f.summary().is_empty())>
                <div class="flow-summary">
                    {move || {
                        flow.with(|f| f.summary())
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <p>
                                        <strong>{line.label}":"</strong>
                                        " "
                                        {line.value}
                                    </p>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <div class="flow-options">
                {move || {
                    step()
                        .options()
                        .iter()
                        .copied()
                        .map(|option| {
                            view! {
                                <button
                                    class="flow-option"
                                    class:selected=move || flow.with(|f| f.is_selected(option))
                                    on:click=move |_| flow.update(|f| f.select(option))
                                >
                                    {option.button_label()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || flow.with(SubscriptionFlow::is_complete)>
                <div class="showcase-cards">
                    {SHOWCASE_CARDS.iter().map(|card| view! { <ShowcaseCardView card=card /> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ShowcaseCardView(card: &'static ShowcaseCard) -> impl IntoView {
    view! {
        <div class="showcase-card" class:featured=card.badge.is_some()>
            {card.badge.map(|badge| view! { <div class="showcase-badge">{badge}</div> })}
            <div class="showcase-card-header">
                <h3>{card.title}</h3>
            </div>
            <ul class="showcase-features">
                {card.features.iter().map(|f| view! { <li>"✓ "{*f}</li> }).collect_view()}
            </ul>
            <p class="showcase-delivery">"🚚 "{DELIVERY_NOTE}</p>
        </div>
    }
}

#[component]
fn ComingSoon(flow: RwSignal<SubscriptionFlow>) -> impl IntoView {
    let slide = move || SLIDES[flow.with(|f| f.slide()) % SLIDES.len()];

    view! {
        <div class="coming-soon-slide">
            <h2>{move || slide().title}</h2>
            <p>{move || slide().subtitle}</p>
            <div class="coming-soon">
                <div class="coming-soon-icon">"⏰"</div>
                <h3>"Coming Soon"</h3>
                <p>{move || slide().coming_soon}</p>
            </div>
        </div>
    }
}
