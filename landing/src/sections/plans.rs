//! Plan-selection wizard and the filtered plan cards.

use leptos::prelude::*;
use mealversity_core::catalog::{Category, DietType, Duration, MealType, Plan};
use mealversity_core::error::WizardError;
use mealversity_core::modal::{ActiveModal, ModalController};
use mealversity_core::notice::Notice;
use mealversity_core::wizard::PlanSelector;

const PROGRESS_LABELS: [&str; 4] = ["Category", "Duration", "Diet", "Meal"];

/// Surface a rejected transition as a toast.
fn report(notice: RwSignal<Option<Notice>>, result: Result<(), WizardError>) {
    if let Err(err) = result {
        tracing::debug!(error = %err, "wizard transition rejected");
        notice.set(Some(Notice::from(&err)));
    }
}

#[component]
pub fn PlansSection(
    wizard: RwSignal<PlanSelector>,
    modals: RwSignal<ModalController>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let has_category = move || wizard.with(|w| w.category().is_some());
    let has_duration = move || wizard.with(|w| w.duration().is_some());
    let has_diet = move || wizard.with(|w| w.diet_type().is_some());

    view! {
        <section id="plans" class="plans">
            <div class="container">
                <div class="section-header">
                    <div>
                        <h4 class="section-title">"Our Meal Plans"</h4>
                        <p class="section-subtitle">"Flexible subscriptions — pause, swap, or cancel anytime."</p>
                    </div>
                    <button class="btn btn-ghost" on:click=move |_| wizard.update(PlanSelector::reset)>
                        "Reset"
                    </button>
                </div>

                <div class="wizard-progress">
                    {PROGRESS_LABELS
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            view! {
                                <div class="wizard-progress-step">
                                    <span
                                        class="wizard-dot"
                                        class:lit=move || wizard.with(|w| w.filled()[i])
                                    ></span>
                                    <span>{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="wizard-step">
                    <h5>"Choose Plan Category"</h5>
                    <div class="wizard-options">
                        {Category::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <button
                                        class="wizard-option"
                                        class:selected=move || wizard.with(|w| w.category() == Some(category))
                                        on:click=move |_| wizard.update(|w| w.select_category(category))
                                    >
                                        <span class="wizard-option-icon">{category.icon()}</span>
                                        {category.id()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show when=has_category>
                    <div class="wizard-step">
                        <h5>"Select Duration"</h5>
                        <div class="wizard-options">
                            {Duration::ALL
                                .into_iter()
                                .map(|duration| {
                                    view! {
                                        <button
                                            class="wizard-option"
                                            class:selected=move || wizard.with(|w| w.duration() == Some(duration))
                                            on:click=move |_| {
                                                let result = wizard.try_update(|w| w.select_duration(duration));
                                                report(notice, result.unwrap_or(Ok(())));
                                            }
                                        >
                                            {duration.id()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <Show when=has_duration>
                    <div class="wizard-step">
                        <h5>"Choose Diet Type"</h5>
                        <div class="wizard-options">
                            {DietType::ALL
                                .into_iter()
                                .map(|diet| {
                                    view! {
                                        <button
                                            class="wizard-option"
                                            class:selected=move || wizard.with(|w| w.diet_type() == Some(diet))
                                            on:click=move |_| {
                                                let result = wizard.try_update(|w| w.select_diet_type(diet));
                                                report(notice, result.unwrap_or(Ok(())));
                                            }
                                        >
                                            <span class="wizard-option-icon">{diet.icon()}</span>
                                            {diet.name()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <Show when=has_diet>
                    <div class="wizard-step">
                        <h5>"Select Meal Type"</h5>
                        <div class="wizard-options">
                            {MealType::ALL
                                .into_iter()
                                .map(|meal| {
                                    view! {
                                        <button
                                            class="wizard-option"
                                            class:selected=move || wizard.with(|w| w.meal_type() == Some(meal))
                                            on:click=move |_| {
                                                let result = wizard.try_update(|w| w.select_meal_type(meal));
                                                report(notice, result.unwrap_or(Ok(())));
                                            }
                                        >
                                            <span class="wizard-option-icon">{meal.icon()}</span>
                                            {meal.name()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <Show when=has_category>
                    <div class="plan-grid">
                        {move || {
                            let plans = wizard.with(|w| w.visible_plans());
                            if plans.is_empty() {
                                view! {
                                    <p class="plans-empty">
                                        "No plans match this combination yet. Try another diet or meal type."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                plans
                                    .into_iter()
                                    .map(|plan| {
                                        view! {
                                            <PlanCard plan=plan wizard=wizard modals=modals notice=notice />
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(
    plan: &'static Plan,
    wizard: RwSignal<PlanSelector>,
    modals: RwSignal<ModalController>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let duration = move || wizard.with(|w| w.pricing_duration());

    view! {
        <article class="plan-card" class:unavailable=!plan.available>
            {plan.tag.map(|tag| {
                view! { <span class=format!("plan-tag {}", tag.badge_class())>{tag.label()}</span> }
            })}
            <h5 class="plan-title">{plan.title}</h5>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="plan-price-amount">{move || plan.price_label(duration())}</span>
                <span class="plan-price-suffix">{move || plan.period_suffix(duration())}</span>
            </div>
            <div class="plan-meals">{move || plan.meals_label(duration())}</div>
            {if plan.available {
                view! {
                    <div class="plan-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| modals.update(|m| m.open(ActiveModal::QuickOrder { plan: Some(plan) }))
                        >
                            "Subscribe"
                        </button>
                        <button
                            class="btn btn-ghost"
                            on:click=move |_| notice.set(Some(Notice::info("Details coming soon")))
                        >
                            "Details"
                        </button>
                    </div>
                    <p class="plan-footer">"Free delivery above ₹299."</p>
                }
                    .into_any()
            } else {
                view! {
                    <div class="plan-actions">
                        <button class="btn btn-disabled" disabled=true>"Coming Soon"</button>
                    </div>
                    <p class="plan-footer">"Notify me when available"</p>
                }
                    .into_any()
            }}
        </article>
    }
}
