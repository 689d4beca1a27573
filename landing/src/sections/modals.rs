//! Modal overlay hosting the quick order, pre-registration and job forms.
//!
//! Only pre-registration leaves the page; the other two complete locally.
//! Every completion goes through [`ModalController::finish_submit`] with the
//! ticket handed out when the submit started, so a response that arrives
//! after the modal was closed or swapped changes nothing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mealversity_core::error::SubmitError;
use mealversity_core::form::Field;
use mealversity_core::modal::{ActiveModal, ModalController, SubmitTicket};
use mealversity_core::notice::Notice;
use mealversity_core::submit::{PreRegistration, submit_preregistration};

use super::fields::{DraftHandle, DraftInput};
use crate::transport::{BrowserTransport, now_iso8601};
use crate::use_site_config;

/// Apply a completion and show its notice, unless the page moved on.
fn complete(
    modals: RwSignal<ModalController>,
    notice: RwSignal<Option<Notice>>,
    ticket: SubmitTicket,
    outcome: Result<(), SubmitError>,
) {
    if let Some(Some(n)) = modals.try_update(|m| m.finish_submit(ticket, outcome)) {
        notice.try_set(Some(n));
    }
}

#[component]
pub fn ModalHost(modals: RwSignal<ModalController>, notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let config = StoredValue::new(use_site_config());
    let active = Memo::new(move |_| modals.with(ModalController::active));
    let submitting = Memo::new(move |_| modals.with(ModalController::is_submitting));

    let close = move |_| modals.update(ModalController::close);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = modals.try_update(|m| m.begin_submit().map(|t| (t, m.active())))
        else {
            return;
        };
        let (ticket, modal) = match started {
            Ok(started) => started,
            Err(err) => {
                notice.set(Some(Notice::from(&err)));
                return;
            }
        };

        if !modal.is_some_and(|m| m.is_remote()) {
            complete(modals, notice, ticket, Ok(()));
            return;
        }

        let (endpoint, source) = config.with_value(|c| {
            (c.preregister.endpoint.clone(), c.preregister.source.clone())
        });
        let payload = modals.with(|m| PreRegistration::from_draft(m.draft(), now_iso8601(), source));
        spawn_local(async move {
            let outcome = match payload {
                Ok(payload) => submit_preregistration(&BrowserTransport, &endpoint, &payload).await,
                Err(err) => Err(SubmitError::Encode(err.to_string())),
            };
            complete(modals, notice, ticket, outcome);
        });
    };

    move || {
        active.get().map(|modal| {
            view! {
                <div class="modal-root">
                    <div class="modal-backdrop" on:click=close></div>
                    <div class="modal" role="dialog" aria-modal="true">
                        <div class="modal-header">
                            <h3>{modal.title()}</h3>
                            <button class="modal-close" aria-label="Close" on:click=close>"✕"</button>
                        </div>
                        <form class="modal-form" on:submit=submit>
                            {form_fields(modal, modals)}
                            {move || {
                                modals.with(|m| {
                                    m.last_error().map(|err| {
                                        view! { <p class="modal-error">{format!("Last attempt failed: {err}")}</p> }
                                    })
                                })
                            }}
                            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Submitting…" } else { submit_label(modal) }}
                            </button>
                        </form>
                    </div>
                </div>
            }
        })
    }
}

fn submit_label(modal: ActiveModal) -> &'static str {
    match modal {
        ActiveModal::QuickOrder { .. } => "Place Order",
        ActiveModal::Preregister => "Join the waitlist",
        ActiveModal::JobApplication { .. } => "Submit Application",
    }
}

fn form_fields(modal: ActiveModal, modals: RwSignal<ModalController>) -> AnyView {
    match modal {
        ActiveModal::QuickOrder { plan } => view! {
            {plan.map(|p| {
                view! {
                    <p class="modal-plan">{p.description}</p>
                }
            })}
            <DraftInput draft=modals field=Field::Name />
            <DraftInput draft=modals field=Field::Contact />
            <div class="form-row">
                <DraftInput draft=modals field=Field::StartDate input_type="date" />
                <select
                    class="form-input"
                    prop:value=move || modals.field_value(Field::Frequency)
                    on:change=move |ev| modals.set_field(Field::Frequency, event_target_value(&ev))
                >
                    <option value="Daily">"Daily"</option>
                    <option value="Weekly">"Weekly"</option>
                </select>
            </div>
        }
        .into_any(),
        ActiveModal::Preregister => view! {
            <p class="modal-lead">"Be the first to know when the MealVersity app launches."</p>
            <DraftInput draft=modals field=Field::Name />
            <DraftInput draft=modals field=Field::Email input_type="email" />
            <DraftInput draft=modals field=Field::Phone input_type="tel" />
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || modals.with(|m| m.draft().flag(Field::NotifyMe))
                    on:change=move |ev| {
                        modals.update(|m| m.draft_mut().set_flag(Field::NotifyMe, event_target_checked(&ev)))
                    }
                />
                " Notify me about launch offers"
            </label>
        }
        .into_any(),
        ActiveModal::JobApplication { job } => view! {
            {job.map(|j| view! { <p class="modal-lead">{j.department}" · "{j.location}</p> })}
            <DraftInput draft=modals field=Field::Name />
            <DraftInput draft=modals field=Field::Email input_type="email" />
            <DraftInput draft=modals field=Field::Phone input_type="tel" />
            <DraftInput draft=modals field=Field::Portfolio input_type="url" />
        }
        .into_any(),
    }
}
