//! Inputs bound to a [`FormDraft`], wherever that draft lives.

use leptos::prelude::*;
use mealversity_core::form::{Field, FormDraft};
use mealversity_core::modal::ModalController;

/// Signal that owns a draft: a standalone form or the open modal.
pub trait DraftHandle: Copy + Send + Sync + 'static {
    fn field_value(&self, field: Field) -> String;
    fn set_field(&self, field: Field, value: String);
}

impl DraftHandle for RwSignal<FormDraft> {
    fn field_value(&self, field: Field) -> String {
        self.with(|d| d.raw(field).to_string())
    }

    fn set_field(&self, field: Field, value: String) {
        self.update(|d| d.set(field, value));
    }
}

impl DraftHandle for RwSignal<ModalController> {
    fn field_value(&self, field: Field) -> String {
        self.with(|m| m.draft().raw(field).to_string())
    }

    fn set_field(&self, field: Field, value: String) {
        self.update(|m| m.draft_mut().set(field, value));
    }
}

#[component]
pub fn DraftInput<D: DraftHandle>(
    draft: D,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            class="form-input"
            type=input_type
            name=format!("{field:?}").to_lowercase()
            placeholder=placeholder.unwrap_or(field.label())
            prop:value=move || draft.field_value(field)
            on:input=move |ev| draft.set_field(field, event_target_value(&ev))
        />
    }
}

#[component]
pub fn DraftTextarea<D: DraftHandle>(draft: D, field: Field) -> impl IntoView {
    view! {
        <textarea
            class="form-input"
            rows="4"
            placeholder=field.label()
            prop:value=move || draft.field_value(field)
            on:input=move |ev| draft.set_field(field, event_target_value(&ev))
        ></textarea>
    }
}
