use leptos::prelude::*;
use mealversity_core::form::{Field, FormDraft, FormKind};
use mealversity_core::notice::Notice;

use super::fields::{DraftInput, DraftTextarea};

#[component]
pub fn Contact(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let draft = RwSignal::new(FormDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with(|d| d.validate(FormKind::Contact)) {
            Ok(()) => {
                tracing::info!("contact message accepted");
                draft.update(FormDraft::clear);
                notice.set(Some(Notice::success("Thanks! We'll reply within 24 hours.")));
            }
            Err(err) => notice.set(Some(Notice::from(&err))),
        }
    };

    view! {
        <section id="contact" class="contact">
            <div class="container contact-grid">
                <div>
                    <h4 class="section-title">"Contact Us"</h4>
                    <p class="section-subtitle">"Questions? Reach out — we reply within 24 hours."</p>
                    <form class="contact-form" on:submit=on_submit>
                        <DraftInput draft=draft field=Field::Name />
                        <DraftInput draft=draft field=Field::Contact placeholder="Email or phone" />
                        <DraftTextarea draft=draft field=Field::Message />
                        <button type="submit" class="btn btn-primary">"Send"</button>
                    </form>
                </div>
                <div class="download-app">
                    <h4 class="section-title">"Download App"</h4>
                    <p>"Manage your subscription, track deliveries, and access exclusive offers."</p>
                    <div class="store-badges">
                        <div class="store-badge">"App Store"</div>
                        <div class="store-badge">"Google Play"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
