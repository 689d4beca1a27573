use leptos::prelude::*;
use mealversity_core::form::{Field, FormDraft, FormKind};
use mealversity_core::notice::Notice;

use super::TAGLINE;
use super::fields::DraftInput;

const QUICK_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#plans", "Meal Plans"),
    ("#team", "Team"),
    ("#career", "Career"),
    ("#contact", "Contact"),
];

const SERVICES: [&str; 4] = [
    "Daily Meal Plans",
    "Quality Assurance",
    "Fast Delivery",
    "Healthy Options",
];

#[component]
pub fn Footer(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let newsletter = RwSignal::new(FormDraft::default());
    let year = js_sys::Date::new_0().get_full_year();

    let subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match newsletter.with(|d| d.validate(FormKind::Newsletter)) {
            Ok(()) => {
                newsletter.update(FormDraft::clear);
                notice.set(Some(Notice::success("Subscribed successfully!")));
            }
            Err(err) => notice.set(Some(Notice::from(&err))),
        }
    };

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3 class="footer-title">"MealVersity"</h3>
                    <p>{TAGLINE}</p>
                    <div class="footer-social">
                        <a href="#" class="footer-link">"Facebook"</a>
                        <a href="#" class="footer-link">"Twitter"</a>
                        <a href="#" class="footer-link">"Instagram"</a>
                    </div>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {QUICK_LINKS
                            .into_iter()
                            .map(|(href, label)| view! { <li><a href=href class="footer-link">{label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Our Services"</h3>
                    <ul>
                        {SERVICES.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Stay Updated"</h3>
                    <p>"Subscribe to get special offers, free giveaways, and updates on new menu items!"</p>
                    <form class="newsletter-form" on:submit=subscribe>
                        <DraftInput
                            draft=newsletter
                            field=Field::Email
                            input_type="email"
                            placeholder="Enter your email"
                        />
                        <button type="submit" class="btn btn-primary">"Subscribe Now"</button>
                    </form>
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-copyright">{format!("© {year} MealVersity. All rights reserved.")}</p>
                <div>
                    <a href="#" class="footer-link">"Privacy Policy"</a>
                    <a href="#" class="footer-link">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
