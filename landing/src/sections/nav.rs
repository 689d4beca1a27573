use leptos::prelude::*;
use mealversity_core::modal::{ActiveModal, ModalController};
use mealversity_core::theme::Theme;

use super::TAGLINE;

const LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#plans", "Meal Plans"),
    ("#team", "Team"),
    ("#career", "Career"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav(theme: RwSignal<Theme>, modals: RwSignal<ModalController>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let toggle_theme = move |_| theme.update(Theme::toggle);
    let open_preregister = move |_| {
        set_menu_open.set(false);
        modals.update(|m| m.open(ActiveModal::Preregister));
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <div class="nav-logo">"MV"</div>
                    <div>
                        <span class="nav-title">"MealVersity"</span>
                        <span class="nav-tagline">{TAGLINE}</span>
                    </div>
                </a>
                <div class="nav-links">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="nav-link">{label}</a> })
                        .collect_view()}
                    <button class="nav-theme" aria-label="Toggle theme" on:click=toggle_theme>
                        {move || theme.get().toggle_icon()}
                    </button>
                    <button class="nav-cta" on:click=open_preregister>
                        "Download App"
                    </button>
                </div>
                <button
                    class="nav-burger"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="nav-drawer-link" on:click=toggle_theme>
                        {move || theme.get().toggle_icon()}
                        " Toggle Theme"
                    </button>
                    <button class="nav-cta" on:click=open_preregister>
                        "Download App"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
