// MealVersity Landing Page - Leptos 0.8 Edition
// Developed with 🍱 by The MealVersity Team (c)2025

mod logging;
mod sections;
mod transport;

use leptos::prelude::*;
use mealversity_core::SiteConfig;
use mealversity_core::notice::Notice;
use mealversity_core::theme::Theme;
use mealversity_core::{ModalController, PlanSelector};
use sections::*;
use wasm_bindgen::JsCast;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let level = SiteConfig::from_toml_str(SITE_TOML)
        .map_or(tracing::Level::INFO, |config| config.max_level());
    logging::init(level);
    let config = SiteConfig::load_embedded(SITE_TOML);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    let wizard = RwSignal::new(PlanSelector::default());
    let modals = RwSignal::new(ModalController::new());
    let theme = RwSignal::new(Theme::default());
    let notice = RwSignal::new(None::<Notice>);

    Effect::new(move || apply_theme(theme.get()));

    view! {
        <ConsoleBanner />
        <Nav theme=theme modals=modals />
        <main>
            <Hero wizard=wizard modals=modals />
            <PlansSection wizard=wizard modals=modals notice=notice />
            <Showcase />
            <About />
            <Team />
            <Careers modals=modals />
            <Contact notice=notice />
        </main>
        <Footer notice=notice />
        <ModalHost modals=modals notice=notice />
        <NoticeToast notice=notice />
    }
}

/// Mirror the theme onto `<html>`: the `dark` class and `color-scheme`.
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let _ = root
        .class_list()
        .toggle_with_force(Theme::ROOT_CLASS, theme.is_dark());
    if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
        let _ = root
            .style()
            .set_property("color-scheme", theme.color_scheme());
    }
}

/// Site configuration provided by [`App`].
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
