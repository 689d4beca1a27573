//! Hello for developers who open the console.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::TAGLINE;

fn ascii_logo() -> String {
    format!(
        r#"
  +--------------------------------+
  |   M E A L V E R S I T Y   :)   |
  +--------------------------------+
  {TAGLINE} | v{}
"#,
        env!("CARGO_PKG_VERSION")
    )
}

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", ascii_logo())),
            &JsValue::from_str("color: #f59e0b; font-family: monospace; font-size: 11px;"),
        );
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "landing mounted");
    });

    view! {}
}
