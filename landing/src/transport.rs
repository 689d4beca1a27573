//! `fetch`-backed [`Transport`] for the pre-registration POST.

use gloo_net::http::Request;
use mealversity_core::error::SubmitError;
use mealversity_core::submit::Transport;
use web_sys::RequestMode;

/// Sends through the browser's `fetch` in CORS mode so the status is readable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        let response = Request::post(url)
            .mode(RequestMode::Cors)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

/// Current time as an ISO-8601 string, from the browser clock.
pub fn now_iso8601() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
