//! Pre-registration delivery.
//!
//! The request body is the JSON object
//! `{ name, email, phone, notifyMe, timestamp, source }`. Delivery goes through
//! a [`Transport`] so the browser implementation (gloo-net) and test doubles
//! share the same status handling.
//!
//! The response status is always inspected. A status of `0` means the
//! browser handed back an opaque response, and that is reported as
//! [`SubmitError::Unconfirmed`] rather than assumed to be a success.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, SubmitError};
use crate::form::{Field, FormDraft, FormKind};
use crate::notice::Notice;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreRegistration {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notify_me: bool,
    /// ISO-8601, taken from the browser clock at submit time.
    pub timestamp: String,
    pub source: String,
}

impl PreRegistration {
    /// Build the payload from a validated draft.
    pub fn from_draft(
        draft: &FormDraft,
        timestamp: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, FormError> {
        draft.validate(FormKind::Preregister)?;
        let value = |field| draft.get(field).unwrap_or_default().to_string();
        Ok(Self {
            name: value(Field::Name),
            email: value(Field::Email),
            phone: value(Field::Phone),
            notify_me: draft.flag(Field::NotifyMe),
            timestamp: timestamp.into(),
            source: source.into(),
        })
    }
}

/// Something that can POST a JSON body and report the HTTP status.
pub trait Transport {
    fn post_json(&self, url: &str, body: String)
    -> impl Future<Output = Result<u16, SubmitError>>;
}

/// Map an HTTP status onto the submission outcome.
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    match status {
        0 => Err(SubmitError::Unconfirmed),
        200..=299 => Ok(()),
        other => Err(SubmitError::Rejected(other)),
    }
}

pub async fn submit_preregistration<T: Transport>(
    transport: &T,
    endpoint: &str,
    payload: &PreRegistration,
) -> Result<(), SubmitError> {
    if endpoint.trim().is_empty() {
        return Err(SubmitError::NotConfigured);
    }
    let body = serde_json::to_string(payload).map_err(|e| SubmitError::Encode(e.to_string()))?;

    let status = transport.post_json(endpoint, body).await?;
    let outcome = classify_status(status);
    match &outcome {
        Ok(()) => tracing::info!(status, source = %payload.source, "pre-registration delivered"),
        Err(err) => tracing::warn!(status, error = %err, "pre-registration not confirmed"),
    }
    outcome
}

/// User-facing message for a failed submission.
pub fn failure_notice(err: &SubmitError) -> Notice {
    match err {
        SubmitError::NotConfigured => {
            Notice::info("Pre-registration opens soon. Please check back later.")
        }
        SubmitError::Unconfirmed => Notice::error(
            "We couldn't confirm your submission. Please try again in a moment.",
        ),
        SubmitError::Encode(_) | SubmitError::Network(_) | SubmitError::Rejected(_) => {
            Notice::error("Something went wrong. Please try again.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records every request and answers with a fixed status.
    struct Recording {
        reply: Result<u16, SubmitError>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl Recording {
        fn answering(reply: Result<u16, SubmitError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Recording {
        async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
            self.calls.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn filled_draft() -> FormDraft {
        let mut draft = FormDraft::default();
        draft.set(Field::Name, "Asha Roy");
        draft.set(Field::Email, "asha@example.in");
        draft.set(Field::Phone, "98300 00000");
        draft.set_flag(Field::NotifyMe, true);
        draft
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload =
            PreRegistration::from_draft(&filled_draft(), "2025-01-01T00:00:00.000Z", "landing-page")
                .unwrap();
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Asha Roy",
                "email": "asha@example.in",
                "phone": "98300 00000",
                "notifyMe": true,
                "timestamp": "2025-01-01T00:00:00.000Z",
                "source": "landing-page",
            })
        );
    }

    #[test]
    fn empty_name_is_blocked_before_any_request() {
        let mut draft = filled_draft();
        draft.set(Field::Name, "");
        let err = PreRegistration::from_draft(&draft, "t", "s").unwrap_err();
        assert_eq!(err, FormError::MissingField(Field::Name));
    }

    #[test]
    fn status_classification() {
        assert_eq!(classify_status(200), Ok(()));
        assert_eq!(classify_status(204), Ok(()));
        assert_eq!(classify_status(0), Err(SubmitError::Unconfirmed));
        assert_eq!(classify_status(302), Err(SubmitError::Rejected(302)));
        assert_eq!(classify_status(500), Err(SubmitError::Rejected(500)));
    }

    #[tokio::test]
    async fn delivers_json_body_to_endpoint() {
        let transport = Recording::answering(Ok(200));
        let payload = PreRegistration::from_draft(&filled_draft(), "t", "landing-page").unwrap();

        let result = submit_preregistration(&transport, "https://sheets.test/exec", &payload).await;

        assert_eq!(result, Ok(()));
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://sheets.test/exec");
        let sent: PreRegistration = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(sent, payload);
    }

    #[tokio::test]
    async fn opaque_response_is_not_treated_as_success() {
        let transport = Recording::answering(Ok(0));
        let payload = PreRegistration::from_draft(&filled_draft(), "t", "s").unwrap();
        let result = submit_preregistration(&transport, "https://sheets.test/exec", &payload).await;
        assert_eq!(result, Err(SubmitError::Unconfirmed));
    }

    #[tokio::test]
    async fn network_failure_propagates() {
        let transport = Recording::answering(Err(SubmitError::Network("offline".into())));
        let payload = PreRegistration::from_draft(&filled_draft(), "t", "s").unwrap();
        let result = submit_preregistration(&transport, "https://sheets.test/exec", &payload).await;
        assert_eq!(result, Err(SubmitError::Network("offline".into())));
    }

    #[tokio::test]
    async fn missing_endpoint_skips_the_network() {
        let transport = Recording::answering(Ok(200));
        let payload = PreRegistration::from_draft(&filled_draft(), "t", "s").unwrap();
        let result = submit_preregistration(&transport, "  ", &payload).await;
        assert_eq!(result, Err(SubmitError::NotConfigured));
        assert!(transport.calls.borrow().is_empty());
    }

    #[test]
    fn failure_notices() {
        assert_eq!(
            failure_notice(&SubmitError::Rejected(500)),
            Notice::error("Something went wrong. Please try again.")
        );
        assert_eq!(
            failure_notice(&SubmitError::NotConfigured).level,
            crate::notice::NoticeLevel::Info
        );
    }
}
