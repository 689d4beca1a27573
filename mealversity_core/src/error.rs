//! Error types for the landing page state machines.
//!
//! None of these are fatal: the page turns every one of them into a
//! [`Notice`](crate::notice::Notice) and keeps running.

use thiserror::Error;

use crate::form::Field;

/// Rejected wizard transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("unknown {field} option '{value}'")]
    UnknownOption { field: &'static str, value: String },

    #[error("cannot choose {attempted} before {requires}")]
    OutOfOrder {
        attempted: &'static str,
        requires: &'static str,
    },
}

/// Form rejected before anything leaves the form boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no form is open")]
    NoActiveModal,

    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("a submission is already in progress")]
    AlreadyInFlight,
}

/// Failure while delivering a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("pre-registration endpoint is not configured")]
    NotConfigured,

    #[error("failed to encode submission: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("submission rejected with status {0}")]
    Rejected(u16),

    /// The response was opaque, so delivery could not be confirmed.
    #[error("submission could not be confirmed")]
    Unconfirmed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WizardError::OutOfOrder {
            attempted: "dietType",
            requires: "duration",
        };
        assert_eq!(err.to_string(), "cannot choose dietType before duration");

        let err = FormError::MissingField(Field::Name);
        assert_eq!(err.to_string(), "Your name is required");

        assert_eq!(
            SubmitError::Rejected(500).to_string(),
            "submission rejected with status 500"
        );
    }

    #[test]
    fn config_error_wraps_toml() {
        let err = toml::from_str::<toml::Table>("log_level = ").unwrap_err();
        let err = ConfigError::from(err);
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
