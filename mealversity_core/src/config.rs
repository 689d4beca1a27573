//! Site configuration.
//!
//! The landing embeds `site.toml` at compile time and hands its text to
//! [`SiteConfig::load_embedded`]. Every table is optional.

use std::num::NonZeroU32;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    pub preregister: PreregisterConfig,
    pub counter: CounterConfig,
    pub carousel: CarouselConfig,
    pub notice: NoticeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            preregister: PreregisterConfig::default(),
            counter: CounterConfig::default(),
            carousel: CarouselConfig::default(),
            notice: NoticeConfig::default(),
        }
    }
}

/// Where pre-registrations are posted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreregisterConfig {
    /// Empty disables submission.
    pub endpoint: String,
    /// Value of the `source` field in every payload.
    pub source: String,
}

impl Default for PreregisterConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            source: "landing-page".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub target: u32,
    pub interval_ms: u32,
    pub divisor: NonZeroU32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            target: 2000,
            interval_ms: 90,
            divisor: NonZeroU32::MIN.saturating_add(11),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { autoplay_ms: 3000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub dismiss_ms: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { dismiss_ms: 3500 }
    }
}

impl SiteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse embedded config text.
    /// Returns default config if the text is invalid.
    pub fn load_embedded(text: &str) -> Self {
        match Self::from_toml_str(text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid site config, using defaults");
                Self::default()
            }
        }
    }

    /// Parsed `log_level`, `INFO` when unrecognised.
    pub fn max_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }

    pub fn preregister_enabled(&self) -> bool {
        !self.preregister.endpoint.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.counter.target, 2000);
        assert_eq!(config.counter.divisor.get(), 12);
        assert_eq!(config.counter.interval_ms, 90);
        assert_eq!(config.carousel.autoplay_ms, 3000);
        assert_eq!(config.notice.dismiss_ms, 3500);
        assert_eq!(config.preregister.source, "landing-page");
        assert!(!config.preregister_enabled());
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_empty_text_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_tables_keep_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
log_level = "debug"

[preregister]
endpoint = "https://script.example/exec"

[counter]
target = 500
"#,
        )
        .unwrap();
        assert_eq!(config.max_level(), Level::DEBUG);
        assert!(config.preregister_enabled());
        assert_eq!(config.preregister.source, "landing-page");
        assert_eq!(config.counter.target, 500);
        assert_eq!(config.counter.divisor.get(), 12);
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let err = SiteConfig::from_toml_str("[counter]\ndivisor = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(
            SiteConfig::load_embedded("[counter]\ndivisor = 0\n"),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = SiteConfig::from_toml_str("log_level = \"chatty\"").unwrap();
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_embedded_site_file_parses() {
        let config = SiteConfig::from_toml_str(include_str!("../../landing/site.toml")).unwrap();
        assert_eq!(config.carousel.autoplay_ms, 3000);
    }
}
