//! Page configuration.
//!
//! Every field has a default that matches the live page, so an empty JSON
//! object (or [`LandingConfig::default`]) reproduces the production timings.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default simulated network latency for a submission.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1_500;

/// Default time an outcome message stays up before the form resets.
pub const DEFAULT_RESET_DELAY_MS: u64 = 5_000;

/// Default horizontal travel a touch must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 75.0;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Submission timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl TimingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Identifiers handed to the third-party page-view tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub google_analytics_id: String,
    pub meta_pixel_id: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            google_analytics_id: "G-Q887D1BYMM".to_string(),
            meta_pixel_id: "1794736248583286".to_string(),
        }
    }
}

/// Top-level configuration for a page session.
///
/// # Example
///
/// ```rust
/// use bodyup_landing::config::LandingConfig;
///
/// let config = LandingConfig::from_json(r#"{ "timing": { "reset_delay_ms": 3000 } }"#).unwrap();
/// assert_eq!(config.timing.reset_delay_ms, 3000);
/// assert_eq!(config.timing.submit_delay_ms, 1500);
/// assert_eq!(config.carousel.swipe_threshold, 75.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub timing: TimingConfig,
    pub carousel: CarouselConfig,
    pub telemetry: TelemetryConfig,
}

impl LandingConfig {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.submit_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.submit_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.timing.reset_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.reset_delay_ms must be greater than zero".to_string(),
            ));
        }
        let threshold = self.carousel.swipe_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "carousel.swipe_threshold must be a non-negative number, got {threshold}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_live_page() {
        let config = LandingConfig::default();
        assert_eq!(config.timing.submit_delay(), Duration::from_millis(1_500));
        assert_eq!(config.timing.reset_delay(), Duration::from_secs(5));
        assert_eq!(config.carousel.swipe_threshold, 75.0);
        assert_eq!(config.telemetry.google_analytics_id, "G-Q887D1BYMM");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = LandingConfig::from_json("{ timing").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_delay_is_rejected() {
        let err =
            LandingConfig::from_json(r#"{ "timing": { "submit_delay_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("submit_delay_ms")));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err =
            LandingConfig::from_json(r#"{ "carousel": { "swipe_threshold": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
