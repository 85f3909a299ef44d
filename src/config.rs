//! Page-level configuration.
//!
//! The page may embed a JSON block
//! (`<script type="application/json" id="site-config">`) overriding any of
//! the defaults below. Missing fields keep their defaults, so `{}` and an
//! absent block are equivalent.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Element id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub carousel_interval_ms: u32,
    pub puzzle_threshold: f64,
    pub reveal_threshold: f64,
    pub mobile_query: String,
    pub reduced_motion_query: String,
    pub contact_webhook: Option<String>,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: consts::CAROUSEL_INTERVAL_MS,
            puzzle_threshold: consts::PUZZLE_THRESHOLD,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            mobile_query: consts::MOBILE_QUERY.to_owned(),
            reduced_motion_query: consts::REDUCED_MOTION_QUERY.to_owned(),
            contact_webhook: None,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an embedded configuration block and normalize its values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(trimmed)?;
        Ok(config.normalized())
    }

    /// Clamp values that would break the behaviors into their usable range.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.carousel_interval_ms = self.carousel_interval_ms.max(consts::CAROUSEL_MIN_INTERVAL_MS);
        self.puzzle_threshold = clamp_threshold(self.puzzle_threshold, consts::PUZZLE_THRESHOLD);
        self.reveal_threshold = clamp_threshold(self.reveal_threshold, consts::REVEAL_THRESHOLD);
        self.contact_webhook = self
            .contact_webhook
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());
        if self.mobile_query.trim().is_empty() {
            self.mobile_query = consts::MOBILE_QUERY.to_owned();
        }
        if self.reduced_motion_query.trim().is_empty() {
            self.reduced_motion_query = consts::REDUCED_MOTION_QUERY.to_owned();
        }
        self
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] for names `log` does not recognize.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

fn clamp_threshold(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { fallback }
}
