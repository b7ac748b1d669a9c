//! Runtime page configuration.
//!
//! Read from an optional JSON block embedded in the page. Relay credentials
//! are deliberately absent: the contact endpoint is a same-origin proxy that
//! owns them.

use crate::constants::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub recipient_name: String,
    pub resume_href: String,
    pub backdrop_fps: f64,
    pub status_reset_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            recipient_name: DEFAULT_RECIPIENT_NAME.to_string(),
            resume_href: DEFAULT_RESUME_HREF.to_string(),
            backdrop_fps: DEFAULT_BACKDROP_FPS,
            status_reset_ms: STATUS_RESET_DELAY_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contact_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "contactEndpoint",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.backdrop_fps.is_finite() || self.backdrop_fps <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "backdropFps",
                reason: format!("{} is not a positive rate", self.backdrop_fps),
            });
        }
        Ok(())
    }

    /// Parses `json` if present, falling back to defaults on any problem.
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                log::warn!("[config] {e}; using defaults");
                Self::default()
            }),
        }
    }
}
