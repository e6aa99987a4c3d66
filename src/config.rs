//! Site configuration.
//!
//! The provider credential and addressing live in a TOML file loaded once
//! at process start; the API key itself is usually supplied through the
//! `BREVO_API_KEY` environment variable, which always wins over the file.
//! `BrevoClient::new` validates the credential before the first outbound
//! call rather than discovering a bad key mid-submission.

use crate::error::SiteError;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable holding the Brevo API key.
pub const API_KEY_ENV: &str = "BREVO_API_KEY";

/// Top-level config file shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brevo: BrevoConfig,
}

/// Brevo addressing and credential. Defaults mirror the production site
/// so a config file only needs to override what differs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrevoConfig {
    /// API key; prefer `BREVO_API_KEY` over putting this in the file.
    pub api_key: Option<String>,
    /// Mailing list the newsletter form subscribes to.
    pub newsletter_list_id: u32,
    pub sender_name: String,
    /// Must be a sender address verified with Brevo.
    pub sender_email: String,
    pub contact_recipient_name: String,
    pub contact_recipient_email: String,
}

impl Default for BrevoConfig {
    fn default() -> Self {
        BrevoConfig {
            api_key: None,
            newsletter_list_id: 123,
            sender_name: "Snowman Studio Contact Form".to_string(),
            sender_email: "contactform@snowmanstudio.com".to_string(),
            contact_recipient_name: "Snowman Studio Admin".to_string(),
            contact_recipient_email: "hello@snowmanstudio.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load and parse a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            SiteError::Configuration(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config: SiteConfig = toml::from_str(&text).map_err(|e| {
            SiteError::Configuration(format!("Cannot parse config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded site config from {}", path.display());
        Ok(config)
    }
}

impl BrevoConfig {
    /// The effective API key: environment first, then the config file.
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Result<String, SiteError> {
        self.resolve_api_key_from(env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key_from(&self, env_value: Option<String>) -> Result<String, SiteError> {
        if let Some(key) = env_value {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        if let Some(key) = &self.api_key {
            if !key.trim().is_empty() {
                return Ok(key.clone());
            }
        }
        Err(SiteError::Configuration(format!(
            "Brevo API key is not configured (set {} or brevo.api_key)",
            API_KEY_ENV
        )))
    }
}
