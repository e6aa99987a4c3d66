//! Brevo v3 REST client: the production [`MailProvider`].
//!
//! Two endpoints only: `POST /contacts` (newsletter) and `POST /smtp/email`
//! (contact form). Both are single non-cancellable request/response calls
//! with no retry; failures come back as `SiteError::Provider` carrying the
//! status and response body for the log.

use crate::config::BrevoConfig;
use crate::error::SiteError;
use crate::forms::MailProvider;
use log::debug;
use reqwest::blocking::Client;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api.brevo.com/v3";

#[derive(Debug)]
pub struct BrevoClient {
    http: Client,
    api_key: String,
    base_url: String,
    sender_name: String,
    sender_email: String,
    recipient_name: String,
    recipient_email: String,
}

impl BrevoClient {
    /// Build a client from config. Fails with a configuration error if no
    /// API key can be resolved, so a misconfigured deploy is caught at
    /// startup instead of on the first user submission.
    pub fn new(config: &BrevoConfig) -> Result<Self, SiteError> {
        let api_key = config.resolve_api_key()?;
        Ok(BrevoClient {
            http: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            sender_name: config.sender_name.clone(),
            sender_email: config.sender_email.clone(),
            recipient_name: config.contact_recipient_name.clone(),
            recipient_email: config.contact_recipient_email.clone(),
        })
    }

    /// Point the client at a different API root (test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn post(&self, path: &str, body: serde_json::Value) -> Result<(), SiteError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header("api-key", &self.api_key)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .map_err(|e| SiteError::Provider(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().unwrap_or_default();
            Err(SiteError::Provider(format!(
                "{} returned {}: {}",
                path, status, detail
            )))
        }
    }
}

impl MailProvider for BrevoClient {
    fn add_contact(&self, email: &str, list_id: u32) -> Result<(), SiteError> {
        self.post(
            "/contacts",
            json!({
                "email": email,
                "listIds": [list_id],
            }),
        )
    }

    fn send_email(&self, subject: &str, html_body: &str) -> Result<(), SiteError> {
        self.post(
            "/smtp/email",
            json!({
                "sender": { "name": self.sender_name, "email": self.sender_email },
                "to": [ { "email": self.recipient_email, "name": self.recipient_name } ],
                "subject": subject,
                "htmlContent": html_body,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        // Default config has no file key; unless the deploy env leaks into
        // the test run this must fail as a configuration error.
        if std::env::var(crate::config::API_KEY_ENV).is_ok() {
            return;
        }
        let err = BrevoClient::new(&BrevoConfig::default()).unwrap_err();
        assert!(matches!(err, SiteError::Configuration(_)));
    }

    #[test]
    fn test_new_accepts_file_key_and_copies_addressing() {
        let config = BrevoConfig {
            api_key: Some("xkeysib-test".to_string()),
            ..BrevoConfig::default()
        };
        let client = BrevoClient::new(&config).unwrap();
        assert_eq!(client.recipient_email, "hello@snowmanstudio.com");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = BrevoConfig {
            api_key: Some("xkeysib-test".to_string()),
            ..BrevoConfig::default()
        };
        let client = BrevoClient::new(&config)
            .unwrap()
            .with_base_url("http://127.0.0.1:9999/v3/");
        assert_eq!(client.base_url, "http://127.0.0.1:9999/v3");
    }
}
