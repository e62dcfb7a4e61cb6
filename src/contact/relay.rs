//! Notification relay - email delivery for contact submissions
//!
//! The relay is fired at most once per submission, after persistence. The
//! production backend is a Resend-style transactional email API.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::contact::ContactMessage;
use crate::types::{Result, VitrineError};

const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

/// Delivers a notification about a contact submission
#[async_trait]
pub trait NotificationRelay: Send + Sync {
    async fn send_notification(&self, message: &ContactMessage) -> Result<()>;
}

/// Connection settings for the email relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    /// Sender address, must belong to a verified domain
    pub from: String,
    /// Operator address that receives the notifications
    pub to: String,
    /// API endpoint override, mainly for tests
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

/// Resend-style email API client
pub struct ResendRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl ResendRelay {
    pub fn init(config: RelayConfig) -> Result<Self> {
        let timeout = if config.timeout_ms > 0 {
            config.timeout_ms
        } else {
            10_000
        };
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> &str {
        self.config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Render the submission as a minimal HTML notification body
fn render_html(message: &ContactMessage) -> String {
    format!(
        "<h2>New Contact Form Message</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        message.name,
        message.email,
        message.message.replace('\n', "<br>")
    )
}

#[async_trait]
impl NotificationRelay for ResendRelay {
    async fn send_notification(&self, message: &ContactMessage) -> Result<()> {
        let payload = json!({
            "from": self.config.from,
            "to": [self.config.to],
            "subject": format!("New contact form message from {}", message.name),
            "html": render_html(message),
            "reply_to": message.email,
        });

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| VitrineError::Relay(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VitrineError::Relay(format!(
                "relay returned {}: {}",
                status, body
            )));
        }

        debug!(to = %self.config.to, "contact notification sent");
        Ok(())
    }
}
