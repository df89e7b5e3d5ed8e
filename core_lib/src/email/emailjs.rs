//! Primary transactional-email channel (EmailJS HTTP API)

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::EmailJsConfig;
use crate::email::channel::{ContactNotification, NotificationChannel};
use crate::error::{AppError, Result};

pub struct EmailJsChannel {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    service_id: String,
    template_id: String,
    admin_email: String,
}

impl EmailJsChannel {
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &EmailJsConfig, admin_email: &str) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Email(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Some(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            admin_email: admin_email.to_string(),
        }))
    }
}

#[async_trait]
impl NotificationChannel for EmailJsChannel {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    async fn attempt(&self, notification: &ContactNotification) -> Result<()> {
        let url = format!("{}/api/v1.0/email/send", self.endpoint);

        let body = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.api_key,
            "template_params": {
                "from_name": notification.name,
                "from_email": notification.email,
                "message": notification.message,
                "to_email": self.admin_email,
            },
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Email(format!("EmailJS request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Email(format!(
                "EmailJS API error: {} - {}",
                status, text
            )));
        }

        debug!("Email sent via EmailJS");
        Ok(())
    }
}
