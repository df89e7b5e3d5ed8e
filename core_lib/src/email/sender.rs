use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::EmailConfig;
use crate::email::channel::{ContactNotification, NotificationChannel};
use crate::email::emailjs::EmailJsChannel;
use crate::email::smtp::SmtpChannel;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationOutcome {
    pub success: bool,
    pub message: String,
}

/// Walks the configured channels in priority order and stops at the first
/// success. Channel failures are logged and swallowed; delivery is advisory
/// and never fails the caller.
#[derive(Clone)]
pub struct NotificationSender {
    channels: Arc<Vec<Box<dyn NotificationChannel>>>,
}

impl NotificationSender {
    pub fn new(channels: Vec<Box<dyn NotificationChannel>>) -> Self {
        Self {
            channels: Arc::new(channels),
        }
    }

    /// Channel list construction, evaluated once at startup: the primary
    /// transactional API when a key is present, then SMTP when reachable
    /// connection parameters exist.
    pub fn from_config(config: &EmailConfig) -> Self {
        let admin_email = config.admin_address();
        let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();

        match EmailJsChannel::from_config(&config.emailjs, &admin_email) {
            Ok(Some(channel)) => channels.push(Box::new(channel)),
            Ok(None) => {}
            Err(e) => warn!("Skipping EmailJS channel: {}", e),
        }

        if config.smtp.is_configured() {
            match SmtpChannel::from_config(&config.smtp, &admin_email) {
                Ok(Some(channel)) => channels.push(Box::new(channel)),
                Ok(None) => {}
                Err(e) => warn!("Skipping SMTP channel: {}", e),
            }
        }

        if channels.is_empty() {
            warn!("No email configuration found - notifications will be skipped");
        }

        Self::new(channels)
    }

    pub fn is_configured(&self) -> bool {
        !self.channels.is_empty()
    }

    pub async fn send(&self, notification: &ContactNotification) -> NotificationOutcome {
        if self.channels.is_empty() {
            return NotificationOutcome {
                success: false,
                message: "Email service not configured".to_string(),
            };
        }

        for channel in self.channels.iter() {
            match channel.attempt(notification).await {
                Ok(()) => {
                    info!(channel = channel.name(), "notification delivered");
                    return NotificationOutcome {
                        success: true,
                        message: format!("Email sent successfully via {}", channel.name()),
                    };
                }
                Err(e) => {
                    warn!(
                        channel = channel.name(),
                        error = %e,
                        "notification channel failed, trying next"
                    );
                }
            }
        }

        NotificationOutcome {
            success: false,
            message: "All notification channels failed".to_string(),
        }
    }
}
