use async_trait::async_trait;

use crate::error::Result;

/// Sanitized contact fields handed to a delivery channel.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A single email delivery mechanism. Channels are tried in priority order;
/// an `Err` from `attempt` means the sender moves on to the next channel.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, notification: &ContactNotification) -> Result<()>;
}
