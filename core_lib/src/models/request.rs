//! Request payload models

use serde::{Deserialize, Serialize};

/// Raw contact-form submission body. Every field defaults to empty so that
/// missing fields validate the same way empty ones do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Hidden form field; any non-empty value marks the submission as a bot.
    #[serde(default)]
    pub honeypot: String,
}
