//! Shared contact-form validation and sanitization.
//!
//! Pure functions with no framework dependency, so every consumer (the API
//! boundary and the storage boundary) reports the exact same error strings.

use super::rules::EMAIL_REGEX;

pub const NAME_MAX_LEN: usize = 100;
pub const MESSAGE_MAX_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate the three raw text fields. Returns an empty vec when valid,
/// otherwise one human-readable message per violated rule.
///
/// Fields are checked independently (not short-circuited) in a fixed order:
/// name, then email, then message. Per field: required, then length bound,
/// then shape (email only). Trimming is applied before every check.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Vec<String> {
    let mut errors = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        errors.push("Name is required".to_string());
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.push("Name cannot exceed 100 characters".to_string());
    }

    let email = email.trim();
    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !EMAIL_REGEX.is_match(email) {
        errors.push("Please provide a valid email address".to_string());
    }

    let message = message.trim();
    if message.is_empty() {
        errors.push("Message is required".to_string());
    } else if message.chars().count() > MESSAGE_MAX_LEN {
        errors.push("Message cannot exceed 2000 characters".to_string());
    }

    errors
}

/// Trim all fields and lowercase the email address.
pub fn sanitize_contact(name: &str, email: &str, message: &str) -> SanitizedContact {
    SanitizedContact {
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        message: message.trim().to_string(),
    }
}
