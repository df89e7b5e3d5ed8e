//! Input validation: shared contact-form rules plus storage-boundary validators

pub mod contact;
pub mod rules;

pub use contact::{sanitize_contact, validate_contact, SanitizedContact};
pub use rules::{validate_absolute_url, validate_github_link, validate_tech_stack};

/// Flatten `validator` derive output into a plain message list suitable for
/// the 400 response envelope.
pub fn collect_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("Validation failed for field '{}'", field)),
            }
        }
    }
    messages
}
