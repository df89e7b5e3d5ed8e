//! Contact-form submission pipeline:
//! honeypot check -> validation -> persistence -> best-effort notification.

use axum::{extract::State, response::{IntoResponse, Response}, Json};
use serde_json::json;
use tracing::info;

use crate::database::repository::NewContact;
use crate::email::ContactNotification;
use crate::error::{AppError, Result};
use crate::models::ContactForm;
use crate::validation::{sanitize_contact, validate_contact};
use crate::AppState;

pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Response> {
    // A filled honeypot marks a bot. Answer with the normal success envelope
    // so the caller gets no signal that anything was filtered.
    if !form.honeypot.trim().is_empty() {
        info!(bot = true, "honeypot filled, dropping submission silently");
        return Ok(Json(json!({
            "success": true,
            "message": "Thank you for your message!",
        }))
        .into_response());
    }

    let errors = validate_contact(&form.name, &form.email, &form.message);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let sanitized = sanitize_contact(&form.name, &form.email, &form.message);

    // A failed write propagates as a server error; there is no queue to
    // defer it to.
    let saved = state
        .contacts
        .create(NewContact {
            name: sanitized.name.clone(),
            email: sanitized.email.clone(),
            message: sanitized.message.clone(),
        })
        .await?;

    info!(contact_id = saved.id, "contact message persisted");

    // Notification is advisory: the write succeeding is the authoritative
    // signal that the submission was received.
    let outcome = state
        .notifier
        .send(&ContactNotification {
            name: sanitized.name,
            email: sanitized.email,
            message: sanitized.message,
        })
        .await;

    Ok(Json(json!({
        "success": true,
        "message": "Thank you for your message! We will get back to you soon.",
        "emailSent": outcome.success,
    }))
    .into_response())
}
