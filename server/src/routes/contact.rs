//! Contact relay: validates a contact message and forwards it to the
//! configured email provider.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use portfolio_client::net::types::{ContactPayload, ContactResponse};
use portfolio_client::state::contact::{ContactError, ContactForm, validate};

use crate::email::EmailError;
use crate::state::AppState;

/// Outcome of a relay attempt that did not deliver.
#[derive(Debug, thiserror::Error)]
pub enum ContactRelayError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error("email delivery not configured")]
    NotConfigured,
    #[error("email delivery failed: {0}")]
    Delivery(#[from] EmailError),
}

pub(crate) fn relay_error_to_status(err: &ContactRelayError) -> StatusCode {
    match err {
        ContactRelayError::Invalid(_) => StatusCode::BAD_REQUEST,
        ContactRelayError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ContactRelayError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ContactRelayError {
    fn into_response(self) -> Response {
        let status = relay_error_to_status(&self);
        let body = ContactResponse { ok: false, error: Some(self.to_string()) };
        (status, Json(body)).into_response()
    }
}

/// Re-run the form rules on a payload received over the wire.
pub(crate) fn revalidate(payload: ContactPayload) -> Result<ContactPayload, ContactError> {
    let form = ContactForm { name: payload.from_name, email: payload.from_email, message: payload.message };
    validate(&form)
}

/// `POST /api/contact`: deliver a contact message.
pub async fn send_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<ContactResponse>, ContactRelayError> {
    let payload = revalidate(payload)?;
    let Some(mailer) = &state.mailer else {
        tracing::warn!("contact message dropped: email delivery not configured");
        return Err(ContactRelayError::NotConfigured);
    };

    if let Err(e) = mailer.send_contact(&payload).await {
        tracing::error!(error = %e, "contact delivery failed");
        return Err(e.into());
    }

    tracing::info!("contact message delivered");
    Ok(Json(ContactResponse { ok: true, error: None }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
