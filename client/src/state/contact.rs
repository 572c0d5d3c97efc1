//! Contact form state and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact section validates locally before any network call; the
//! server's relay endpoint runs the same [`validate`] before forwarding to the
//! email provider.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactPayload;

/// Status line shown while a message is in flight.
pub const SENDING_MESSAGE: &str = "Enviando mensaje...";
/// Status line shown after delivery succeeded.
pub const SUCCESS_MESSAGE: &str = "¡Mensaje enviado con éxito!";
/// Status line shown after delivery failed.
pub const FAILURE_MESSAGE: &str = "Error al enviar el mensaje. Intenta nuevamente.";
/// Delay before a success status returns to idle.
pub const SUCCESS_RESET_MS: u32 = 4000;

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Local validation failure; `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Por favor, completa todos los campos")]
    MissingFields,
    #[error("Email inválido")]
    InvalidEmail,
}

/// Delivery status of the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Contact section state: fields plus the status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SendStatus,
    pub status_message: String,
}

impl ContactState {
    /// Validate the form. On success the state moves to `Sending` and the
    /// payload to deliver is returned; on failure the state moves to `Error`
    /// with the validation message and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        match validate(&self.form) {
            Ok(payload) => {
                self.status = SendStatus::Sending;
                SENDING_MESSAGE.clone_into(&mut self.status_message);
                Some(payload)
            }
            Err(err) => {
                self.status = SendStatus::Error;
                self.status_message = err.to_string();
                None
            }
        }
    }

    /// Record the delivery outcome. Success clears the form.
    pub fn finish_submit(&mut self, delivered: bool) {
        if delivered {
            self.status = SendStatus::Success;
            SUCCESS_MESSAGE.clone_into(&mut self.status_message);
            self.form = ContactForm::default();
        } else {
            self.status = SendStatus::Error;
            FAILURE_MESSAGE.clone_into(&mut self.status_message);
        }
    }

    /// Return to idle once the success banner has been shown. Any other
    /// status is left alone so a newer submission is not clobbered.
    pub fn reset_after_success(&mut self) {
        if self.status == SendStatus::Success {
            self.status = SendStatus::Idle;
            self.status_message.clear();
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SendStatus::Sending
    }
}

/// Validate form fields and build the wire payload from the trimmed values.
///
/// # Errors
///
/// Returns [`ContactError::MissingFields`] if any field is blank and
/// [`ContactError::InvalidEmail`] if the address is malformed.
pub fn validate(form: &ContactForm) -> Result<ContactPayload, ContactError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(ContactPayload { from_name: name.to_owned(), from_email: email.to_owned(), message: message.to_owned() })
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot in
/// the domain with something on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
