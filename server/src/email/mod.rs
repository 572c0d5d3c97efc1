//! Email: transactional delivery for the contact relay.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. The route layer only
//! sees the [`ContactMailer`] trait, so handlers can be exercised with a
//! mock and the provider can change without touching routes.

pub mod config;
pub mod emailjs;
pub mod types;

use std::sync::Arc;

use config::EmailConfig;
pub use types::{ContactMailer, EmailError};

/// Build the configured mailer from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or the HTTP client
/// fails to build.
pub fn mailer_from_env() -> Result<Arc<emailjs::EmailJsClient>, EmailError> {
    let config = EmailConfig::from_env()?;
    Ok(Arc::new(emailjs::EmailJsClient::new(config)?))
}
