//! Email delivery types: errors and the mailer trait.

use portfolio_client::net::types::ContactPayload;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by email configuration and delivery.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },
}

// =============================================================================
// MAILER TRAIT
// =============================================================================

/// Provider-neutral async trait for delivering contact messages. Enables
/// mocking in tests.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// Deliver one contact message.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] if the request fails or the provider rejects it.
    async fn send_contact(&self, payload: &ContactPayload) -> Result<(), EmailError>;
}
