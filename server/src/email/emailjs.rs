//! EmailJS REST client.
//!
//! Thin HTTP wrapper for `POST /api/v1.0/email/send`. The request body is
//! built by the pure `build_request` so its shape is testable without a
//! network. EmailJS answers `200 OK` with a plain-text body on success.
//!
//! The request has a connect timeout but no overall timeout; a provider that
//! accepts the connection and never answers holds the relay request open.

use std::time::Duration;

use portfolio_client::net::types::ContactPayload;

use super::config::EmailConfig;
use super::types::{ContactMailer, EmailError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsClient {
    /// # Errors
    ///
    /// Returns [`EmailError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| EmailError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.config.service_id
    }
}

#[async_trait::async_trait]
impl ContactMailer for EmailJsClient {
    async fn send_contact(&self, payload: &ContactPayload) -> Result<(), EmailError> {
        let body = build_request(&self.config, payload);

        let response = self
            .http
            .post(self.config.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(EmailError::ApiResponse { status: status.as_u16(), body: text })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

fn build_request<'a>(config: &'a EmailConfig, payload: &'a ContactPayload) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: payload,
        access_token: config.private_key.as_deref(),
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
