//! Email delivery configuration parsed from environment variables.

use super::types::EmailError;

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_EMAIL_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub base_url: String,
    pub connect_timeout_secs: u64,
}

impl EmailConfig {
    /// Build typed email config from environment variables.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_PRIVATE_KEY`: sent as `accessToken`
    /// - `EMAILJS_API_BASE_URL`: default `https://api.emailjs.com`
    /// - `EMAILJS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::MissingConfig`] naming the first required
    /// variable that is unset or blank.
    pub fn from_env() -> Result<Self, EmailError> {
        let service_id = required_env("EMAILJS_SERVICE_ID")?;
        let template_id = required_env("EMAILJS_TEMPLATE_ID")?;
        let public_key = required_env("EMAILJS_PUBLIC_KEY")?;
        let private_key = std::env::var("EMAILJS_PRIVATE_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let base_url = std::env::var("EMAILJS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EMAILJS_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let connect_timeout_secs = env_parse_u64("EMAILJS_CONNECT_TIMEOUT_SECS", DEFAULT_EMAIL_CONNECT_TIMEOUT_SECS);

        Ok(Self { service_id, template_id, public_key, private_key, base_url, connect_timeout_secs })
    }

    /// Full URL of the send endpoint.
    #[must_use]
    pub fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.base_url)
    }
}

fn required_env(key: &str) -> Result<String, EmailError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| EmailError::MissingConfig { var: key.into() })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
