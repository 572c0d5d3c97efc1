//! REST helpers for talking to the site's own server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so delivery failures
//! degrade to a status message. There is no client-side timeout; a hung
//! request leaves the caller in its sending state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactPayload;
#[cfg(feature = "hydrate")]
use super::types::ContactResponse;

/// Path of the contact relay endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("contact request failed: {status} ({detail})"),
        None => format!("contact request failed: {status}"),
    }
}

/// Deliver a contact message via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the server reports the message as not sent.
pub async fn send_contact_message(payload: &ContactPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<ContactResponse>().await.ok();
            let detail = body.as_ref().and_then(|b| b.error.as_deref());
            return Err(contact_failed_message(resp.status(), detail));
        }
        let body: ContactResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err(body.error.unwrap_or_else(|| "contact request failed".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
