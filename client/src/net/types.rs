//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server's contact relay deserializes exactly these types, so field
//! names here are the wire names forwarded to the email template.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Message submitted through the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Body returned by `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
