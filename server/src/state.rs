//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site keeps no server-side session data; the only shared resource is the
//! optional contact mailer.

use std::sync::Arc;

use crate::email::ContactMailer;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the mailer is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Contact mailer. `None` if email delivery is not configured.
    pub mailer: Option<Arc<dyn ContactMailer>>,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn ContactMailer>>) -> Self {
        Self { mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
