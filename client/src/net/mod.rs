//! Networking modules for the site's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls from the browser and `types` defines the shared
//! wire schema used by both the client and the server relay.

pub mod api;
pub mod types;
