//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing-page sections and the responsive viewer. Components read shared
//! state from Leptos context providers or own small local signals.

pub mod about;
pub mod contact;
pub mod device_button;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod responsive_viewer;
