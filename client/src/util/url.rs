//! Viewer URL helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer route carries its target as a single percent-encoded path
//! segment (`/responsive-viewer/https%3A%2F%2Fexample.com`). The router
//! unescapes params when it matches, so the `:url` value handed to
//! [`resolve_target_url`] is already the URL to embed and must not be
//! decoded again.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::state::viewer::DEFAULT_TARGET_URL;

/// Base path of the viewer route.
pub const VIEWER_PATH: &str = "/responsive-viewer";

/// Characters left untouched when encoding a URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resolve the URL to embed: the router-decoded `:url` param wins, then the
/// caller-supplied URL, then [`DEFAULT_TARGET_URL`]. Empty values count as
/// absent.
#[must_use]
pub fn resolve_target_url(route_param: Option<&str>, display_url: Option<&str>) -> String {
    route_param
        .filter(|url| !url.is_empty())
        .or_else(|| display_url.filter(|url| !url.is_empty()))
        .unwrap_or(DEFAULT_TARGET_URL)
        .to_owned()
}

/// Link that opens `target` inside the viewer.
#[must_use]
pub fn viewer_href(target: &str) -> String {
    format!("{VIEWER_PATH}/{}", utf8_percent_encode(target, COMPONENT))
}
