use leptos_router::params::ParamsMap;

use super::*;

/// `:url` param as the router hands it over after matching `href`.
fn routed_param(href: &str) -> Option<String> {
    let segment = href.strip_prefix(VIEWER_PATH)?.strip_prefix('/')?;
    let mut params = ParamsMap::new();
    params.insert("url", segment.to_owned());
    params.get("url")
}

#[test]
fn resolve_target_url_defaults_without_inputs() {
    assert_eq!(resolve_target_url(None, None), DEFAULT_TARGET_URL);
}

#[test]
fn resolve_target_url_prefers_route_param() {
    assert_eq!(resolve_target_url(Some("https://example.com"), Some("https://other.test")), "https://example.com");
}

#[test]
fn resolve_target_url_uses_display_url_when_no_param() {
    assert_eq!(resolve_target_url(None, Some("https://other.test")), "https://other.test");
}

#[test]
fn resolve_target_url_treats_empty_values_as_absent() {
    assert_eq!(resolve_target_url(Some(""), Some("")), DEFAULT_TARGET_URL);
    assert_eq!(resolve_target_url(Some(""), Some("https://other.test")), "https://other.test");
}

#[test]
fn routed_encoded_segment_resolves_to_plain_url() {
    let param = routed_param("/responsive-viewer/https%3A%2F%2Fexample.com");
    assert_eq!(resolve_target_url(param.as_deref(), None), "https://example.com");
}

#[test]
fn routed_target_keeps_its_own_escapes() {
    let target = "https://example.com/search?q=100%25&x=a%20b";
    let param = routed_param(&viewer_href(target));
    assert_eq!(param.as_deref(), Some(target));
    assert_eq!(resolve_target_url(param.as_deref(), None), target);
}

#[test]
fn viewer_href_encodes_like_uri_component() {
    assert_eq!(
        viewer_href("https://demo.example.com/a b?x=1"),
        "/responsive-viewer/https%3A%2F%2Fdemo.example.com%2Fa%20b%3Fx%3D1"
    );
}

#[test]
fn viewer_href_round_trips_through_router() {
    let target = "https://demo.example.com/path?q=(1)";
    let param = routed_param(&viewer_href(target));
    assert_eq!(resolve_target_url(param.as_deref(), None), target);
}
