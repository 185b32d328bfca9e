use super::*;

#[test]
fn default_uses_api_v1_prefix() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.login_url(), "/api/v1/auth/login");
}

#[test]
fn from_base_url_trims_trailing_slashes() {
    let cfg = ClientConfig::from_base_url(Some("https://api.example.test/api/v1//"));
    assert_eq!(cfg.api_base_url, "https://api.example.test/api/v1");
    assert_eq!(cfg.login_url(), "https://api.example.test/api/v1/auth/login");
}

#[test]
fn from_base_url_blank_falls_back_to_default() {
    assert_eq!(ClientConfig::from_base_url(Some("   ")), ClientConfig::default());
    assert_eq!(ClientConfig::from_base_url(Some("")), ClientConfig::default());
}

#[test]
fn from_base_url_allows_empty_prefix_via_root() {
    // "/" trims down to an empty prefix, so calls go to the page origin root.
    let cfg = ClientConfig::from_base_url(Some("/"));
    assert_eq!(cfg.api_base_url, "");
    assert_eq!(cfg.login_url(), "/auth/login");
}
