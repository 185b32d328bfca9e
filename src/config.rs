//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so overrides are baked in with
//! `option_env!` when the crate is compiled.

pub const DEFAULT_API_BASE_URL: &str = "/api/v1";

const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST call, without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build config from `SQUADBOARD_API_BASE_URL` as seen by the compiler.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("SQUADBOARD_API_BASE_URL"))
    }

    /// Build config from an optional raw base URL. Blank values fall back to
    /// [`DEFAULT_API_BASE_URL`]; trailing slashes are trimmed.
    #[must_use]
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_base_url(None)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
