//! REST helpers for the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: [`HttpAuthApi`] answers with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified by [`ApiError`] for diagnostics. The session store
//! collapses every variant into a single failed-login outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, TokenResponse};
use crate::config::ClientConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("login rejected: {status}")]
    Status { status: u16 },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Remote side of the login flow.
///
/// The browser runs a single-threaded executor, so futures are not required
/// to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;
}

/// [`AuthApi`] backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    login_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { login_url: config.login_url() }
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl AuthApi for HttpAuthApi {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.login_url)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !is_success(resp.status()) {
                return Err(ApiError::Status { status: resp.status() });
            }
            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            parse_token_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_token_response(body: &str) -> Result<TokenResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("{e}: {body}")))
}
