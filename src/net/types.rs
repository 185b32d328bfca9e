//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! These mirror the backend's login request and token schema. Only
//! `access_token` is required; the refresh fields are carried for callers that
//! want them but the session store ignores them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_owned(), password: password.to_owned() }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token to send on authenticated requests.
    pub access_token: String,
    /// Long-lived token for renewing `access_token`, when issued.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token scheme, `"bearer"` for the current backend.
    #[serde(default)]
    pub token_type: Option<String>,
}
