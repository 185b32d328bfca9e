//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and user-aware components to decide login
//! redirects and identity-dependent rendering. `App` constructs one store and
//! provides it through Leptos context as a [`SessionContext`].
//!
//! LIFECYCLE
//! =========
//! A fresh store is not loaded: the server render has no access to browser
//! storage, so the guard holds protected routes in a pending state instead of
//! redirecting. `App` runs [`SessionStore::load_user`] in the browser after
//! hydration, which marks the store loaded and lets the guard decide.
//!
//! CONCURRENCY
//! ===========
//! Login is split into an awaited request and a synchronous commit
//! ([`SessionStore::apply_login`]). Nothing is mutated before the request
//! resolves, so a failed login leaves the previous session intact. Overlapping
//! logins commit in completion order; the last one wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::RwSignal;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginRequest, TokenResponse};
use crate::storage::{BrowserStorage, KeyValueStore, keys};

/// Username used when a stored token has no stored username alongside it.
pub const FALLBACK_USERNAME: &str = "User";

/// Reactive handle to the app-wide session store.
pub type SessionContext = RwSignal<SessionStore<BrowserStorage>>;

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
}

impl User {
    #[must_use]
    pub fn new(username: &str) -> Self {
        Self { username: username.to_owned() }
    }
}

/// What the route guard knows about the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// Persisted state has not been read yet.
    Loading,
    Anonymous,
    SignedIn,
}

impl From<&Session> for AuthStatus {
    fn from(session: &Session) -> Self {
        if session.is_authenticated() { Self::SignedIn } else { Self::Anonymous }
    }
}

/// Current identity and bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Navigation is admitted to protected routes only when a user is known.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Session state plus the durable storage its token is mirrored into.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
    loaded: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an unloaded store, picking up a previously persisted token. An
    /// empty stored token counts as none. The user stays unknown until
    /// [`Self::load_user`] or a login.
    pub fn new(storage: S) -> Self {
        let token = read_non_empty(&storage, keys::ACCESS_TOKEN);
        Self { session: Session { user: None, token }, storage, loaded: false }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.user().map(|u| u.username.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether persisted state has been read via [`Self::load_user`], or made
    /// irrelevant by a login or logout.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn status(&self) -> AuthStatus {
        if self.loaded { AuthStatus::from(&self.session) } else { AuthStatus::Loading }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the in-memory user. Nothing is persisted.
    pub fn set_user(&mut self, user: Option<User>) {
        self.session.user = user;
    }

    /// Replace the token and persist it under `access_token`.
    pub fn set_token(&mut self, token: &str) {
        self.storage.set(keys::ACCESS_TOKEN, token);
        self.session.token = Some(token.to_owned());
    }

    /// Log in against `api` and commit the outcome.
    ///
    /// Returns `true` on success. Every failure cause yields `false` and a
    /// logged warning, with the session left as it was.
    ///
    /// UI code cannot hold the session signal across the await, so the login
    /// page awaits [`AuthApi::login`] itself and commits through
    /// [`Self::apply_login`].
    pub async fn login<A: AuthApi>(&mut self, api: &A, username: &str, password: &str) -> bool {
        let outcome = api.login(&LoginRequest::new(username, password)).await;
        self.apply_login(username, outcome)
    }

    /// Commit a resolved login request. The user is taken from `username`,
    /// not from the server response.
    pub fn apply_login(&mut self, username: &str, outcome: Result<TokenResponse, ApiError>) -> bool {
        match outcome {
            Ok(token) => {
                self.set_token(&token.access_token);
                self.set_user(Some(User::new(username)));
                self.loaded = true;
                true
            }
            Err(err) => {
                leptos::logging::warn!("login failed: user={username} err={err}");
                false
            }
        }
    }

    /// Forget the user and token, including the persisted token.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove(keys::ACCESS_TOKEN);
        self.loaded = true;
    }

    /// Rebuild the user from storage after a page load.
    ///
    /// Presence of a token is taken as a valid session; it is not checked with
    /// the backend. The name comes from the `username` key, which this crate
    /// never writes, so a token on its own yields [`FALLBACK_USERNAME`]. An
    /// empty stored name also falls back. Always marks the store loaded.
    pub fn load_user(&mut self) {
        self.loaded = true;
        if self.session.token.is_none() {
            return;
        }
        let username =
            read_non_empty(&self.storage, keys::USERNAME).unwrap_or_else(|| FALLBACK_USERNAME.to_owned());
        self.set_user(Some(User { username }));
    }
}

fn read_non_empty<S: KeyValueStore>(storage: &S, key: &str) -> Option<String> {
    storage.get(key).filter(|value| !value.is_empty())
}
