//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts one Leptos route per [`AppRoute`] and asks [`guard`] before
//! constructing any page view; unmatched paths go through [`navigate`].
//! Keeping the decision here, free of signals and DOM access, lets it be
//! tested without a browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::AuthStatus;

/// Whether a route is open to anonymous visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
}

/// Every path the client knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Dashboard,
    Teams,
    Players,
    Competitions,
}

/// All routes in declaration order.
pub const ROUTES: [AppRoute; 6] = [
    AppRoute::Root,
    AppRoute::Login,
    AppRoute::Dashboard,
    AppRoute::Teams,
    AppRoute::Players,
    AppRoute::Competitions,
];

impl AppRoute {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Teams => "/teams",
            Self::Players => "/players",
            Self::Competitions => "/competitions",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Teams => "Teams",
            Self::Players => "Players",
            Self::Competitions => "Competitions",
        }
    }

    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Root | Self::Login => Access::Public,
            Self::Dashboard | Self::Teams | Self::Players | Self::Competitions => Access::RequiresAuth,
        }
    }

    /// Route this one forwards to instead of rendering a view.
    #[must_use]
    pub const fn redirect(self) -> Option<AppRoute> {
        match self {
            Self::Root => Some(Self::Dashboard),
            _ => None,
        }
    }
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested route.
    Proceed(AppRoute),
    /// Replace the location with another route.
    Redirect(AppRoute),
    /// Protected route requested before the session was loaded; decide later.
    Pending,
    /// No route matches the path.
    NotFound,
}

/// Look up a path in [`ROUTES`]. A single trailing slash is ignored.
#[must_use]
pub fn resolve(path: &str) -> Option<AppRoute> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    ROUTES.into_iter().find(|route| route.path() == path)
}

/// Decide whether navigation to `to` may proceed.
///
/// Redirecting routes are followed first, so `/` without a session lands on
/// `/login` directly. Protected destinations stay [`Navigation::Pending`]
/// while the session is still loading.
#[must_use]
pub fn guard(to: AppRoute, status: AuthStatus) -> Navigation {
    let destination = to.redirect().unwrap_or(to);
    if destination.access() == Access::RequiresAuth {
        match status {
            AuthStatus::Loading => return Navigation::Pending,
            AuthStatus::Anonymous => return Navigation::Redirect(AppRoute::Login),
            AuthStatus::SignedIn => {}
        }
    }
    if destination == to {
        Navigation::Proceed(to)
    } else {
        Navigation::Redirect(destination)
    }
}

/// Resolve `to` and apply [`guard`] against the current session status.
#[must_use]
pub fn navigate(to: &str, status: AuthStatus) -> Navigation {
    match resolve(to) {
        Some(route) => guard(route, status),
        None => Navigation::NotFound,
    }
}

/// Authenticated sections shown in the navigation bar.
pub fn nav_sections() -> impl Iterator<Item = AppRoute> {
    ROUTES
        .into_iter()
        .filter(|route| route.access() == Access::RequiresAuth && route.redirect().is_none())
}
