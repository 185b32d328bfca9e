//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Pages are only constructed once
//! the route guard admits the navigation.

pub mod login;
pub mod not_found;
pub mod section;
