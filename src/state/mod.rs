//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused models.
//! Only the session is app-wide today.

pub mod session;
