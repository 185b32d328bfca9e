//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls behind the `AuthApi` seam and `types` defines the
//! request/response schema.

pub mod api;
pub mod types;
