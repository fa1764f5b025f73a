//! Networking for the session endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchange and `types` defines the wire schema the
//! session manager validates against.

pub mod api;
pub mod types;
