//! Session tracking for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `manager` owns validation and logout, `storage` abstracts the browser
//! state it touches, `cookies` parses the role cookie, and `config` holds the
//! endpoint and key names.

pub mod config;
pub mod cookies;
pub mod manager;
pub mod storage;

pub use config::SessionConfig;
pub use manager::{IndeterminateCause, Rejection, SessionManager, ValidationOutcome};
