//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Reactive state lives in `RwSignal`s provided via context. Each module
//! holds a plain snapshot type that views read from.

pub mod auth;
