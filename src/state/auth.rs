//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager keeps its state in browser storage, which Leptos
//! cannot observe. The app copies it into a `RwSignal<AuthState>` around
//! each validation so identity-dependent views re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::SessionTransport;
use crate::net::types::{Role, User};
use crate::session::SessionManager;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl AuthState {
    /// Read the current session state without any I/O.
    pub fn snapshot<T: SessionTransport>(session: &SessionManager<T>) -> Self {
        Self {
            user: session.get_user(),
            role: session.auth_role(),
            loading: session.is_loading(),
        }
    }

    /// Loading state that keeps whatever identity is already known.
    #[must_use]
    pub fn begin_loading(mut self) -> Self {
        self.loading = true;
        self
    }
}
