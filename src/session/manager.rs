//! Session validation and the cached identity of the current tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app calls `validate_session` on load; route guards and views then read
//! `is_authenticated`/`get_user` synchronously. Session state is two
//! independent signals: the user cached in per-tab storage and the
//! `auth_role` cookie set by the server. Nothing links them, so one can be
//! observed without the other after a partial failure or outside mutation.
//!
//! ERROR HANDLING
//! ==============
//! `validate_session` never returns an error. A rejected session (non-2xx,
//! or 2xx without a user) logs the tab out. A transport failure or an
//! unreadable body is logged and leaves cached state untouched, so a flaky
//! connection does not force a logout. The returned `ValidationOutcome`
//! tells callers which of the three happened.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::config::SessionConfig;
use super::cookies::parse_cookie;
use super::storage::{BrowserCookieJar, BrowserTabStorage, CookieJar, HistoryNavigator, Navigator, TabStorage};
use crate::net::api::{HttpSessionTransport, SessionTransport, TransportError};
use crate::net::types::{Role, User, UserPayload};

/// Why the server did not confirm a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Non-2xx response.
    Status(u16),
    /// 2xx response without a user.
    MissingUser,
}

/// Why the session state could not be determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndeterminateCause {
    Transport(TransportError),
    MalformedBody(String),
}

/// Result of one `validate_session` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The server confirmed the session; the user is now cached.
    Authenticated(User),
    /// The server rejected the session; the tab has been logged out.
    Unauthenticated(Rejection),
    /// No answer could be read; cached state was left as it was.
    Indeterminate(IndeterminateCause),
}

impl ValidationOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Sets the loading flag for its lifetime.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Handle to the tab's session state.
///
/// Clones share the loading flag and all collaborators.
pub struct SessionManager<T> {
    config: Arc<SessionConfig>,
    transport: Arc<T>,
    storage: Arc<dyn TabStorage>,
    cookies: Arc<dyn CookieJar>,
    navigator: Arc<dyn Navigator>,
    loading: Arc<AtomicBool>,
}

impl<T> Clone for SessionManager<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
            storage: Arc::clone(&self.storage),
            cookies: Arc::clone(&self.cookies),
            navigator: Arc::clone(&self.navigator),
            loading: Arc::clone(&self.loading),
        }
    }
}

impl SessionManager<HttpSessionTransport> {
    /// Manager wired to `fetch`, `sessionStorage`, `document.cookie` and
    /// `history`.
    pub fn browser(config: SessionConfig) -> Self {
        let transport = HttpSessionTransport::new(config.endpoint.clone());
        Self::new(
            config,
            transport,
            Arc::new(BrowserTabStorage),
            Arc::new(BrowserCookieJar),
            Arc::new(HistoryNavigator),
        )
    }
}

impl<T: SessionTransport> SessionManager<T> {
    pub fn new(
        config: SessionConfig,
        transport: T,
        storage: Arc<dyn TabStorage>,
        cookies: Arc<dyn CookieJar>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            storage,
            cookies,
            navigator,
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// True while a `validate_session` call is in flight.
    ///
    /// Informational only: overlapping calls are not serialized, and the
    /// first one to finish clears the flag.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Ask the server whether this tab still has a session.
    ///
    /// The loading flag is cleared on every exit, including when the returned
    /// future is dropped before completion.
    pub async fn validate_session(&self) -> ValidationOutcome {
        let _loading = LoadingGuard::start(&self.loading);

        let reply = match self.transport.fetch_session().await {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("error validating session: {e}");
                return ValidationOutcome::Indeterminate(IndeterminateCause::Transport(e));
            }
        };

        if !reply.is_success() {
            log::debug!("session rejected with status {}", reply.status);
            self.logout();
            return ValidationOutcome::Unauthenticated(Rejection::Status(reply.status));
        }

        match UserPayload::classify(&reply.body) {
            UserPayload::Present(user) => {
                log::debug!("session valid for {} ({})", user.username, user.role);
                self.store_user(&user);
                ValidationOutcome::Authenticated(user)
            }
            UserPayload::Absent => {
                self.logout();
                ValidationOutcome::Unauthenticated(Rejection::MissingUser)
            }
            UserPayload::Malformed(reason) => {
                log::error!("error validating session: {reason}");
                ValidationOutcome::Indeterminate(IndeterminateCause::MalformedBody(reason))
            }
        }
    }

    fn store_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set_item(&self.config.user_key, &raw),
            Err(e) => log::error!("could not serialize user {}: {e}", user.id),
        }
    }

    /// The cached user, or `None` if absent or unreadable.
    pub fn get_user(&self) -> Option<User> {
        let raw = self.storage.get_item(&self.config.user_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring malformed cached user: {e}");
                None
            }
        }
    }

    /// Raw value of the role cookie.
    pub fn get_auth_role(&self) -> Option<String> {
        let cookies = self.cookies.cookie_string();
        parse_cookie(&cookies, &self.config.role_cookie).map(str::to_owned)
    }

    /// The role cookie as a known `Role`; unrecognized values are `None`.
    pub fn auth_role(&self) -> Option<Role> {
        self.get_auth_role()?.parse().ok()
    }

    /// Whether a role cookie is present. For UI gating only: the cookie is
    /// readable and writable by script and proves nothing to the server.
    pub fn is_authenticated(&self) -> bool {
        self.get_auth_role().is_some()
    }

    /// Forget the cached user, expire the role cookie and go home.
    ///
    /// Whatever the current view is doing is neither awaited nor cancelled.
    pub fn logout(&self) {
        log::info!("logging out");
        self.storage.remove_item(&self.config.user_key);
        self.cookies.expire(&self.config.role_cookie, &self.config.cookie_path);
        self.navigator.replace(&self.config.home_path);
    }
}
