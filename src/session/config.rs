//! Session endpoint, storage key and cookie names.

pub const DEFAULT_SESSION_ENDPOINT: &str = "/auth/session";
pub const DEFAULT_USER_KEY: &str = "user";
pub const DEFAULT_ROLE_COOKIE: &str = "auth_role";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_HOME_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// URL of the session validation endpoint.
    pub endpoint: String,
    /// Per-tab storage key holding the serialized user.
    pub user_key: String,
    /// Cookie carrying the role name.
    pub role_cookie: String,
    /// Path used when expiring the role cookie.
    pub cookie_path: String,
    /// Where logout sends the user.
    pub home_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SESSION_ENDPOINT.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
            role_cookie: DEFAULT_ROLE_COOKIE.to_owned(),
            cookie_path: DEFAULT_COOKIE_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
