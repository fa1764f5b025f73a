//! Wire types for the `/auth/session` boundary.
//!
//! DESIGN
//! ======
//! `User` mirrors the server's user row exactly so the per-tab cache can hold
//! the same JSON the server sent. `UserPayload` replaces truthiness checks on
//! the response body with an explicit three-way classification.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account role. Ordered from least to most privileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Verified,
    Moderator,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Verified => "verified",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Verified users and above publish thumbnails without a review step.
    pub fn uploads_without_review(self) -> bool {
        self >= Self::Verified
    }

    /// Moderators and above may approve or reject pending uploads.
    pub fn can_moderate(self) -> bool {
        self >= Self::Moderator
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role string is not one of the four known names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "verified" => Ok(Self::Verified),
            "moderator" => Ok(Self::Moderator),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Identity snapshot returned by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub account_id: i64,
    pub username: String,
    pub role: Role,
    /// Linked Discord account, if any. Missing and `null` both map to `None`.
    #[serde(default)]
    pub discord_id: Option<i64>,
}

/// Raw HTTP result handed back by a session transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// What a successful session response says about the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserPayload {
    /// `user` is present and matches the `User` schema.
    Present(User),
    /// `user` is missing, `null`, `false`, `0` or `""`.
    Absent,
    /// The body is not a JSON object, or `user` is set but has the wrong shape.
    Malformed(String),
}

impl UserPayload {
    /// Classify a response body.
    pub fn classify(body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => return Self::Malformed(format!("invalid JSON: {e}")),
        };
        let Value::Object(mut map) = value else {
            return Self::Malformed("expected a JSON object".to_owned());
        };
        match map.remove("user") {
            None => Self::Absent,
            Some(user) if is_falsy(&user) => Self::Absent,
            Some(user) => match serde_json::from_value::<User>(user) {
                Ok(user) => Self::Present(user),
                Err(e) => Self::Malformed(format!("invalid user: {e}")),
            },
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
