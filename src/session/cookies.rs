//! `document.cookie` string helpers.
//!
//! The parser splits on `;` without honoring quoting, so a cookie value that
//! itself contains `;` is cut short. Only the first `=` separates name from
//! value; later `=` characters stay in the value.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Expiry date used to delete a cookie from script.
pub const EPOCH_EXPIRY: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Find the value of the first cookie named exactly `name`.
pub fn parse_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| match entry.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            _ => None,
        })
}

/// Cookie assignment that deletes `name` at `path`.
pub fn expired_cookie(name: &str, path: &str) -> String {
    format!("{name}=; expires={EPOCH_EXPIRY}; path={path}")
}
