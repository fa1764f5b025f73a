//! Browser state the session manager reads and writes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Per-tab storage, the cookie string and navigation are reached through
//! small traits so the manager never touches `web_sys` directly. The
//! `Browser*` types are the hydrate-gated `web_sys` glue; the `Memory*`
//! types hold the same state in process for tests and non-browser hosts.
//!
//! Browser calls that fail (no window, storage disabled, quota exceeded) are
//! logged and otherwise ignored, matching how the rest of the UI treats
//! storage as best-effort.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Key/value storage scoped to the current tab.
pub trait TabStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Script-visible cookies.
pub trait CookieJar: Send + Sync {
    /// All cookies as a `name=value; name=value` string.
    fn cookie_string(&self) -> String;
    /// Delete `name` by overwriting it with an expired cookie at `path`.
    fn expire(&self, name: &str, path: &str);
}

/// Client-side navigation.
pub trait Navigator: Send + Sync {
    /// Replace the current history entry with `path`.
    fn replace(&self, path: &str);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================
// Browser
// =============================================================

/// `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTabStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl TabStorage for BrowserTabStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                log::warn!("sessionStorage unavailable; `{key}` not saved");
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("sessionStorage write of `{key}` failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookieJar;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieJar for BrowserCookieJar {
    fn cookie_string(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn expire(&self, name: &str, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            if let Err(e) = doc.set_cookie(&super::cookies::expired_cookie(name, path)) {
                log::warn!("expiring cookie `{name}` failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, path);
        }
    }
}

/// Navigation through `history.replaceState`.
///
/// A synthetic `popstate` follows the replace so the router picks up the new
/// location without a page load.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryNavigator;

impl Navigator for HistoryNavigator {
    fn replace(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let replaced = window
                .history()
                .and_then(|history| history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)));
            if let Err(e) = replaced {
                log::warn!("history replace to {path} failed: {e:?}");
                return;
            }
            match web_sys::Event::new("popstate") {
                Ok(event) => {
                    let _ = window.dispatch_event(&event);
                }
                Err(e) => log::warn!("popstate dispatch failed: {e:?}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

// =============================================================
// In memory
// =============================================================

#[derive(Debug, Default)]
pub struct MemoryTabStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryTabStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TabStorage for MemoryTabStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        lock(&self.items).insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        lock(&self.items).remove(key);
    }
}

/// Cookie store keyed by name. Paths are not tracked.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Mutex<Vec<(String, String)>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a `document.cookie`-style string.
    pub fn from_cookie_string(raw: &str) -> Self {
        let cookies = raw
            .split(';')
            .map(str::trim)
            .filter_map(|entry| entry.split_once('='))
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        Self { cookies: Mutex::new(cookies) }
    }

    /// Set `name`, replacing an existing cookie of the same name in place.
    pub fn set(&self, name: &str, value: &str) {
        let mut cookies = lock(&self.cookies);
        match cookies.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value.to_owned(),
            None => cookies.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie_string(&self) -> String {
        lock(&self.cookies)
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn expire(&self, name: &str, _path: &str) {
        lock(&self.cookies).retain(|(existing, _)| existing != name);
    }
}

/// Navigator that records replace targets instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    replaced: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path passed to `replace`, oldest first.
    pub fn replaced(&self) -> Vec<String> {
        lock(&self.replaced).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        lock(&self.replaced).push(path.to_owned());
    }
}
