use super::*;

// =============================================================
// MemoryTabStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryTabStorage::new();
    assert!(storage.is_empty());

    storage.set_item("user", "{}");
    assert_eq!(storage.get_item("user").as_deref(), Some("{}"));
    assert_eq!(storage.len(), 1);

    storage.remove_item("user");
    assert_eq!(storage.get_item("user"), None);
}

#[test]
fn memory_storage_overwrites() {
    let storage = MemoryTabStorage::new();
    storage.set_item("user", "a");
    storage.set_item("user", "b");
    assert_eq!(storage.get_item("user").as_deref(), Some("b"));
    assert_eq!(storage.len(), 1);
}

// =============================================================
// MemoryCookieJar
// =============================================================

#[test]
fn cookie_jar_round_trips_cookie_string() {
    let jar = MemoryCookieJar::from_cookie_string("auth_role=admin; other=1");
    assert_eq!(jar.cookie_string(), "auth_role=admin; other=1");
}

#[test]
fn cookie_jar_expire_removes_only_named_cookie() {
    let jar = MemoryCookieJar::from_cookie_string("auth_role=admin; other=1");
    jar.expire("auth_role", "/");
    assert_eq!(jar.cookie_string(), "other=1");
}

#[test]
fn cookie_jar_set_replaces_in_place() {
    let jar = MemoryCookieJar::new();
    jar.set("a", "1");
    jar.set("auth_role", "user");
    jar.set("a", "2");
    assert_eq!(jar.cookie_string(), "a=2; auth_role=user");
}

// =============================================================
// RecordingNavigator
// =============================================================

#[test]
fn navigator_records_in_order() {
    let nav = RecordingNavigator::new();
    nav.replace("/");
    nav.replace("/terms");
    assert_eq!(nav.replaced(), vec!["/".to_owned(), "/terms".to_owned()]);
}

// =============================================================
// Browser glue outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_types_are_inert_without_hydrate() {
    BrowserTabStorage.set_item("user", "{}");
    assert_eq!(BrowserTabStorage.get_item("user"), None);
    BrowserTabStorage.remove_item("user");

    assert_eq!(BrowserCookieJar.cookie_string(), "");
    BrowserCookieJar.expire("auth_role", "/");

    HistoryNavigator.replace("/");
}
