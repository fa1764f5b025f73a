use super::*;

#[test]
fn finds_role_among_other_cookies() {
    assert_eq!(parse_cookie("auth_role=admin; other=1", "auth_role"), Some("admin"));
}

#[test]
fn finds_role_after_other_cookies() {
    assert_eq!(parse_cookie("other=1;   auth_role=verified", "auth_role"), Some("verified"));
}

#[test]
fn missing_cookie_is_none() {
    assert_eq!(parse_cookie("other=1", "auth_role"), None);
    assert_eq!(parse_cookie("", "auth_role"), None);
}

#[test]
fn value_keeps_later_equals_signs() {
    assert_eq!(parse_cookie("auth_role=a=b", "auth_role"), Some("a=b"));
}

#[test]
fn name_must_match_exactly() {
    assert_eq!(parse_cookie("xauth_role=admin; auth_role_x=user", "auth_role"), None);
    assert_eq!(parse_cookie("Auth_Role=admin", "auth_role"), None);
}

#[test]
fn entry_without_equals_never_matches() {
    assert_eq!(parse_cookie("auth_role; other=1", "auth_role"), None);
}

#[test]
fn empty_value_is_present() {
    assert_eq!(parse_cookie("auth_role=", "auth_role"), Some(""));
}

#[test]
fn first_match_wins() {
    assert_eq!(parse_cookie("auth_role=user; auth_role=admin", "auth_role"), Some("user"));
}

#[test]
fn semicolon_in_value_truncates() {
    // Known limitation: `;` is always treated as an entry separator.
    assert_eq!(parse_cookie("auth_role=ad;min", "auth_role"), Some("ad"));
}

#[test]
fn expired_cookie_uses_epoch_and_path() {
    assert_eq!(
        expired_cookie("auth_role", "/"),
        "auth_role=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
    );
}
