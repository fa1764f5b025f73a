use super::*;

fn alice() -> User {
    User {
        id: 7,
        account_id: 1234,
        username: "alice".to_owned(),
        role: Role::Moderator,
        discord_id: None,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Verified).unwrap(), "\"verified\"");
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}

#[test]
fn role_display_matches_wire_name() {
    assert_eq!(Role::Moderator.to_string(), "moderator");
    assert_eq!("user".parse::<Role>(), Ok(Role::User));
}

#[test]
fn role_parse_is_case_sensitive() {
    assert_eq!("Admin".parse::<Role>(), Err(UnknownRole("Admin".to_owned())));
}

#[test]
fn role_capabilities_follow_ordering() {
    assert!(!Role::User.uploads_without_review());
    assert!(Role::Verified.uploads_without_review());
    assert!(!Role::Verified.can_moderate());
    assert!(Role::Moderator.can_moderate());
    assert!(Role::Admin.can_moderate());
    assert!(!Role::Moderator.is_admin());
    assert!(Role::Admin.is_admin());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_missing_discord_id() {
    let user: User =
        serde_json::from_str(r#"{"id":7,"account_id":1234,"username":"alice","role":"moderator"}"#).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn user_keeps_discord_id() {
    let user: User = serde_json::from_str(
        r#"{"id":1,"account_id":-1,"username":"bob","role":"user","discord_id":998877}"#,
    )
    .unwrap();
    assert_eq!(user.discord_id, Some(998_877));
    assert_eq!(user.account_id, -1);
}

// =============================================================
// HttpReply
// =============================================================

#[test]
fn http_reply_success_range() {
    assert!(HttpReply::new(200, "").is_success());
    assert!(HttpReply::new(204, "").is_success());
    assert!(!HttpReply::new(199, "").is_success());
    assert!(!HttpReply::new(301, "").is_success());
    assert!(!HttpReply::new(401, "").is_success());
}

// =============================================================
// UserPayload::classify
// =============================================================

#[test]
fn classify_present_user() {
    let body = r#"{"status":200,"user":{"id":7,"account_id":1234,"username":"alice","role":"moderator","discord_id":null}}"#;
    assert_eq!(UserPayload::classify(body), UserPayload::Present(alice()));
}

#[test]
fn classify_missing_user_is_absent() {
    assert_eq!(UserPayload::classify(r#"{"status":200}"#), UserPayload::Absent);
}

#[test]
fn classify_falsy_user_is_absent() {
    for body in [
        r#"{"user":null}"#,
        r#"{"user":false}"#,
        r#"{"user":0}"#,
        r#"{"user":""}"#,
    ] {
        assert_eq!(UserPayload::classify(body), UserPayload::Absent, "{body}");
    }
}

#[test]
fn classify_invalid_json_is_malformed() {
    assert!(matches!(UserPayload::classify("<html>"), UserPayload::Malformed(_)));
}

#[test]
fn classify_non_object_is_malformed() {
    assert!(matches!(UserPayload::classify("null"), UserPayload::Malformed(_)));
    assert!(matches!(UserPayload::classify("[1,2]"), UserPayload::Malformed(_)));
}

#[test]
fn classify_wrong_user_shape_is_malformed() {
    let body = r#"{"user":{"id":"seven","username":"alice"}}"#;
    assert!(matches!(UserPayload::classify(body), UserPayload::Malformed(_)));
}

#[test]
fn classify_unknown_role_is_malformed() {
    let body = r#"{"user":{"id":1,"account_id":1,"username":"x","role":"owner"}}"#;
    assert!(matches!(UserPayload::classify(body), UserPayload::Malformed(_)));
}
