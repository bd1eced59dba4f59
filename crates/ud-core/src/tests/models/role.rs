use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Editor.as_str(), "editor");
    assert_eq!(Role::Unknown("moderator".to_string()).as_str(), "moderator");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert_eq!(Role::from_str("editor").unwrap(), Role::Editor);
    assert!(Role::from_str("moderator").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn test_role_display_name() {
    assert_eq!(Role::Admin.display_name(), "Admin");
    assert_eq!(Role::Editor.display_name(), "Editor");
    assert_eq!(
        Role::Unknown("moderator".to_string()).display_name(),
        "Moderator"
    );
    assert_eq!(Role::Unknown(String::new()).display_name(), "");
}

#[test]
fn test_role_deserializes_unrecognized_value_without_error() {
    let role: Role = serde_json::from_str("\"superuser\"").unwrap();
    assert_eq!(role, Role::Unknown("superuser".to_string()));
    assert!(!role.is_recognized());

    // Round-trips the raw value untouched.
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"superuser\"");
}

#[test]
fn test_role_deserializes_known_values() {
    let role: Role = serde_json::from_str("\"editor\"").unwrap();
    assert_eq!(role, Role::Editor);
    assert!(role.is_recognized());
}
