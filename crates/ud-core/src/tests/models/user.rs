use crate::{Role, User, assign_display_indices};

use chrono::{TimeZone, Utc};

fn sample_user(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        username: "jdoe".to_string(),
        email: email.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "0911222333".to_string(),
        role: Role::User,
        avatar_url: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        display_index: 0,
    }
}

#[test]
fn test_user_full_name() {
    let user = sample_user("u1", "john@example.com");
    assert_eq!(user.full_name(), "John Doe");
}

#[test]
fn test_assign_display_indices_in_fetch_order() {
    let mut users = vec![
        sample_user("u1", "a@example.com"),
        sample_user("u2", "b@example.com"),
        sample_user("u3", "c@example.com"),
    ];

    assign_display_indices(&mut users);

    assert_eq!(users[0].display_index, 1);
    assert_eq!(users[1].display_index, 2);
    assert_eq!(users[2].display_index, 3);
}

#[test]
fn test_user_deserializes_camel_case_wire_format() {
    let json = r#"{
        "id": "64f0c2a1e4b0a1b2c3d4e5f6",
        "username": "jdoe",
        "email": "john@example.com",
        "firstName": "John",
        "lastName": "Doe",
        "phoneNumber": "0911222333",
        "role": "admin",
        "avatarUrl": "https://img.example.com/a.png",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, "64f0c2a1e4b0a1b2c3d4e5f6");
    assert_eq!(user.first_name, "John");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("https://img.example.com/a.png")
    );
    // Transient field, never on the wire.
    assert_eq!(user.display_index, 0);
}

#[test]
fn test_user_deserializes_document_store_aliases() {
    // Older deployments return the raw document shape: `_id` and `avatar`.
    let json = r#"{
        "_id": "64f0c2a1e4b0a1b2c3d4e5f6",
        "username": "jdoe",
        "email": "john@example.com",
        "firstName": "John",
        "lastName": "Doe",
        "phoneNumber": "0911222333",
        "role": "user",
        "avatar": "",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, "64f0c2a1e4b0a1b2c3d4e5f6");
    assert_eq!(user.avatar_url.as_deref(), Some(""));
}

#[test]
fn test_user_serialization_skips_display_index() {
    let mut user = sample_user("u1", "john@example.com");
    user.display_index = 7;

    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("display_index"));
    assert!(!json.contains("displayIndex"));
}
