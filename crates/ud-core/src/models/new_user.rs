use crate::Role;

use serde::Serialize;

/// Payload for creating a user.
///
/// This is the one place a password exists client-side: it goes out on the
/// create request and is never echoed back, stored, logged, or exported.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
