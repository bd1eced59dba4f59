//! User entity - one person in the directory.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as returned by the directory API.
///
/// The record id is an opaque string assigned by the document store - it is
/// the only stable key for a record and the only thing delete/update calls
/// identify records by. The API never returns credential fields, and this
/// type has nowhere to put one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub role: Role,
    /// Hosted image URL, or empty. Upload happens against an external asset
    /// host before this field is ever submitted.
    #[serde(default, alias = "avatar")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 1-based position in the last unfiltered fetch, assigned client-side
    /// for display only. Not persisted, not stable across refreshes, and
    /// never a render key - use `id` for that.
    #[serde(skip)]
    pub display_index: u32,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Reassign `display_index` 1..N in the order the server returned the
/// records. Called on every authoritative refresh.
pub fn assign_display_indices(users: &mut [User]) {
    for (position, user) in users.iter_mut().enumerate() {
        user.display_index = position as u32 + 1;
    }
}
