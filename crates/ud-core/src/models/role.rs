use crate::{CoreError, Result};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Access label attached to a user. Purely descriptive - nothing in the
/// console enforces permissions off it.
///
/// The server's enum is `admin | user | editor`, but records in the wild can
/// carry anything (older deployments, manual edits). Unrecognized values are
/// preserved verbatim in `Unknown` so a single odd record never breaks
/// deserialization of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Editor,
    Unknown(String),
}

impl Role {
    /// Wire form, exactly as stored by the server.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Editor => "editor",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable form for table cells and exports ("Admin", "Editor").
    /// Unknown roles display their raw value, first letter capitalized.
    pub fn display_name(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "user" => Self::User,
            "editor" => Self::Editor,
            _ => Self::Unknown(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Strict parse for operator input (CLI flags, form selects). Unlike the
/// serde path, typing an unrecognized role is an error, not an `Unknown`.
impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "editor" => Ok(Self::Editor),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
