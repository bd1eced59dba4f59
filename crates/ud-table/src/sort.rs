use std::cmp::Ordering;
use std::str::FromStr;

use ud_core::{CoreError, User};

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Username,
    Email,
    PhoneNumber,
    FirstName,
    LastName,
    Role,
    CreatedAt,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::PhoneNumber => "phone",
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Role => "role",
            Self::CreatedAt => "created-at",
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::PhoneNumber),
            "first-name" => Ok(Self::FirstName),
            "last-name" => Ok(Self::LastName),
            "role" => Ok(Self::Role),
            "created-at" => Ok(Self::CreatedAt),
            _ => Err(CoreError::validation(format!(
                "Unknown sort key: {s} (expected username, email, phone, first-name, last-name, role, created-at)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Return a copy of `records` ordered by `key`.
///
/// The sort is stable: records comparing equal keep their relative order, so
/// flipping direction on the same column behaves predictably instead of
/// reshuffling ties. The input is never mutated.
pub fn sort(records: &[User], key: SortKey, direction: SortDirection) -> Vec<User> {
    let mut sorted = records.to_vec();

    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            // Equal stays Equal, so reversing preserves stability.
            SortDirection::Desc => ordering.reverse(),
        }
    });

    sorted
}

fn compare_by_key(a: &User, b: &User, key: SortKey) -> Ordering {
    match key {
        SortKey::Username => a.username.cmp(&b.username),
        SortKey::Email => a.email.cmp(&b.email),
        SortKey::PhoneNumber => a.phone_number.cmp(&b.phone_number),
        SortKey::FirstName => a.first_name.cmp(&b.first_name),
        SortKey::LastName => a.last_name.cmp(&b.last_name),
        SortKey::Role => a.role.as_str().cmp(b.role.as_str()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
