use ud_core::{Role, User};

/// Compute the subset of `records` matching a free-text query and an
/// optional exact role.
///
/// A record matches the text when any of email, username, first name, last
/// name, or phone number contains `search_text` case-insensitively; an empty
/// query matches everything. The role match is exact (no folding - roles are
/// a closed enum on the wire). Final match is the AND of both. The input is
/// never mutated and relative order is preserved.
pub fn filter(records: &[User], search_text: &str, role_filter: Option<&Role>) -> Vec<User> {
    let needle = search_text.to_lowercase();

    records
        .iter()
        .filter(|user| matches_search(user, &needle) && matches_role(user, role_filter))
        .cloned()
        .collect()
}

fn matches_search(user: &User, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        &user.email,
        &user.username,
        &user.first_name,
        &user.last_name,
        &user.phone_number,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_role(user: &User, role_filter: Option<&Role>) -> bool {
    match role_filter {
        Some(role) => user.role == *role,
        None => true,
    }
}
