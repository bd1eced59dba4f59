//! Client-side form validation.
//!
//! These checks gate create/edit submissions before anything touches the
//! network. They are UX, not authority: uniqueness of username/email is
//! decided solely by the server's response.

use crate::{NewUser, UserUpdate};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_PHONE_LEN: usize = 10;

/// One failed check, keyed by the form field it belongs to so a UI can show
/// it inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a create submission. Returns every failure at once so forms can
/// mark all offending fields in a single pass.
pub fn validate_new_user(user: &NewUser, confirm_password: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if user.username.trim().is_empty() {
        errors.push(FieldError::new("username", "Username is required."));
    }
    if !email_is_valid(&user.email) {
        errors.push(FieldError::new("email", "Invalid email address."));
    }
    if user.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters.",
        ));
    }
    if user.password != confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords don't match"));
    }
    if user.phone_number.len() < MIN_PHONE_LEN {
        errors.push(FieldError::new(
            "phoneNumber",
            "Phone number must be at least 10 digits.",
        ));
    }
    if user.first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", "First name is required."));
    }
    if user.last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required."));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate an edit submission. Only fields actually present are checked;
/// an empty update is rejected outright.
pub fn validate_user_update(update: &UserUpdate) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if update.is_empty() {
        errors.push(FieldError::new("form", "Nothing to update."));
        return Err(errors);
    }

    if let Some(ref username) = update.username
        && username.trim().is_empty()
    {
        errors.push(FieldError::new("username", "Username is required."));
    }
    if let Some(ref email) = update.email
        && !email_is_valid(email)
    {
        errors.push(FieldError::new("email", "Invalid email address."));
    }
    if let Some(ref password) = update.password
        && password.len() < MIN_PASSWORD_LEN
    {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters.",
        ));
    }
    if let Some(ref phone) = update.phone_number
        && phone.len() < MIN_PHONE_LEN
    {
        errors.push(FieldError::new(
            "phoneNumber",
            "Phone number must be at least 10 digits.",
        ));
    }
    if let Some(ref first_name) = update.first_name
        && first_name.trim().is_empty()
    {
        errors.push(FieldError::new("firstName", "First name is required."));
    }
    if let Some(ref last_name) = update.last_name
        && last_name.trim().is_empty()
    {
        errors.push(FieldError::new("lastName", "Last name is required."));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Syntactic email check: one `@` with a non-empty local part and a dotted
/// domain. Deliberately shallow - deliverability is not the client's problem.
pub fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
