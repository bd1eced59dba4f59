pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::new_user::NewUser;
pub use models::role::Role;
pub use models::user::{User, assign_display_indices};
pub use models::user_update::UserUpdate;
pub use validation::FieldError;

#[cfg(test)]
mod tests;
