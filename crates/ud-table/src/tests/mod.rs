
use crate::{Notifier, Severity};

use std::panic::Location;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use error_location::ErrorLocation;
use ud_client::{ClientError, ClientResult, UserStore};
use ud_core::{NewUser, Role, User, UserUpdate};

/// Minimal record fixture; tests override the fields they care about with
/// struct-update syntax.
pub(crate) fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        username: format!("user-{id}"),
        email: format!("{id}@example.com"),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        phone_number: "0911222333".to_string(),
        role: Role::User,
        avatar_url: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        display_index: 0,
    }
}

/// Notifier double that records every call.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) events: Mutex<Vec<(Severity, String)>>,
}

impl Notifier for &RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(severity, _)| *severity == Severity::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// In-memory UserStore double with the same uniqueness and not-found
/// behavior as the real API.
#[derive(Default)]
pub(crate) struct MemStore {
    pub(crate) users: Mutex<Vec<User>>,
    /// When set, every call fails with a 500-style API error.
    pub(crate) fail: Mutex<bool>,
    pub(crate) fetch_count: Mutex<usize>,
}

impl MemStore {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        *self.fail.lock().unwrap() = failing;
    }

    fn check_failure(&self) -> ClientResult<()> {
        if *self.fail.lock().unwrap() {
            Err(ClientError::Api {
                status: 500,
                message: "store down".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl UserStore for &MemStore {
    async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        self.check_failure()?;
        *self.fetch_count.lock().unwrap() += 1;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> ClientResult<User> {
        self.check_failure()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(ClientError::Conflict {
                message: "Username already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(ClientError::Conflict {
                message: "Email already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let created = User {
            id: format!("mem-{}", users.len() + 1),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            phone_number: new_user.phone_number.clone(),
            role: new_user.role.clone(),
            avatar_url: new_user.avatar_url.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            display_index: 0,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        self.check_failure()?;

        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Err(ClientError::NotFound {
                message: "User not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if let Some(ref username) = update.username {
            user.username = username.clone();
        }
        if let Some(ref email) = update.email {
            user.email = email.clone();
        }
        if let Some(ref first_name) = update.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(ref last_name) = update.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(ref phone) = update.phone_number {
            user.phone_number = phone.clone();
        }
        if let Some(ref role) = update.role {
            user.role = role.clone();
        }
        if let Some(ref avatar_url) = update.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.check_failure()?;

        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(ClientError::NotFound {
                message: "User not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
