use crate::{Client, error::Result as ClientResult};

use async_trait::async_trait;
use ud_core::{NewUser, User, UserUpdate};

/// Data-access seam between the table controller and the REST API.
///
/// The controller only ever talks to this trait; production wires in
/// [`Client`], tests wire in an in-memory double.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch_users(&self) -> ClientResult<Vec<User>>;

    async fn create_user(&self, new_user: &NewUser) -> ClientResult<User>;

    async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User>;

    async fn delete_user(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl UserStore for Client {
    async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        self.list_users().await
    }

    async fn create_user(&self, new_user: &NewUser) -> ClientResult<User> {
        Client::create_user(self, new_user).await
    }

    async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        Client::update_user(self, id, update).await
    }

    async fn delete_user(&self, id: &str) -> ClientResult<()> {
        Client::delete_user(self, id).await
    }
}
