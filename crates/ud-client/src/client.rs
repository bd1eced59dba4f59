use crate::{ClientError, error::Result as ClientResult};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use ud_core::{NewUser, User, UserUpdate};

/// HTTP client for the user-directory REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with a per-request timeout. Timed-out requests fail
    /// as transport errors and are never retried automatically.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request against the API base URL
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request, map non-success statuses, and decode the body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("request failed");
            return Err(ClientError::from_status(
                status.as_u16(),
                extract_message(&body, fallback),
            ));
        }

        serde_json::from_str(&body).map_err(ClientError::from_json)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Fetch the entire user collection
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/api/users");
        self.execute(req).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> ClientResult<User> {
        let req = self.request(Method::GET, &format!("/api/users/{}", id));
        self.execute(req).await
    }

    /// Create a new user. Duplicate username/email comes back as a conflict.
    pub async fn create_user(&self, new_user: &NewUser) -> ClientResult<User> {
        let req = self.request(Method::POST, "/api/users").json(new_user);
        self.execute(req).await
    }

    /// Update a user. Unset fields are omitted from the body so the server
    /// keeps its stored values.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        let req = self
            .request(Method::PUT, &format!("/api/users/{}", id))
            .json(update);
        self.execute(req).await
    }

    /// Delete a user by ID
    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/users/{}", id));
        // Body is just a confirmation message
        let _: Value = self.execute(req).await?;
        Ok(())
    }
}

/// Pull the "message" field out of an error body, falling back to the raw
/// body (or the status reason when the body is empty).
fn extract_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return message.to_string();
    }

    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body.trim().to_string()
    }
}
