use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL,
    MAX_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the directory API (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
    /// Per-request timeout. Requests that exceed it fail as network errors;
    /// nothing is retried automatically.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_SERVER_URL),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::server(format!(
                "server.base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::server(format!(
                "server.timeout_secs must be 1-{}, got {}",
                MAX_REQUEST_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
