use crate::{ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, TableConfig};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for UD_CONFIG_DIR env var, else use ./.ud/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply UD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UD_CONFIG_DIR env var > ./.ud/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("UD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ud"))
    }

    /// Apply UD_* environment variable overrides on top of file values.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("UD_SERVER_URL") {
            self.server.base_url = url;
        }

        if let Ok(raw) = std::env::var("UD_PAGE_SIZE") {
            match raw.parse::<usize>() {
                Ok(size) => self.table.page_size = size,
                Err(_) => warn!("Ignoring non-numeric UD_PAGE_SIZE={:?}", raw),
            }
        }

        if let Ok(raw) = std::env::var("UD_LOG_LEVEL") {
            self.logging.set_level_from_str(&raw);
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.table.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (timeout {}s)",
            self.server.base_url, self.server.timeout_secs
        );
        info!(
            "  table: page_size={} choices={:?}",
            self.table.page_size, self.table.page_size_choices
        );
    }
}
