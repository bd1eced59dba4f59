mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod table_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use table_config::TableConfig;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_PAGE_SIZE_CHOICES: [usize; 3] = [5, 10, 15];
const MIN_PAGE_SIZE: usize = 1;
const MAX_PAGE_SIZE: usize = 100;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";

#[cfg(test)]
mod tests;
