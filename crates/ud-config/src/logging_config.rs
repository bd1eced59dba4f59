use crate::LogLevel;

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Optional log file. None = stderr only.
    pub file: Option<PathBuf>,
    /// Colored output when logging to a TTY
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(LevelFilter::Info),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn set_level_from_str(&mut self, raw: &str) {
        // FromStr is infallible, falling back to Info.
        self.level = LogLevel::from_str(raw).unwrap();
    }
}
