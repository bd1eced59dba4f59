use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ud_config::ConfigError),

    #[error(transparent)]
    Core(#[from] ud_core::CoreError),

    #[error(transparent)]
    Client(#[from] ud_client::ClientError),

    #[error(transparent)]
    Export(#[from] ud_export::ExportError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
