use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Workbook write error: {message} {location}")]
    Zip {
        message: String,
        location: ErrorLocation,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("IO error writing workbook: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl From<zip::result::ZipError> for ExportError {
    #[track_caller]
    fn from(err: zip::result::ZipError) -> Self {
        ExportError::Zip {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<std::io::Error> for ExportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        ExportError::Io {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
