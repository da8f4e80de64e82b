use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error on {}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Cannot spell number {digits}: {reason}")]
    Conversion { digits: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CleanError {
    pub fn at_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Path {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
