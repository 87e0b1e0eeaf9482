//! Error types for the game shell.
//!
//! The simulation itself cannot fail; these cover configuration and terminal I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `GameConfig`
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config parsed but holds unusable values
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
