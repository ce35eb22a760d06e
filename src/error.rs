//! Error types for BhumiMap

use std::path::PathBuf;
use thiserror::Error;

/// BhumiMap error type
///
/// Every variant is terminal for a run: this is a batch tool, a failure
/// at any stage aborts the whole conversion and leaves prior output
/// untouched.
#[derive(Error, Debug)]
pub enum BhumiError {
    /// Point-cloud source does not exist
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    /// Source loaded but contains zero points
    #[error("point cloud is empty")]
    EmptyCloud,

    /// Source exists but the parser cannot make sense of it
    #[error("failed to load point cloud: {0}")]
    Load(String),

    /// Filesystem failure reading the source or writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unparseable config file or invalid parameter values
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for BhumiError {
    fn from(e: toml::de::Error) -> Self {
        BhumiError::Config(e.to_string())
    }
}

// serde_json failures at the export boundary are I/O in origin; the
// document itself is built from plain structs that always serialize.
impl From<serde_json::Error> for BhumiError {
    fn from(e: serde_json::Error) -> Self {
        BhumiError::Io(e.into())
    }
}

/// Result type alias for bhumi-map operations
pub type Result<T> = std::result::Result<T, BhumiError>;
