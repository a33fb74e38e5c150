// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors at the I/O edge of the crate (seed and config files).
///
/// Graph operations themselves never fail: unknown ids, clicks on locked
/// nodes, and clicks with simulation off are defined no-ops, not faults.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid TOML in {path}: {message}")]
    SeedToml { path: PathBuf, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    SeedJson { path: PathBuf, message: String },

    #[error("Unsupported seed format: {path} (expected .toml or .json)")]
    UnsupportedSeedFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TreeError>;

// Allow `?` on std::io::Error by converting with unknown path.
impl From<std::io::Error> for TreeError {
    fn from(source: std::io::Error) -> Self {
        TreeError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
