//! Error types for trogon-env

use std::num::ParseIntError;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, EnvError>;

/// Failures surfaced by the strict accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Unset, set to the empty string, or not valid Unicode.
    #[error("{key} not set in env")]
    MissingKey { key: String },

    #[error("{key} is not an integer: {raw:?}")]
    InvalidInt {
        key: String,
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

impl EnvError {
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } | Self::InvalidInt { key, .. } => key,
        }
    }
}
