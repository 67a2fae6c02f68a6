//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context. Expansion and scope aggregation never
//! produce errors; only validation, catalog construction, scope gating and
//! configuration loading do.

use super::ids::{join_ids, Scope, ToolsetId};
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for toolset resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more identifiers are not in the catalog. Carries every unknown
    /// ID in input order, without duplicates.
    #[error("unknown toolsets: {}", join_ids(.0))]
    UnknownToolsets(Vec<ToolsetId>),

    /// Two catalog entries share an ID.
    #[error("duplicate toolset id: {0}")]
    DuplicateToolset(ToolsetId),

    /// The session lacks scopes required by the resolved toolsets.
    #[error("missing required scopes: {}", join_ids(.0))]
    MissingScopes(Vec<Scope>),

    /// Malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The offending IDs if this is an `UnknownToolsets` error.
    pub fn unknown_toolsets(&self) -> Option<&[ToolsetId]> {
        match self {
            Error::UnknownToolsets(ids) => Some(ids),
            _ => None,
        }
    }
}
