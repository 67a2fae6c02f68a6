//! Core types shared across the crate.
//!
//! - **IDs**: Strongly-typed identifiers (ToolsetId, ToolName, Scope)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for toolset selection and logging

mod config;
mod errors;
mod ids;

pub use config::{
    Config, ObservabilityConfig, ToolsetsConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_TOOLSETS,
    ENV_TOOLSETS_CACHE_MAX, ENV_TOOLSETS_FALLBACK, ENV_TOOLSETS_STRICT,
};
pub use errors::{Error, Result};
pub use ids::{Scope, ToolName, ToolsetId};
pub(crate) use ids::join_ids;
