//! # Midnight Toolsets - toolset resolution for the Midnight MCP server
//!
//! The server exposes named, grouped tools to an agent. Which tools a session
//! sees is decided by the toolsets it enables, e.g. `"system, midnight-core,
//! all"`. This crate turns such a list into:
//! - a deduplicated, order-preserving set of concrete toolsets, with aliases
//!   (special toolsets) expanded recursively
//! - the union of authorization scopes those toolsets require
//! - a report of every unknown identifier, for strict configuration checks
//! - help text and category listings for operators and discovery tools
//!
//! ## Architecture
//!
//! ```text
//!   config / request ──► ToolsetResolver ──► Resolution { toolsets, scopes }
//!                              │                    │
//!                              ▼                    ▼
//!                        ToolsetCatalog      ScopeGrant / enabled_tools
//!                     (built once, shared)
//! ```
//!
//! Everything is synchronous and side-effect free apart from `tracing`
//! events; the catalog can be read from any number of threads.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod toolsets;
pub mod types;

// Internal utilities
pub mod observability;

pub use toolsets::{
    builtin_catalog, Resolution, ResolvedToolsets, ResolverOptions, ToolsetCatalog,
    ToolsetResolver,
};
pub use types::{Config, Error, Result};
