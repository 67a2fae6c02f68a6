//! Toolset resolution engine.
//!
//! Turns a comma-separated list of toolset IDs (possibly containing aliases)
//! into a validated, deduplicated, scope-annotated set of concrete toolsets:
//!
//! ```text
//!   raw string → parse → validate → expand → ResolvedToolsets → scopes
//!                           │          │
//!                           └── ToolsetCatalog (static, read-only)
//! ```
//!
//! Each stage is a pure function of its input and the catalog. The catalog is
//! an explicit value handed to every stage; there is no global registry.

pub mod access;
pub mod builtin;
pub mod catalog;
pub mod discovery;
pub mod expand;
pub mod help;
pub mod metadata;
pub mod parse;
pub mod resolve;
pub mod scopes;
pub mod set;
pub mod validate;

pub use access::ScopeGrant;
pub use builtin::{builtin_catalog, DEFAULT_TOOLSETS};
pub use catalog::{ToolsetCatalog, ToolsetCatalogBuilder};
pub use discovery::{
    enabled_tools, is_tool_enabled, list_categories, tools_in_category, CategorySummary,
    ToolsetTools,
};
pub use expand::expand_toolsets;
pub use help::generate_toolsets_help;
pub use metadata::{ToolsetCategory, ToolsetKind, ToolsetMetadata};
pub use parse::{parse_toolsets, TOOLSET_DELIMITER};
pub use resolve::{
    Resolution, ResolutionSource, ResolutionWarning, ResolvedToolsets, ResolverOptions,
    ToolsetResolver, DEFAULT_CACHE_MAX_ENTRIES,
};
pub use scopes::required_scopes_for_toolsets;
pub use set::{contains_toolset, remove_toolset};
pub use validate::{unknown_toolsets, validate_toolsets};
