//! Scope aggregation over a resolved toolset set.

use super::catalog::ToolsetCatalog;
use crate::types::{Scope, ToolsetId};
use std::collections::BTreeSet;

/// Union of required scopes across concrete toolsets in `ids`.
///
/// Expects already-expanded input: special and unknown IDs contribute
/// nothing and are skipped silently.
pub fn required_scopes_for_toolsets(catalog: &ToolsetCatalog, ids: &[ToolsetId]) -> BTreeSet<Scope> {
    ids.iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .filter(|meta| meta.is_concrete())
        .flat_map(|meta| meta.required_scopes.iter().cloned())
        .collect()
}
