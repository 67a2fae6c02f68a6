//! Validator - reports every unknown identifier at once.

use super::catalog::ToolsetCatalog;
use crate::types::{Error, Result, ToolsetId};

/// Collect IDs absent from the catalog, in input order, without duplicates.
pub fn unknown_toolsets(catalog: &ToolsetCatalog, ids: &[ToolsetId]) -> Vec<ToolsetId> {
    let mut unknown: Vec<ToolsetId> = Vec::new();
    for id in ids {
        if !catalog.contains(id.as_str()) && !unknown.contains(id) {
            unknown.push(id.clone());
        }
    }
    unknown
}

/// Check `ids` against the catalog. Special IDs are valid input here.
///
/// Fails with [`Error::UnknownToolsets`] listing every unrecognized ID.
pub fn validate_toolsets(catalog: &ToolsetCatalog, ids: &[ToolsetId]) -> Result<()> {
    let unknown = unknown_toolsets(catalog, ids);
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::UnknownToolsets(unknown))
    }
}
