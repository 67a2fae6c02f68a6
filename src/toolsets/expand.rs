//! Expansion engine - flattens special toolsets into concrete IDs.

use super::catalog::ToolsetCatalog;
use super::metadata::ToolsetKind;
use crate::types::ToolsetId;
use std::collections::HashSet;

/// Expand special toolsets depth-first, left to right.
///
/// The output has no duplicates and keeps first-encounter order. Unknown IDs
/// pass through unchanged (validation reports them). Cycles terminate: every
/// visited ID, special ones included, lands in `seen` and is skipped on
/// revisit. Uses an explicit stack, so depth is bounded by the catalog size
/// rather than the call stack.
pub fn expand_toolsets(catalog: &ToolsetCatalog, ids: &[ToolsetId]) -> Vec<ToolsetId> {
    let mut result: Vec<ToolsetId> = Vec::with_capacity(ids.len());
    let mut seen: HashSet<&str> = HashSet::with_capacity(ids.len());

    // Reversed so the leftmost input pops first.
    let mut stack: Vec<&ToolsetId> = ids.iter().rev().collect();

    while let Some(id) = stack.pop() {
        if !seen.insert(id.as_str()) {
            continue;
        }

        match catalog.get(id.as_str()).map(|meta| &meta.kind) {
            Some(ToolsetKind::Special { members }) => {
                stack.extend(members.iter().rev());
            }
            Some(ToolsetKind::Concrete { .. }) | None => {
                result.push(id.clone());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolsets::fixtures::{fixture_catalog, ids};

    #[test]
    fn test_concrete_passthrough() {
        let catalog = fixture_catalog();
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["wallet", "system"])),
            ["wallet", "system"]
        );
    }

    #[test]
    fn test_nested_special_depth_first() {
        let catalog = fixture_catalog();
        // all → [system, chain, wallet]; chain → [midnight-core, indexer]
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["all"])),
            ["system", "midnight-core", "indexer", "wallet"]
        );
    }

    #[test]
    fn test_special_expanded_before_next_input() {
        let catalog = fixture_catalog();
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["wallet", "chain", "system"])),
            ["wallet", "midnight-core", "indexer", "system"]
        );
    }

    #[test]
    fn test_duplicates_removed_first_wins() {
        let catalog = fixture_catalog();
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["indexer", "chain", "indexer"])),
            ["indexer", "midnight-core"]
        );
    }

    #[test]
    fn test_unknown_ids_pass_through() {
        let catalog = fixture_catalog();
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["bogus", "system", "bogus"])),
            ["bogus", "system"]
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let catalog = fixture_catalog();
        // cycle-a → [system, cycle-b]; cycle-b → [cycle-a, wallet]
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["cycle-a"])),
            ["system", "wallet"]
        );
        assert_eq!(
            expand_toolsets(&catalog, &ids(&["cycle-b"])),
            ["system", "wallet"]
        );
    }

    #[test]
    fn test_self_referencing_special() {
        let catalog = fixture_catalog();
        assert!(expand_toolsets(&catalog, &ids(&["ouroboros"])).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let catalog = fixture_catalog();
        assert!(expand_toolsets(&catalog, &[]).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let catalog = fixture_catalog();
        let once = expand_toolsets(&catalog, &ids(&["cycle-b", "all", "bogus"]));
        assert_eq!(expand_toolsets(&catalog, &once), once);
    }
}
