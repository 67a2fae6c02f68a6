//! Set utilities over request-scoped toolset sequences.
//!
//! These never touch the catalog; "removal" only produces a new sequence.

use crate::types::ToolsetId;

pub fn contains_toolset(set: &[ToolsetId], id: &str) -> bool {
    set.iter().any(|member| member.as_str() == id)
}

/// Copy of `set` without the first occurrence of `id`. Removing an absent
/// ID returns an equal sequence.
pub fn remove_toolset(set: &[ToolsetId], id: &str) -> Vec<ToolsetId> {
    let mut out = set.to_vec();
    if let Some(pos) = out.iter().position(|member| member.as_str() == id) {
        out.remove(pos);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolsets::fixtures::ids;

    #[test]
    fn test_contains() {
        let set = ids(&["system", "wallet"]);
        assert!(contains_toolset(&set, "wallet"));
        assert!(!contains_toolset(&set, "Wallet"));
        assert!(!contains_toolset(&[], "wallet"));
    }

    #[test]
    fn test_remove_preserves_order() {
        let set = ids(&["system", "wallet", "indexer"]);
        assert_eq!(remove_toolset(&set, "wallet"), ["system", "indexer"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let set = ids(&["system"]);
        assert_eq!(remove_toolset(&set, "wallet"), set);
    }

    #[test]
    fn test_remove_twice_equals_once() {
        let set = ids(&["system", "wallet"]);
        let once = remove_toolset(&set, "wallet");
        assert_eq!(remove_toolset(&once, "wallet"), once);
    }
}
