//! Identifier parser - raw comma-separated string → candidate IDs.

use crate::types::ToolsetId;

/// Separator between toolset identifiers in configuration and requests.
pub const TOOLSET_DELIMITER: char = ',';

/// Split `raw` on commas, trim each piece, drop empties.
///
/// Order and duplicates are preserved exactly as given. Empty or
/// whitespace-only input yields an empty sequence; falling back to the
/// defaults is the caller's decision.
pub fn parse_toolsets(raw: &str) -> Vec<ToolsetId> {
    raw.split(TOOLSET_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToolsetId::from)
        .collect()
}
