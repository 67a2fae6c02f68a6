//! Help text for operators choosing toolsets.

use super::catalog::ToolsetCatalog;
use super::metadata::ToolsetKind;
use crate::types::join_ids;

const USAGE_LINE: &str =
    "Combine toolsets with commas; aliases expand to the toolsets listed under them.";

/// Render every toolset grouped by category, aliases first.
///
/// Output depends only on the catalog, so it is stable across runs and safe
/// to diff in documentation.
pub fn generate_toolsets_help(catalog: &ToolsetCatalog) -> String {
    let mut lines: Vec<String> = vec!["Available toolsets:".to_string()];

    for (category, ids) in catalog.by_category() {
        lines.push(String::new());
        lines.push(format!("{}:", category.label()));

        for meta in ids.into_iter().filter_map(|id| catalog.get(id.as_str())) {
            lines.push(format!(
                "  - {} ({}): {}",
                meta.id, meta.display_name, meta.description
            ));
            match &meta.kind {
                ToolsetKind::Special { members } => {
                    lines.push(format!("      expands to: {}", join_ids(members)));
                }
                ToolsetKind::Concrete { .. } if !meta.required_scopes.is_empty() => {
                    let scopes: Vec<_> = meta.required_scopes.iter().collect();
                    lines.push(format!("      scopes: {}", join_ids(&scopes)));
                }
                ToolsetKind::Concrete { .. } => {}
            }
        }
    }

    let aliases: Vec<_> = catalog.iter().filter(|m| m.is_special()).map(|m| &m.id).collect();

    lines.push(String::new());
    lines.push(format!("Default toolsets: {}", or_none(&join_ids(catalog.default_ids()))));
    lines.push(format!("Aliases: {}", or_none(&join_ids(&aliases))));
    lines.push(USAGE_LINE.to_string());
    lines.join("\n")
}

fn or_none(joined: &str) -> &str {
    if joined.is_empty() {
        "(none)"
    } else {
        joined
    }
}
