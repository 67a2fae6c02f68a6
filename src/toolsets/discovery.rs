//! Discovery support - category listings and tool visibility.
//!
//! Backs the "list categories" / "list tools in category" capability and
//! decides which tool handlers a session may see.

use super::catalog::ToolsetCatalog;
use super::metadata::ToolsetCategory;
use super::resolve::ResolvedToolsets;
use crate::types::{ToolName, ToolsetId};
use serde::Serialize;
use std::collections::HashSet;

/// One category as seen by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: ToolsetCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub toolsets: Vec<ToolsetId>,
    pub tool_count: usize,
}

/// Tools exposed by one concrete toolset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolsetTools {
    pub id: ToolsetId,
    pub display_name: String,
    pub tools: Vec<ToolName>,
}

/// Every non-empty category, in category order.
pub fn list_categories(catalog: &ToolsetCatalog) -> Vec<CategorySummary> {
    catalog
        .by_category()
        .into_iter()
        .map(|(category, ids)| CategorySummary {
            category,
            label: category.label(),
            description: category.description(),
            tool_count: ids.iter().map(|id| catalog.tools_for(id.as_str()).len()).sum(),
            toolsets: ids.into_iter().cloned().collect(),
        })
        .collect()
}

/// Concrete toolsets in `category` with their tools. Special toolsets own no
/// tools and are left out.
pub fn tools_in_category(catalog: &ToolsetCatalog, category: ToolsetCategory) -> Vec<ToolsetTools> {
    catalog
        .iter()
        .filter(|meta| meta.category == category && meta.is_concrete())
        .map(|meta| ToolsetTools {
            id: meta.id.clone(),
            display_name: meta.display_name.clone(),
            tools: meta.tools().to_vec(),
        })
        .collect()
}

/// Tools visible to a session, in resolution order, without duplicates.
pub fn enabled_tools<'a>(catalog: &'a ToolsetCatalog, resolved: &ResolvedToolsets) -> Vec<&'a ToolName> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tools = Vec::new();
    for id in resolved {
        for tool in catalog.tools_for(id.as_str()) {
            if seen.insert(tool.as_str()) {
                tools.push(tool);
            }
        }
    }
    tools
}

/// Whether `tool` belongs to one of the resolved toolsets.
pub fn is_tool_enabled(catalog: &ToolsetCatalog, resolved: &ResolvedToolsets, tool: &str) -> bool {
    resolved
        .iter()
        .any(|id| catalog.tools_for(id.as_str()).iter().any(|t| t.as_str() == tool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolsets::fixtures::fixture_catalog;
    use crate::toolsets::{ResolverOptions, ToolsetResolver};
    use std::sync::Arc;

    #[test]
    fn test_list_categories() {
        let catalog = fixture_catalog();
        let categories = list_categories(&catalog);

        let order: Vec<ToolsetCategory> = categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                ToolsetCategory::Special,
                ToolsetCategory::Midnight,
                ToolsetCategory::Wallet,
                ToolsetCategory::System,
            ]
        );

        let midnight = &categories[1];
        assert_eq!(midnight.toolsets, ["midnight-core", "indexer"]);
        assert_eq!(midnight.tool_count, 3);
        assert_eq!(categories[0].tool_count, 0);
    }

    #[test]
    fn test_tools_in_category() {
        let catalog = fixture_catalog();

        let midnight = tools_in_category(&catalog, ToolsetCategory::Midnight);
        assert_eq!(midnight.len(), 2);
        assert_eq!(midnight[0].tools, ["get_block", "get_transaction"]);

        assert!(tools_in_category(&catalog, ToolsetCategory::Special).is_empty());
        assert!(tools_in_category(&catalog, ToolsetCategory::Contracts).is_empty());
    }

    #[test]
    fn test_enabled_tools_follow_resolution() {
        let catalog = Arc::new(fixture_catalog());
        let resolver = ToolsetResolver::new(Arc::clone(&catalog), ResolverOptions::default());
        let resolution = resolver.resolve("wallet, system").unwrap();

        let tools: Vec<&str> = enabled_tools(&catalog, &resolution.toolsets)
            .into_iter()
            .map(ToolName::as_str)
            .collect();
        assert_eq!(tools, ["get_wallet_balance", "send_funds", "health_check"]);

        assert!(is_tool_enabled(&catalog, &resolution.toolsets, "send_funds"));
        assert!(!is_tool_enabled(&catalog, &resolution.toolsets, "get_block"));
    }

    #[test]
    fn test_category_summary_json() {
        let catalog = fixture_catalog();
        let value = serde_json::to_value(list_categories(&catalog)).unwrap();
        assert_eq!(value[0]["category"], "special");
        assert_eq!(value[0]["label"], "Special toolsets (aliases)");
    }
}
