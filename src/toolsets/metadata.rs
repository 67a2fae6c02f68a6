//! Toolset metadata - category, kind, required scopes.

use crate::types::{Error, Scope, ToolName, ToolsetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Category
// =============================================================================

/// Grouping tag used by help output and discovery.
///
/// Variant order is the rendering order; aliases come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolsetCategory {
    Special,
    Midnight,
    Wallet,
    Contracts,
    System,
    Discovery,
}

impl ToolsetCategory {
    pub const ALL: [ToolsetCategory; 6] = [
        ToolsetCategory::Special,
        ToolsetCategory::Midnight,
        ToolsetCategory::Wallet,
        ToolsetCategory::Contracts,
        ToolsetCategory::System,
        ToolsetCategory::Discovery,
    ];

    /// Stable machine name (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolsetCategory::Special => "special",
            ToolsetCategory::Midnight => "midnight",
            ToolsetCategory::Wallet => "wallet",
            ToolsetCategory::Contracts => "contracts",
            ToolsetCategory::System => "system",
            ToolsetCategory::Discovery => "discovery",
        }
    }

    /// Heading used in help text.
    pub fn label(&self) -> &'static str {
        match self {
            ToolsetCategory::Special => "Special toolsets (aliases)",
            ToolsetCategory::Midnight => "Midnight network",
            ToolsetCategory::Wallet => "Wallet",
            ToolsetCategory::Contracts => "Smart contracts",
            ToolsetCategory::System => "System",
            ToolsetCategory::Discovery => "Discovery",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolsetCategory::Special => "Shortcuts that expand to other toolsets",
            ToolsetCategory::Midnight => "Chain state, blocks, transactions and indexed history",
            ToolsetCategory::Wallet => "Wallet addresses, balances and transfers",
            ToolsetCategory::Contracts => "Compact contract deployment and calls",
            ToolsetCategory::System => "Server health and configuration",
            ToolsetCategory::Discovery => "Tool categories and suggestions for agents",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl FromStr for ToolsetCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(ToolsetCategory::as_str).collect();
            Error::validation(format!(
                "Unknown toolset category '{}'. Available categories: {}",
                s,
                names.join(", ")
            ))
        })
    }
}

impl fmt::Display for ToolsetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Kind
// =============================================================================

/// Whether a toolset owns tools or stands for other toolsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolsetKind {
    Concrete { tools: Vec<ToolName> },
    Special { members: Vec<ToolsetId> },
}

// =============================================================================
// Metadata
// =============================================================================

/// Immutable catalog record for one toolset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsetMetadata {
    pub id: ToolsetId,
    pub display_name: String,
    pub description: String,
    pub category: ToolsetCategory,
    #[serde(default)]
    pub required_scopes: BTreeSet<Scope>,
    #[serde(flatten)]
    pub kind: ToolsetKind,
}

impl ToolsetMetadata {
    /// A concrete toolset with no tools or scopes yet.
    pub fn concrete(
        id: impl Into<ToolsetId>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        category: ToolsetCategory,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            category,
            required_scopes: BTreeSet::new(),
            kind: ToolsetKind::Concrete { tools: Vec::new() },
        }
    }

    /// An alias expanding to `members`, filed under the special category.
    pub fn special<I, T>(
        id: impl Into<ToolsetId>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        members: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ToolsetId>,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            category: ToolsetCategory::Special,
            required_scopes: BTreeSet::new(),
            kind: ToolsetKind::Special {
                members: members.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn with_scopes<I, T>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scope>,
    {
        self.required_scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Append tools. No-op on special toolsets, which never own tools.
    pub fn with_tools<I, T>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ToolName>,
    {
        if let ToolsetKind::Concrete { tools: existing } = &mut self.kind {
            existing.extend(tools.into_iter().map(Into::into));
        }
        self
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind, ToolsetKind::Special { .. })
    }

    pub fn is_concrete(&self) -> bool {
        matches!(self.kind, ToolsetKind::Concrete { .. })
    }

    /// Tools owned by this toolset; empty for specials.
    pub fn tools(&self) -> &[ToolName] {
        match &self.kind {
            ToolsetKind::Concrete { tools } => tools,
            ToolsetKind::Special { .. } => &[],
        }
    }

    /// Member IDs of a special toolset; empty for concretes.
    pub fn members(&self) -> &[ToolsetId] {
        match &self.kind {
            ToolsetKind::Special { members } => members,
            ToolsetKind::Concrete { .. } => &[],
        }
    }
}
