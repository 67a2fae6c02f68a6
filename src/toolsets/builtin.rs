//! Built-in Midnight toolset catalog.

use super::catalog::ToolsetCatalog;
use super::metadata::{ToolsetCategory, ToolsetMetadata};
use crate::types::Result;

pub const SYSTEM: &str = "system";
pub const DISCOVERY: &str = "discovery";
pub const MIDNIGHT_CORE: &str = "midnight-core";
pub const INDEXER: &str = "indexer";
pub const WALLET: &str = "wallet";
pub const CONTRACTS: &str = "contracts";

pub const ALIAS_MIDNIGHT: &str = "midnight";
pub const ALIAS_READONLY: &str = "readonly";
pub const ALIAS_ALL: &str = "all";

/// Enabled when no toolsets are configured.
pub const DEFAULT_TOOLSETS: [&str; 3] = [SYSTEM, DISCOVERY, MIDNIGHT_CORE];

/// Assemble the catalog served by the Midnight MCP server.
pub fn builtin_catalog() -> Result<ToolsetCatalog> {
    ToolsetCatalog::builder()
        .toolset(
            ToolsetMetadata::concrete(
                SYSTEM,
                "System",
                "Server health, status and effective configuration",
                ToolsetCategory::System,
            )
            .with_tools(["health_check", "get_server_status", "get_config"]),
        )?
        .toolset(
            ToolsetMetadata::concrete(
                DISCOVERY,
                "Discovery",
                "List tool categories and suggest tools for an intent",
                ToolsetCategory::Discovery,
            )
            .with_tools(["list_tool_categories", "list_category_tools", "suggest_tool"]),
        )?
        .toolset(
            ToolsetMetadata::concrete(
                MIDNIGHT_CORE,
                "Midnight Core",
                "Blocks, transactions and chain information",
                ToolsetCategory::Midnight,
            )
            .with_scopes(["midnight:read"])
            .with_tools(["get_chain_info", "get_block", "get_transaction"]),
        )?
        .toolset(
            ToolsetMetadata::concrete(
                INDEXER,
                "Indexer",
                "Indexed transaction history and contract events",
                ToolsetCategory::Midnight,
            )
            .with_scopes(["midnight:read", "indexer:read"])
            .with_tools(["query_indexer", "get_transaction_history", "get_contract_events"]),
        )?
        .toolset(
            ToolsetMetadata::concrete(
                WALLET,
                "Wallet",
                "Wallet addresses, balances and shielded transfers",
                ToolsetCategory::Wallet,
            )
            .with_scopes(["wallet:read", "wallet:write"])
            .with_tools([
                "get_wallet_address",
                "get_wallet_balance",
                "get_wallet_status",
                "send_funds",
            ]),
        )?
        .toolset(
            ToolsetMetadata::concrete(
                CONTRACTS,
                "Contracts",
                "Deploy Compact contracts, call circuits and read ledger state",
                ToolsetCategory::Contracts,
            )
            .with_scopes(["midnight:read", "contracts:write"])
            .with_tools(["deploy_contract", "call_contract", "get_contract_state"]),
        )?
        .toolset(ToolsetMetadata::special(
            ALIAS_MIDNIGHT,
            "Midnight",
            "Every Midnight network toolset",
            [MIDNIGHT_CORE, INDEXER, WALLET, CONTRACTS],
        ))?
        .toolset(ToolsetMetadata::special(
            ALIAS_READONLY,
            "Read-only",
            "Toolsets that never change chain or wallet state",
            [SYSTEM, DISCOVERY, MIDNIGHT_CORE, INDEXER],
        ))?
        .toolset(ToolsetMetadata::special(
            ALIAS_ALL,
            "All",
            "Every toolset",
            [SYSTEM, DISCOVERY, ALIAS_MIDNIGHT],
        ))?
        .defaults(DEFAULT_TOOLSETS)
        .build()
}
