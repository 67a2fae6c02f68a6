//! Resolution integration tests - built-in catalog, config → resolver → gating.

use midnight_toolsets::toolsets::{
    builtin_catalog, enabled_tools, expand_toolsets, generate_toolsets_help, is_tool_enabled,
    list_categories, parse_toolsets, required_scopes_for_toolsets, validate_toolsets,
    ResolutionSource, ScopeGrant, ToolsetCategory,
};
use midnight_toolsets::types::{Config, ENV_TOOLSETS, ENV_TOOLSETS_CACHE_MAX, ENV_TOOLSETS_STRICT};
use midnight_toolsets::{Error, ToolsetResolver};
use std::sync::Arc;

fn configured(pairs: &[(&str, &str)]) -> (Config, ToolsetResolver) {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .unwrap();

    let catalog = Arc::new(builtin_catalog().unwrap());
    let resolver = ToolsetResolver::new(catalog, config.toolsets.resolver_options());
    (config, resolver)
}

fn resolver_from(pairs: &[(&str, &str)]) -> ToolsetResolver {
    configured(pairs).1
}

#[test]
fn test_example_request_string() {
    let resolver = resolver_from(&[]);
    let resolution = resolver.resolve("system, midnight-core, all").unwrap();

    assert_eq!(
        resolution.toolsets.as_slice(),
        ["system", "midnight-core", "discovery", "indexer", "wallet", "contracts"]
    );
    let scopes: Vec<&str> = resolution.scopes.iter().map(|s| s.as_str()).collect();
    assert_eq!(
        scopes,
        ["contracts:write", "indexer:read", "midnight:read", "wallet:read", "wallet:write"]
    );
}

#[test]
fn test_unset_config_uses_defaults() {
    let resolver = resolver_from(&[]);
    let resolution = resolver.resolve("").unwrap();

    assert_eq!(resolution.source, ResolutionSource::Defaults);
    assert_eq!(
        resolution.toolsets.as_slice(),
        ["system", "discovery", "midnight-core"]
    );
}

#[test]
fn test_strict_config_rejects_typos() {
    let resolver = resolver_from(&[(ENV_TOOLSETS_STRICT, "true")]);
    let err = resolver.resolve("system, walet, midnight-core, indexr").unwrap_err();

    assert!(matches!(err, Error::UnknownToolsets(_)));
    assert_eq!(err.to_string(), "unknown toolsets: walet, indexr");
}

#[test]
fn test_configured_toolsets_flow_through() {
    let (config, resolver) = configured(&[(ENV_TOOLSETS, " readonly ")]);
    let resolution = resolver.resolve(config.toolsets.raw()).unwrap();

    assert_eq!(
        resolution.toolsets.as_slice(),
        ["system", "discovery", "midnight-core", "indexer"]
    );
    assert!(!resolution.toolsets.contains("wallet"));
}

#[test]
fn test_validate_before_expand_accepts_aliases() {
    let catalog = builtin_catalog().unwrap();
    let requested = parse_toolsets("all, midnight, readonly");

    assert!(validate_toolsets(&catalog, &requested).is_ok());
    let expanded = expand_toolsets(&catalog, &requested);
    assert!(expanded.iter().all(|id| !catalog.is_special(id.as_str())));
    assert_eq!(expanded.len(), 6);
}

#[test]
fn test_scopes_gate_wallet_tools() {
    let catalog = Arc::new(builtin_catalog().unwrap());
    let resolver = ToolsetResolver::new(Arc::clone(&catalog), Default::default());
    let resolution = resolver.resolve("midnight").unwrap();

    let reader = ScopeGrant::from_scopes(["midnight:read", "indexer:read"]);
    assert!(reader.authorize(&catalog, &resolution.toolsets).is_err());

    let permitted = reader.permitted(&catalog, &resolution.toolsets);
    assert_eq!(permitted.as_slice(), ["midnight-core", "indexer"]);
    assert!(is_tool_enabled(&catalog, &permitted, "get_block"));
    assert!(!is_tool_enabled(&catalog, &permitted, "send_funds"));

    let tools = enabled_tools(&catalog, &permitted);
    assert_eq!(tools.len(), 6);
}

#[test]
fn test_scope_union_matches_resolution() {
    let catalog = builtin_catalog().unwrap();
    let expanded = expand_toolsets(&catalog, &parse_toolsets("wallet, contracts"));
    let scopes = required_scopes_for_toolsets(&catalog, &expanded);

    assert_eq!(scopes.len(), 4);
    assert!(scopes.contains("midnight:read"));
}

#[test]
fn test_help_lists_aliases_first() {
    let catalog = builtin_catalog().unwrap();
    let help = generate_toolsets_help(&catalog);

    let special = help.find("Special toolsets (aliases):").unwrap();
    let midnight = help.find("Midnight network:").unwrap();
    assert!(special < midnight);
    assert!(help.contains("  - all (All): Every toolset\n      expands to: system, discovery, midnight"));
    assert!(help.contains("Default toolsets: system, discovery, midnight-core"));
    assert!(help.contains("Aliases: midnight, readonly, all"));
    assert_eq!(help, generate_toolsets_help(&catalog));
}

#[test]
fn test_discovery_categories() {
    let catalog = builtin_catalog().unwrap();
    let categories = list_categories(&catalog);

    assert_eq!(categories.len(), ToolsetCategory::ALL.len());
    let total_tools: usize = categories.iter().map(|c| c.tool_count).sum();
    assert_eq!(total_tools, 19);
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = Arc::new(resolver_from(&[]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || resolver.resolve("all").unwrap().toolsets.len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
    assert_eq!(resolver.cache_len(), 1);
}

#[test]
fn test_cache_stays_bounded_under_concurrent_distinct_inputs() {
    let resolver = Arc::new(resolver_from(&[(ENV_TOOLSETS_CACHE_MAX, "32")]));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || {
                for i in 0..2_000 {
                    resolver.resolve(&format!("system, unknown-{t}-{i}")).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(resolver.cache_len() <= 32);
    assert!(resolver.cache_len() > 0);
}
