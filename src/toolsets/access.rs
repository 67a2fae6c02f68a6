//! Scope gating - session grants checked against resolved toolsets.
//!
//! A session may only call tools from toolsets whose required scopes it
//! holds. Unknown and special IDs require nothing.

use super::catalog::ToolsetCatalog;
use super::resolve::ResolvedToolsets;
use super::scopes::required_scopes_for_toolsets;
use crate::types::{Error, Result, Scope};
use std::collections::BTreeSet;

/// Scopes granted to one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeGrant {
    scopes: BTreeSet<Scope>,
}

impl ScopeGrant {
    pub fn new() -> Self {
        Self {
            scopes: BTreeSet::new(),
        }
    }

    pub fn from_scopes<I, T>(scopes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scope>,
    {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn grant(&mut self, scope: impl Into<Scope>) {
        self.scopes.insert(scope.into());
    }

    pub fn revoke(&mut self, scope: &str) {
        self.scopes.remove(scope);
    }

    pub fn has(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn scopes(&self) -> &BTreeSet<Scope> {
        &self.scopes
    }

    /// Scopes required by `resolved` that this grant lacks.
    pub fn missing_for(&self, catalog: &ToolsetCatalog, resolved: &ResolvedToolsets) -> BTreeSet<Scope> {
        required_scopes_for_toolsets(catalog, resolved.as_slice())
            .into_iter()
            .filter(|scope| !self.scopes.contains(scope))
            .collect()
    }

    /// Fail with [`Error::MissingScopes`] unless every required scope is held.
    pub fn authorize(&self, catalog: &ToolsetCatalog, resolved: &ResolvedToolsets) -> Result<()> {
        let missing = self.missing_for(catalog, resolved);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingScopes(missing.into_iter().collect()))
        }
    }

    /// Toolsets from `resolved` this grant fully covers, order preserved.
    pub fn permitted(&self, catalog: &ToolsetCatalog, resolved: &ResolvedToolsets) -> ResolvedToolsets {
        resolved.retain_by(|id| {
            catalog
                .get(id.as_str())
                .map_or(true, |meta| meta.required_scopes.is_subset(&self.scopes))
        })
    }
}
