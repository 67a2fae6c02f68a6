//! Toolset catalog - immutable ID → metadata mapping.
//!
//! Lookups never fail: an unknown ID is `None`/`false`, not an error.
//! Reporting unknown IDs is the validator's job.

use super::metadata::{ToolsetCategory, ToolsetMetadata};
use crate::types::{join_ids, Error, Result, ToolName, ToolsetId};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Catalog
// =============================================================================

/// Read-only toolset catalog. Build once with [`ToolsetCatalogBuilder`],
/// then share (e.g. behind an `Arc`) across request handlers.
#[derive(Debug, Clone)]
pub struct ToolsetCatalog {
    entries: HashMap<ToolsetId, ToolsetMetadata>,
    /// Registration order, used for every listing so output is deterministic.
    order: Vec<ToolsetId>,
    defaults: Vec<ToolsetId>,
}

impl ToolsetCatalog {
    pub fn builder() -> ToolsetCatalogBuilder {
        ToolsetCatalogBuilder::default()
    }

    /// Metadata for `id`, if registered.
    pub fn get(&self, id: &str) -> Option<&ToolsetMetadata> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All registered IDs, concrete and special, in registration order.
    pub fn available_ids(&self) -> &[ToolsetId] {
        &self.order
    }

    /// Toolsets enabled when the caller names none.
    pub fn default_ids(&self) -> &[ToolsetId] {
        &self.defaults
    }

    /// IDs grouped by category. Categories in enum order, IDs in
    /// registration order within each category.
    pub fn by_category(&self) -> BTreeMap<ToolsetCategory, Vec<&ToolsetId>> {
        let mut grouped: BTreeMap<ToolsetCategory, Vec<&ToolsetId>> = BTreeMap::new();
        for meta in self.iter() {
            grouped.entry(meta.category).or_default().push(&meta.id);
        }
        grouped
    }

    /// True only for registered special (alias) toolsets.
    pub fn is_special(&self, id: &str) -> bool {
        self.get(id).is_some_and(ToolsetMetadata::is_special)
    }

    /// True only for registered concrete toolsets.
    pub fn is_concrete(&self, id: &str) -> bool {
        self.get(id).is_some_and(ToolsetMetadata::is_concrete)
    }

    /// Metadata in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolsetMetadata> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// The concrete toolset that owns `tool`, if any.
    pub fn toolset_for_tool(&self, tool: &str) -> Option<&ToolsetId> {
        self.iter()
            .find(|meta| meta.tools().iter().any(|t| t.as_str() == tool))
            .map(|meta| &meta.id)
    }

    /// Tools owned by a concrete toolset; empty for specials and unknown IDs.
    pub fn tools_for(&self, id: &str) -> &[ToolName] {
        self.get(id).map(ToolsetMetadata::tools).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Assembles a [`ToolsetCatalog`]. The only place entries can be added.
#[derive(Debug, Default)]
pub struct ToolsetCatalogBuilder {
    entries: HashMap<ToolsetId, ToolsetMetadata>,
    order: Vec<ToolsetId>,
    defaults: Vec<ToolsetId>,
}

impl ToolsetCatalogBuilder {
    /// Register a toolset. Concrete and special IDs share one namespace.
    pub fn register(&mut self, meta: ToolsetMetadata) -> Result<()> {
        if meta.id.as_str().is_empty() {
            return Err(Error::validation("Toolset id cannot be empty"));
        }
        if self.entries.contains_key(&meta.id) {
            return Err(Error::DuplicateToolset(meta.id));
        }
        self.order.push(meta.id.clone());
        self.entries.insert(meta.id.clone(), meta);
        Ok(())
    }

    /// Chaining form of [`register`](Self::register).
    pub fn toolset(mut self, meta: ToolsetMetadata) -> Result<Self> {
        self.register(meta)?;
        Ok(self)
    }

    /// Set the default toolset sequence, replacing any previous one.
    pub fn defaults<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ToolsetId>,
    {
        self.defaults = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Finish the catalog. Fails if a default ID is not registered.
    pub fn build(self) -> Result<ToolsetCatalog> {
        let mut unknown_defaults: Vec<ToolsetId> = Vec::new();
        for id in &self.defaults {
            if !self.entries.contains_key(id) && !unknown_defaults.contains(id) {
                unknown_defaults.push(id.clone());
            }
        }
        if !unknown_defaults.is_empty() {
            return Err(Error::UnknownToolsets(unknown_defaults));
        }

        for id in &self.order {
            let Some(meta) = self.entries.get(id) else {
                continue;
            };
            let dangling: Vec<&ToolsetId> = meta
                .members()
                .iter()
                .filter(|member| !self.entries.contains_key(*member))
                .collect();
            if !dangling.is_empty() {
                tracing::warn!(
                    toolset = %id,
                    members = %join_ids(&dangling),
                    "special toolset references unknown members"
                );
            }
        }

        tracing::debug!(
            toolsets = self.order.len(),
            defaults = self.defaults.len(),
            "toolset catalog built"
        );

        Ok(ToolsetCatalog {
            entries: self.entries,
            order: self.order,
            defaults: self.defaults,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
