//! Resolver - raw string → validated, expanded, scope-annotated toolsets.
//!
//! Composes parse → validate → expand → filter → scopes. Every stage is a
//! pure function of the input and the catalog, so successful resolutions are
//! memoised per raw input. The memo is bounded: when full, a small sample of
//! entries is inspected and the least recently used one is evicted.

use super::catalog::ToolsetCatalog;
use super::expand::expand_toolsets;
use super::parse::parse_toolsets;
use super::scopes::required_scopes_for_toolsets;
use super::set::{contains_toolset, remove_toolset};
use super::validate::unknown_toolsets;
use crate::types::{join_ids, Error, Result, Scope, ToolsetId};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Entries inspected when choosing an eviction victim.
const EVICTION_SAMPLE_SIZE: usize = 8;

/// Default upper bound on memoised resolutions.
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1024;

// =============================================================================
// Resolved set
// =============================================================================

/// Ordered, duplicate-free sequence of registered concrete toolset IDs.
///
/// Only the resolver constructs one, so no alias or unknown ID can appear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResolvedToolsets(Vec<ToolsetId>);

impl ResolvedToolsets {
    /// Keep registered concrete IDs from already-expanded output.
    fn from_expanded(catalog: &ToolsetCatalog, expanded: Vec<ToolsetId>) -> Self {
        Self(
            expanded
                .into_iter()
                .filter(|id| catalog.is_concrete(id.as_str()))
                .collect(),
        )
    }

    pub fn contains(&self, id: &str) -> bool {
        contains_toolset(&self.0, id)
    }

    /// A new set without `id`; unchanged if absent.
    pub fn without(&self, id: &str) -> Self {
        Self(remove_toolset(&self.0, id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolsetId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ToolsetId] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ToolsetId> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep members matching `keep`, preserving order.
    pub(crate) fn retain_by<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&ToolsetId) -> bool,
    {
        Self(self.0.iter().filter(|id| keep(id)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a ResolvedToolsets {
    type Item = &'a ToolsetId;
    type IntoIter = std::slice::Iter<'a, ToolsetId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Where the resolved toolsets came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The caller's own list.
    Requested,
    /// Catalog defaults, because the input was empty or resolved to nothing.
    Defaults,
}

/// Non-fatal conditions observed during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionWarning {
    /// Unrecognized IDs were skipped (lenient mode only).
    UnknownToolsets { ids: Vec<ToolsetId> },
    /// A non-empty request expanded to zero concrete toolsets.
    EmptyResolution { requested: Vec<ToolsetId> },
}

/// Outcome of resolving one raw toolset string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Parsed input, before expansion.
    pub requested: Vec<ToolsetId>,
    pub toolsets: ResolvedToolsets,
    pub scopes: BTreeSet<Scope>,
    pub source: ResolutionSource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ResolutionWarning>,
}

impl Resolution {
    /// True when a non-empty request produced no concrete toolsets.
    pub fn is_empty_resolution(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ResolutionWarning::EmptyResolution { .. }))
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Fail on unknown IDs instead of skipping them with a warning.
    pub strict: bool,
    /// Substitute the defaults when a non-empty request resolves to nothing.
    pub fall_back_to_defaults: bool,
    /// Memoise successful resolutions by raw input.
    pub cache: bool,
    /// Upper bound on memoised resolutions. Zero disables memoisation.
    pub max_entries: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            strict: false,
            fall_back_to_defaults: true,
            cache: true,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

/// A memoised resolution with its last access tick.
#[derive(Debug)]
struct CachedResolution {
    resolution: Arc<Resolution>,
    last_accessed: AtomicU64,
}

/// Shared entry point for config loading and per-request resolution.
#[derive(Debug)]
pub struct ToolsetResolver {
    catalog: Arc<ToolsetCatalog>,
    options: ResolverOptions,
    cache: DashMap<String, CachedResolution>,
    /// Monotonic counter for LRU ticks.
    access_counter: AtomicU64,
}

impl ToolsetResolver {
    pub fn new(catalog: Arc<ToolsetCatalog>, options: ResolverOptions) -> Self {
        Self {
            catalog,
            options,
            cache: DashMap::new(),
            access_counter: AtomicU64::new(0),
        }
    }

    pub fn catalog(&self) -> &ToolsetCatalog {
        &self.catalog
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve a raw comma-separated toolset string.
    ///
    /// Empty input selects the defaults. In strict mode any unknown ID fails
    /// the whole call with [`Error::UnknownToolsets`]; errors are not cached.
    pub fn resolve(&self, raw: &str) -> Result<Arc<Resolution>> {
        if self.caching() {
            if let Some(hit) = self.cache.get(raw) {
                hit.last_accessed.store(self.tick(), Ordering::Relaxed);
                tracing::debug!(input = raw, "toolset resolution cache hit");
                return Ok(Arc::clone(&hit.resolution));
            }
        }

        let resolution = Arc::new(self.resolve_uncached(raw)?);

        tracing::debug!(
            input = raw,
            toolsets = %join_ids(resolution.toolsets.as_slice()),
            scopes = resolution.scopes.len(),
            source = ?resolution.source,
            "resolved toolsets"
        );

        if self.caching() {
            self.remember(raw, Arc::clone(&resolution));
        }
        Ok(resolution)
    }

    fn caching(&self) -> bool {
        self.options.cache && self.options.max_entries > 0
    }

    fn tick(&self) -> u64 {
        self.access_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert, then trim back to `max_entries`. The new entry carries the
    /// newest tick, so a sample only picks it when nothing older is left.
    fn remember(&self, raw: &str, resolution: Arc<Resolution>) {
        self.cache.insert(
            raw.to_string(),
            CachedResolution {
                resolution,
                last_accessed: AtomicU64::new(self.tick()),
            },
        );
        while self.cache.len() > self.options.max_entries {
            if !self.evict_one() {
                break;
            }
        }
    }

    /// Evict the least recently used entry among a sample. Returns false if
    /// nothing could be evicted.
    fn evict_one(&self) -> bool {
        let victim = self
            .cache
            .iter()
            .take(EVICTION_SAMPLE_SIZE)
            .min_by_key(|entry| entry.value().last_accessed.load(Ordering::Relaxed))
            .map(|entry| entry.key().clone());

        match victim {
            Some(key) => {
                self.cache.remove(&key);
                tracing::debug!(input = %key, "evicted toolset resolution");
                true
            }
            None => false,
        }
    }

    fn resolve_uncached(&self, raw: &str) -> Result<Resolution> {
        let catalog = self.catalog.as_ref();
        let requested = parse_toolsets(raw);

        if requested.is_empty() {
            return Ok(self.defaults_resolution(requested, Vec::new()));
        }

        let mut warnings = Vec::new();
        let unknown = unknown_toolsets(catalog, &requested);
        if !unknown.is_empty() {
            if self.options.strict {
                return Err(Error::UnknownToolsets(unknown));
            }
            tracing::warn!(
                unknown = %join_ids(&unknown),
                "skipping unknown toolsets"
            );
            warnings.push(ResolutionWarning::UnknownToolsets { ids: unknown });
        }

        let toolsets =
            ResolvedToolsets::from_expanded(catalog, expand_toolsets(catalog, &requested));

        if toolsets.is_empty() {
            tracing::warn!(
                input = raw,
                fallback = self.options.fall_back_to_defaults,
                "toolset request resolved to no concrete toolsets"
            );
            warnings.push(ResolutionWarning::EmptyResolution {
                requested: requested.clone(),
            });
            if self.options.fall_back_to_defaults {
                return Ok(self.defaults_resolution(requested, warnings));
            }
        }

        let scopes = required_scopes_for_toolsets(catalog, toolsets.as_slice());
        Ok(Resolution {
            requested,
            toolsets,
            scopes,
            source: ResolutionSource::Requested,
            warnings,
        })
    }

    fn defaults_resolution(
        &self,
        requested: Vec<ToolsetId>,
        warnings: Vec<ResolutionWarning>,
    ) -> Resolution {
        let catalog = self.catalog.as_ref();
        let expanded = expand_toolsets(catalog, catalog.default_ids());
        let toolsets = ResolvedToolsets::from_expanded(catalog, expanded);
        let scopes = required_scopes_for_toolsets(catalog, toolsets.as_slice());
        Resolution {
            requested,
            toolsets,
            scopes,
            source: ResolutionSource::Defaults,
            warnings,
        }
    }

    /// Number of memoised resolutions; never above `max_entries`.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
