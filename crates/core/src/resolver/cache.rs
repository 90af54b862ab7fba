//! Shared memo table for name resolutions.
//!
//! Every lookup in a run — plain names, type names, import targets — is a
//! `(scope, name)` resolution, so they all share this one table. Keys are
//! write-once within a run: resolution is deterministic over immutable
//! inputs, so a racing duplicate computation produces the same value and
//! check-then-insert is enough.

use dashmap::DashMap;
use smol_str::SmolStr;
use std::sync::atomic::{AtomicU64, Ordering};
use symscope_api::{ScopeId, SymbolId};

#[derive(Default)]
pub struct ResolutionCache {
    entries: DashMap<(ScopeId, SmolStr), Option<SymbolId>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized answer for `(scope, name)`, computing it with
    /// `resolve` on first demand. `resolve` runs without any map lock held,
    /// so it may recursively consult the cache.
    pub fn get_or_resolve(
        &self,
        scope: ScopeId,
        name: &str,
        resolve: impl FnOnce() -> Option<SymbolId>,
    ) -> Option<SymbolId> {
        let key = (scope, SmolStr::new(name));
        if let Some(hit) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *hit;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = resolve();
        // First writer wins; a concurrent duplicate computed the same value.
        *self.entries.entry(key).or_insert(value)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
