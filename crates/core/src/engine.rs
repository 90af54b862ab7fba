//! The orchestrator: one resolution pass over a whole project.
//!
//! Phases: validate & index the input files, build the type context, resolve
//! every reference (parallel across files, shared memo cache), assemble the
//! output maps in stable file order. Per-reference failures never abort the
//! run; only malformed files are dropped, and those are reported alongside
//! the result.

use crate::calls::CallResolver;
use crate::project::{ProjectIndex, RejectedFile};
use crate::resolver::{ResolutionCache, ResolverIndex};
use crate::types::TypeContext;
use indexmap::IndexMap;
use rayon::prelude::*;
use symscope_api::{Location, Reference, ResolvedSymbols, Resolution, SemanticIndex};

#[derive(Default)]
pub struct ResolutionEngine;

pub struct ResolutionOutput {
    pub symbols: ResolvedSymbols,
    /// Files excluded because their index violated the input contract.
    pub rejected: Vec<RejectedFile>,
}

impl ResolutionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, indices: Vec<SemanticIndex>) -> ResolutionOutput {
        let (project, rejected) = ProjectIndex::build(indices);
        let cache = ResolutionCache::new();
        let resolver = ResolverIndex::new(&project, &cache);
        let types = TypeContext::build(&project, &resolver);
        let calls = CallResolver::new(&project, &resolver, &types);

        // Each file's references resolve independently; the cache is the one
        // shared structure and its keys are write-once.
        let per_file: Vec<Vec<(&Reference, Vec<Resolution>)>> = project
            .files()
            .par_iter()
            .map(|file| {
                file.references
                    .iter()
                    .map(|reference| (reference, calls.resolve(reference)))
                    .collect()
            })
            .collect();

        let symbols = assemble(&project, per_file);

        let stats = cache.stats();
        tracing::debug!(
            references = symbols.references.len(),
            resolved = symbols
                .resolved_references
                .values()
                .filter(|r| !r.is_empty())
                .count(),
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            "resolution run complete"
        );

        ResolutionOutput { symbols, rejected }
    }
}

/// Merge per-file results into the output contract. Iteration order follows
/// the accepted input order, so re-running on unchanged input reproduces the
/// exact same maps.
fn assemble(
    project: &ProjectIndex,
    per_file: Vec<Vec<(&Reference, Vec<Resolution>)>>,
) -> ResolvedSymbols {
    let mut resolved_references: IndexMap<Location, Vec<Resolution>> = IndexMap::new();
    let mut references_to_symbol: IndexMap<_, Vec<Location>> = IndexMap::new();
    let mut references = Vec::new();

    for file_results in per_file {
        for (reference, resolutions) in file_results {
            for resolution in &resolutions {
                references_to_symbol
                    .entry(resolution.symbol)
                    .or_default()
                    .push(reference.location);
            }
            // Two references may share a location; their candidates
            // accumulate instead of replacing each other.
            resolved_references
                .entry(reference.location)
                .or_default()
                .extend(resolutions);
            references.push(reference.clone());
        }
    }

    let mut definitions = IndexMap::new();
    for def in project.definitions() {
        definitions.insert(def.symbol, def.clone());
    }

    ResolvedSymbols {
        resolved_references,
        references_to_symbol,
        references,
        definitions,
    }
}
