//! Last-resort candidate generation: a name-only scan across every known
//! type member. Never yields anything above `Possible`.

use super::CallResolver;
use symscope_api::{Confidence, Reference, Resolution, ResolutionReason};

const MAX_HEURISTIC_CANDIDATES: usize = 8;
const BASE_SCORE: f32 = 0.5;
const SAME_FILE_BONUS: f32 = 0.25;

pub(super) fn heuristic_scan(ctx: &CallResolver, reference: &Reference) -> Vec<Resolution> {
    let mut scored: Vec<(f32, Resolution)> = ctx
        .types
        .members_named(&reference.name)
        .into_iter()
        .map(|(_, member)| {
            let same_file = ctx
                .project
                .definition(member)
                .map(|d| d.location.file == reference.location.file)
                .unwrap_or(false);
            let score = BASE_SCORE + if same_file { SAME_FILE_BONUS } else { 0.0 };
            (
                score,
                Resolution {
                    symbol: member,
                    confidence: Confidence::Possible,
                    reason: ResolutionReason::HeuristicMatch { score },
                },
            )
        })
        .collect();

    // Best score first; symbol id breaks ties so output is deterministic.
    scored.sort_by(|(a, ra), (b, rb)| {
        b.partial_cmp(a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ra.symbol.cmp(&rb.symbol))
    });
    scored.truncate(MAX_HEURISTIC_CANDIDATES);
    scored.into_iter().map(|(_, r)| r).collect()
}
