use super::symbol::SymbolId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How much trust a consumer should place in one resolution candidate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Provably correct under the input indices.
    Certain,
    /// Strong heuristic (e.g. single near-certain candidate).
    Probable,
    /// Speculative: name-only or inferred-collection matches.
    Possible,
}

/// Why a candidate was produced. Closed union so consumers can match
/// exhaustively.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum ResolutionReason {
    /// Plain lexical or import lookup.
    Direct,
    /// The receiver is interface-typed; this candidate is one implementation.
    InterfaceImplementation { interface: SymbolId },
    /// The receiver is an element of a known collection variable.
    CollectionMember { collection: SymbolId },
    /// Name-only scan across known types. Score in `[0, 1]`.
    HeuristicMatch { score: f32 },
}

/// One candidate target for a reference. A reference carries zero or more of
/// these: zero = unresolved, one = concrete, several = polymorphic or
/// ambiguous. Every call site is treated uniformly through this shape.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, JsonSchema)]
pub struct Resolution {
    pub symbol: SymbolId,
    pub confidence: Confidence,
    pub reason: ResolutionReason,
}

impl Resolution {
    pub fn direct(symbol: SymbolId) -> Self {
        Self {
            symbol,
            confidence: Confidence::Certain,
            reason: ResolutionReason::Direct,
        }
    }
}
