//! Method calls: keyword-aware receiver resolution, chain walking, and
//! multi-candidate dispatch.

use super::{CallResolver, Receiver, candidates, function};
use symscope_api::{
    Confidence, Reference, Resolution, ResolutionReason, SelfKeyword,
};

pub(super) fn resolve(ctx: &CallResolver, reference: &Reference) -> Vec<Resolution> {
    let chain = &reference.property_chain;
    // Some indexers emit method-style calls with no receiver chain (bare
    // calls inside a class body); those are plain name lookups.
    if chain.len() < 2 {
        return function::resolve(ctx, reference);
    }
    let Some(language) = ctx.project.language_of_scope(reference.scope) else {
        return Vec::new();
    };

    // Keyword detection comes first, unconditionally. Chain length must
    // never decide whether `this.method()` gets keyword semantics.
    let head = chain[0].as_str();
    let mut receiver = match language.self_keyword(head) {
        // A keyword with no referent (no enclosing type body, `super` without
        // a declared parent) is unresolved outright, never name-matched.
        Some(SelfKeyword::Current) => {
            let Some(ty) = ctx.enclosing_type(reference.scope) else {
                return Vec::new();
            };
            Receiver::Type(ty)
        }
        Some(SelfKeyword::Parent) => {
            let parent = ctx
                .enclosing_type(reference.scope)
                .and_then(|ty| ctx.types.superclass_of(ty));
            let Some(ty) = parent else {
                return Vec::new();
            };
            Receiver::Type(ty)
        }
        None => {
            let resolved = ctx
                .resolver
                .resolve(reference.scope, head)
                .and_then(|symbol| ctx.receiver_from_symbol(symbol));
            match resolved {
                Some(receiver) => receiver,
                None => return candidates::heuristic_scan(ctx, reference),
            }
        }
    };

    // Middle segments narrow the receiver one member access at a time.
    for segment in &chain[1..chain.len() - 1] {
        match ctx.step(receiver, segment) {
            Some(next) => receiver = next,
            None => return candidates::heuristic_scan(ctx, reference),
        }
    }

    dispatch(ctx, receiver, reference)
}

/// Resolve the final method name against the narrowed receiver.
fn dispatch(ctx: &CallResolver, receiver: Receiver, reference: &Reference) -> Vec<Resolution> {
    let method = reference.name.as_str();
    match receiver {
        Receiver::Module(source) => ctx
            .resolver
            .imports()
            .member_of_module(&source, method)
            .map(Resolution::direct)
            .into_iter()
            .collect(),

        Receiver::Type(ty) => {
            let ty = ctx.types.canonical(ty);
            if ctx.is_interface(ty) {
                // Interface-typed receiver: one candidate per implementation.
                // The project index is the closed world, so the set is
                // exhaustive and the candidates are certain.
                let fanned: Vec<Resolution> = ctx
                    .types
                    .implementations_of(ty)
                    .iter()
                    .filter_map(|&class| ctx.types.member(class, method))
                    .map(|symbol| Resolution {
                        symbol,
                        confidence: Confidence::Certain,
                        reason: ResolutionReason::InterfaceImplementation { interface: ty },
                    })
                    .collect();
                if !fanned.is_empty() {
                    return fanned;
                }
                // No implementation carries it: fall back to the interface's
                // own declaration, then to the heuristic scan.
            }
            if let Some(member) = ctx.types.member(ty, method) {
                return vec![Resolution::direct(member)];
            }
            candidates::heuristic_scan(ctx, reference)
        }

        Receiver::Collection {
            collection,
            element,
        } => {
            let element = ctx.types.canonical(element);
            if ctx.is_interface(element) {
                // Heterogeneous collection: candidates are every implementing
                // type's method. The element set is inferred from an
                // annotation, not proven, so these stay speculative.
                let fanned: Vec<Resolution> = ctx
                    .types
                    .implementations_of(element)
                    .iter()
                    .filter_map(|&class| ctx.types.member(class, method))
                    .map(|symbol| Resolution {
                        symbol,
                        confidence: Confidence::Possible,
                        reason: ResolutionReason::CollectionMember { collection },
                    })
                    .collect();
                if !fanned.is_empty() {
                    return fanned;
                }
            }
            if let Some(member) = ctx.types.member(element, method) {
                return vec![Resolution {
                    symbol: member,
                    confidence: Confidence::Probable,
                    reason: ResolutionReason::CollectionMember { collection },
                }];
            }
            candidates::heuristic_scan(ctx, reference)
        }
    }
}
