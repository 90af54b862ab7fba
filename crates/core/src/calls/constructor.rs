//! Constructor calls: resolve the type name, then its constructor member.
//!
//! The binding from the call's assignment target to the constructed type is
//! registered while the type context is built, ahead of call resolution, so
//! later method calls on the variable already see it.

use super::CallResolver;
use symscope_api::{Reference, Resolution};

pub(super) fn resolve(ctx: &CallResolver, reference: &Reference) -> Vec<Resolution> {
    let Some(ty) = ctx.resolver.resolve(reference.scope, &reference.name) else {
        return Vec::new();
    };
    let ty = ctx.types.canonical(ty);
    // Languages without a distinct constructor symbol resolve to the type.
    let target = ctx.types.constructor_of(ty).unwrap_or(ty);
    vec![Resolution::direct(target)]
}
