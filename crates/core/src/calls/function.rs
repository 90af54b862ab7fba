//! Free function calls: a direct name lookup from the call's scope.

use super::CallResolver;
use symscope_api::{Reference, Resolution};

pub(super) fn resolve(ctx: &CallResolver, reference: &Reference) -> Vec<Resolution> {
    ctx.resolver
        .resolver(reference.scope, &reference.name)
        .resolve()
        .map(Resolution::direct)
        .into_iter()
        .collect()
}
