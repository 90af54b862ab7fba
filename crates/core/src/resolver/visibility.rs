//! Visibility check used by the scope walk.

use crate::project::ProjectIndex;
use symscope_api::{Definition, ScopeId, Visibility};

/// Whether `def` may be named from `from`. Purely a visibility question;
/// shadowing and nearest-scope tie-breaking live in the walk itself.
pub fn is_visible(project: &ProjectIndex, def: &Definition, from: ScopeId) -> bool {
    match def.visibility {
        Visibility::ScopeLocal => from == def.defining_scope,
        Visibility::ScopeChildren => project.is_within(from, def.defining_scope),
        Visibility::File => {
            project.file_of_scope(from) == project.file_of_scope(def.defining_scope)
        }
        // Subject to an import actually bringing the name into scope; that
        // gate lives in the import resolver, not here.
        Visibility::Exported => true,
    }
}
