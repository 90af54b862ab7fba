//! Call-site resolution: function, method and constructor calls.
//!
//! All three consume the resolver index, the shared cache (through it) and
//! the type context. Every call site yields a `Vec<Resolution>`: empty for
//! unresolved, one for concrete, several for polymorphic or ambiguous sites.

mod candidates;
mod constructor;
mod function;
mod method;

use crate::project::ProjectIndex;
use crate::resolver::ResolverIndex;
use crate::types::TypeContext;
use symscope_api::{
    CallType, DefinitionKind, ImportedName, ModulePath, Reference, Resolution, ScopeId, SymbolId,
};

pub struct CallResolver<'a> {
    project: &'a ProjectIndex,
    resolver: &'a ResolverIndex<'a>,
    types: &'a TypeContext,
}

/// What a (partial) property chain has narrowed the receiver down to.
#[derive(Debug, Clone)]
enum Receiver {
    /// A concrete or interface type; members come from the type context.
    Type(SymbolId),
    /// A namespace import; members come from the source module's exports.
    Module(ModulePath),
    /// An element of a known collection variable.
    Collection {
        collection: SymbolId,
        element: SymbolId,
    },
}

impl<'a> CallResolver<'a> {
    pub fn new(
        project: &'a ProjectIndex,
        resolver: &'a ResolverIndex<'a>,
        types: &'a TypeContext,
    ) -> Self {
        Self {
            project,
            resolver,
            types,
        }
    }

    pub fn resolve(&self, reference: &Reference) -> Vec<Resolution> {
        let resolutions = match reference.call_type {
            CallType::Function => function::resolve(self, reference),
            CallType::Method => method::resolve(self, reference),
            CallType::Constructor => constructor::resolve(self, reference),
        };
        if resolutions.is_empty() {
            tracing::trace!(
                name = %reference.name,
                scope = ?reference.scope,
                "reference left unresolved"
            );
        }
        resolutions
    }

    /// The type whose body lexically encloses `scope`, for `this`/`self`.
    fn enclosing_type(&self, scope: ScopeId) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = self.project.scope(id)?;
            if s.kind.is_type_body() {
                if let Some(owner) = s.owner {
                    return Some(owner);
                }
            }
            current = s.parent;
        }
        None
    }

    /// Interpret a resolved head-of-chain symbol as a receiver.
    fn receiver_from_symbol(&self, symbol: SymbolId) -> Option<Receiver> {
        let def = self.project.definition(symbol)?;
        if let DefinitionKind::Import {
            source,
            imported: ImportedName::Namespace,
        } = &def.kind
        {
            return Some(Receiver::Module(source.clone()));
        }
        if let Some(element) = self.types.element_type_of(symbol) {
            return Some(Receiver::Collection {
                collection: symbol,
                element,
            });
        }
        if let Some(ty) = self.types.type_of(symbol) {
            return Some(Receiver::Type(ty));
        }
        // Static access: the name itself resolves to a type.
        if def.kind.is_type() {
            return Some(Receiver::Type(self.types.canonical(symbol)));
        }
        None
    }

    /// One member-access step through the middle of a property chain.
    fn step(&self, receiver: Receiver, segment: &str) -> Option<Receiver> {
        match receiver {
            Receiver::Type(ty) => {
                let member = self.types.member(ty, segment)?;
                self.receiver_from_member(member)
            }
            Receiver::Module(source) => {
                let symbol = self.resolver.imports().member_of_module(&source, segment)?;
                self.receiver_from_symbol(symbol)
            }
            Receiver::Collection { element, .. } => {
                // A member access on the collection variable itself narrows
                // to the element's member (index/iteration sugar upstream).
                let member = self.types.member(element, segment)?;
                self.receiver_from_member(member)
            }
        }
    }

    fn receiver_from_member(&self, member: SymbolId) -> Option<Receiver> {
        if let Some(element) = self.types.element_type_of(member) {
            return Some(Receiver::Collection {
                collection: member,
                element,
            });
        }
        self.types.member_value_type(member).map(Receiver::Type)
    }

    fn is_interface(&self, ty: SymbolId) -> bool {
        matches!(
            self.project.definition(ty).map(|d| &d.kind),
            Some(DefinitionKind::Interface { .. })
        )
    }
}
