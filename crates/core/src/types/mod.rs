//! Annotation- and constructor-driven type tracking.
//!
//! Not a type inferencer: bindings come from explicit annotations,
//! constructor calls and declared return types only. Type *names* are turned
//! into type *definitions* through the resolver index, so annotation lookup
//! honors scoping, shadowing and imports like any other name.

mod annotation;

pub use annotation::AnnotationShape;

use crate::project::ProjectIndex;
use crate::resolver::ResolverIndex;
use smol_str::SmolStr;
use std::collections::HashMap;
use symscope_api::{CallType, DefinitionKind, SymbolId};

#[derive(Default)]
pub struct TypeContext {
    /// Variable / parameter / field -> its type.
    symbol_types: HashMap<SymbolId, SymbolId>,
    /// Function / method -> declared return type.
    return_types: HashMap<SymbolId, SymbolId>,
    /// Type -> named members (methods, fields). Constructors live apart.
    members: HashMap<SymbolId, HashMap<SmolStr, SymbolId>>,
    constructors: HashMap<SymbolId, SymbolId>,
    /// Class -> superclass; also interface -> first extended interface.
    superclass: HashMap<SymbolId, SymbolId>,
    /// Type -> every parent searched during member lookup (superclass plus
    /// extended interfaces).
    parents: HashMap<SymbolId, Vec<SymbolId>>,
    /// Interface -> implementing classes, project-wide.
    implementations: HashMap<SymbolId, Vec<SymbolId>>,
    /// Collection variable -> element type, from annotation shapes.
    element_types: HashMap<SymbolId, SymbolId>,
    /// Type alias -> aliased type.
    alias_targets: HashMap<SymbolId, SymbolId>,
}

impl TypeContext {
    pub fn build(project: &ProjectIndex, resolver: &ResolverIndex) -> Self {
        let mut ctx = Self::default();
        ctx.collect_members(project);
        ctx.collect_hierarchy(project, resolver);
        ctx.collect_annotations(project, resolver);
        ctx.collect_return_types(project, resolver);
        ctx.collect_call_bindings(project, resolver);
        tracing::debug!(
            typed_symbols = ctx.symbol_types.len(),
            types_with_members = ctx.members.len(),
            interfaces_with_impls = ctx.implementations.len(),
            "type context built"
        );
        ctx
    }

    fn collect_members(&mut self, project: &ProjectIndex) {
        for def in project.definitions() {
            let Some(owner) = def.member_of else { continue };
            if matches!(def.kind, DefinitionKind::Constructor) {
                self.constructors.entry(owner).or_insert(def.symbol);
            } else {
                self.members
                    .entry(owner)
                    .or_default()
                    .entry(def.name.clone())
                    .or_insert(def.symbol);
            }
        }
    }

    fn collect_hierarchy(&mut self, project: &ProjectIndex, resolver: &ResolverIndex) {
        for def in project.definitions() {
            match &def.kind {
                DefinitionKind::Class { extends, implements } => {
                    if let Some(parent_name) = extends {
                        if let Some(parent) = resolver.resolve(def.defining_scope, parent_name) {
                            self.superclass.insert(def.symbol, parent);
                            self.parents.entry(def.symbol).or_default().push(parent);
                        }
                    }
                    for iface_name in implements {
                        if let Some(iface) = resolver.resolve(def.defining_scope, iface_name) {
                            self.implementations.entry(iface).or_default().push(def.symbol);
                            self.parents.entry(def.symbol).or_default().push(iface);
                        }
                    }
                }
                DefinitionKind::Interface { extends } => {
                    for (i, parent_name) in extends.iter().enumerate() {
                        if let Some(parent) = resolver.resolve(def.defining_scope, parent_name) {
                            if i == 0 {
                                self.superclass.insert(def.symbol, parent);
                            }
                            self.parents.entry(def.symbol).or_default().push(parent);
                        }
                    }
                }
                DefinitionKind::TypeAlias { target: Some(target) } => {
                    if let Some(aliased) = resolver.resolve(def.defining_scope, target) {
                        self.alias_targets.insert(def.symbol, aliased);
                    }
                }
                _ => {}
            }
        }
    }

    fn collect_annotations(&mut self, project: &ProjectIndex, resolver: &ResolverIndex) {
        for def in project.definitions() {
            let annotation = match &def.kind {
                DefinitionKind::Variable { type_annotation }
                | DefinitionKind::Parameter { type_annotation } => type_annotation.as_ref(),
                _ => None,
            };
            let Some(annotation) = annotation else { continue };
            match AnnotationShape::parse(annotation) {
                AnnotationShape::Plain(name) => {
                    if let Some(ty) = resolver.resolve(def.defining_scope, name) {
                        self.symbol_types.insert(def.symbol, self.canonical(ty));
                    }
                }
                AnnotationShape::Collection { element, .. } => {
                    if let Some(ty) = resolver.resolve(def.defining_scope, element) {
                        self.element_types.insert(def.symbol, self.canonical(ty));
                    }
                }
            }
        }
    }

    fn collect_return_types(&mut self, project: &ProjectIndex, resolver: &ResolverIndex) {
        for def in project.definitions() {
            let ret = match &def.kind {
                DefinitionKind::Function { return_type }
                | DefinitionKind::Method { return_type } => return_type.as_ref(),
                _ => None,
            };
            let Some(ret) = ret else { continue };
            if let AnnotationShape::Plain(name) = AnnotationShape::parse(ret) {
                if let Some(ty) = resolver.resolve(def.defining_scope, name) {
                    self.return_types.insert(def.symbol, self.canonical(ty));
                }
            }
        }
    }

    /// Constructor calls bind their assignment target to the constructed
    /// type, overriding any annotation (more specific evidence). Plain calls
    /// bind through the callee's return type, but only where nothing more
    /// specific already exists.
    fn collect_call_bindings(&mut self, project: &ProjectIndex, resolver: &ResolverIndex) {
        for file in project.files() {
            for reference in &file.references {
                let Some(target) = reference.binds else { continue };
                match reference.call_type {
                    CallType::Constructor => {
                        if let Some(ty) = resolver.resolve(reference.scope, &reference.name) {
                            self.symbol_types.insert(target, self.canonical(ty));
                        }
                    }
                    CallType::Function => {
                        if self.symbol_types.contains_key(&target) {
                            continue;
                        }
                        let inferred = resolver
                            .resolve(reference.scope, &reference.name)
                            .and_then(|callee| self.return_types.get(&callee).copied());
                        if let Some(ty) = inferred {
                            self.symbol_types.insert(target, ty);
                        }
                    }
                    CallType::Method => {}
                }
            }
        }
    }

    /// Follow alias links to the underlying type. Bounded: alias chains in
    /// real indices are short, and a self-referential alias must not loop.
    pub fn canonical(&self, ty: SymbolId) -> SymbolId {
        let mut current = ty;
        for _ in 0..8 {
            match self.alias_targets.get(&current) {
                Some(&next) if next != current => current = next,
                _ => break,
            }
        }
        current
    }

    pub fn type_of(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.symbol_types.get(&symbol).copied()
    }

    pub fn return_type_of(&self, callable: SymbolId) -> Option<SymbolId> {
        self.return_types.get(&callable).copied()
    }

    pub fn element_type_of(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.element_types.get(&symbol).copied()
    }

    pub fn superclass_of(&self, ty: SymbolId) -> Option<SymbolId> {
        self.superclass.get(&ty).copied()
    }

    pub fn implementations_of(&self, interface: SymbolId) -> &[SymbolId] {
        self.implementations
            .get(&interface)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn constructor_of(&self, ty: SymbolId) -> Option<SymbolId> {
        self.constructors.get(&ty).copied()
    }

    /// Member lookup: direct members first, then up the `extends` /
    /// `implements` chain. The walk carries a visited set so malformed
    /// inheritance cycles terminate.
    pub fn member(&self, ty: SymbolId, name: &str) -> Option<SymbolId> {
        let mut stack = vec![self.canonical(ty)];
        let mut visited = std::collections::HashSet::new();
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(member) = self.members.get(&current).and_then(|m| m.get(name)) {
                return Some(*member);
            }
            if let Some(parents) = self.parents.get(&current) {
                stack.extend(parents.iter().rev().copied());
            }
        }
        None
    }

    /// The type a member access evaluates to: a field's declared type, or a
    /// method's return type.
    pub fn member_value_type(&self, member: SymbolId) -> Option<SymbolId> {
        self.symbol_types
            .get(&member)
            .or_else(|| self.return_types.get(&member))
            .copied()
    }

    /// Name-only scan over every known type member, for the heuristic
    /// fallback. Deterministic order: sorted by (type, member).
    pub fn members_named(&self, name: &str) -> Vec<(SymbolId, SymbolId)> {
        let mut found: Vec<(SymbolId, SymbolId)> = self
            .members
            .iter()
            .filter_map(|(ty, members)| members.get(name).map(|m| (*ty, *m)))
            .collect();
        found.sort_unstable();
        found
    }
}
