#![allow(dead_code)]

use smol_str::SmolStr;
use symscope_api::{
    CallType, DefinitionKind, Export, FileId, ImportedName, Language, LexicalScope, Location,
    Range, Reference, ResolvedSymbols, ScopeId, ScopeKind, SemanticIndex, SymbolId, Visibility,
};
use symscope_core::{ResolutionEngine, ResolutionOutput};

pub fn sym(id: u64) -> SymbolId {
    SymbolId(id)
}

/// The location scheme used by the builder: one reference per line.
pub fn at(file: u32, line: usize) -> Location {
    Location::new(
        FileId(file),
        Range {
            start_line: line,
            start_col: 0,
            end_line: line,
            end_col: 16,
        },
    )
}

pub fn run(files: Vec<SemanticIndex>) -> ResolutionOutput {
    ResolutionEngine::new().resolve(files)
}

pub fn resolve(files: Vec<SemanticIndex>) -> ResolvedSymbols {
    run(files).symbols
}

/// Builds one file's semantic index the way a front-end would emit it.
pub struct FileBuilder {
    index: SemanticIndex,
    next_def_line: usize,
}

impl FileBuilder {
    pub fn new(file: u32, path: &str, language: Language) -> Self {
        Self {
            index: SemanticIndex {
                file: FileId(file),
                path: SmolStr::new(path),
                language,
                scopes: Vec::new(),
                definitions: Vec::new(),
                references: Vec::new(),
                exports: Default::default(),
            },
            next_def_line: 100,
        }
    }

    pub fn scope(mut self, id: u32, parent: Option<u32>, kind: ScopeKind) -> Self {
        self.push_scope(id, parent, kind, None);
        self
    }

    /// A scope that is some symbol's body (class body, method body).
    pub fn body_scope(mut self, id: u32, parent: u32, kind: ScopeKind, owner: u64) -> Self {
        self.push_scope(id, Some(parent), kind, Some(owner));
        self
    }

    fn push_scope(&mut self, id: u32, parent: Option<u32>, kind: ScopeKind, owner: Option<u64>) {
        self.index.scopes.push(LexicalScope {
            id: ScopeId(id),
            parent: parent.map(ScopeId),
            kind,
            owner: owner.map(SymbolId),
            range: Range {
                start_line: 0,
                start_col: 0,
                end_line: 999,
                end_col: 0,
            },
        });
    }

    pub fn def(
        mut self,
        symbol: u64,
        name: &str,
        kind: DefinitionKind,
        scope: u32,
        visibility: Visibility,
    ) -> Self {
        self.push_def(symbol, name, kind, scope, visibility, None);
        self
    }

    /// A definition belonging to a type (method, field, constructor).
    pub fn member_def(
        mut self,
        symbol: u64,
        name: &str,
        kind: DefinitionKind,
        scope: u32,
        visibility: Visibility,
        owner: u64,
    ) -> Self {
        self.push_def(symbol, name, kind, scope, visibility, Some(owner));
        self
    }

    fn push_def(
        &mut self,
        symbol: u64,
        name: &str,
        kind: DefinitionKind,
        scope: u32,
        visibility: Visibility,
        member_of: Option<u64>,
    ) {
        let line = self.next_def_line;
        self.next_def_line += 1;
        self.index.definitions.push(symscope_api::Definition {
            symbol: SymbolId(symbol),
            name: SmolStr::new(name),
            kind,
            defining_scope: ScopeId(scope),
            visibility,
            member_of: member_of.map(SymbolId),
            location: at(self.index.file.0, line),
        });
    }

    pub fn call(self, name: &str, scope: u32, line: usize) -> Self {
        self.push_ref(name, scope, CallType::Function, &[], None, line)
    }

    pub fn call_binding(self, name: &str, scope: u32, line: usize, binds: u64) -> Self {
        self.push_ref(name, scope, CallType::Function, &[], Some(binds), line)
    }

    pub fn method_call(self, chain: &[&str], scope: u32, line: usize) -> Self {
        let name = chain.last().expect("chain must name the method");
        self.push_ref(name, scope, CallType::Method, chain, None, line)
    }

    pub fn ctor_call(self, name: &str, scope: u32, line: usize, binds: Option<u64>) -> Self {
        self.push_ref(name, scope, CallType::Constructor, &[], binds, line)
    }

    fn push_ref(
        mut self,
        name: &str,
        scope: u32,
        call_type: CallType,
        chain: &[&str],
        binds: Option<u64>,
        line: usize,
    ) -> Self {
        let file = self.index.file.0;
        self.index.references.push(Reference {
            name: SmolStr::new(name),
            scope: ScopeId(scope),
            call_type,
            property_chain: chain.iter().map(|s| SmolStr::new(s)).collect(),
            receiver_location: None,
            binds: binds.map(SymbolId),
            location: at(file, line),
        });
        self
    }

    pub fn export_local(mut self, name: &str, symbol: u64) -> Self {
        self.index.exports.named.insert(
            SmolStr::new(name),
            Export::Local {
                symbol: SymbolId(symbol),
            },
        );
        self
    }

    pub fn reexport(mut self, name: &str, source: &str, original: &str) -> Self {
        self.index.exports.named.insert(
            SmolStr::new(name),
            Export::Reexport {
                source: SmolStr::new(source),
                original: SmolStr::new(original),
            },
        );
        self
    }

    pub fn star_export(mut self, source: &str) -> Self {
        self.index.exports.star_sources.push(SmolStr::new(source));
        self
    }

    pub fn build(self) -> SemanticIndex {
        self.index
    }
}

// Definition-kind shorthands so tests read like declarations.

pub fn func(return_type: Option<&str>) -> DefinitionKind {
    DefinitionKind::Function {
        return_type: return_type.map(SmolStr::new),
    }
}

pub fn method(return_type: Option<&str>) -> DefinitionKind {
    DefinitionKind::Method {
        return_type: return_type.map(SmolStr::new),
    }
}

pub fn class() -> DefinitionKind {
    DefinitionKind::Class {
        extends: None,
        implements: Vec::new(),
    }
}

pub fn class_extending(parent: &str) -> DefinitionKind {
    DefinitionKind::Class {
        extends: Some(SmolStr::new(parent)),
        implements: Vec::new(),
    }
}

pub fn class_implementing(interfaces: &[&str]) -> DefinitionKind {
    DefinitionKind::Class {
        extends: None,
        implements: interfaces.iter().map(|s| SmolStr::new(s)).collect(),
    }
}

pub fn iface() -> DefinitionKind {
    DefinitionKind::Interface {
        extends: Vec::new(),
    }
}

pub fn var(annotation: Option<&str>) -> DefinitionKind {
    DefinitionKind::Variable {
        type_annotation: annotation.map(SmolStr::new),
    }
}

pub fn param(annotation: Option<&str>) -> DefinitionKind {
    DefinitionKind::Parameter {
        type_annotation: annotation.map(SmolStr::new),
    }
}

pub fn ctor() -> DefinitionKind {
    DefinitionKind::Constructor
}

pub fn alias(target: &str) -> DefinitionKind {
    DefinitionKind::TypeAlias {
        target: Some(SmolStr::new(target)),
    }
}

pub fn import_named(source: &str, original: &str) -> DefinitionKind {
    DefinitionKind::Import {
        source: SmolStr::new(source),
        imported: ImportedName::Named(SmolStr::new(original)),
    }
}

pub fn import_default(source: &str) -> DefinitionKind {
    DefinitionKind::Import {
        source: SmolStr::new(source),
        imported: ImportedName::Default,
    }
}

pub fn import_namespace(source: &str) -> DefinitionKind {
    DefinitionKind::Import {
        source: SmolStr::new(source),
        imported: ImportedName::Namespace,
    }
}
