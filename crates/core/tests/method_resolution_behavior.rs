mod common;

use common::*;
use symscope_api::{Confidence, Language, Resolution, ResolutionReason, ScopeKind, Visibility};

#[test]
fn this_call_resolves_via_the_keyword_path_at_chain_length_two() {
    // Regression guard: `this.refresh()` has a chain of exactly two segments
    // and must still take keyword semantics, never variable resolution.
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .body_scope(2, 1, ScopeKind::Function, 12)
        .def(10, "View", class(), 0, Visibility::File)
        .member_def(11, "refresh", method(None), 1, Visibility::File, 10)
        .member_def(12, "render", method(None), 1, Visibility::File, 10)
        .method_call(&["this", "refresh"], 2, 6)
        .build();

    let symbols = resolve(vec![file]);
    assert_eq!(symbols.resolutions_at(&at(1, 6)), &[Resolution::direct(sym(11))]);
}

#[test]
fn python_self_resolves_to_the_enclosing_class() {
    let file = FileBuilder::new(1, "main.py", Language::Python)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .body_scope(2, 1, ScopeKind::Function, 12)
        .def(10, "Worker", class(), 0, Visibility::File)
        .member_def(11, "run", method(None), 1, Visibility::File, 10)
        .member_def(12, "start", method(None), 1, Visibility::File, 10)
        .method_call(&["self", "run"], 2, 5)
        .build();

    let symbols = resolve(vec![file]);
    assert_eq!(symbols.resolutions_at(&at(1, 5)), &[Resolution::direct(sym(11))]);
}

#[test]
fn super_call_resolves_on_the_declared_parent_type() {
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .body_scope(2, 0, ScopeKind::Class, 12)
        .body_scope(3, 2, ScopeKind::Function, 14)
        .def(10, "Base", class(), 0, Visibility::File)
        .member_def(11, "greet", method(None), 1, Visibility::File, 10)
        .def(12, "Derived", class_extending("Base"), 0, Visibility::File)
        .member_def(13, "greet", method(None), 2, Visibility::File, 12)
        .member_def(14, "hello", method(None), 2, Visibility::File, 12)
        .method_call(&["super", "greet"], 3, 7)
        .build();

    let symbols = resolve(vec![file]);
    // Derived overrides greet; super must skip it and land on Base's.
    assert_eq!(symbols.resolutions_at(&at(1, 7)), &[Resolution::direct(sym(11))]);
}

#[test]
fn this_outside_any_type_body_is_unresolved() {
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .def(10, "refresh", func(None), 0, Visibility::File)
        .method_call(&["this", "refresh"], 0, 2)
        .build();

    let symbols = resolve(vec![file]);
    // `this` has no referent at module scope; the call stays unresolved.
    assert_eq!(symbols.resolutions_at(&at(1, 2)), &[]);
}

#[test]
fn keyword_without_referent_ignores_same_named_members() {
    // A member named like the call exists, but `this` at module scope has no
    // referent; the keyword path must not degrade to name matching.
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .def(10, "Worker", class(), 0, Visibility::File)
        .member_def(11, "process", method(None), 1, Visibility::File, 10)
        .method_call(&["this", "process"], 0, 3)
        .build();

    let symbols = resolve(vec![file]);
    assert_eq!(symbols.resolutions_at(&at(1, 3)), &[]);
}

#[test]
fn super_without_a_parent_class_is_unresolved() {
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .body_scope(2, 1, ScopeKind::Function, 12)
        .def(10, "Orphan", class(), 0, Visibility::File)
        .member_def(11, "greet", method(None), 1, Visibility::File, 10)
        .member_def(12, "hello", method(None), 1, Visibility::File, 10)
        .method_call(&["super", "greet"], 2, 5)
        .build();

    let symbols = resolve(vec![file]);
    assert_eq!(symbols.resolutions_at(&at(1, 5)), &[]);
}

#[test]
fn static_member_access_through_the_type_name() {
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .def(10, "User", class(), 0, Visibility::File)
        .member_def(11, "create", method(Some("User")), 1, Visibility::File, 10)
        .method_call(&["User", "create"], 0, 4)
        .build();

    let symbols = resolve(vec![file]);
    assert_eq!(symbols.resolutions_at(&at(1, 4)), &[Resolution::direct(sym(11))]);
}

#[test]
fn untyped_receiver_falls_back_to_name_only_heuristics() {
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .scope(2, Some(0), ScopeKind::Function)
        .def(10, "Worker", class(), 0, Visibility::File)
        .member_def(11, "process", method(None), 1, Visibility::File, 10)
        .def(20, "x", var(None), 2, Visibility::ScopeChildren)
        .method_call(&["x", "process"], 2, 9)
        .build();

    let symbols = resolve(vec![file]);
    let resolutions = symbols.resolutions_at(&at(1, 9));
    assert_eq!(resolutions.len(), 1);
    assert_eq!(resolutions[0].symbol, sym(11));
    assert_eq!(resolutions[0].confidence, Confidence::Possible);
    assert!(matches!(
        resolutions[0].reason,
        ResolutionReason::HeuristicMatch { .. }
    ));
}

#[test]
fn heuristic_candidates_prefer_the_same_file() {
    let local = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .body_scope(1, 0, ScopeKind::Class, 10)
        .scope(2, Some(0), ScopeKind::Function)
        .def(10, "Local", class(), 0, Visibility::File)
        .member_def(11, "process", method(None), 1, Visibility::File, 10)
        .def(20, "x", var(None), 2, Visibility::ScopeChildren)
        .method_call(&["x", "process"], 2, 9)
        .build();

    let remote = FileBuilder::new(2, "other.ts", Language::TypeScript)
        .scope(5, None, ScopeKind::Module)
        .body_scope(6, 5, ScopeKind::Class, 30)
        .def(30, "Remote", class(), 5, Visibility::File)
        .member_def(31, "process", method(None), 6, Visibility::File, 30)
        .build();

    let symbols = resolve(vec![local, remote]);
    let resolutions = symbols.resolutions_at(&at(1, 9));
    assert_eq!(resolutions.len(), 2);
    // Same-file candidate scores higher and sorts first.
    assert_eq!(resolutions[0].symbol, sym(11));
    assert_eq!(resolutions[1].symbol, sym(31));
    for r in resolutions {
        assert_eq!(r.confidence, Confidence::Possible);
    }
}

#[test]
fn bare_method_style_call_degrades_to_a_name_lookup() {
    // Indexers sometimes emit a method call with no receiver chain.
    let file = FileBuilder::new(1, "main.ts", Language::TypeScript)
        .scope(0, None, ScopeKind::Module)
        .def(10, "tick", func(None), 0, Visibility::File)
        .method_call(&["tick"], 0, 3)
        .build();

    let symbols = resolve(vec![file]);
    assert_eq!(symbols.resolutions_at(&at(1, 3)), &[Resolution::direct(sym(10))]);
}
