mod common;

use common::*;
use s2v_convert::{
    translate_batch, translate_unit, ConvertError, SemanticModel, UnitOutcome, VbNode,
};
use s2v_syntax::source::{Modifiers, SourceKind};
use s2v_syntax::{SourceArena, SourceTree};

fn good_unit(name: &str) -> SourceTree {
    let mut arena = SourceArena::new();
    let stmt = {
        let value = int(&mut arena, 1);
        expr_stmt(&mut arena, value)
    };
    let method = void_method(&mut arena, "Run", vec![stmt]);
    let class = class_decl(&mut arena, "Good", Modifiers::PUBLIC, vec![method]);
    let root = unit(&mut arena, vec![class]);
    arena.freeze(root).with_unit_name(name)
}

fn bad_unit(name: &str) -> SourceTree {
    let mut arena = SourceArena::new();
    let opaque = arena.alloc(SourceKind::Opaque {
        description: "FixedStatement".to_string(),
    });
    let class = class_decl(&mut arena, "Bad", Modifiers::PUBLIC, vec![opaque]);
    let root = unit(&mut arena, vec![class]);
    arena.freeze(root).with_unit_name(name)
}

#[test]
fn one_failing_unit_does_not_sink_the_batch() {
    let good = good_unit("Good.cs");
    let bad = bad_unit("Bad.cs");
    let good_model = SemanticModel::new();
    let bad_model = SemanticModel::new();

    let outcome = translate_batch(&[(&good, &good_model), (&bad, &bad_model)]);

    assert_eq!(outcome.report.converted_count(), 1);
    assert_eq!(outcome.report.failed_count(), 1);
    assert!(outcome.trees[0].is_some());
    assert!(outcome.trees[1].is_none());

    assert_eq!(outcome.report.units[1].unit, "Bad.cs");
    let UnitOutcome::Failed { error } = &outcome.report.units[1].outcome else {
        panic!("expected a failed outcome");
    };
    assert_eq!(error, "FixedStatement not implemented");
}

#[test]
fn translating_the_same_unit_twice_gives_equal_trees() {
    let tree = good_unit("Good.cs");
    let model = SemanticModel::new();

    let first = translate_unit(&tree, &model).unwrap();
    let second = translate_unit(&tree, &model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn root_must_be_a_compilation_unit() {
    let mut arena = SourceArena::new();
    let root = int(&mut arena, 1);
    let tree = arena.freeze(root);

    let err = translate_unit(&tree, &SemanticModel::new()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::StructuralInvariantViolation { .. }
    ));
}

#[test]
fn requested_imports_skip_namespaces_the_unit_already_has() {
    // A unit that already imports System.Runtime.InteropServices and
    // declares an out parameter must not import it a second time.
    let mut arena = SourceArena::new();
    let system = ident(&mut arena, "System");
    let runtime = ident(&mut arena, "Runtime");
    let interop = ident(&mut arena, "InteropServices");
    let left = arena.alloc(SourceKind::QualifiedName {
        left: system,
        right: runtime,
    });
    let name = arena.alloc(SourceKind::QualifiedName {
        left,
        right: interop,
    });
    let using = arena.alloc(SourceKind::UsingDirective { alias: None, name });

    let ret = predefined(&mut arena, s2v_syntax::source::PredefinedKind::Void);
    let ty = predefined(&mut arena, s2v_syntax::source::PredefinedKind::Int);
    let param = arena.alloc(SourceKind::Parameter {
        attribute_lists: Vec::new(),
        modifiers: s2v_syntax::source::ParamModifiers::OUT,
        ty: Some(ty),
        identifier: "value".to_string(),
        default: None,
    });
    let method = arena.alloc(SourceKind::MethodDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        return_type: ret,
        identifier: "TryGet".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        parameters: vec![param],
        body: Some(Vec::new()),
    });
    let class = class_decl(&mut arena, "Probe", Modifiers::PUBLIC, vec![method]);
    let root = arena.alloc(SourceKind::CompilationUnit {
        usings: vec![using],
        attribute_lists: Vec::new(),
        members: vec![class],
    });
    let tree = arena.freeze(root);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let imports = unit_imports(&out);
    assert_eq!(imports.len(), 1);
    let VbNode::ImportsStatement { name, .. } = &imports[0] else {
        panic!("expected an imports statement");
    };
    assert_eq!(**name, VbNode::dotted("System.Runtime.InteropServices"));
}

#[test]
fn batch_report_serializes_per_unit_outcomes() {
    let bad = bad_unit("Bad.cs");
    let model = SemanticModel::new();
    let outcome = translate_batch(&[(&bad, &model)]);

    let json = outcome.report.to_json();
    assert!(json.contains("\"Bad.cs\""));
    assert!(json.contains("Failed"));
}
