//! Shared fixtures: tiny source trees built by hand, the way a host
//! front-end would populate the arena.

#![allow(dead_code)]

use s2v_convert::{ConvertResult, Converter, SemanticModel, VbNode};
use s2v_syntax::source::{ConstValue, Modifiers, PredefinedKind, SourceKind};
use s2v_syntax::{NodeIndex, SourceArena, SourceTree};

pub fn int(arena: &mut SourceArena, value: i32) -> NodeIndex {
    arena.alloc(SourceKind::LiteralExpression {
        value: ConstValue::Int32(value),
    })
}

pub fn null(arena: &mut SourceArena) -> NodeIndex {
    arena.alloc(SourceKind::LiteralExpression {
        value: ConstValue::Null,
    })
}

pub fn ident(arena: &mut SourceArena, name: &str) -> NodeIndex {
    arena.alloc(SourceKind::IdentifierName {
        identifier: name.to_string(),
    })
}

pub fn predefined(arena: &mut SourceArena, keyword: PredefinedKind) -> NodeIndex {
    arena.alloc(SourceKind::PredefinedType { keyword })
}

pub fn expr_stmt(arena: &mut SourceArena, expression: NodeIndex) -> NodeIndex {
    arena.alloc(SourceKind::ExpressionStatement { expression })
}

pub fn block(arena: &mut SourceArena, statements: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(SourceKind::Block { statements })
}

/// `T name = init;` with a single declarator.
pub fn local_decl(
    arena: &mut SourceArena,
    ty: Option<NodeIndex>,
    name: &str,
    initializer: Option<NodeIndex>,
) -> NodeIndex {
    let declarator = arena.alloc(SourceKind::VariableDeclarator {
        identifier: name.to_string(),
        initializer,
    });
    let declaration = arena.alloc(SourceKind::VariableDeclaration {
        ty,
        declarators: vec![declarator],
    });
    arena.alloc(SourceKind::LocalDeclarationStatement {
        modifiers: Modifiers::empty(),
        declaration,
    })
}

/// `public void name() { body }`.
pub fn void_method(arena: &mut SourceArena, name: &str, body: Vec<NodeIndex>) -> NodeIndex {
    let return_type = predefined(arena, PredefinedKind::Void);
    arena.alloc(SourceKind::MethodDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        return_type,
        identifier: name.to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        parameters: Vec::new(),
        body: Some(body),
    })
}

pub fn class_decl(
    arena: &mut SourceArena,
    name: &str,
    modifiers: Modifiers,
    members: Vec<NodeIndex>,
) -> NodeIndex {
    arena.alloc(SourceKind::ClassDeclaration {
        attribute_lists: Vec::new(),
        modifiers,
        identifier: name.to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        base_types: Vec::new(),
        members,
    })
}

pub fn unit(arena: &mut SourceArena, members: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(SourceKind::CompilationUnit {
        usings: Vec::new(),
        attribute_lists: Vec::new(),
        members,
    })
}

/// A unit holding one public class with the given members.
pub fn class_unit(arena: SourceArena, members: Vec<NodeIndex>) -> SourceTree {
    let mut arena = arena;
    let class = class_decl(&mut arena, "Sample", Modifiers::PUBLIC, members);
    let root = unit(&mut arena, vec![class]);
    arena.freeze(root).with_unit_name("Sample.cs")
}

pub fn convert_expression(tree: &SourceTree, model: &SemanticModel) -> ConvertResult<VbNode> {
    Converter::new(tree, model).convert_expression(tree.root())
}

pub fn convert_statements(tree: &SourceTree, model: &SemanticModel) -> ConvertResult<Vec<VbNode>> {
    Converter::new(tree, model).convert_statements(tree.root())
}

// Assertion helpers peeling the output tree.

pub fn unit_members(node: &VbNode) -> &[VbNode] {
    match node.uncommented() {
        VbNode::CompilationUnit { members, .. } => members,
        other => panic!("expected a compilation unit, got {other:?}"),
    }
}

pub fn unit_imports(node: &VbNode) -> &[VbNode] {
    match node.uncommented() {
        VbNode::CompilationUnit { imports, .. } => imports,
        other => panic!("expected a compilation unit, got {other:?}"),
    }
}

pub fn type_members(node: &VbNode) -> &[VbNode] {
    match node.uncommented() {
        VbNode::TypeBlock { members, .. } => members,
        other => panic!("expected a type block, got {other:?}"),
    }
}

pub fn method_body(node: &VbNode) -> &[VbNode] {
    match node.uncommented() {
        VbNode::MethodBlock {
            body: Some(body), ..
        } => body,
        other => panic!("expected a method block with a body, got {other:?}"),
    }
}
