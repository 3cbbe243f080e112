//! The closed union of source node kinds.
//!
//! Every construct the converter understands is a variant here; the driver
//! matches exhaustively, so adding a variant forces a translation rule.
//! Hosts mark constructs they cannot model as `Opaque`, which the driver
//! reports as an unsupported-construct failure naming the kind.

use super::arena::NodeIndex;
use super::ops::{
    AssignOp, BinaryOp, ConstValue, Modifiers, ParamModifiers, PostfixOp, PredefinedKind, UnaryOp,
};

/// Accessor kinds of property/event declarations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

/// Attachment target of an attribute list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeTarget {
    None,
    Assembly,
    /// Attributes targeting the return value; repositioned during
    /// translation.
    Return,
}

/// Variance annotation on a type parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variance {
    None,
    In,
    Out,
}

/// Flavor of a brace initializer expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitializerKind {
    Object,
    Array,
}

/// A source syntax node kind with its children.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceKind {
    // =========================================================================
    // Compilation unit
    // =========================================================================
    CompilationUnit {
        usings: Vec<NodeIndex>,
        attribute_lists: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    UsingDirective {
        alias: Option<String>,
        name: NodeIndex,
    },
    NamespaceDeclaration {
        name: NodeIndex,
        members: Vec<NodeIndex>,
    },

    // =========================================================================
    // Type declarations
    // =========================================================================
    ClassDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        identifier: String,
        type_parameters: Vec<NodeIndex>,
        constraint_clauses: Vec<NodeIndex>,
        base_types: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    StructDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        identifier: String,
        type_parameters: Vec<NodeIndex>,
        constraint_clauses: Vec<NodeIndex>,
        base_types: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    InterfaceDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        identifier: String,
        type_parameters: Vec<NodeIndex>,
        constraint_clauses: Vec<NodeIndex>,
        base_types: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    EnumDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        identifier: String,
        base_type: Option<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    EnumMemberDeclaration {
        attribute_lists: Vec<NodeIndex>,
        identifier: String,
        value: Option<NodeIndex>,
    },
    DelegateDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        identifier: String,
        type_parameters: Vec<NodeIndex>,
        parameters: Vec<NodeIndex>,
        return_type: NodeIndex,
    },

    // =========================================================================
    // Member declarations
    // =========================================================================
    FieldDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        declaration: NodeIndex,
    },
    /// `T a = x, b`; the type is `None` for `var`.
    VariableDeclaration {
        ty: Option<NodeIndex>,
        declarators: Vec<NodeIndex>,
    },
    VariableDeclarator {
        identifier: String,
        initializer: Option<NodeIndex>,
    },
    ConstructorDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        parameters: Vec<NodeIndex>,
        body: Vec<NodeIndex>,
    },
    DestructorDeclaration {
        attribute_lists: Vec<NodeIndex>,
        body: Vec<NodeIndex>,
    },
    MethodDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        return_type: NodeIndex,
        identifier: String,
        type_parameters: Vec<NodeIndex>,
        constraint_clauses: Vec<NodeIndex>,
        parameters: Vec<NodeIndex>,
        /// `None` for bodyless (interface/abstract) members.
        body: Option<Vec<NodeIndex>>,
    },
    PropertyDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        ty: NodeIndex,
        identifier: String,
        accessors: Vec<NodeIndex>,
    },
    IndexerDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        ty: NodeIndex,
        parameters: Vec<NodeIndex>,
        accessors: Vec<NodeIndex>,
    },
    EventFieldDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        declaration: NodeIndex,
    },
    EventDeclaration {
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        ty: NodeIndex,
        identifier: String,
        accessors: Vec<NodeIndex>,
    },
    AccessorDeclaration {
        kind: AccessorKind,
        attribute_lists: Vec<NodeIndex>,
        modifiers: Modifiers,
        /// `None` for auto-property accessors.
        body: Option<Vec<NodeIndex>>,
    },
    Parameter {
        attribute_lists: Vec<NodeIndex>,
        modifiers: ParamModifiers,
        /// `None` for implicitly typed lambda parameters.
        ty: Option<NodeIndex>,
        identifier: String,
        default: Option<NodeIndex>,
    },

    // =========================================================================
    // Attributes
    // =========================================================================
    AttributeList {
        target: AttributeTarget,
        attributes: Vec<NodeIndex>,
    },
    Attribute {
        name: NodeIndex,
        arguments: Vec<NodeIndex>,
    },
    AttributeArgument {
        name: Option<String>,
        expression: NodeIndex,
    },

    // =========================================================================
    // Generics
    // =========================================================================
    TypeParameter {
        variance: Variance,
        identifier: String,
    },
    /// `where T : ...`. The clause references the parameter node it
    /// constrains by identity, not by spelling.
    ConstraintClause {
        parameter: NodeIndex,
        constraints: Vec<NodeIndex>,
    },
    ClassConstraint,
    StructConstraint,
    NewConstraint,
    TypeConstraint {
        ty: NodeIndex,
    },

    // =========================================================================
    // Type syntax
    // =========================================================================
    PredefinedType {
        keyword: PredefinedKind,
    },
    IdentifierName {
        identifier: String,
    },
    GenericName {
        identifier: String,
        type_arguments: Vec<NodeIndex>,
    },
    QualifiedName {
        left: NodeIndex,
        right: NodeIndex,
    },
    ArrayType {
        element_type: NodeIndex,
        rank_specifiers: Vec<NodeIndex>,
    },
    ArrayRankSpecifier {
        rank: usize,
        /// Explicit dimension sizes; empty when omitted (`[]`).
        sizes: Vec<NodeIndex>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    Block {
        statements: Vec<NodeIndex>,
    },
    LocalDeclarationStatement {
        modifiers: Modifiers,
        declaration: NodeIndex,
    },
    ExpressionStatement {
        expression: NodeIndex,
    },
    IfStatement {
        condition: NodeIndex,
        statement: NodeIndex,
        /// The `else` body; an `IfStatement` here forms an else-if chain.
        else_branch: Option<NodeIndex>,
    },
    WhileStatement {
        condition: NodeIndex,
        statement: NodeIndex,
    },
    DoStatement {
        statement: NodeIndex,
        condition: NodeIndex,
    },
    ForStatement {
        declaration: Option<NodeIndex>,
        initializers: Vec<NodeIndex>,
        condition: Option<NodeIndex>,
        incrementors: Vec<NodeIndex>,
        statement: NodeIndex,
    },
    ForEachStatement {
        /// `None` for `var`.
        ty: Option<NodeIndex>,
        identifier: String,
        expression: NodeIndex,
        statement: NodeIndex,
    },
    UsingStatement {
        declaration: Option<NodeIndex>,
        expression: Option<NodeIndex>,
        statement: NodeIndex,
    },
    ReturnStatement {
        expression: Option<NodeIndex>,
    },
    ThrowStatement {
        expression: Option<NodeIndex>,
    },
    BreakStatement,
    ContinueStatement,
    CheckedStatement {
        checked: bool,
        block: NodeIndex,
    },

    // =========================================================================
    // Expressions
    // =========================================================================
    LiteralExpression {
        value: ConstValue,
    },
    ParenthesizedExpression {
        expression: NodeIndex,
    },
    PrefixUnaryExpression {
        operator: UnaryOp,
        operand: NodeIndex,
    },
    PostfixUnaryExpression {
        operator: PostfixOp,
        operand: NodeIndex,
    },
    AssignmentExpression {
        operator: AssignOp,
        left: NodeIndex,
        right: NodeIndex,
    },
    BinaryExpression {
        operator: BinaryOp,
        left: NodeIndex,
        right: NodeIndex,
    },
    CastExpression {
        ty: NodeIndex,
        expression: NodeIndex,
    },
    ConditionalExpression {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    ConditionalAccessExpression {
        expression: NodeIndex,
        when_not_null: NodeIndex,
    },
    MemberAccessExpression {
        expression: NodeIndex,
        name: NodeIndex,
    },
    /// `.Name` inside a conditional access.
    MemberBindingExpression {
        name: NodeIndex,
    },
    InvocationExpression {
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
    },
    Argument {
        name: Option<String>,
        expression: NodeIndex,
    },
    ObjectCreationExpression {
        ty: NodeIndex,
        arguments: Vec<NodeIndex>,
        initializer: Option<NodeIndex>,
    },
    ArrayCreationExpression {
        array_type: NodeIndex,
        initializer: Option<NodeIndex>,
    },
    InitializerExpression {
        kind: InitializerKind,
        expressions: Vec<NodeIndex>,
    },
    DefaultExpression {
        ty: NodeIndex,
    },
    ThisExpression,
    BaseExpression,

    /// A construct the host could not model. Always fatal to translate.
    Opaque {
        description: String,
    },
}

impl SourceKind {
    /// Stable name used in diagnostics ("`<kind>` not implemented").
    pub fn name(&self) -> &str {
        match self {
            SourceKind::CompilationUnit { .. } => "CompilationUnit",
            SourceKind::UsingDirective { .. } => "UsingDirective",
            SourceKind::NamespaceDeclaration { .. } => "NamespaceDeclaration",
            SourceKind::ClassDeclaration { .. } => "ClassDeclaration",
            SourceKind::StructDeclaration { .. } => "StructDeclaration",
            SourceKind::InterfaceDeclaration { .. } => "InterfaceDeclaration",
            SourceKind::EnumDeclaration { .. } => "EnumDeclaration",
            SourceKind::EnumMemberDeclaration { .. } => "EnumMemberDeclaration",
            SourceKind::DelegateDeclaration { .. } => "DelegateDeclaration",
            SourceKind::FieldDeclaration { .. } => "FieldDeclaration",
            SourceKind::VariableDeclaration { .. } => "VariableDeclaration",
            SourceKind::VariableDeclarator { .. } => "VariableDeclarator",
            SourceKind::ConstructorDeclaration { .. } => "ConstructorDeclaration",
            SourceKind::DestructorDeclaration { .. } => "DestructorDeclaration",
            SourceKind::MethodDeclaration { .. } => "MethodDeclaration",
            SourceKind::PropertyDeclaration { .. } => "PropertyDeclaration",
            SourceKind::IndexerDeclaration { .. } => "IndexerDeclaration",
            SourceKind::EventFieldDeclaration { .. } => "EventFieldDeclaration",
            SourceKind::EventDeclaration { .. } => "EventDeclaration",
            SourceKind::AccessorDeclaration { .. } => "AccessorDeclaration",
            SourceKind::Parameter { .. } => "Parameter",
            SourceKind::AttributeList { .. } => "AttributeList",
            SourceKind::Attribute { .. } => "Attribute",
            SourceKind::AttributeArgument { .. } => "AttributeArgument",
            SourceKind::TypeParameter { .. } => "TypeParameter",
            SourceKind::ConstraintClause { .. } => "ConstraintClause",
            SourceKind::ClassConstraint => "ClassConstraint",
            SourceKind::StructConstraint => "StructConstraint",
            SourceKind::NewConstraint => "NewConstraint",
            SourceKind::TypeConstraint { .. } => "TypeConstraint",
            SourceKind::PredefinedType { .. } => "PredefinedType",
            SourceKind::IdentifierName { .. } => "IdentifierName",
            SourceKind::GenericName { .. } => "GenericName",
            SourceKind::QualifiedName { .. } => "QualifiedName",
            SourceKind::ArrayType { .. } => "ArrayType",
            SourceKind::ArrayRankSpecifier { .. } => "ArrayRankSpecifier",
            SourceKind::Block { .. } => "Block",
            SourceKind::LocalDeclarationStatement { .. } => "LocalDeclarationStatement",
            SourceKind::ExpressionStatement { .. } => "ExpressionStatement",
            SourceKind::IfStatement { .. } => "IfStatement",
            SourceKind::WhileStatement { .. } => "WhileStatement",
            SourceKind::DoStatement { .. } => "DoStatement",
            SourceKind::ForStatement { .. } => "ForStatement",
            SourceKind::ForEachStatement { .. } => "ForEachStatement",
            SourceKind::UsingStatement { .. } => "UsingStatement",
            SourceKind::ReturnStatement { .. } => "ReturnStatement",
            SourceKind::ThrowStatement { .. } => "ThrowStatement",
            SourceKind::BreakStatement => "BreakStatement",
            SourceKind::ContinueStatement => "ContinueStatement",
            SourceKind::CheckedStatement { .. } => "CheckedStatement",
            SourceKind::LiteralExpression { .. } => "LiteralExpression",
            SourceKind::ParenthesizedExpression { .. } => "ParenthesizedExpression",
            SourceKind::PrefixUnaryExpression { .. } => "PrefixUnaryExpression",
            SourceKind::PostfixUnaryExpression { .. } => "PostfixUnaryExpression",
            SourceKind::AssignmentExpression { .. } => "AssignmentExpression",
            SourceKind::BinaryExpression { .. } => "BinaryExpression",
            SourceKind::CastExpression { .. } => "CastExpression",
            SourceKind::ConditionalExpression { .. } => "ConditionalExpression",
            SourceKind::ConditionalAccessExpression { .. } => "ConditionalAccessExpression",
            SourceKind::MemberAccessExpression { .. } => "MemberAccessExpression",
            SourceKind::MemberBindingExpression { .. } => "MemberBindingExpression",
            SourceKind::InvocationExpression { .. } => "InvocationExpression",
            SourceKind::Argument { .. } => "Argument",
            SourceKind::ObjectCreationExpression { .. } => "ObjectCreationExpression",
            SourceKind::ArrayCreationExpression { .. } => "ArrayCreationExpression",
            SourceKind::InitializerExpression { .. } => "InitializerExpression",
            SourceKind::DefaultExpression { .. } => "DefaultExpression",
            SourceKind::ThisExpression => "ThisExpression",
            SourceKind::BaseExpression => "BaseExpression",
            SourceKind::Opaque { description } => description,
        }
    }

    /// Whether this kind is one of the loop statements.
    pub fn is_loop(&self) -> bool {
        matches!(
            self,
            SourceKind::WhileStatement { .. }
                | SourceKind::DoStatement { .. }
                | SourceKind::ForStatement { .. }
                | SourceKind::ForEachStatement { .. }
        )
    }

    /// Whether this kind is a type declaration that can enclose members.
    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            SourceKind::ClassDeclaration { .. }
                | SourceKind::StructDeclaration { .. }
                | SourceKind::InterfaceDeclaration { .. }
                | SourceKind::EnumDeclaration { .. }
        )
    }

    /// All child node indices, in source order. Used to wire parent links
    /// when a tree is frozen.
    pub fn children(&self) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        self.collect_children(&mut out);
        out
    }

    fn collect_children(&self, out: &mut Vec<NodeIndex>) {
        fn push(out: &mut Vec<NodeIndex>, id: &NodeIndex) {
            out.push(*id);
        }
        fn push_opt(out: &mut Vec<NodeIndex>, id: &Option<NodeIndex>) {
            if let Some(id) = id {
                out.push(*id);
            }
        }
        fn push_all(out: &mut Vec<NodeIndex>, ids: &[NodeIndex]) {
            out.extend_from_slice(ids);
        }
        fn push_opt_all(out: &mut Vec<NodeIndex>, ids: &Option<Vec<NodeIndex>>) {
            if let Some(ids) = ids {
                out.extend_from_slice(ids);
            }
        }

        match self {
            SourceKind::CompilationUnit {
                usings,
                attribute_lists,
                members,
            } => {
                push_all(out, usings);
                push_all(out, attribute_lists);
                push_all(out, members);
            }
            SourceKind::UsingDirective { name, .. } => push(out, name),
            SourceKind::NamespaceDeclaration { name, members } => {
                push(out, name);
                push_all(out, members);
            }
            SourceKind::ClassDeclaration {
                attribute_lists,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
                ..
            }
            | SourceKind::StructDeclaration {
                attribute_lists,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
                ..
            }
            | SourceKind::InterfaceDeclaration {
                attribute_lists,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
                ..
            } => {
                push_all(out, attribute_lists);
                push_all(out, type_parameters);
                push_all(out, constraint_clauses);
                push_all(out, base_types);
                push_all(out, members);
            }
            SourceKind::EnumDeclaration {
                attribute_lists,
                base_type,
                members,
                ..
            } => {
                push_all(out, attribute_lists);
                push_opt(out, base_type);
                push_all(out, members);
            }
            SourceKind::EnumMemberDeclaration {
                attribute_lists,
                value,
                ..
            } => {
                push_all(out, attribute_lists);
                push_opt(out, value);
            }
            SourceKind::DelegateDeclaration {
                attribute_lists,
                type_parameters,
                parameters,
                return_type,
                ..
            } => {
                push_all(out, attribute_lists);
                push_all(out, type_parameters);
                push_all(out, parameters);
                push(out, return_type);
            }
            SourceKind::FieldDeclaration {
                attribute_lists,
                declaration,
                ..
            }
            | SourceKind::EventFieldDeclaration {
                attribute_lists,
                declaration,
                ..
            } => {
                push_all(out, attribute_lists);
                push(out, declaration);
            }
            SourceKind::VariableDeclaration { ty, declarators } => {
                push_opt(out, ty);
                push_all(out, declarators);
            }
            SourceKind::VariableDeclarator { initializer, .. } => push_opt(out, initializer),
            SourceKind::ConstructorDeclaration {
                attribute_lists,
                parameters,
                body,
                ..
            } => {
                push_all(out, attribute_lists);
                push_all(out, parameters);
                push_all(out, body);
            }
            SourceKind::DestructorDeclaration {
                attribute_lists,
                body,
            } => {
                push_all(out, attribute_lists);
                push_all(out, body);
            }
            SourceKind::MethodDeclaration {
                attribute_lists,
                return_type,
                type_parameters,
                constraint_clauses,
                parameters,
                body,
                ..
            } => {
                push_all(out, attribute_lists);
                push(out, return_type);
                push_all(out, type_parameters);
                push_all(out, constraint_clauses);
                push_all(out, parameters);
                push_opt_all(out, body);
            }
            SourceKind::PropertyDeclaration {
                attribute_lists,
                ty,
                accessors,
                ..
            }
            | SourceKind::EventDeclaration {
                attribute_lists,
                ty,
                accessors,
                ..
            } => {
                push_all(out, attribute_lists);
                push(out, ty);
                push_all(out, accessors);
            }
            SourceKind::IndexerDeclaration {
                attribute_lists,
                ty,
                parameters,
                accessors,
                ..
            } => {
                push_all(out, attribute_lists);
                push(out, ty);
                push_all(out, parameters);
                push_all(out, accessors);
            }
            SourceKind::AccessorDeclaration {
                attribute_lists,
                body,
                ..
            } => {
                push_all(out, attribute_lists);
                push_opt_all(out, body);
            }
            SourceKind::Parameter {
                attribute_lists,
                ty,
                default,
                ..
            } => {
                push_all(out, attribute_lists);
                push_opt(out, ty);
                push_opt(out, default);
            }
            SourceKind::AttributeList { attributes, .. } => push_all(out, attributes),
            SourceKind::Attribute { name, arguments } => {
                push(out, name);
                push_all(out, arguments);
            }
            SourceKind::AttributeArgument { expression, .. } => push(out, expression),
            SourceKind::TypeParameter { .. } => {}
            // `parameter` is an identity reference to a node owned by the
            // enclosing declaration, not a child of the clause.
            SourceKind::ConstraintClause { constraints, .. } => push_all(out, constraints),
            SourceKind::ClassConstraint
            | SourceKind::StructConstraint
            | SourceKind::NewConstraint => {}
            SourceKind::TypeConstraint { ty } => push(out, ty),
            SourceKind::PredefinedType { .. } | SourceKind::IdentifierName { .. } => {}
            SourceKind::GenericName { type_arguments, .. } => push_all(out, type_arguments),
            SourceKind::QualifiedName { left, right } => {
                push(out, left);
                push(out, right);
            }
            SourceKind::ArrayType {
                element_type,
                rank_specifiers,
            } => {
                push(out, element_type);
                push_all(out, rank_specifiers);
            }
            SourceKind::ArrayRankSpecifier { sizes, .. } => push_all(out, sizes),
            SourceKind::Block { statements } => push_all(out, statements),
            SourceKind::LocalDeclarationStatement { declaration, .. } => push(out, declaration),
            SourceKind::ExpressionStatement { expression } => push(out, expression),
            SourceKind::IfStatement {
                condition,
                statement,
                else_branch,
            } => {
                push(out, condition);
                push(out, statement);
                push_opt(out, else_branch);
            }
            SourceKind::WhileStatement {
                condition,
                statement,
            } => {
                push(out, condition);
                push(out, statement);
            }
            SourceKind::DoStatement {
                statement,
                condition,
            } => {
                push(out, statement);
                push(out, condition);
            }
            SourceKind::ForStatement {
                declaration,
                initializers,
                condition,
                incrementors,
                statement,
            } => {
                push_opt(out, declaration);
                push_all(out, initializers);
                push_opt(out, condition);
                push_all(out, incrementors);
                push(out, statement);
            }
            SourceKind::ForEachStatement {
                ty,
                expression,
                statement,
                ..
            } => {
                push_opt(out, ty);
                push(out, expression);
                push(out, statement);
            }
            SourceKind::UsingStatement {
                declaration,
                expression,
                statement,
            } => {
                push_opt(out, declaration);
                push_opt(out, expression);
                push(out, statement);
            }
            SourceKind::ReturnStatement { expression }
            | SourceKind::ThrowStatement { expression } => push_opt(out, expression),
            SourceKind::BreakStatement | SourceKind::ContinueStatement => {}
            SourceKind::CheckedStatement { block, .. } => push(out, block),
            SourceKind::LiteralExpression { .. } => {}
            SourceKind::ParenthesizedExpression { expression } => push(out, expression),
            SourceKind::PrefixUnaryExpression { operand, .. }
            | SourceKind::PostfixUnaryExpression { operand, .. } => push(out, operand),
            SourceKind::AssignmentExpression { left, right, .. }
            | SourceKind::BinaryExpression { left, right, .. } => {
                push(out, left);
                push(out, right);
            }
            SourceKind::CastExpression { ty, expression } => {
                push(out, ty);
                push(out, expression);
            }
            SourceKind::ConditionalExpression {
                condition,
                when_true,
                when_false,
            } => {
                push(out, condition);
                push(out, when_true);
                push(out, when_false);
            }
            SourceKind::ConditionalAccessExpression {
                expression,
                when_not_null,
            } => {
                push(out, expression);
                push(out, when_not_null);
            }
            SourceKind::MemberAccessExpression { expression, name } => {
                push(out, expression);
                push(out, name);
            }
            SourceKind::MemberBindingExpression { name } => push(out, name),
            SourceKind::InvocationExpression {
                expression,
                arguments,
            } => {
                push(out, expression);
                push_all(out, arguments);
            }
            SourceKind::Argument { expression, .. } => push(out, expression),
            SourceKind::ObjectCreationExpression {
                ty,
                arguments,
                initializer,
            } => {
                push(out, ty);
                push_all(out, arguments);
                push_opt(out, initializer);
            }
            SourceKind::ArrayCreationExpression {
                array_type,
                initializer,
            } => {
                push(out, array_type);
                push_opt(out, initializer);
            }
            SourceKind::InitializerExpression { expressions, .. } => push_all(out, expressions),
            SourceKind::DefaultExpression { ty } => push(out, ty),
            SourceKind::ThisExpression | SourceKind::BaseExpression => {}
            SourceKind::Opaque { .. } => {}
        }
    }
}
