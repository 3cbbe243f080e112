//! Target tree nodes.
//!
//! `VbNode` is a tree of owned variants constructed strictly bottom-up by
//! the converter: a parent is only built from already-translated children.
//! Nodes are never mutated after construction; late fixups (helper
//! injection, extra imports) build a new enclosing node around the old
//! children.

use s2v_common::CommentTrivia;

use super::ops::{
    VbAccessorKind, VbAssignOp, VbAttributeTarget, VbBinaryOp, VbCastKeyword, VbLoopKind,
    VbModifier, VbPredefined, VbTypeKind, VbUnaryOp, VbVariance,
};

/// A rendered literal.
#[derive(Clone, Debug, PartialEq)]
pub enum VbLit {
    Nothing,
    Bool(bool),
    /// Numbers are rendered at translation time from the resolved constant
    /// value, suffix included, never copied from the source token.
    Number(String),
    Char(char),
    Str(String),
}

/// `As` clause: optional return-position attributes plus the type.
#[derive(Clone, Debug, PartialEq)]
pub struct VbAsClause {
    pub attributes: Vec<VbNode>,
    pub ty: Box<VbNode>,
}

impl VbAsClause {
    pub fn new(ty: VbNode) -> VbAsClause {
        VbAsClause {
            attributes: Vec::new(),
            ty: Box::new(ty),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<VbNode>) -> VbAsClause {
        self.attributes = attributes;
        self
    }
}

/// Call/creation argument, optionally named (`name:=value`).
#[derive(Clone, Debug, PartialEq)]
pub struct VbArgument {
    pub name: Option<String>,
    pub value: VbNode,
}

impl VbArgument {
    pub fn positional(value: VbNode) -> VbArgument {
        VbArgument { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: VbNode) -> VbArgument {
        VbArgument {
            name: Some(name.into()),
            value,
        }
    }
}

/// Declarator in a field/local/using declaration: `name As T = init`.
#[derive(Clone, Debug, PartialEq)]
pub struct VbDeclarator {
    pub name: String,
    pub as_clause: Option<VbAsClause>,
    pub initializer: Option<VbNode>,
}

/// Parameter: `<attrs> ByVal/ByRef name As T = default`.
#[derive(Clone, Debug, PartialEq)]
pub struct VbParameter {
    pub attributes: Vec<VbNode>,
    pub modifiers: Vec<VbModifier>,
    pub name: String,
    pub as_clause: Option<VbAsClause>,
    pub default: Option<Box<VbNode>>,
}

/// One `ElseIf` branch of a multi-line conditional.
#[derive(Clone, Debug, PartialEq)]
pub struct VbElseIf {
    pub condition: VbNode,
    pub statements: Vec<VbNode>,
}

/// A node in the target tree.
#[derive(Clone, Debug, PartialEq)]
pub enum VbNode {
    // =========================================================================
    // Compilation unit
    // =========================================================================
    CompilationUnit {
        imports: Vec<VbNode>,
        attributes: Vec<VbNode>,
        members: Vec<VbNode>,
    },
    ImportsStatement {
        alias: Option<String>,
        name: Box<VbNode>,
    },
    NamespaceBlock {
        name: Box<VbNode>,
        members: Vec<VbNode>,
    },

    // =========================================================================
    // Declarations
    // =========================================================================
    TypeBlock {
        kind: VbTypeKind,
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        identifier: String,
        type_parameters: Vec<VbNode>,
        inherits: Vec<VbNode>,
        implements: Vec<VbNode>,
        members: Vec<VbNode>,
    },
    EnumBlock {
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        identifier: String,
        underlying: Option<Box<VbNode>>,
        members: Vec<VbNode>,
    },
    EnumMember {
        attributes: Vec<VbNode>,
        identifier: String,
        value: Option<Box<VbNode>>,
    },
    DelegateStatement {
        is_function: bool,
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        identifier: String,
        type_parameters: Vec<VbNode>,
        parameters: Vec<VbParameter>,
        return_clause: Option<VbAsClause>,
    },
    FieldDeclaration {
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        declarators: Vec<VbDeclarator>,
    },
    MethodBlock {
        is_function: bool,
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        identifier: String,
        type_parameters: Vec<VbNode>,
        parameters: Vec<VbParameter>,
        return_clause: Option<VbAsClause>,
        /// `None` for bodyless statements (interface members).
        body: Option<Vec<VbNode>>,
    },
    ConstructorBlock {
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        parameters: Vec<VbParameter>,
        body: Vec<VbNode>,
    },
    PropertyBlock {
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        identifier: String,
        parameters: Vec<VbParameter>,
        as_clause: Option<VbAsClause>,
        /// `None` for auto-properties (statement form, no accessor blocks).
        accessors: Option<Vec<VbNode>>,
    },
    AccessorBlock {
        kind: VbAccessorKind,
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        parameter: Option<VbParameter>,
        body: Vec<VbNode>,
    },
    EventDeclaration {
        attributes: Vec<VbNode>,
        modifiers: Vec<VbModifier>,
        identifier: String,
        as_clause: Option<VbAsClause>,
        /// `None` for field-like events.
        accessors: Option<Vec<VbNode>>,
    },

    // =========================================================================
    // Generics / attributes
    // =========================================================================
    TypeParameter {
        variance: VbVariance,
        name: String,
        /// Inline constraint clause; empty means no clause.
        constraints: Vec<VbNode>,
    },
    NewConstraint,
    ClassConstraint,
    StructureConstraint,
    TypeConstraint(Box<VbNode>),
    AttributeList(Vec<VbNode>),
    Attribute {
        target: Option<VbAttributeTarget>,
        name: Box<VbNode>,
        arguments: Vec<VbArgument>,
    },

    // =========================================================================
    // Types
    // =========================================================================
    PredefinedType(VbPredefined),
    Identifier(String),
    GenericName {
        name: String,
        type_arguments: Vec<VbNode>,
    },
    QualifiedName {
        left: Box<VbNode>,
        right: Box<VbNode>,
    },
    ArrayType {
        element: Box<VbNode>,
        /// Rank of each specifier, outermost first.
        ranks: Vec<usize>,
    },

    // =========================================================================
    // Expressions
    // =========================================================================
    Literal(VbLit),
    Parenthesized(Box<VbNode>),
    Unary {
        op: VbUnaryOp,
        operand: Box<VbNode>,
    },
    Binary {
        op: VbBinaryOp,
        left: Box<VbNode>,
        right: Box<VbNode>,
    },
    /// `CInt(expr)` and friends.
    PredefinedCast {
        keyword: VbCastKeyword,
        expr: Box<VbNode>,
    },
    /// `CType(expr, T)`, the runtime-checked generic cast.
    CTypeExpression {
        expr: Box<VbNode>,
        ty: Box<VbNode>,
    },
    /// `TryCast(expr, T)`.
    TryCastExpression {
        expr: Box<VbNode>,
        ty: Box<VbNode>,
    },
    /// `If(cond, a, b)`.
    TernaryIf {
        condition: Box<VbNode>,
        when_true: Box<VbNode>,
        when_false: Box<VbNode>,
    },
    /// `If(a, b)`, the null-coalescing form.
    BinaryIf {
        expr: Box<VbNode>,
        fallback: Box<VbNode>,
    },
    MemberAccess {
        base: Box<VbNode>,
        name: Box<VbNode>,
    },
    /// `base?.name`.
    ConditionalAccess {
        base: Box<VbNode>,
        when_not_null: Box<VbNode>,
    },
    Invocation {
        callee: Box<VbNode>,
        arguments: Vec<VbArgument>,
    },
    NameOf(Box<VbNode>),
    MeExpression,
    MyBaseExpression,
    ObjectCreation {
        ty: Box<VbNode>,
        arguments: Vec<VbArgument>,
        initializer: Option<Box<VbNode>>,
    },
    ArrayCreation {
        element: Box<VbNode>,
        /// Explicit upper bounds of the first rank, already reduced by one
        /// from the source sizes.
        bounds: Vec<VbArgument>,
        /// Remaining rank specifiers.
        ranks: Vec<usize>,
        initializer: Option<Box<VbNode>>,
    },
    CollectionInitializer(Vec<VbNode>),
    ObjectMemberInitializer(Vec<(String, VbNode)>),

    // =========================================================================
    // Statements
    // =========================================================================
    LocalDeclaration {
        modifiers: Vec<VbModifier>,
        declarators: Vec<VbDeclarator>,
    },
    Assignment {
        op: VbAssignOp,
        target: Box<VbNode>,
        value: Box<VbNode>,
    },
    AddHandlerStatement {
        event: Box<VbNode>,
        handler: Box<VbNode>,
    },
    RemoveHandlerStatement {
        event: Box<VbNode>,
        handler: Box<VbNode>,
    },
    ExpressionStatement(Box<VbNode>),
    /// A blank statement. Emitted where a construct vanishes but its
    /// comment trivia must survive.
    EmptyStatement,
    MultiLineIf {
        condition: Box<VbNode>,
        statements: Vec<VbNode>,
        else_ifs: Vec<VbElseIf>,
        else_block: Option<Vec<VbNode>>,
    },
    /// `If cond Then stmt [Else stmt]` on one line.
    SingleLineIf {
        condition: Box<VbNode>,
        statement: Box<VbNode>,
        else_statement: Option<Box<VbNode>>,
    },
    WhileBlock {
        condition: Box<VbNode>,
        statements: Vec<VbNode>,
    },
    /// `Do ... Loop While cond`.
    DoLoopWhileBlock {
        statements: Vec<VbNode>,
        condition: Box<VbNode>,
    },
    ForBlock {
        variable: String,
        from: Box<VbNode>,
        to: Box<VbNode>,
        step: Option<Box<VbNode>>,
        statements: Vec<VbNode>,
    },
    ForEachBlock {
        variable: String,
        as_clause: Option<VbAsClause>,
        expression: Box<VbNode>,
        statements: Vec<VbNode>,
    },
    UsingBlock {
        expression: Option<Box<VbNode>>,
        declarators: Vec<VbDeclarator>,
        statements: Vec<VbNode>,
    },
    ReturnStatement(Option<Box<VbNode>>),
    ThrowStatement(Option<Box<VbNode>>),
    ExitStatement(VbLoopKind),
    ContinueStatement(VbLoopKind),

    /// A node wrapped with comment trivia. Wrapping replaces in-place
    /// mutation: the inner node is untouched.
    Commented {
        leading: Vec<CommentTrivia>,
        trailing: Vec<CommentTrivia>,
        node: Box<VbNode>,
    },
}
