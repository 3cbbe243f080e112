//! Tokens of the target grammar.

/// Declaration and parameter modifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbModifier {
    Public,
    Private,
    Protected,
    Friend,
    Shared,
    ReadOnly,
    WriteOnly,
    Const,
    MustInherit,
    NotInheritable,
    MustOverride,
    NotOverridable,
    Overridable,
    Overrides,
    Partial,
    Shadows,
    Async,
    Dim,
    ByVal,
    ByRef,
    Optional,
    ParamArray,
    Default,
}

/// Which block keyword a type declaration uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbTypeKind {
    Class,
    /// All-members-shared container; `Shared` is implied on members.
    Module,
    Structure,
    Interface,
}

/// Accessor block kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbAccessorKind {
    Get,
    Set,
    AddHandler,
    RemoveHandler,
}

/// Attribute attachment targets that survive translation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbAttributeTarget {
    Assembly,
}

/// Type parameter variance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbVariance {
    None,
    In,
    Out,
}

/// Predefined type keywords.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbPredefined {
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Short,
    UShort,
    Integer,
    UInteger,
    Long,
    ULong,
    Decimal,
    Single,
    Double,
    String,
    Date,
}

/// Dedicated primitive-conversion keywords. One keyword per special type;
/// anything else goes through `CType`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbCastKeyword {
    CObj,
    CBool,
    CChar,
    CSByte,
    CByte,
    CShort,
    CUShort,
    CInt,
    CUInt,
    CLng,
    CULng,
    CDec,
    CSng,
    CDbl,
    CStr,
    CDate,
}

/// Binary expression operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbBinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
    And,
    Or,
    Xor,
    AndAlso,
    OrElse,
    Equals,
    NotEquals,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    /// Reference identity test, the only equality with defined `Nothing`
    /// semantics for all operand types.
    Is,
    IsNot,
}

/// Prefix unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbUnaryOp {
    Plus,
    Minus,
    Not,
}

/// Assignment statement operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbAssignOp {
    Simple,
    Add,
    Subtract,
    Multiply,
    Divide,
    LeftShift,
    RightShift,
}

/// Loop kind named in `Exit`/`Continue` statements. The target grammar
/// requires the loop keyword in the statement itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbLoopKind {
    Do,
    While,
    For,
}
