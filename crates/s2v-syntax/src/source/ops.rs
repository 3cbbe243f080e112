//! Operators, modifiers and constant values of the source grammar.

use bitflags::bitflags;

/// Binary expression operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LogicalAnd,
    LogicalOr,
    Equals,
    NotEquals,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    /// `a ?? b`
    Coalesce,
    /// `a as T`
    As,
}

/// Prefix unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    /// `!x`
    LogicalNot,
    /// `~x`
    BitwiseNot,
    /// `++x`
    Increment,
    /// `--x`
    Decrement,
}

/// Postfix unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PostfixOp {
    /// `x++`
    Increment,
    /// `x--`
    Decrement,
}

/// Assignment operators (simple and compound).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    Xor,
    LeftShift,
    RightShift,
}

bitflags! {
    /// Declaration modifiers. The set is flat; which combinations are legal
    /// is the parser collaborator's problem.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const INTERNAL = 1 << 3;
        const STATIC = 1 << 4;
        const READONLY = 1 << 5;
        const CONST = 1 << 6;
        const ABSTRACT = 1 << 7;
        const SEALED = 1 << 8;
        const VIRTUAL = 1 << 9;
        const OVERRIDE = 1 << 10;
        const PARTIAL = 1 << 11;
        const NEW = 1 << 12;
        const ASYNC = 1 << 13;
    }
}

bitflags! {
    /// Parameter modifiers.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct ParamModifiers: u32 {
        /// Implicit receiver parameter of an extension method.
        const THIS = 1 << 0;
        const REF = 1 << 1;
        const OUT = 1 << 2;
        const PARAMS = 1 << 3;
    }
}

/// Predefined (keyword) types of the source grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PredefinedKind {
    Object,
    Bool,
    Char,
    SByte,
    Byte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Decimal,
    Float,
    Double,
    String,
    Void,
}

/// A resolved literal constant. Literal nodes carry the value, not the
/// source token text, so the target rendering never copies source spellings.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstValue {
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    /// Decimal values keep their exact digits.
    Decimal(String),
    Char(char),
    Str(String),
}

impl ConstValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConstValue::Int32(v) => Some(i64::from(*v)),
            ConstValue::UInt32(v) => Some(i64::from(*v)),
            ConstValue::Int64(v) => Some(*v),
            ConstValue::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }
}
