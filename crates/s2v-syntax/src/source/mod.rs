//! The C# side: arena-allocated source nodes.

mod arena;
mod kind;
mod ops;

pub use arena::{NodeIndex, SourceArena, SourceNode, SourceTree};
pub use kind::{AccessorKind, AttributeTarget, InitializerKind, SourceKind, Variance};
pub use ops::{
    AssignOp, BinaryOp, ConstValue, Modifiers, ParamModifiers, PostfixOp, PredefinedKind, UnaryOp,
};
