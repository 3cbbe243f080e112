//! The VB side: owned target nodes built bottom-up.

mod build;
mod node;
mod ops;

pub use node::{
    VbArgument, VbAsClause, VbDeclarator, VbElseIf, VbLit, VbNode, VbParameter,
};
pub use ops::{
    VbAccessorKind, VbAssignOp, VbAttributeTarget, VbBinaryOp, VbCastKeyword, VbLoopKind,
    VbModifier, VbPredefined, VbTypeKind, VbUnaryOp, VbVariance,
};
