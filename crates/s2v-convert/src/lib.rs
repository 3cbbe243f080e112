//! C#-to-VB syntax tree transducer core.
//!
//! Given a fully parsed, semantically resolved C# tree ([`SourceTree`] +
//! [`SemanticModel`]) this crate produces an equivalent VB tree ([`VbNode`]).
//! Translation is a strict bottom-up rewrite: every rule receives
//! already-translated children and assembles a fresh target parent node.
//!
//! # Architecture
//!
//! - [`driver`] dispatches each source node to its rule and owns traversal
//!   order and fixup flush points.
//! - [`expressions`], [`statements`] and [`declarations`] hold the rule
//!   families; type-directed decisions consult the semantic model.
//! - [`tokens`] is the pure lexical mapping layer (operators, modifiers,
//!   keyword-colliding identifiers).
//! - [`fixups`] accumulates emission requirements discovered mid-traversal
//!   (the inline-assignment helper, extra imports) until the driver drains
//!   them at the nearest enclosing type or unit boundary.

mod declarations;
mod driver;
mod expressions;
mod fixups;
mod helper;
mod statements;
mod tokens;

pub use driver::{translate_batch, translate_unit, BatchOutcome, Converter};
pub use fixups::FixupRegistry;
pub use helper::{inline_assign_helper, INLINE_ASSIGN_HELPER_NAME};
pub use tokens::{convert_identifier, TokenContext};

pub use s2v_common::{BatchReport, ConvertError, ConvertResult, UnitOutcome, UnitReport};
pub use s2v_semantic::{SemanticModel, SpecialType, SymbolFacts, TypeFacts};
pub use s2v_syntax::{SourceTree, VbNode};
