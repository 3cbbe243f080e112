//! C# source and VB target syntax trees for the s2v converter.
//!
//! The source side is an arena of tagged nodes addressed by `NodeIndex`,
//! built once by the host (or a test fixture) and immutable afterwards.
//! The target side is an owned tree of `VbNode` values constructed strictly
//! bottom-up by the converter.

pub mod source;
pub mod vb;

pub use source::{NodeIndex, SourceArena, SourceKind, SourceNode, SourceTree};
pub use vb::VbNode;
