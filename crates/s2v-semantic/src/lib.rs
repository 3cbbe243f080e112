//! Semantic model oracle for the s2v converter.
//!
//! The converter never resolves symbols itself: a host collaborator (the
//! compiler front-end that produced the tree) populates a `SemanticModel`
//! with resolved facts keyed by node identity, and translation rules query
//! it read-only. Lookups returning `None` mean "unresolved", and
//! type-directed rules must fall back to their most conservative
//! translation rather than fabricate a type.

use rustc_hash::FxHashMap;
use s2v_syntax::NodeIndex;

/// Classification of a resolved type against the fixed set of special
/// types that have dedicated conversion keywords in the target grammar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SpecialType {
    #[default]
    None,
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    DateTime,
    Void,
}

/// Resolved facts about the type of an expression or type syntax node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeFacts {
    pub special: SpecialType,
    /// Whether the (converted) type is a delegate type. Drives the
    /// add/remove-handler rewrite of `+=`/`-=`.
    pub is_delegate: bool,
    /// Whether the resolved symbol is an interface type. Drives the
    /// inherits/implements split of base lists.
    pub is_interface: bool,
}

impl TypeFacts {
    pub fn special(special: SpecialType) -> TypeFacts {
        TypeFacts {
            special,
            ..TypeFacts::default()
        }
    }

    pub fn delegate() -> TypeFacts {
        TypeFacts {
            is_delegate: true,
            ..TypeFacts::default()
        }
    }

    pub fn interface() -> TypeFacts {
        TypeFacts {
            is_interface: true,
            ..TypeFacts::default()
        }
    }
}

/// Resolved facts about a declared symbol.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolFacts {
    /// Whether the declared type is a static (all-members-static) container.
    /// Catches containers whose `static` modifier lives on another partial
    /// declaration of the same type.
    pub is_static_container: bool,
}

impl SymbolFacts {
    pub fn static_container() -> SymbolFacts {
        SymbolFacts {
            is_static_container: true,
        }
    }
}

/// Read-only oracle of resolved semantic facts, keyed by node identity.
#[derive(Default)]
pub struct SemanticModel {
    types: FxHashMap<NodeIndex, TypeFacts>,
    symbols: FxHashMap<NodeIndex, SymbolFacts>,
}

impl SemanticModel {
    pub fn new() -> SemanticModel {
        SemanticModel::default()
    }

    /// Record type facts for a node. Host-side population API.
    pub fn set_type(&mut self, node: NodeIndex, facts: TypeFacts) {
        self.types.insert(node, facts);
    }

    /// Record declared-symbol facts for a declaration node.
    pub fn set_symbol(&mut self, node: NodeIndex, facts: SymbolFacts) {
        self.symbols.insert(node, facts);
    }

    /// Resolved type facts of a node, if the host resolved it.
    pub fn type_of(&self, node: NodeIndex) -> Option<TypeFacts> {
        self.types.get(&node).copied()
    }

    /// Declared-symbol facts of a declaration node, if resolved.
    pub fn declared_symbol(&self, node: NodeIndex) -> Option<SymbolFacts> {
        self.symbols.get(&node).copied()
    }
}
