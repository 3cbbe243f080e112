//! Arena storage for source nodes.
//!
//! Nodes live in a flat `Vec` and reference each other by `NodeIndex`.
//! The host (or a test fixture) allocates nodes bottom-up, then freezes the
//! arena into a `SourceTree`, which wires parent links and is immutable from
//! then on. `NodeIndex` doubles as the node's stable identity for semantic
//! lookups.

use rustc_hash::FxHashMap;
use s2v_common::CommentTrivia;

use super::kind::SourceKind;

/// Index of a node in a [`SourceArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One allocated source node.
#[derive(Clone, Debug)]
pub struct SourceNode {
    pub kind: SourceKind,
    /// Leading comment trivia, preserved best-effort in the output.
    pub leading_trivia: Vec<CommentTrivia>,
}

/// Growable node storage. Mutable only until frozen into a [`SourceTree`].
#[derive(Default, Debug)]
pub struct SourceArena {
    nodes: Vec<SourceNode>,
}

impl SourceArena {
    pub fn new() -> SourceArena {
        SourceArena::default()
    }

    pub fn with_capacity(capacity: usize) -> SourceArena {
        SourceArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a node and return its index.
    pub fn alloc(&mut self, kind: SourceKind) -> NodeIndex {
        let id = NodeIndex(u32::try_from(self.nodes.len()).expect("arena overflow"));
        self.nodes.push(SourceNode {
            kind,
            leading_trivia: Vec::new(),
        });
        id
    }

    /// Allocate a node carrying leading comment trivia.
    pub fn alloc_with_trivia(
        &mut self,
        kind: SourceKind,
        trivia: Vec<CommentTrivia>,
    ) -> NodeIndex {
        let id = self.alloc(kind);
        self.nodes[id.index()].leading_trivia = trivia;
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the arena into an immutable tree rooted at `root`.
    pub fn freeze(self, root: NodeIndex) -> SourceTree {
        SourceTree::new(self, root)
    }
}

/// An immutable, parent-linked source tree for one translation unit.
pub struct SourceTree {
    nodes: Vec<SourceNode>,
    root: NodeIndex,
    /// Host-supplied unit name, used in reports.
    pub unit_name: String,
    parents: FxHashMap<NodeIndex, NodeIndex>,
}

impl SourceTree {
    pub fn new(arena: SourceArena, root: NodeIndex) -> SourceTree {
        let mut tree = SourceTree {
            nodes: arena.nodes,
            root,
            unit_name: String::new(),
            parents: FxHashMap::default(),
        };
        tree.wire_parents(root);
        tree
    }

    pub fn with_unit_name(mut self, name: impl Into<String>) -> SourceTree {
        self.unit_name = name.into();
        self
    }

    fn wire_parents(&mut self, node: NodeIndex) {
        for child in self.nodes[node.index()].kind.children() {
            self.parents.insert(child, node);
            self.wire_parents(child);
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node(&self, id: NodeIndex) -> &SourceNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeIndex) -> &SourceKind {
        &self.nodes[id.index()].kind
    }

    pub fn leading_trivia(&self, id: NodeIndex) -> &[CommentTrivia] {
        &self.nodes[id.index()].leading_trivia
    }

    pub fn parent(&self, id: NodeIndex) -> Option<NodeIndex> {
        self.parents.get(&id).copied()
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(self.parent(id), move |&cur| self.parent(cur))
    }

    /// The nearest enclosing type declaration, if any.
    pub fn enclosing_type(&self, id: NodeIndex) -> Option<NodeIndex> {
        self.ancestors(id)
            .find(|&a| self.kind(a).is_type_declaration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ConstValue;

    #[test]
    fn freeze_wires_parent_links() {
        let mut arena = SourceArena::new();
        let lit = arena.alloc(SourceKind::LiteralExpression {
            value: ConstValue::Int32(1),
        });
        let ret = arena.alloc(SourceKind::ReturnStatement {
            expression: Some(lit),
        });
        let tree = arena.freeze(ret);

        assert_eq!(tree.parent(lit), Some(ret));
        assert_eq!(tree.parent(ret), None);
        assert_eq!(tree.ancestors(lit).collect::<Vec<_>>(), vec![ret]);
    }
}
