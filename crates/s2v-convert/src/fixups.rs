//! Deferred fixup registry.
//!
//! Rules deep in a traversal discover emission requirements the current
//! node cannot satisfy: a compatibility helper that belongs in the
//! enclosing type, an import that belongs at the top of the unit. The
//! registry accumulates them; the driver drains them at the matching scope
//! boundary. One registry exists per translation unit and is never shared
//! across units.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use s2v_syntax::NodeIndex;

/// Per-unit accumulator for deferred emission requirements.
#[derive(Default)]
pub struct FixupRegistry {
    /// Types that need the inline-assignment helper injected. Keyed by the
    /// type declaration's identity so a type gets the helper at most once
    /// no matter how many expressions requested it.
    helper_types: FxHashSet<NodeIndex>,
    /// Imports required by the unit, in first-request order. At most one
    /// per distinct namespace.
    imports: IndexSet<String>,
}

impl FixupRegistry {
    pub fn new() -> FixupRegistry {
        FixupRegistry::default()
    }

    /// Request the inline-assignment helper for the given enclosing type.
    pub fn request_helper(&mut self, enclosing_type: NodeIndex) {
        self.helper_types.insert(enclosing_type);
    }

    /// Drain the helper request for one type. Returns whether a request was
    /// pending; the caller injects exactly one helper when it was.
    pub fn take_helper(&mut self, enclosing_type: NodeIndex) -> bool {
        self.helper_types.remove(&enclosing_type)
    }

    /// Request an additional import for the unit.
    pub fn request_import(&mut self, namespace: impl Into<String>) {
        self.imports.insert(namespace.into());
    }

    /// Drain all pending imports, in first-request order.
    pub fn drain_imports(&mut self) -> Vec<String> {
        self.imports.drain(..).collect()
    }

    /// Whether everything registered has been drained. The driver checks
    /// this at unit exit; leftovers mean a flush point was skipped.
    pub fn is_drained(&self) -> bool {
        self.helper_types.is_empty() && self.imports.is_empty()
    }
}
