//! Traversal driver and batch entry points.
//!
//! `translate_unit` converts one resolved source tree into a target tree;
//! `translate_batch` runs many units and reports per-unit outcomes without
//! letting one failure abort the rest. The driver also owns the fixup flush
//! points: helper injection happens at the type block that requested it,
//! extra imports are appended once at the unit boundary.

use rustc_hash::FxHashSet;
use s2v_common::{BatchReport, ConvertError, ConvertResult, UnitReport};
use s2v_semantic::SemanticModel;
use s2v_syntax::source::SourceKind;
use s2v_syntax::{NodeIndex, SourceTree, VbNode};

use crate::fixups::FixupRegistry;

/// Stateful translator for one unit. Construct fresh per unit; the fixup
/// registry inside must never be shared across units.
pub struct Converter<'a> {
    pub(crate) tree: &'a SourceTree,
    pub(crate) model: &'a SemanticModel,
    pub(crate) fixups: FixupRegistry,
    /// Namespaces the unit already imports, to keep requested imports from
    /// duplicating existing ones.
    unit_imports: FxHashSet<String>,
}

impl<'a> Converter<'a> {
    pub fn new(tree: &'a SourceTree, model: &'a SemanticModel) -> Converter<'a> {
        Converter {
            tree,
            model,
            fixups: FixupRegistry::new(),
            unit_imports: FxHashSet::default(),
        }
    }

    /// Convert the whole unit. The root must be a compilation unit.
    pub fn convert(&mut self) -> ConvertResult<VbNode> {
        let root = self.tree.root();
        match self.tree.kind(root) {
            SourceKind::CompilationUnit { .. } => self.convert_compilation_unit(root),
            other => Err(ConvertError::invariant(format!(
                "unit root must be a compilation unit, found {}",
                other.name()
            ))),
        }
    }

    fn convert_compilation_unit(&mut self, id: NodeIndex) -> ConvertResult<VbNode> {
        let tree = self.tree;
        let SourceKind::CompilationUnit {
            usings,
            attribute_lists,
            members,
        } = tree.kind(id)
        else {
            return Err(ConvertError::invariant("expected a compilation unit"));
        };

        let mut imports = Vec::with_capacity(usings.len());
        for &using in usings {
            let SourceKind::UsingDirective { alias, name } = tree.kind(using) else {
                return Err(ConvertError::invariant(
                    "compilation unit import list holds a non-import node",
                ));
            };
            let text = self.name_text(*name);
            self.unit_imports.insert(text);
            imports.push(VbNode::ImportsStatement {
                alias: alias.clone(),
                name: Box::new(self.convert_type(*name)?),
            });
        }

        let mut attributes = Vec::with_capacity(attribute_lists.len());
        for &list in attribute_lists {
            attributes.push(self.convert_attribute_list(list)?);
        }

        let mut out_members = Vec::with_capacity(members.len());
        for &member in members {
            out_members.extend(self.convert_member(member)?);
        }

        // Imports requested mid-traversal land after the unit's own.
        for namespace in self.fixups.drain_imports() {
            if self.unit_imports.contains(&namespace) {
                continue;
            }
            imports.push(VbNode::ImportsStatement {
                alias: None,
                name: Box::new(VbNode::dotted(&namespace)),
            });
        }
        if !self.fixups.is_drained() {
            return Err(ConvertError::invariant("pending fixups at unit exit"));
        }

        Ok(VbNode::CompilationUnit {
            imports,
            attributes,
            members: out_members,
        })
    }

    /// Dotted spelling of a name, for import deduplication.
    fn name_text(&self, id: NodeIndex) -> String {
        match self.tree.kind(id) {
            SourceKind::IdentifierName { identifier }
            | SourceKind::GenericName { identifier, .. } => identifier.clone(),
            SourceKind::QualifiedName { left, right } => {
                format!("{}.{}", self.name_text(*left), self.name_text(*right))
            }
            _ => String::new(),
        }
    }
}

/// Translate one unit.
pub fn translate_unit(tree: &SourceTree, model: &SemanticModel) -> ConvertResult<VbNode> {
    let _span = tracing::debug_span!("translate_unit", unit = %tree.unit_name).entered();
    Converter::new(tree, model).convert()
}

/// Result of translating a batch: one tree slot per input unit, in order,
/// plus the per-unit report.
pub struct BatchOutcome {
    pub trees: Vec<Option<VbNode>>,
    pub report: BatchReport,
}

/// Translate a batch of units. A failing unit is reported and skipped; the
/// rest of the batch proceeds.
pub fn translate_batch(units: &[(&SourceTree, &SemanticModel)]) -> BatchOutcome {
    let mut trees = Vec::with_capacity(units.len());
    let mut report = BatchReport::default();
    for &(tree, model) in units {
        match translate_unit(tree, model) {
            Ok(converted) => {
                report.push(UnitReport::converted(tree.unit_name.as_str()));
                trees.push(Some(converted));
            }
            Err(err) => {
                tracing::warn!(unit = %tree.unit_name, error = %err, "unit failed to translate");
                report.push(UnitReport::failed(tree.unit_name.as_str(), &err));
                trees.push(None);
            }
        }
    }
    tracing::debug!(
        converted = report.converted_count(),
        failed = report.failed_count(),
        "batch finished"
    );
    BatchOutcome { trees, report }
}
