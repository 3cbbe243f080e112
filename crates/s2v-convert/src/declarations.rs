//! Declaration translation rules.
//!
//! Covers namespaces, type blocks, members, parameters, attributes and
//! generics. One source member can fan out into several target members
//! (an event field with several declarators), so the entry point returns a
//! small list. Noteworthy rewrites:
//!
//! - a static class becomes a `Module`, with `Shared` stripped from its
//!   members because the container already implies it;
//! - base lists split on the first entry's interface-ness into `Inherits`
//!   and `Implements`;
//! - constraint clauses are reattached inline to the type parameter they
//!   reference by identity, and a clause referencing a parameter the
//!   member does not declare is a structural error;
//! - return-position attribute lists move onto the return `As` clause;
//! - a destructor becomes `Protected Overrides Sub Finalize`, an indexer
//!   becomes `Default Property Item`.

use rustc_hash::FxHashMap;
use s2v_common::{ConvertError, ConvertResult};
use s2v_syntax::source::{
    AccessorKind, AttributeTarget, Modifiers, ParamModifiers, PredefinedKind, SourceKind, Variance,
};
use s2v_syntax::vb::{
    VbAccessorKind, VbArgument, VbAsClause, VbAttributeTarget, VbDeclarator, VbModifier, VbNode,
    VbParameter, VbTypeKind, VbVariance,
};
use s2v_syntax::NodeIndex;
use smallvec::{smallvec, SmallVec};

use crate::driver::Converter;
use crate::helper::inline_assign_helper;
use crate::tokens::{self, TokenContext};

/// Target members produced from one source member.
pub(crate) type MemberNodes = SmallVec<[VbNode; 1]>;

impl<'a> Converter<'a> {
    /// Convert a namespace or type member.
    pub(crate) fn convert_member(&mut self, id: NodeIndex) -> ConvertResult<MemberNodes> {
        let mut out = self.convert_member_inner(id)?;
        let trivia = self.tree.leading_trivia(id);
        if !trivia.is_empty() {
            if let Some(first) = out.first_mut() {
                let node = std::mem::replace(first, VbNode::nothing());
                *first = node.with_leading(trivia.to_vec());
            }
        }
        Ok(out)
    }

    fn convert_member_inner(&mut self, id: NodeIndex) -> ConvertResult<MemberNodes> {
        let tree = self.tree;
        match tree.kind(id) {
            SourceKind::NamespaceDeclaration { name, members } => {
                let name = self.convert_type(*name)?;
                let mut out = Vec::with_capacity(members.len());
                for &member in members {
                    out.extend(self.convert_member(member)?);
                }
                Ok(smallvec![VbNode::NamespaceBlock {
                    name: Box::new(name),
                    members: out,
                }])
            }

            SourceKind::ClassDeclaration {
                attribute_lists,
                modifiers,
                identifier,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
            } => {
                // The modifier may live on another partial declaration of
                // the same type; the resolved symbol knows either way.
                let is_static = modifiers.contains(Modifiers::STATIC)
                    || self
                        .model
                        .declared_symbol(id)
                        .is_some_and(|facts| facts.is_static_container);
                let kind = if is_static {
                    VbTypeKind::Module
                } else {
                    VbTypeKind::Class
                };
                Ok(smallvec![self.convert_type_block(
                    id,
                    attribute_lists,
                    *modifiers,
                    identifier,
                    type_parameters,
                    constraint_clauses,
                    base_types,
                    members,
                    kind,
                )?])
            }
            SourceKind::StructDeclaration {
                attribute_lists,
                modifiers,
                identifier,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
            } => Ok(smallvec![self.convert_type_block(
                id,
                attribute_lists,
                *modifiers,
                identifier,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
                VbTypeKind::Structure,
            )?]),
            SourceKind::InterfaceDeclaration {
                attribute_lists,
                modifiers,
                identifier,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
            } => Ok(smallvec![self.convert_type_block(
                id,
                attribute_lists,
                *modifiers,
                identifier,
                type_parameters,
                constraint_clauses,
                base_types,
                members,
                VbTypeKind::Interface,
            )?]),

            SourceKind::EnumDeclaration {
                attribute_lists,
                modifiers,
                identifier,
                base_type,
                members,
            } => {
                let attributes = self.convert_attribute_lists(attribute_lists)?;
                let underlying = match base_type {
                    Some(ty) => Some(Box::new(self.convert_type(*ty)?)),
                    None => None,
                };
                let mut out = Vec::with_capacity(members.len());
                for &member in members {
                    out.extend(self.convert_member(member)?);
                }
                Ok(smallvec![VbNode::EnumBlock {
                    attributes,
                    modifiers: tokens::convert_modifiers(*modifiers, TokenContext::Global),
                    identifier: tokens::convert_identifier(identifier),
                    underlying,
                    members: out,
                }])
            }
            SourceKind::EnumMemberDeclaration {
                attribute_lists,
                identifier,
                value,
            } => {
                let attributes = self.convert_attribute_lists(attribute_lists)?;
                let value = match value {
                    Some(expr) => Some(Box::new(self.convert_expression(*expr)?)),
                    None => None,
                };
                Ok(smallvec![VbNode::EnumMember {
                    attributes,
                    identifier: tokens::convert_identifier(identifier),
                    value,
                }])
            }

            SourceKind::DelegateDeclaration {
                attribute_lists,
                modifiers,
                identifier,
                type_parameters,
                parameters,
                return_type,
            } => {
                let is_function = !self.is_void(*return_type);
                let attributes = self.convert_attribute_lists(attribute_lists)?;
                let type_parameters = self.convert_type_parameters(type_parameters, &[])?;
                let parameters = self.convert_parameters(parameters)?;
                let return_clause = if is_function {
                    Some(VbAsClause::new(self.convert_type(*return_type)?))
                } else {
                    None
                };
                Ok(smallvec![VbNode::DelegateStatement {
                    is_function,
                    attributes,
                    modifiers: tokens::convert_modifiers(*modifiers, TokenContext::Global),
                    identifier: tokens::convert_identifier(identifier),
                    type_parameters,
                    parameters,
                    return_clause,
                }])
            }

            SourceKind::FieldDeclaration {
                attribute_lists,
                modifiers,
                declaration,
            } => {
                let attributes = self.convert_attribute_lists(attribute_lists)?;
                let mut mods = tokens::convert_modifiers(*modifiers, TokenContext::Member);
                // An unmodified source field is private; spelled out because
                // the target defaults members to public.
                if !modifiers.intersects(
                    Modifiers::PUBLIC
                        | Modifiers::PRIVATE
                        | Modifiers::PROTECTED
                        | Modifiers::INTERNAL,
                ) {
                    mods.insert(0, VbModifier::Private);
                }
                Ok(smallvec![VbNode::FieldDeclaration {
                    attributes,
                    modifiers: mods,
                    declarators: self.convert_variable_declaration(*declaration)?,
                }])
            }

            SourceKind::ConstructorDeclaration {
                attribute_lists,
                modifiers,
                parameters,
                body,
            } => Ok(smallvec![VbNode::ConstructorBlock {
                attributes: self.convert_attribute_lists(attribute_lists)?,
                modifiers: tokens::convert_modifiers(*modifiers, TokenContext::Member),
                parameters: self.convert_parameters(parameters)?,
                body: self.convert_body(body)?,
            }]),

            SourceKind::DestructorDeclaration {
                attribute_lists,
                body,
            } => Ok(smallvec![VbNode::MethodBlock {
                is_function: false,
                attributes: self.convert_attribute_lists(attribute_lists)?,
                modifiers: vec![VbModifier::Protected, VbModifier::Overrides],
                identifier: "Finalize".to_string(),
                type_parameters: Vec::new(),
                parameters: Vec::new(),
                return_clause: None,
                body: Some(self.convert_body(body)?),
            }]),

            SourceKind::MethodDeclaration {
                attribute_lists,
                modifiers,
                return_type,
                identifier,
                type_parameters,
                constraint_clauses,
                parameters,
                body,
            } => {
                let is_function = !self.is_void(*return_type);
                let (mut attributes, return_attrs) =
                    self.convert_attribute_lists_split(attribute_lists)?;

                let is_extension = parameters.iter().any(|&p| {
                    matches!(
                        tree.kind(p),
                        SourceKind::Parameter { modifiers, .. }
                            if modifiers.contains(ParamModifiers::THIS)
                    )
                });
                if is_extension {
                    attributes.insert(
                        0,
                        VbNode::AttributeList(vec![VbNode::Attribute {
                            target: None,
                            name: Box::new(VbNode::id("Extension")),
                            arguments: Vec::new(),
                        }]),
                    );
                    self.fixups.request_import("System.Runtime.CompilerServices");
                }

                let type_parameters =
                    self.convert_type_parameters(type_parameters, constraint_clauses)?;
                let parameters = self.convert_parameters(parameters)?;
                let return_clause = if is_function {
                    Some(
                        VbAsClause::new(self.convert_type(*return_type)?)
                            .with_attributes(return_attrs),
                    )
                } else {
                    None
                };
                let body = match body {
                    Some(statements) => Some(self.convert_body(statements)?),
                    None => None,
                };
                Ok(smallvec![VbNode::MethodBlock {
                    is_function,
                    attributes,
                    modifiers: tokens::convert_modifiers(*modifiers, TokenContext::Member),
                    identifier: tokens::convert_identifier(identifier),
                    type_parameters,
                    parameters,
                    return_clause,
                    body,
                }])
            }

            SourceKind::PropertyDeclaration {
                attribute_lists,
                modifiers,
                ty,
                identifier,
                accessors,
            } => Ok(smallvec![self.convert_property(
                attribute_lists,
                *modifiers,
                *ty,
                tokens::convert_identifier(identifier),
                &[],
                accessors,
                false,
            )?]),

            SourceKind::IndexerDeclaration {
                attribute_lists,
                modifiers,
                ty,
                parameters,
                accessors,
            } => Ok(smallvec![self.convert_property(
                attribute_lists,
                *modifiers,
                *ty,
                "Item".to_string(),
                parameters,
                accessors,
                true,
            )?]),

            SourceKind::EventFieldDeclaration {
                attribute_lists,
                modifiers,
                declaration,
            } => {
                let SourceKind::VariableDeclaration { ty, declarators } = tree.kind(*declaration)
                else {
                    return Err(ConvertError::invariant(
                        "event field without a variable declaration",
                    ));
                };
                let Some(ty) = ty else {
                    return Err(ConvertError::invariant("event field without a type"));
                };
                let as_clause = VbAsClause::new(self.convert_type(*ty)?);
                let attributes = self.convert_attribute_lists(attribute_lists)?;
                let mods = tokens::convert_modifiers(*modifiers, TokenContext::Member);
                let mut out = MemberNodes::new();
                for &declarator in declarators {
                    let SourceKind::VariableDeclarator { identifier, .. } = tree.kind(declarator)
                    else {
                        return Err(ConvertError::invariant(
                            "event field holds a non-declarator node",
                        ));
                    };
                    out.push(VbNode::EventDeclaration {
                        attributes: attributes.clone(),
                        modifiers: mods.clone(),
                        identifier: tokens::convert_identifier(identifier),
                        as_clause: Some(as_clause.clone()),
                        accessors: None,
                    });
                }
                Ok(out)
            }

            SourceKind::EventDeclaration {
                attribute_lists,
                modifiers,
                ty,
                identifier,
                accessors,
            } => {
                let mut as_clause = VbAsClause::new(self.convert_type(*ty)?);
                let value_clause = as_clause.clone();
                let mut blocks = Vec::with_capacity(accessors.len());
                for &accessor in accessors {
                    let (block, return_attrs) = self.convert_accessor(accessor, &value_clause)?;
                    as_clause.attributes.extend(return_attrs);
                    blocks.push(block);
                }
                Ok(smallvec![VbNode::EventDeclaration {
                    attributes: self.convert_attribute_lists(attribute_lists)?,
                    modifiers: tokens::convert_modifiers(*modifiers, TokenContext::Member),
                    identifier: tokens::convert_identifier(identifier),
                    as_clause: Some(as_clause),
                    accessors: Some(blocks),
                }])
            }

            SourceKind::Opaque { description } => {
                Err(ConvertError::unsupported(description.clone()))
            }

            other => Err(ConvertError::invariant(format!(
                "{} in member position",
                other.name()
            ))),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn convert_type_block(
        &mut self,
        id: NodeIndex,
        attribute_lists: &[NodeIndex],
        modifiers: Modifiers,
        identifier: &str,
        type_parameters: &[NodeIndex],
        constraint_clauses: &[NodeIndex],
        base_types: &[NodeIndex],
        members: &[NodeIndex],
        kind: VbTypeKind,
    ) -> ConvertResult<VbNode> {
        let attributes = self.convert_attribute_lists(attribute_lists)?;
        let mut flags = modifiers;
        if kind == VbTypeKind::Module {
            // The container implies it.
            flags.remove(Modifiers::STATIC);
        }
        let mods = tokens::convert_modifiers(flags, TokenContext::Global);
        let type_parameters = self.convert_type_parameters(type_parameters, constraint_clauses)?;
        let (inherits, implements) = self.split_base_list(base_types, kind)?;

        let mut out_members = Vec::with_capacity(members.len());
        for &member in members {
            out_members.extend(self.convert_member(member)?);
        }
        if self.fixups.take_helper(id) {
            tracing::debug!(ty = identifier, "injecting inline assignment helper");
            out_members.push(inline_assign_helper());
        }
        if kind == VbTypeKind::Module {
            out_members = out_members.into_iter().map(strip_shared).collect();
        }

        Ok(VbNode::TypeBlock {
            kind,
            attributes,
            modifiers: mods,
            identifier: tokens::convert_identifier(identifier),
            type_parameters,
            inherits,
            implements,
            members: out_members,
        })
    }

    /// Split a base list into inherits/implements. For classes the first
    /// entry decides: an interface first means everything implements; a
    /// class first inherits, the rest implement. An unresolved first entry
    /// drops the list rather than guessing.
    fn split_base_list(
        &mut self,
        base_types: &[NodeIndex],
        kind: VbTypeKind,
    ) -> ConvertResult<(Vec<VbNode>, Vec<VbNode>)> {
        let mut inherits = Vec::new();
        let mut implements = Vec::new();
        let Some((&first, rest)) = base_types.split_first() else {
            return Ok((inherits, implements));
        };
        match kind {
            VbTypeKind::Interface => {
                inherits.push(self.convert_type(first)?);
                for &base in rest {
                    inherits.push(self.convert_type(base)?);
                }
            }
            VbTypeKind::Structure => {
                implements.push(self.convert_type(first)?);
                for &base in rest {
                    implements.push(self.convert_type(base)?);
                }
            }
            VbTypeKind::Class | VbTypeKind::Module => match self.model.type_of(first) {
                Some(facts) if facts.is_interface => {
                    implements.push(self.convert_type(first)?);
                    for &base in rest {
                        implements.push(self.convert_type(base)?);
                    }
                }
                Some(_) => {
                    inherits.push(self.convert_type(first)?);
                    for &base in rest {
                        implements.push(self.convert_type(base)?);
                    }
                }
                None => {
                    tracing::warn!("dropping base list with unresolved first entry");
                }
            },
        }
        Ok((inherits, implements))
    }

    #[allow(clippy::too_many_arguments)]
    fn convert_property(
        &mut self,
        attribute_lists: &[NodeIndex],
        modifiers: Modifiers,
        ty: NodeIndex,
        identifier: String,
        parameters: &[NodeIndex],
        accessors: &[NodeIndex],
        is_default: bool,
    ) -> ConvertResult<VbNode> {
        let tree = self.tree;
        let as_clause = VbAsClause::new(self.convert_type(ty)?);

        let mut is_auto = true;
        let mut has_get = false;
        let mut has_set = false;
        for &accessor in accessors {
            let SourceKind::AccessorDeclaration { kind, body, .. } = tree.kind(accessor) else {
                return Err(ConvertError::invariant(
                    "property holds a non-accessor node",
                ));
            };
            if body.is_some() {
                is_auto = false;
            }
            match kind {
                AccessorKind::Get => has_get = true,
                AccessorKind::Set => has_set = true,
                AccessorKind::Add | AccessorKind::Remove => {
                    return Err(ConvertError::invariant("event accessor on a property"));
                }
            }
        }

        let mut mods = tokens::convert_modifiers(modifiers, TokenContext::Member);
        if has_get && !has_set {
            mods.push(VbModifier::ReadOnly);
        }
        if has_set && !has_get {
            mods.push(VbModifier::WriteOnly);
        }
        if is_default {
            mods.insert(0, VbModifier::Default);
        }

        let mut as_clause = as_clause;
        let accessor_blocks = if is_auto {
            None
        } else {
            // The implicit value parameter is typed off the bare clause,
            // before any return attributes migrate onto it.
            let value_clause = as_clause.clone();
            let mut blocks = Vec::with_capacity(accessors.len());
            for &accessor in accessors {
                let (block, return_attrs) = self.convert_accessor(accessor, &value_clause)?;
                as_clause.attributes.extend(return_attrs);
                blocks.push(block);
            }
            Some(blocks)
        };

        Ok(VbNode::PropertyBlock {
            attributes: self.convert_attribute_lists(attribute_lists)?,
            modifiers: mods,
            identifier,
            parameters: self.convert_parameters(parameters)?,
            as_clause: Some(as_clause),
            accessors: accessor_blocks,
        })
    }

    /// Convert one accessor. Setters and event accessors receive the
    /// implicit `value` parameter typed after the containing declaration.
    /// Return-position attribute lists are split out and handed back so the
    /// caller can move them onto the containing `As` clause.
    fn convert_accessor(
        &mut self,
        id: NodeIndex,
        containing_clause: &VbAsClause,
    ) -> ConvertResult<(VbNode, Vec<VbNode>)> {
        let tree = self.tree;
        let SourceKind::AccessorDeclaration {
            kind,
            attribute_lists,
            modifiers,
            body,
        } = tree.kind(id)
        else {
            return Err(ConvertError::invariant("expected an accessor declaration"));
        };

        let vb_kind = match kind {
            AccessorKind::Get => VbAccessorKind::Get,
            AccessorKind::Set => VbAccessorKind::Set,
            AccessorKind::Add => VbAccessorKind::AddHandler,
            AccessorKind::Remove => VbAccessorKind::RemoveHandler,
        };
        let parameter = match vb_kind {
            VbAccessorKind::Get => None,
            _ => Some(VbParameter {
                attributes: Vec::new(),
                modifiers: vec![VbModifier::ByVal],
                name: "value".to_string(),
                as_clause: Some(containing_clause.clone()),
                default: None,
            }),
        };
        let body = match body {
            Some(statements) => self.convert_body(statements)?,
            None => Vec::new(),
        };
        let (attributes, return_attrs) = self.convert_attribute_lists_split(attribute_lists)?;
        let block = VbNode::AccessorBlock {
            kind: vb_kind,
            attributes,
            modifiers: tokens::convert_modifiers(*modifiers, TokenContext::Member),
            parameter,
            body,
        };
        Ok((block, return_attrs))
    }

    pub(crate) fn convert_parameters(
        &mut self,
        ids: &[NodeIndex],
    ) -> ConvertResult<Vec<VbParameter>> {
        let tree = self.tree;
        let mut out = Vec::with_capacity(ids.len());
        for &id in ids {
            let SourceKind::Parameter {
                attribute_lists,
                modifiers,
                ty,
                identifier,
                default,
            } = tree.kind(id)
            else {
                return Err(ConvertError::invariant(
                    "parameter list holds a non-parameter node",
                ));
            };

            let mut attributes = self.convert_attribute_lists(attribute_lists)?;
            if modifiers.contains(ParamModifiers::OUT) {
                // No out-parameter mode exists; `<Out> ByRef` is the
                // closest interop-faithful spelling.
                attributes.push(VbNode::AttributeList(vec![VbNode::Attribute {
                    target: None,
                    name: Box::new(VbNode::id("Out")),
                    arguments: Vec::new(),
                }]));
                self.fixups.request_import("System.Runtime.InteropServices");
            }

            let default = match default {
                Some(expr) => Some(Box::new(self.convert_expression(*expr)?)),
                None => None,
            };
            let mut mods = Vec::new();
            if default.is_some() {
                mods.push(VbModifier::Optional);
            }
            if modifiers.intersects(ParamModifiers::REF | ParamModifiers::OUT) {
                mods.push(VbModifier::ByRef);
            } else if modifiers.contains(ParamModifiers::PARAMS) {
                mods.push(VbModifier::ParamArray);
            } else {
                mods.push(VbModifier::ByVal);
            }

            let as_clause = match ty {
                Some(ty) => Some(VbAsClause::new(self.convert_type(*ty)?)),
                None => None,
            };
            out.push(VbParameter {
                attributes,
                modifiers: mods,
                name: tokens::convert_identifier(identifier),
                as_clause,
                default,
            });
        }
        Ok(out)
    }

    /// Reattach constraint clauses to the type parameters they reference.
    /// Reference is by node identity, never by spelling.
    pub(crate) fn convert_type_parameters(
        &mut self,
        params: &[NodeIndex],
        clauses: &[NodeIndex],
    ) -> ConvertResult<Vec<VbNode>> {
        let tree = self.tree;
        let mut by_param: FxHashMap<NodeIndex, Vec<VbNode>> = FxHashMap::default();
        for &clause in clauses {
            let SourceKind::ConstraintClause {
                parameter,
                constraints,
            } = tree.kind(clause)
            else {
                return Err(ConvertError::invariant("expected a constraint clause"));
            };
            if !params.contains(parameter) {
                return Err(ConvertError::invariant(
                    "constraint clause references a type parameter the member does not declare",
                ));
            }
            let mut converted = Vec::with_capacity(constraints.len());
            for &constraint in constraints {
                converted.push(match tree.kind(constraint) {
                    SourceKind::ClassConstraint => VbNode::ClassConstraint,
                    SourceKind::StructConstraint => VbNode::StructureConstraint,
                    SourceKind::NewConstraint => VbNode::NewConstraint,
                    SourceKind::TypeConstraint { ty } => {
                        VbNode::TypeConstraint(Box::new(self.convert_type(*ty)?))
                    }
                    other => {
                        return Err(ConvertError::invariant(format!(
                            "{} in constraint position",
                            other.name()
                        )));
                    }
                });
            }
            by_param.entry(*parameter).or_default().extend(converted);
        }

        let mut out = Vec::with_capacity(params.len());
        for &param in params {
            let SourceKind::TypeParameter {
                variance,
                identifier,
            } = tree.kind(param)
            else {
                return Err(ConvertError::invariant(
                    "type parameter list holds a non-parameter node",
                ));
            };
            out.push(VbNode::TypeParameter {
                variance: match variance {
                    Variance::None => VbVariance::None,
                    Variance::In => VbVariance::In,
                    Variance::Out => VbVariance::Out,
                },
                name: tokens::convert_identifier(identifier),
                constraints: by_param.remove(&param).unwrap_or_default(),
            });
        }
        Ok(out)
    }

    /// Convert a multi-declarator variable declaration. A missing type
    /// (`var`) becomes declarators without an `As` clause.
    pub(crate) fn convert_variable_declaration(
        &mut self,
        id: NodeIndex,
    ) -> ConvertResult<Vec<VbDeclarator>> {
        let tree = self.tree;
        let SourceKind::VariableDeclaration { ty, declarators } = tree.kind(id) else {
            return Err(ConvertError::invariant("expected a variable declaration"));
        };
        let as_clause = match ty {
            Some(ty) => Some(VbAsClause::new(self.convert_type(*ty)?)),
            None => None,
        };
        let mut out = Vec::with_capacity(declarators.len());
        for &declarator in declarators {
            let SourceKind::VariableDeclarator {
                identifier,
                initializer,
            } = tree.kind(declarator)
            else {
                return Err(ConvertError::invariant(
                    "variable declaration holds a non-declarator node",
                ));
            };
            let initializer = match initializer {
                Some(expr) => Some(self.convert_expression(*expr)?),
                None => None,
            };
            out.push(VbDeclarator {
                name: tokens::convert_identifier(identifier),
                as_clause: as_clause.clone(),
                initializer,
            });
        }
        Ok(out)
    }

    /// Convert attribute lists, keeping everything in place.
    pub(crate) fn convert_attribute_lists(
        &mut self,
        lists: &[NodeIndex],
    ) -> ConvertResult<Vec<VbNode>> {
        let mut out = Vec::with_capacity(lists.len());
        for &list in lists {
            out.push(self.convert_attribute_list(list)?);
        }
        Ok(out)
    }

    /// Convert attribute lists, splitting off return-position lists so the
    /// caller can move them onto the return `As` clause.
    fn convert_attribute_lists_split(
        &mut self,
        lists: &[NodeIndex],
    ) -> ConvertResult<(Vec<VbNode>, Vec<VbNode>)> {
        let tree = self.tree;
        let mut normal = Vec::new();
        let mut returns = Vec::new();
        for &list in lists {
            let converted = self.convert_attribute_list(list)?;
            match tree.kind(list) {
                SourceKind::AttributeList {
                    target: AttributeTarget::Return,
                    ..
                } => returns.push(converted),
                _ => normal.push(converted),
            }
        }
        Ok((normal, returns))
    }

    pub(crate) fn convert_attribute_list(&mut self, id: NodeIndex) -> ConvertResult<VbNode> {
        let tree = self.tree;
        let SourceKind::AttributeList { target, attributes } = tree.kind(id) else {
            return Err(ConvertError::invariant("expected an attribute list"));
        };
        let vb_target = match target {
            AttributeTarget::Assembly => Some(VbAttributeTarget::Assembly),
            AttributeTarget::None | AttributeTarget::Return => None,
        };
        let mut out = Vec::with_capacity(attributes.len());
        for &attribute in attributes {
            let SourceKind::Attribute { name, arguments } = tree.kind(attribute) else {
                return Err(ConvertError::invariant(
                    "attribute list holds a non-attribute node",
                ));
            };
            let mut args = Vec::with_capacity(arguments.len());
            for &argument in arguments {
                let SourceKind::AttributeArgument { name, expression } = tree.kind(argument)
                else {
                    return Err(ConvertError::invariant(
                        "attribute holds a non-argument node",
                    ));
                };
                let value = self.convert_expression(*expression)?;
                args.push(match name {
                    Some(name) => VbArgument::named(tokens::convert_identifier(name), value),
                    None => VbArgument::positional(value),
                });
            }
            out.push(VbNode::Attribute {
                target: vb_target,
                name: Box::new(self.convert_type(*name)?),
                arguments: args,
            });
        }
        Ok(VbNode::AttributeList(out))
    }

    pub(crate) fn is_void(&self, ty: NodeIndex) -> bool {
        matches!(
            self.tree.kind(ty),
            SourceKind::PredefinedType {
                keyword: PredefinedKind::Void
            }
        )
    }
}

/// Remove `Shared` from a member headed into a `Module`, recursing through
/// comment wrapping.
fn strip_shared(member: VbNode) -> VbNode {
    fn strip(modifiers: &mut Vec<VbModifier>) {
        modifiers.retain(|m| *m != VbModifier::Shared);
    }
    match member {
        VbNode::Commented {
            leading,
            trailing,
            node,
        } => VbNode::Commented {
            leading,
            trailing,
            node: Box::new(strip_shared(*node)),
        },
        VbNode::MethodBlock {
            is_function,
            attributes,
            mut modifiers,
            identifier,
            type_parameters,
            parameters,
            return_clause,
            body,
        } => {
            strip(&mut modifiers);
            VbNode::MethodBlock {
                is_function,
                attributes,
                modifiers,
                identifier,
                type_parameters,
                parameters,
                return_clause,
                body,
            }
        }
        VbNode::ConstructorBlock {
            attributes,
            mut modifiers,
            parameters,
            body,
        } => {
            strip(&mut modifiers);
            VbNode::ConstructorBlock {
                attributes,
                modifiers,
                parameters,
                body,
            }
        }
        VbNode::FieldDeclaration {
            attributes,
            mut modifiers,
            declarators,
        } => {
            strip(&mut modifiers);
            VbNode::FieldDeclaration {
                attributes,
                modifiers,
                declarators,
            }
        }
        VbNode::PropertyBlock {
            attributes,
            mut modifiers,
            identifier,
            parameters,
            as_clause,
            accessors,
        } => {
            strip(&mut modifiers);
            VbNode::PropertyBlock {
                attributes,
                modifiers,
                identifier,
                parameters,
                as_clause,
                accessors,
            }
        }
        VbNode::EventDeclaration {
            attributes,
            mut modifiers,
            identifier,
            as_clause,
            accessors,
        } => {
            strip(&mut modifiers);
            VbNode::EventDeclaration {
                attributes,
                modifiers,
                identifier,
                as_clause,
                accessors,
            }
        }
        other => other,
    }
}
