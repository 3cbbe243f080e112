//! Expression translation rules.
//!
//! Every rule here converts a value-position expression. Expressions whose
//! target equivalent is a statement (`x++`, assignment, delegate combine)
//! are intercepted earlier by `convert_expression_as_statement`; what
//! reaches these rules genuinely needs a value, which is where the
//! Interlocked and `__InlineAssignHelper` rewrites come from.

use s2v_common::{ConvertError, ConvertResult};
use s2v_semantic::SpecialType;
use s2v_syntax::source::{
    AssignOp, BinaryOp, ConstValue, InitializerKind, PostfixOp, SourceKind, UnaryOp,
};
use s2v_syntax::vb::{VbArgument, VbBinaryOp, VbCastKeyword, VbLit, VbNode};
use s2v_syntax::NodeIndex;

use crate::driver::Converter;
use crate::helper::INLINE_ASSIGN_HELPER_NAME;
use crate::tokens;

/// The dedicated conversion keyword for a special type, if one exists.
fn cast_keyword_for(special: SpecialType) -> Option<VbCastKeyword> {
    match special {
        SpecialType::Object => Some(VbCastKeyword::CObj),
        SpecialType::Boolean => Some(VbCastKeyword::CBool),
        SpecialType::Char => Some(VbCastKeyword::CChar),
        SpecialType::SByte => Some(VbCastKeyword::CSByte),
        SpecialType::Byte => Some(VbCastKeyword::CByte),
        SpecialType::Int16 => Some(VbCastKeyword::CShort),
        SpecialType::UInt16 => Some(VbCastKeyword::CUShort),
        SpecialType::Int32 => Some(VbCastKeyword::CInt),
        SpecialType::UInt32 => Some(VbCastKeyword::CUInt),
        SpecialType::Int64 => Some(VbCastKeyword::CLng),
        SpecialType::UInt64 => Some(VbCastKeyword::CULng),
        SpecialType::Decimal => Some(VbCastKeyword::CDec),
        SpecialType::Single => Some(VbCastKeyword::CSng),
        SpecialType::Double => Some(VbCastKeyword::CDbl),
        SpecialType::String => Some(VbCastKeyword::CStr),
        SpecialType::DateTime => Some(VbCastKeyword::CDate),
        SpecialType::None | SpecialType::Void => None,
    }
}

fn render_literal(value: &ConstValue) -> VbNode {
    match value {
        ConstValue::Null => VbNode::nothing(),
        ConstValue::Bool(b) => VbNode::bool_lit(*b),
        ConstValue::Int32(v) => VbNode::num_lit(v.to_string()),
        ConstValue::UInt32(v) => VbNode::num_lit(format!("{v}UI")),
        ConstValue::Int64(v) => VbNode::num_lit(format!("{v}L")),
        ConstValue::UInt64(v) => VbNode::num_lit(format!("{v}UL")),
        ConstValue::Single(v) => VbNode::num_lit(format!("{v}F")),
        ConstValue::Double(v) => VbNode::num_lit(render_double(*v)),
        ConstValue::Decimal(digits) => VbNode::num_lit(format!("{digits}D")),
        ConstValue::Char(c) => VbNode::Literal(VbLit::Char(*c)),
        ConstValue::Str(s) => VbNode::Literal(VbLit::Str(s.clone())),
    }
}

fn render_double(v: f64) -> String {
    let s = format!("{v}");
    // A bare integer spelling would re-type the literal.
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{s}.0")
    }
}

impl<'a> Converter<'a> {
    /// Convert a value-position expression.
    pub fn convert_expression(&mut self, id: NodeIndex) -> ConvertResult<VbNode> {
        let tree = self.tree;
        match tree.kind(id) {
            SourceKind::LiteralExpression { value } => Ok(render_literal(value)),
            SourceKind::ParenthesizedExpression { expression } => {
                Ok(self.convert_expression(*expression)?.paren())
            }

            SourceKind::PrefixUnaryExpression { operator, operand } => match operator {
                UnaryOp::Increment => self.interlocked_call("Increment", *operand),
                UnaryOp::Decrement => self.interlocked_call("Decrement", *operand),
                op => Ok(VbNode::unary(
                    tokens::convert_unary_op(*op),
                    self.convert_expression(*operand)?,
                )),
            },

            // `x++` must yield the pre-step value while still mutating `x`,
            // which the clamp against the stepped-back value provides.
            SourceKind::PostfixUnaryExpression { operator, operand } => {
                let (interlocked, clamp, undo) = match operator {
                    PostfixOp::Increment => ("Increment", "Math.Min", VbBinaryOp::Subtract),
                    PostfixOp::Decrement => ("Decrement", "Math.Max", VbBinaryOp::Add),
                };
                let stepped = self.interlocked_call(interlocked, *operand)?;
                let original = VbNode::binary(
                    undo,
                    self.convert_expression(*operand)?,
                    VbNode::num_lit("1"),
                );
                Ok(VbNode::call(
                    VbNode::dotted(clamp),
                    VbArgument::list(vec![stepped, original]),
                ))
            }

            SourceKind::AssignmentExpression {
                operator,
                left,
                right,
            } => self.convert_value_assignment(id, *operator, *left, *right),

            SourceKind::BinaryExpression {
                operator,
                left,
                right,
            } => match operator {
                BinaryOp::Coalesce => Ok(VbNode::BinaryIf {
                    expr: Box::new(self.convert_expression(*left)?),
                    fallback: Box::new(self.convert_expression(*right)?),
                }),
                BinaryOp::As => Ok(VbNode::TryCastExpression {
                    expr: Box::new(self.convert_expression(*left)?),
                    ty: Box::new(self.convert_type(*right)?),
                }),
                BinaryOp::Equals if self.is_null_literal(*right) => {
                    Ok(VbNode::is_nothing(self.convert_expression(*left)?))
                }
                BinaryOp::Equals if self.is_null_literal(*left) => {
                    Ok(VbNode::is_nothing(self.convert_expression(*right)?))
                }
                BinaryOp::NotEquals if self.is_null_literal(*right) => {
                    Ok(VbNode::is_not_nothing(self.convert_expression(*left)?))
                }
                BinaryOp::NotEquals if self.is_null_literal(*left) => {
                    Ok(VbNode::is_not_nothing(self.convert_expression(*right)?))
                }
                op => Ok(VbNode::binary(
                    tokens::convert_binary_op(*op),
                    self.convert_expression(*left)?,
                    self.convert_expression(*right)?,
                )),
            },

            SourceKind::CastExpression { ty, expression } => {
                let expr = self.convert_expression(*expression)?;
                let keyword = self
                    .model
                    .type_of(*ty)
                    .and_then(|facts| cast_keyword_for(facts.special));
                match keyword {
                    Some(keyword) => Ok(VbNode::PredefinedCast {
                        keyword,
                        expr: Box::new(expr),
                    }),
                    // Unresolved targets fall back to the general cast.
                    None => Ok(VbNode::CTypeExpression {
                        expr: Box::new(expr),
                        ty: Box::new(self.convert_type(*ty)?),
                    }),
                }
            }

            SourceKind::ConditionalExpression {
                condition,
                when_true,
                when_false,
            } => Ok(VbNode::TernaryIf {
                condition: Box::new(self.convert_expression(*condition)?),
                when_true: Box::new(self.convert_expression(*when_true)?),
                when_false: Box::new(self.convert_expression(*when_false)?),
            }),

            SourceKind::ConditionalAccessExpression {
                expression,
                when_not_null,
            } => Ok(VbNode::ConditionalAccess {
                base: Box::new(self.convert_expression(*expression)?),
                when_not_null: Box::new(self.convert_expression(*when_not_null)?),
            }),
            SourceKind::MemberBindingExpression { name } => self.convert_type(*name),

            SourceKind::MemberAccessExpression { expression, name } => Ok(VbNode::MemberAccess {
                base: Box::new(self.convert_expression(*expression)?),
                name: Box::new(self.convert_type(*name)?),
            }),

            SourceKind::InvocationExpression {
                expression,
                arguments,
            } => {
                if let Some(operand) = self.nameof_operand(*expression, arguments) {
                    return Ok(VbNode::NameOf(Box::new(self.convert_expression(operand)?)));
                }
                Ok(VbNode::Invocation {
                    callee: Box::new(self.convert_expression(*expression)?),
                    arguments: self.convert_arguments(arguments)?,
                })
            }

            SourceKind::ObjectCreationExpression {
                ty,
                arguments,
                initializer,
            } => Ok(VbNode::ObjectCreation {
                ty: Box::new(self.convert_type(*ty)?),
                arguments: self.convert_arguments(arguments)?,
                initializer: match initializer {
                    Some(init) => Some(Box::new(self.convert_initializer(*init)?)),
                    None => None,
                },
            }),

            SourceKind::ArrayCreationExpression {
                array_type,
                initializer,
            } => self.convert_array_creation(*array_type, *initializer),

            SourceKind::InitializerExpression { .. } => self.convert_initializer(id),

            // A typed `Nothing` keeps overload resolution stable.
            SourceKind::DefaultExpression { ty } => Ok(VbNode::CTypeExpression {
                expr: Box::new(VbNode::nothing()),
                ty: Box::new(self.convert_type(*ty)?),
            }),

            SourceKind::ThisExpression => Ok(VbNode::MeExpression),
            SourceKind::BaseExpression => Ok(VbNode::MyBaseExpression),

            SourceKind::IdentifierName { .. }
            | SourceKind::GenericName { .. }
            | SourceKind::QualifiedName { .. }
            | SourceKind::PredefinedType { .. }
            | SourceKind::ArrayType { .. } => self.convert_type(id),

            SourceKind::Opaque { description } => Err(ConvertError::unsupported(description.clone())),

            other => Err(ConvertError::invariant(format!(
                "{} in expression position",
                other.name()
            ))),
        }
    }

    /// Convert a type-syntax node.
    pub(crate) fn convert_type(&mut self, id: NodeIndex) -> ConvertResult<VbNode> {
        let tree = self.tree;
        match tree.kind(id) {
            SourceKind::PredefinedType { keyword } => match tokens::convert_predefined(*keyword) {
                Some(predefined) => Ok(VbNode::PredefinedType(predefined)),
                None => Err(ConvertError::invariant(
                    "the void keyword has no type-position equivalent",
                )),
            },
            SourceKind::IdentifierName { identifier } => {
                Ok(VbNode::id(tokens::convert_identifier(identifier)))
            }
            SourceKind::GenericName {
                identifier,
                type_arguments,
            } => {
                let mut args = Vec::with_capacity(type_arguments.len());
                for &arg in type_arguments {
                    args.push(self.convert_type(arg)?);
                }
                Ok(VbNode::GenericName {
                    name: tokens::convert_identifier(identifier),
                    type_arguments: args,
                })
            }
            SourceKind::QualifiedName { left, right } => Ok(VbNode::QualifiedName {
                left: Box::new(self.convert_type(*left)?),
                right: Box::new(self.convert_type(*right)?),
            }),
            SourceKind::ArrayType {
                element_type,
                rank_specifiers,
            } => {
                let element = self.convert_type(*element_type)?;
                let mut ranks = Vec::with_capacity(rank_specifiers.len());
                for &spec in rank_specifiers {
                    let SourceKind::ArrayRankSpecifier { rank, .. } = tree.kind(spec) else {
                        return Err(ConvertError::invariant(
                            "array type holds a non-rank specifier",
                        ));
                    };
                    ranks.push(*rank);
                }
                Ok(VbNode::ArrayType {
                    element: Box::new(element),
                    ranks,
                })
            }
            other => Err(ConvertError::invariant(format!(
                "{} in type position",
                other.name()
            ))),
        }
    }

    /// Convert an invocation/creation argument list.
    pub(crate) fn convert_arguments(
        &mut self,
        ids: &[NodeIndex],
    ) -> ConvertResult<Vec<VbArgument>> {
        let tree = self.tree;
        let mut out = Vec::with_capacity(ids.len());
        for &id in ids {
            match tree.kind(id) {
                SourceKind::Argument { name, expression } => {
                    let value = self.convert_expression(*expression)?;
                    out.push(match name {
                        Some(name) => VbArgument::named(tokens::convert_identifier(name), value),
                        None => VbArgument::positional(value),
                    });
                }
                _ => out.push(VbArgument::positional(self.convert_expression(id)?)),
            }
        }
        Ok(out)
    }

    /// Assignment used for its value. The target grammar has no
    /// assignment-as-expression, so the site becomes a call to the injected
    /// helper; the enclosing type is marked for injection.
    fn convert_value_assignment(
        &mut self,
        id: NodeIndex,
        operator: AssignOp,
        left: NodeIndex,
        right: NodeIndex,
    ) -> ConvertResult<VbNode> {
        let Some(enclosing) = self.tree.enclosing_type(id) else {
            return Err(ConvertError::invariant(
                "assignment expression outside a type declaration",
            ));
        };

        let target = self.convert_expression(left)?;
        let right = self.convert_expression(right)?;
        let value = match operator {
            AssignOp::Assign => right,
            op => {
                let expansion = match tokens::convert_assign_op(op) {
                    tokens::MappedAssign::Direct(_) => compound_expansion_op(op),
                    tokens::MappedAssign::Expand(binary) => binary,
                };
                VbNode::binary(expansion, target.clone(), right)
            }
        };

        self.fixups.request_helper(enclosing);
        Ok(VbNode::call(
            VbNode::id(INLINE_ASSIGN_HELPER_NAME),
            VbArgument::list(vec![target, value]),
        ))
    }

    fn convert_initializer(&mut self, id: NodeIndex) -> ConvertResult<VbNode> {
        let tree = self.tree;
        let SourceKind::InitializerExpression { kind, expressions } = tree.kind(id) else {
            return Err(ConvertError::invariant("expected an initializer expression"));
        };
        match kind {
            InitializerKind::Array => {
                let mut values = Vec::with_capacity(expressions.len());
                for &expr in expressions {
                    values.push(self.convert_expression(expr)?);
                }
                Ok(VbNode::CollectionInitializer(values))
            }
            InitializerKind::Object => {
                let mut members = Vec::with_capacity(expressions.len());
                for &expr in expressions {
                    let SourceKind::AssignmentExpression {
                        operator: AssignOp::Assign,
                        left,
                        right,
                    } = tree.kind(expr)
                    else {
                        return Err(ConvertError::invariant(
                            "object initializer member is not an assignment",
                        ));
                    };
                    let SourceKind::IdentifierName { identifier } = tree.kind(*left) else {
                        return Err(ConvertError::invariant(
                            "object initializer member is not a simple name",
                        ));
                    };
                    members.push((
                        tokens::convert_identifier(identifier),
                        self.convert_expression(*right)?,
                    ));
                }
                Ok(VbNode::ObjectMemberInitializer(members))
            }
        }
    }

    fn convert_array_creation(
        &mut self,
        array_type: NodeIndex,
        initializer: Option<NodeIndex>,
    ) -> ConvertResult<VbNode> {
        let tree = self.tree;
        let SourceKind::ArrayType {
            element_type,
            rank_specifiers,
        } = tree.kind(array_type)
        else {
            return Err(ConvertError::invariant(
                "array creation without an array type",
            ));
        };
        let element = self.convert_type(*element_type)?;

        // The first rank's explicit sizes become upper bounds, off by one
        // because the target spells the last index, not the length.
        let mut bounds = Vec::new();
        let mut ranks = Vec::new();
        for (pos, &spec) in rank_specifiers.iter().enumerate() {
            let SourceKind::ArrayRankSpecifier { rank, sizes } = tree.kind(spec) else {
                return Err(ConvertError::invariant(
                    "array creation holds a non-rank specifier",
                ));
            };
            if pos == 0 {
                for &size in sizes {
                    bounds.push(VbArgument::positional(self.size_to_upper_bound(size)?));
                }
            } else {
                ranks.push(*rank);
            }
        }

        let initializer = match initializer {
            Some(init) => Some(Box::new(self.convert_initializer(init)?)),
            None => None,
        };
        Ok(VbNode::ArrayCreation {
            element: Box::new(element),
            bounds,
            ranks,
            initializer,
        })
    }

    fn size_to_upper_bound(&mut self, size: NodeIndex) -> ConvertResult<VbNode> {
        if let SourceKind::LiteralExpression { value } = self.tree.kind(size) {
            if let Some(n) = value.as_i64() {
                return Ok(VbNode::num_lit((n - 1).to_string()));
            }
        }
        Ok(VbNode::binary(
            VbBinaryOp::Subtract,
            self.convert_expression(size)?,
            VbNode::num_lit("1"),
        ))
    }

    fn interlocked_call(&mut self, method: &str, operand: NodeIndex) -> ConvertResult<VbNode> {
        let operand = self.convert_expression(operand)?;
        Ok(VbNode::call(
            VbNode::member(VbNode::dotted("System.Threading.Interlocked"), method),
            VbArgument::list(vec![operand]),
        ))
    }

    pub(crate) fn is_null_literal(&self, id: NodeIndex) -> bool {
        matches!(
            self.tree.kind(id),
            SourceKind::LiteralExpression {
                value: ConstValue::Null
            }
        )
    }

    fn nameof_operand(&self, callee: NodeIndex, arguments: &[NodeIndex]) -> Option<NodeIndex> {
        let SourceKind::IdentifierName { identifier } = self.tree.kind(callee) else {
            return None;
        };
        if identifier != "nameof" || arguments.len() != 1 {
            return None;
        }
        match self.tree.kind(arguments[0]) {
            SourceKind::Argument { expression, .. } => Some(*expression),
            _ => Some(arguments[0]),
        }
    }
}

/// Binary operator behind a compound assignment that has a direct compound
/// form, for sites that still need the expanded value.
fn compound_expansion_op(op: AssignOp) -> VbBinaryOp {
    match op {
        AssignOp::Add => VbBinaryOp::Add,
        AssignOp::Subtract => VbBinaryOp::Subtract,
        AssignOp::Multiply => VbBinaryOp::Multiply,
        AssignOp::Divide => VbBinaryOp::Divide,
        AssignOp::LeftShift => VbBinaryOp::LeftShift,
        AssignOp::RightShift => VbBinaryOp::RightShift,
        AssignOp::Modulo => VbBinaryOp::Modulo,
        AssignOp::And => VbBinaryOp::And,
        AssignOp::Or => VbBinaryOp::Or,
        AssignOp::Xor => VbBinaryOp::Xor,
        AssignOp::Assign => VbBinaryOp::Equals,
    }
}
