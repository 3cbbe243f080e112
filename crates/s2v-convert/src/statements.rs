//! Statement translation rules.
//!
//! One source statement may become several target statements (checked
//! blocks flatten with review markers, generic `for` loops lower to a
//! priming sequence plus a `While` block), so the statement entry point
//! returns a list. Leading comment trivia of the source statement is
//! re-attached to the first statement produced.
//!
//! The counted-loop classifier is shared with the `break`/`continue` rule:
//! the keyword named in an `Exit`/`Continue` statement must match the loop
//! block this module actually emits for the nearest enclosing loop.

use s2v_common::{ConvertError, ConvertResult};
use s2v_syntax::source::{AssignOp, BinaryOp, PostfixOp, SourceKind, UnaryOp};
use s2v_syntax::vb::{VbAssignOp, VbBinaryOp, VbElseIf, VbLoopKind, VbModifier, VbNode};
use s2v_syntax::NodeIndex;

use crate::driver::Converter;
use crate::tokens;

/// A `for` statement that fits the counted `For ... Next` shape.
struct CountedFor {
    variable: String,
    from: NodeIndex,
    bound: NodeIndex,
    /// Adjustment applied to the bound: strict comparisons stop one short
    /// of it.
    bound_adjust: i64,
    /// `None` means the implicit step of one.
    step: Option<i64>,
}

impl<'a> Converter<'a> {
    /// Convert one source statement into its target statement(s).
    pub fn convert_statements(&mut self, id: NodeIndex) -> ConvertResult<Vec<VbNode>> {
        let mut out = self.convert_statement_inner(id)?;
        let trivia = self.tree.leading_trivia(id);
        if !trivia.is_empty() {
            if let Some(first) = out.first_mut() {
                let node = std::mem::replace(first, VbNode::nothing());
                *first = node.with_leading(trivia.to_vec());
            }
        }
        Ok(out)
    }

    /// Convert a statement list (a member body), flattening per-statement
    /// expansions.
    pub(crate) fn convert_body(&mut self, statements: &[NodeIndex]) -> ConvertResult<Vec<VbNode>> {
        let mut out = Vec::with_capacity(statements.len());
        for &stmt in statements {
            out.extend(self.convert_statements(stmt)?);
        }
        Ok(out)
    }

    fn convert_statement_inner(&mut self, id: NodeIndex) -> ConvertResult<Vec<VbNode>> {
        let tree = self.tree;
        match tree.kind(id) {
            SourceKind::Block { statements } => self.convert_body(statements),

            SourceKind::LocalDeclarationStatement {
                modifiers,
                declaration,
            } => Ok(vec![VbNode::LocalDeclaration {
                modifiers: tokens::convert_modifiers(*modifiers, tokens::TokenContext::Local),
                declarators: self.convert_variable_declaration(*declaration)?,
            }]),

            SourceKind::ExpressionStatement { expression } => {
                Ok(vec![self.convert_expression_as_statement(*expression)?])
            }

            SourceKind::IfStatement {
                condition,
                statement,
                else_branch,
            } => self.convert_if(*condition, *statement, *else_branch),

            SourceKind::WhileStatement {
                condition,
                statement,
            } => Ok(vec![VbNode::WhileBlock {
                condition: Box::new(self.convert_expression(*condition)?),
                statements: self.convert_statements(*statement)?,
            }]),

            SourceKind::DoStatement {
                statement,
                condition,
            } => Ok(vec![VbNode::DoLoopWhileBlock {
                statements: self.convert_statements(*statement)?,
                condition: Box::new(self.convert_expression(*condition)?),
            }]),

            SourceKind::ForStatement {
                declaration,
                initializers,
                condition,
                incrementors,
                statement,
            } => self.convert_for(declaration, initializers, condition, incrementors, *statement),

            SourceKind::ForEachStatement {
                ty,
                identifier,
                expression,
                statement,
            } => {
                let as_clause = match ty {
                    Some(ty) => Some(s2v_syntax::vb::VbAsClause::new(self.convert_type(*ty)?)),
                    None => None,
                };
                Ok(vec![VbNode::ForEachBlock {
                    variable: tokens::convert_identifier(identifier),
                    as_clause,
                    expression: Box::new(self.convert_expression(*expression)?),
                    statements: self.convert_statements(*statement)?,
                }])
            }

            SourceKind::UsingStatement {
                declaration,
                expression,
                statement,
            } => {
                let declarators = match declaration {
                    Some(decl) => self.convert_variable_declaration(*decl)?,
                    None => Vec::new(),
                };
                let expression = match expression {
                    Some(expr) => Some(Box::new(self.convert_expression(*expr)?)),
                    None => None,
                };
                if declarators.is_empty() && expression.is_none() {
                    return Err(ConvertError::invariant(
                        "using statement with neither declaration nor expression",
                    ));
                }
                Ok(vec![VbNode::UsingBlock {
                    expression,
                    declarators,
                    statements: self.convert_statements(*statement)?,
                }])
            }

            SourceKind::ReturnStatement { expression } => {
                let expr = match expression {
                    Some(expr) => Some(self.convert_expression(*expr)?),
                    None => None,
                };
                Ok(vec![VbNode::ret(expr)])
            }

            SourceKind::ThrowStatement { expression } => {
                let expr = match expression {
                    Some(expr) => Some(Box::new(self.convert_expression(*expr)?)),
                    None => None,
                };
                Ok(vec![VbNode::ThrowStatement(expr)])
            }

            SourceKind::BreakStatement => {
                let Some(kind) = self.enclosing_loop_kind(id) else {
                    return Err(ConvertError::invariant("break statement outside a loop"));
                };
                Ok(vec![VbNode::ExitStatement(kind)])
            }
            SourceKind::ContinueStatement => {
                let Some(kind) = self.enclosing_loop_kind(id) else {
                    return Err(ConvertError::invariant("continue statement outside a loop"));
                };
                Ok(vec![VbNode::ContinueStatement(kind)])
            }

            SourceKind::CheckedStatement { checked, block } => {
                self.convert_checked(*checked, *block)
            }

            SourceKind::Opaque { description } => {
                Err(ConvertError::unsupported(description.clone()))
            }

            other => Err(ConvertError::invariant(format!(
                "{} in statement position",
                other.name()
            ))),
        }
    }

    /// An expression used as a bare statement. The forms whose target
    /// equivalent is itself a statement are handled here; everything else
    /// wraps as an expression statement.
    pub(crate) fn convert_expression_as_statement(
        &mut self,
        id: NodeIndex,
    ) -> ConvertResult<VbNode> {
        let tree = self.tree;
        match tree.kind(id) {
            SourceKind::PrefixUnaryExpression {
                operator: UnaryOp::Increment,
                operand,
            }
            | SourceKind::PostfixUnaryExpression {
                operator: PostfixOp::Increment,
                operand,
            } => Ok(VbNode::assign(
                VbAssignOp::Add,
                self.convert_expression(*operand)?,
                VbNode::num_lit("1"),
            )),
            SourceKind::PrefixUnaryExpression {
                operator: UnaryOp::Decrement,
                operand,
            }
            | SourceKind::PostfixUnaryExpression {
                operator: PostfixOp::Decrement,
                operand,
            } => Ok(VbNode::assign(
                VbAssignOp::Subtract,
                self.convert_expression(*operand)?,
                VbNode::num_lit("1"),
            )),

            SourceKind::AssignmentExpression {
                operator,
                left,
                right,
            } => {
                // Combining onto a delegate-typed target is event wiring.
                let is_delegate = self
                    .model
                    .type_of(*left)
                    .is_some_and(|facts| facts.is_delegate);
                match (operator, is_delegate) {
                    (AssignOp::Add, true) => Ok(VbNode::AddHandlerStatement {
                        event: Box::new(self.convert_expression(*left)?),
                        handler: Box::new(self.convert_expression(*right)?),
                    }),
                    (AssignOp::Subtract, true) => Ok(VbNode::RemoveHandlerStatement {
                        event: Box::new(self.convert_expression(*left)?),
                        handler: Box::new(self.convert_expression(*right)?),
                    }),
                    (op, _) => {
                        let target = self.convert_expression(*left)?;
                        let value = self.convert_expression(*right)?;
                        match tokens::convert_assign_op(*op) {
                            tokens::MappedAssign::Direct(op) => {
                                Ok(VbNode::assign(op, target, value))
                            }
                            tokens::MappedAssign::Expand(binary) => Ok(VbNode::assign(
                                VbAssignOp::Simple,
                                target.clone(),
                                VbNode::binary(binary, target, value),
                            )),
                        }
                    }
                }
            }

            _ => Ok(VbNode::expr_stmt(self.convert_expression(id)?)),
        }
    }

    /// Flatten an `else if` chain into a single multi-line conditional with
    /// one `ElseIf` branch per link.
    fn convert_if(
        &mut self,
        condition: NodeIndex,
        statement: NodeIndex,
        else_branch: Option<NodeIndex>,
    ) -> ConvertResult<Vec<VbNode>> {
        let tree = self.tree;
        let condition = self.convert_expression(condition)?;
        let statements = self.convert_statements(statement)?;

        let mut else_ifs = Vec::new();
        let mut else_block = None;
        let mut else_is_block = false;
        let mut branch = else_branch;
        while let Some(node) = branch {
            match tree.kind(node) {
                SourceKind::IfStatement {
                    condition,
                    statement,
                    else_branch,
                } => {
                    else_ifs.push(VbElseIf {
                        condition: self.convert_expression(*condition)?,
                        statements: self.convert_statements(*statement)?,
                    });
                    branch = *else_branch;
                }
                _ => {
                    else_is_block = matches!(tree.kind(node), SourceKind::Block { .. });
                    else_block = Some(self.convert_statements(node)?);
                    branch = None;
                }
            }
        }

        // A braceless single-statement body with no else-if links keeps the
        // one-line form.
        let single_line = else_ifs.is_empty()
            && !matches!(tree.kind(statement), SourceKind::Block { .. })
            && statements.len() == 1
            && else_block
                .as_ref()
                .is_none_or(|stmts| !else_is_block && stmts.len() == 1);
        if single_line {
            let mut statements = statements;
            let statement = Box::new(statements.remove(0));
            let else_statement = else_block
                .and_then(|mut stmts| stmts.pop())
                .map(Box::new);
            return Ok(vec![VbNode::SingleLineIf {
                condition: Box::new(condition),
                statement,
                else_statement,
            }]);
        }

        Ok(vec![VbNode::MultiLineIf {
            condition: Box::new(condition),
            statements,
            else_ifs,
            else_block,
        }])
    }

    fn convert_for(
        &mut self,
        declaration: &Option<NodeIndex>,
        initializers: &[NodeIndex],
        condition: &Option<NodeIndex>,
        incrementors: &[NodeIndex],
        statement: NodeIndex,
    ) -> ConvertResult<Vec<VbNode>> {
        if let Some(counted) = self.classify_for(declaration, initializers, condition, incrementors)
        {
            let from = self.convert_expression(counted.from)?;
            let to = self.adjusted_bound(counted.bound, counted.bound_adjust)?;
            let step = counted
                .step
                .map(|s| Box::new(VbNode::num_lit(s.to_string())));
            return Ok(vec![VbNode::ForBlock {
                variable: tokens::convert_identifier(&counted.variable),
                from: Box::new(from),
                to: Box::new(to),
                step,
                statements: self.convert_statements(statement)?,
            }]);
        }

        // General shape: prime, loop on the condition, step at the end of
        // the body.
        let mut out = Vec::new();
        if let Some(decl) = declaration {
            out.push(VbNode::LocalDeclaration {
                modifiers: vec![VbModifier::Dim],
                declarators: self.convert_variable_declaration(*decl)?,
            });
        }
        for &init in initializers {
            out.push(self.convert_expression_as_statement(init)?);
        }
        let condition = match condition {
            Some(cond) => self.convert_expression(*cond)?,
            None => VbNode::bool_lit(true),
        };
        let mut body = self.convert_statements(statement)?;
        for &inc in incrementors {
            body.push(self.convert_expression_as_statement(inc)?);
        }
        let mut loop_block = VbNode::WhileBlock {
            condition: Box::new(condition),
            statements: body,
        };
        // `Continue While` re-tests the condition without running the
        // relocated incrementors.
        if !incrementors.is_empty() && self.contains_direct_continue(statement) {
            let reason = "Continue statements in this loop skip the relocated incrementors!";
            loop_block = loop_block
                .with_leading(vec![s2v_common::CommentTrivia::begin_manual_review(reason)])
                .with_trailing(vec![s2v_common::CommentTrivia::end_manual_review(reason)]);
        }
        out.push(loop_block);
        Ok(out)
    }

    /// Whether the subtree holds a `continue` targeting the loop whose body
    /// `root` is, i.e. one not nested inside an inner loop.
    fn contains_direct_continue(&self, root: NodeIndex) -> bool {
        let tree = self.tree;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let kind = tree.kind(id);
            if matches!(kind, SourceKind::ContinueStatement) {
                return true;
            }
            if !kind.is_loop() {
                stack.extend(kind.children());
            }
        }
        false
    }

    fn adjusted_bound(&mut self, bound: NodeIndex, adjust: i64) -> ConvertResult<VbNode> {
        if adjust == 0 {
            return self.convert_expression(bound);
        }
        if let SourceKind::LiteralExpression { value } = self.tree.kind(bound) {
            if let Some(n) = value.as_i64() {
                return Ok(VbNode::num_lit((n + adjust).to_string()));
            }
        }
        let op = if adjust < 0 {
            VbBinaryOp::Subtract
        } else {
            VbBinaryOp::Add
        };
        Ok(VbNode::binary(
            op,
            self.convert_expression(bound)?,
            VbNode::num_lit("1"),
        ))
    }

    fn convert_checked(&mut self, checked: bool, block: NodeIndex) -> ConvertResult<Vec<VbNode>> {
        let reason = if checked {
            "Visual Basic does not support checked statements!"
        } else {
            "Visual Basic does not support unchecked statements!"
        };
        let mut statements = self.convert_statements(block)?;
        // An empty body still carries the marker pair.
        if statements.is_empty() {
            statements.push(VbNode::EmptyStatement);
        }
        if let Some(first) = statements.first_mut() {
            let node = std::mem::replace(first, VbNode::nothing());
            *first = node.with_leading(vec![s2v_common::CommentTrivia::begin_manual_review(
                reason,
            )]);
        }
        if let Some(last) = statements.last_mut() {
            let node = std::mem::replace(last, VbNode::nothing());
            *last = node.with_trailing(vec![s2v_common::CommentTrivia::end_manual_review(reason)]);
        }
        Ok(statements)
    }

    /// The loop keyword an `Exit`/`Continue` at `id` must name, derived from
    /// the nearest enclosing loop and, for `for` statements, from the same
    /// classification the loop rule itself uses.
    fn enclosing_loop_kind(&self, id: NodeIndex) -> Option<VbLoopKind> {
        self.tree.ancestors(id).find_map(|anc| match self.tree.kind(anc) {
            SourceKind::WhileStatement { .. } => Some(VbLoopKind::While),
            SourceKind::DoStatement { .. } => Some(VbLoopKind::Do),
            SourceKind::ForEachStatement { .. } => Some(VbLoopKind::For),
            SourceKind::ForStatement {
                declaration,
                initializers,
                condition,
                incrementors,
                ..
            } => {
                if self
                    .classify_for(declaration, initializers, condition, incrementors)
                    .is_some()
                {
                    Some(VbLoopKind::For)
                } else {
                    Some(VbLoopKind::While)
                }
            }
            _ => None,
        })
    }

    /// Decide whether a `for` statement fits the counted shape: one control
    /// variable initialized up front, a comparison of that variable against
    /// a bound, and a single constant-step mutation of it, with the step
    /// direction matching the comparison.
    fn classify_for(
        &self,
        declaration: &Option<NodeIndex>,
        initializers: &[NodeIndex],
        condition: &Option<NodeIndex>,
        incrementors: &[NodeIndex],
    ) -> Option<CountedFor> {
        let tree = self.tree;
        let condition = (*condition)?;
        if incrementors.len() != 1 {
            return None;
        }

        let (variable, from) = match declaration {
            Some(decl) => {
                if !initializers.is_empty() {
                    return None;
                }
                let SourceKind::VariableDeclaration { declarators, .. } = tree.kind(*decl) else {
                    return None;
                };
                if declarators.len() != 1 {
                    return None;
                }
                let SourceKind::VariableDeclarator {
                    identifier,
                    initializer: Some(init),
                } = tree.kind(declarators[0])
                else {
                    return None;
                };
                (identifier.clone(), *init)
            }
            None => {
                if initializers.len() != 1 {
                    return None;
                }
                let SourceKind::AssignmentExpression {
                    operator: AssignOp::Assign,
                    left,
                    right,
                } = tree.kind(initializers[0])
                else {
                    return None;
                };
                let SourceKind::IdentifierName { identifier } = tree.kind(*left) else {
                    return None;
                };
                (identifier.clone(), *right)
            }
        };

        let SourceKind::BinaryExpression {
            operator,
            left,
            right,
        } = tree.kind(condition)
        else {
            return None;
        };
        if !self.is_identifier(*left, &variable) {
            return None;
        }
        let step = self.step_of(incrementors[0], &variable)?;
        let (ascending, bound_adjust) = match operator {
            BinaryOp::Less => (true, -1),
            BinaryOp::LessOrEqual => (true, 0),
            BinaryOp::Greater => (false, 1),
            BinaryOp::GreaterOrEqual => (false, 0),
            _ => return None,
        };
        if ascending != (step > 0) {
            return None;
        }

        Some(CountedFor {
            variable,
            from,
            bound: *right,
            bound_adjust,
            step: if step == 1 { None } else { Some(step) },
        })
    }

    /// The constant step a single incrementor applies to `variable`, or
    /// `None` when it is not a recognizable constant step.
    fn step_of(&self, incrementor: NodeIndex, variable: &str) -> Option<i64> {
        let tree = self.tree;
        match tree.kind(incrementor) {
            SourceKind::PrefixUnaryExpression {
                operator: UnaryOp::Increment,
                operand,
            }
            | SourceKind::PostfixUnaryExpression {
                operator: PostfixOp::Increment,
                operand,
            } if self.is_identifier(*operand, variable) => Some(1),
            SourceKind::PrefixUnaryExpression {
                operator: UnaryOp::Decrement,
                operand,
            }
            | SourceKind::PostfixUnaryExpression {
                operator: PostfixOp::Decrement,
                operand,
            } if self.is_identifier(*operand, variable) => Some(-1),
            SourceKind::AssignmentExpression {
                operator: op @ (AssignOp::Add | AssignOp::Subtract),
                left,
                right,
            } if self.is_identifier(*left, variable) => {
                let SourceKind::LiteralExpression { value } = tree.kind(*right) else {
                    return None;
                };
                let k = value.as_i64().filter(|&k| k != 0)?;
                Some(if *op == AssignOp::Add { k } else { -k })
            }
            _ => None,
        }
    }

    fn is_identifier(&self, id: NodeIndex, name: &str) -> bool {
        matches!(
            self.tree.kind(id),
            SourceKind::IdentifierName { identifier } if identifier == name
        )
    }
}
