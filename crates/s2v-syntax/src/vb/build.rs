//! Builder helpers for target-node construction.
//!
//! The converter (and the prebuilt helper template) construct every target
//! node through these, so there is exactly one code path for tree assembly.

use s2v_common::CommentTrivia;

use super::node::{VbArgument, VbLit, VbNode};
use super::ops::{VbAssignOp, VbBinaryOp, VbUnaryOp};

impl VbNode {
    /// Create an identifier node.
    pub fn id(name: impl Into<String>) -> Self {
        VbNode::Identifier(name.into())
    }

    /// Create a string literal.
    pub fn str_lit(s: impl Into<String>) -> Self {
        VbNode::Literal(VbLit::Str(s.into()))
    }

    /// Create a number literal from already-rendered digits.
    pub fn num_lit(n: impl Into<String>) -> Self {
        VbNode::Literal(VbLit::Number(n.into()))
    }

    /// Create `Nothing`.
    pub const fn nothing() -> Self {
        VbNode::Literal(VbLit::Nothing)
    }

    /// Create a boolean literal.
    pub const fn bool_lit(value: bool) -> Self {
        VbNode::Literal(VbLit::Bool(value))
    }

    /// Build a name from a dotted path: `"A.B.C"` becomes nested
    /// qualified-name nodes.
    pub fn dotted(path: &str) -> Self {
        let mut parts = path.split('.');
        let first = parts.next().unwrap_or_default();
        let mut node = VbNode::id(first);
        for part in parts {
            node = VbNode::QualifiedName {
                left: Box::new(node),
                right: Box::new(VbNode::id(part)),
            };
        }
        node
    }

    /// Create an invocation.
    pub fn call(callee: Self, arguments: Vec<VbArgument>) -> Self {
        VbNode::Invocation {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a member access: `base.name`.
    pub fn member(base: Self, name: impl Into<String>) -> Self {
        VbNode::MemberAccess {
            base: Box::new(base),
            name: Box::new(VbNode::id(name)),
        }
    }

    /// Create a binary expression.
    pub fn binary(op: VbBinaryOp, left: Self, right: Self) -> Self {
        VbNode::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a unary expression.
    pub fn unary(op: VbUnaryOp, operand: Self) -> Self {
        VbNode::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Create `expr Is Nothing`.
    pub fn is_nothing(expr: Self) -> Self {
        VbNode::binary(VbBinaryOp::Is, expr, VbNode::nothing())
    }

    /// Create `expr IsNot Nothing`.
    pub fn is_not_nothing(expr: Self) -> Self {
        VbNode::binary(VbBinaryOp::IsNot, expr, VbNode::nothing())
    }

    /// Create an assignment statement.
    pub fn assign(op: VbAssignOp, target: Self, value: Self) -> Self {
        VbNode::Assignment {
            op,
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// Create an expression statement.
    pub fn expr_stmt(expr: Self) -> Self {
        VbNode::ExpressionStatement(Box::new(expr))
    }

    /// Create a return statement.
    pub fn ret(expr: Option<Self>) -> Self {
        VbNode::ReturnStatement(expr.map(Box::new))
    }

    /// Wrap in parentheses.
    pub fn paren(self) -> Self {
        VbNode::Parenthesized(Box::new(self))
    }

    /// Wrap with leading comment trivia. A no-op on an empty list.
    pub fn with_leading(self, leading: Vec<CommentTrivia>) -> Self {
        if leading.is_empty() {
            return self;
        }
        match self {
            VbNode::Commented {
                leading: mut existing,
                trailing,
                node,
            } => {
                let mut combined = leading;
                combined.append(&mut existing);
                VbNode::Commented {
                    leading: combined,
                    trailing,
                    node,
                }
            }
            other => VbNode::Commented {
                leading,
                trailing: Vec::new(),
                node: Box::new(other),
            },
        }
    }

    /// Wrap with trailing comment trivia. A no-op on an empty list.
    pub fn with_trailing(self, trailing: Vec<CommentTrivia>) -> Self {
        if trailing.is_empty() {
            return self;
        }
        match self {
            VbNode::Commented {
                leading,
                trailing: mut existing,
                node,
            } => {
                existing.extend(trailing);
                VbNode::Commented {
                    leading,
                    trailing: existing,
                    node,
                }
            }
            other => VbNode::Commented {
                leading: Vec::new(),
                trailing,
                node: Box::new(other),
            },
        }
    }

    /// The node with any comment wrapping peeled off.
    pub fn uncommented(&self) -> &VbNode {
        match self {
            VbNode::Commented { node, .. } => node.uncommented(),
            other => other,
        }
    }
}

impl VbArgument {
    /// Shorthand for a list of positional arguments.
    pub fn list(values: Vec<VbNode>) -> Vec<VbArgument> {
        values.into_iter().map(VbArgument::positional).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_builds_nested_qualified_names() {
        let node = VbNode::dotted("System.Threading.Interlocked");
        let VbNode::QualifiedName { left, right } = &node else {
            panic!("expected qualified name");
        };
        assert_eq!(**right, VbNode::id("Interlocked"));
        let VbNode::QualifiedName { left, right } = &**left else {
            panic!("expected nested qualified name");
        };
        assert_eq!(**left, VbNode::id("System"));
        assert_eq!(**right, VbNode::id("Threading"));
    }

    #[test]
    fn commented_wrapping_accumulates() {
        let stmt = VbNode::ret(None)
            .with_leading(vec![CommentTrivia::new("a")])
            .with_leading(vec![CommentTrivia::new("b")]);
        let VbNode::Commented { leading, .. } = &stmt else {
            panic!("expected commented node");
        };
        assert_eq!(leading.len(), 2);
        assert_eq!(leading[0].text, "b");
        assert_eq!(stmt.uncommented(), &VbNode::ReturnStatement(None));
    }

    #[test]
    fn with_empty_trivia_is_identity() {
        let stmt = VbNode::ret(None).with_leading(Vec::new());
        assert_eq!(stmt, VbNode::ReturnStatement(None));
    }
}
