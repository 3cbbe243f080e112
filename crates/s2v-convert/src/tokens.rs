//! Lexical token mapping between the two grammars.
//!
//! Pure functions, no state: operator kinds, modifier sets and identifiers
//! that collide with target-language keywords. Target identifiers are
//! compared case-insensitively because the target grammar is
//! case-insensitive.

use s2v_syntax::source::{AssignOp, BinaryOp, Modifiers, PredefinedKind, UnaryOp};
use s2v_syntax::vb::{VbAssignOp, VbBinaryOp, VbModifier, VbPredefined, VbUnaryOp};

/// Where a modifier list appears; some source modifiers map differently on
/// types, members and locals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenContext {
    /// Type declarations at namespace/unit scope.
    Global,
    /// Members of a type.
    Member,
    /// Local declarations and expressions.
    Local,
}

/// VB reserved words, lowercase. Identifiers colliding with one are escaped
/// as `[name]`. Predefined type keywords that are also legal identifiers in
/// the source are included; the escape is harmless when over-applied but a
/// missing escape produces invalid output.
const VB_KEYWORDS: &[&str] = &[
    "addhandler", "addressof", "alias", "and", "andalso", "as", "boolean", "byref", "byte",
    "byval", "call", "case", "catch", "cbool", "cbyte", "cchar", "cdate", "cdbl", "cdec", "char",
    "cint", "class", "clng", "cobj", "const", "continue", "csbyte", "cshort", "csng", "cstr",
    "ctype", "cuint", "culng", "cushort", "date", "decimal", "declare", "default", "delegate",
    "dim", "directcast", "do", "double", "each", "else", "elseif", "end", "endif", "enum",
    "erase", "error", "event", "exit", "false", "finally", "for", "friend", "function", "get",
    "gettype", "getxmlnamespace", "global", "gosub", "goto", "handles", "if", "implements",
    "imports", "in", "inherits", "integer", "interface", "is", "isnot", "let", "lib", "like",
    "long", "loop", "me", "mod", "module", "mustinherit", "mustoverride", "mybase", "myclass",
    "namespace", "narrowing", "new", "next", "not", "nothing", "notinheritable",
    "notoverridable", "object", "of", "on", "operator", "option", "optional", "or", "orelse",
    "overloads", "overridable", "overrides", "paramarray", "partial", "private", "property",
    "protected", "public", "raiseevent", "readonly", "redim", "rem", "removehandler", "resume",
    "return", "sbyte", "select", "set", "shadows", "shared", "short", "single", "static",
    "step", "stop", "string", "structure", "sub", "synclock", "then", "throw", "to", "true",
    "try", "trycast", "typeof", "uinteger", "ulong", "ushort", "using", "variant", "wend",
    "when", "while", "widening", "with", "withevents", "writeonly", "xor",
];

/// Map a source identifier, escaping target-keyword collisions.
pub fn convert_identifier(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    if VB_KEYWORDS.binary_search(&lower.as_str()).is_ok() {
        format!("[{name}]")
    } else {
        name.to_string()
    }
}

/// Map a modifier set for the given context. `static` is intentionally
/// handled here as `Shared`; stripping it inside static containers is the
/// declaration rules' business.
pub fn convert_modifiers(modifiers: Modifiers, context: TokenContext) -> Vec<VbModifier> {
    let mut out = Vec::new();
    if modifiers.contains(Modifiers::PARTIAL) {
        out.push(VbModifier::Partial);
    }
    if modifiers.contains(Modifiers::PUBLIC) {
        out.push(VbModifier::Public);
    }
    if modifiers.contains(Modifiers::PRIVATE) {
        out.push(VbModifier::Private);
    }
    if modifiers.contains(Modifiers::PROTECTED) {
        out.push(VbModifier::Protected);
    }
    if modifiers.contains(Modifiers::INTERNAL) {
        out.push(VbModifier::Friend);
    }
    if modifiers.contains(Modifiers::STATIC) {
        out.push(VbModifier::Shared);
    }
    if modifiers.contains(Modifiers::READONLY) {
        out.push(VbModifier::ReadOnly);
    }
    if modifiers.contains(Modifiers::CONST) {
        out.push(VbModifier::Const);
    }
    if modifiers.contains(Modifiers::ABSTRACT) {
        out.push(match context {
            TokenContext::Global => VbModifier::MustInherit,
            _ => VbModifier::MustOverride,
        });
    }
    if modifiers.contains(Modifiers::SEALED) {
        out.push(match context {
            TokenContext::Global => VbModifier::NotInheritable,
            _ => VbModifier::NotOverridable,
        });
    }
    if modifiers.contains(Modifiers::VIRTUAL) {
        out.push(VbModifier::Overridable);
    }
    if modifiers.contains(Modifiers::OVERRIDE) {
        out.push(VbModifier::Overrides);
    }
    if modifiers.contains(Modifiers::NEW) {
        out.push(VbModifier::Shadows);
    }
    if modifiers.contains(Modifiers::ASYNC) {
        out.push(VbModifier::Async);
    }
    // A local declaration still needs its keyword when no modifier maps.
    if out.is_empty() && context == TokenContext::Local {
        out.push(VbModifier::Dim);
    }
    out
}

/// Map a binary operator. `??`, `as` and null comparisons never reach this
/// table; the expression rules rewrite them structurally first.
pub fn convert_binary_op(op: BinaryOp) -> VbBinaryOp {
    match op {
        BinaryOp::Add => VbBinaryOp::Add,
        BinaryOp::Subtract => VbBinaryOp::Subtract,
        BinaryOp::Multiply => VbBinaryOp::Multiply,
        BinaryOp::Divide => VbBinaryOp::Divide,
        BinaryOp::Modulo => VbBinaryOp::Modulo,
        BinaryOp::LeftShift => VbBinaryOp::LeftShift,
        BinaryOp::RightShift => VbBinaryOp::RightShift,
        BinaryOp::BitwiseAnd => VbBinaryOp::And,
        BinaryOp::BitwiseOr => VbBinaryOp::Or,
        BinaryOp::ExclusiveOr => VbBinaryOp::Xor,
        BinaryOp::LogicalAnd => VbBinaryOp::AndAlso,
        BinaryOp::LogicalOr => VbBinaryOp::OrElse,
        BinaryOp::Equals => VbBinaryOp::Equals,
        BinaryOp::NotEquals => VbBinaryOp::NotEquals,
        BinaryOp::Less => VbBinaryOp::Less,
        BinaryOp::LessOrEqual => VbBinaryOp::LessOrEqual,
        BinaryOp::Greater => VbBinaryOp::Greater,
        BinaryOp::GreaterOrEqual => VbBinaryOp::GreaterOrEqual,
        // Intercepted by the expression rules; mapped here to keep the
        // table total.
        BinaryOp::Coalesce => VbBinaryOp::OrElse,
        BinaryOp::As => VbBinaryOp::Is,
    }
}

/// Map a prefix unary operator. Increment/decrement never reach this table.
pub fn convert_unary_op(op: UnaryOp) -> VbUnaryOp {
    match op {
        UnaryOp::Plus => VbUnaryOp::Plus,
        UnaryOp::Minus => VbUnaryOp::Minus,
        // VB `Not` is both logical and bitwise.
        UnaryOp::LogicalNot | UnaryOp::BitwiseNot => VbUnaryOp::Not,
        UnaryOp::Increment | UnaryOp::Decrement => VbUnaryOp::Plus,
    }
}

/// How a compound assignment maps: some source operators have a direct
/// compound form in the target, the rest expand to `x = x op y`.
pub enum MappedAssign {
    Direct(VbAssignOp),
    Expand(VbBinaryOp),
}

pub fn convert_assign_op(op: AssignOp) -> MappedAssign {
    match op {
        AssignOp::Assign => MappedAssign::Direct(VbAssignOp::Simple),
        AssignOp::Add => MappedAssign::Direct(VbAssignOp::Add),
        AssignOp::Subtract => MappedAssign::Direct(VbAssignOp::Subtract),
        AssignOp::Multiply => MappedAssign::Direct(VbAssignOp::Multiply),
        AssignOp::Divide => MappedAssign::Direct(VbAssignOp::Divide),
        AssignOp::LeftShift => MappedAssign::Direct(VbAssignOp::LeftShift),
        AssignOp::RightShift => MappedAssign::Direct(VbAssignOp::RightShift),
        // No compound form in the target grammar.
        AssignOp::Modulo => MappedAssign::Expand(VbBinaryOp::Modulo),
        AssignOp::And => MappedAssign::Expand(VbBinaryOp::And),
        AssignOp::Or => MappedAssign::Expand(VbBinaryOp::Or),
        AssignOp::Xor => MappedAssign::Expand(VbBinaryOp::Xor),
    }
}

/// Map a predefined type keyword. `void` has no type-position equivalent
/// and is intercepted by the declaration rules before this is called.
pub fn convert_predefined(keyword: PredefinedKind) -> Option<VbPredefined> {
    match keyword {
        PredefinedKind::Object => Some(VbPredefined::Object),
        PredefinedKind::Bool => Some(VbPredefined::Boolean),
        PredefinedKind::Char => Some(VbPredefined::Char),
        PredefinedKind::SByte => Some(VbPredefined::SByte),
        PredefinedKind::Byte => Some(VbPredefined::Byte),
        PredefinedKind::Short => Some(VbPredefined::Short),
        PredefinedKind::UShort => Some(VbPredefined::UShort),
        PredefinedKind::Int => Some(VbPredefined::Integer),
        PredefinedKind::UInt => Some(VbPredefined::UInteger),
        PredefinedKind::Long => Some(VbPredefined::Long),
        PredefinedKind::ULong => Some(VbPredefined::ULong),
        PredefinedKind::Decimal => Some(VbPredefined::Decimal),
        PredefinedKind::Float => Some(VbPredefined::Single),
        PredefinedKind::Double => Some(VbPredefined::Double),
        PredefinedKind::String => Some(VbPredefined::String),
        PredefinedKind::Void => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_is_sorted_for_binary_search() {
        let mut sorted = VB_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, VB_KEYWORDS);
    }

    #[test]
    fn colliding_identifiers_are_escaped() {
        assert_eq!(convert_identifier("Module"), "[Module]");
        assert_eq!(convert_identifier("friend"), "[friend]");
        assert_eq!(convert_identifier("line"), "line");
    }

    #[test]
    fn abstract_maps_by_context() {
        assert_eq!(
            convert_modifiers(Modifiers::ABSTRACT, TokenContext::Global),
            vec![VbModifier::MustInherit]
        );
        assert_eq!(
            convert_modifiers(Modifiers::ABSTRACT, TokenContext::Member),
            vec![VbModifier::MustOverride]
        );
    }

    #[test]
    fn local_context_falls_back_to_dim() {
        assert_eq!(
            convert_modifiers(Modifiers::empty(), TokenContext::Local),
            vec![VbModifier::Dim]
        );
        assert_eq!(
            convert_modifiers(Modifiers::CONST, TokenContext::Local),
            vec![VbModifier::Const]
        );
    }

    #[test]
    fn internal_maps_to_friend() {
        assert_eq!(
            convert_modifiers(Modifiers::INTERNAL | Modifiers::STATIC, TokenContext::Member),
            vec![VbModifier::Friend, VbModifier::Shared]
        );
    }
}
