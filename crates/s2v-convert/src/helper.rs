//! The synthesized inline-assignment helper.
//!
//! VB has no assignment-as-expression, so value-position assignments are
//! rewritten into calls to this helper. The template is a prebuilt target
//! tree constructed through the ordinary node builders (never re-parsed
//! from text) and cloned once per injection site. Its rendered form is
//! fixed:
//!
//! ```text
//! <Obsolete("Please refactor code that uses this function, it is a simple work-around to simulate inline assignment in VB!")>
//! Private Shared Function __InlineAssignHelper(Of T)(ByRef target As T, value As T) As T
//! target = value
//! Return value
//! End Function
//! ```

use once_cell::sync::Lazy;
use s2v_syntax::vb::{
    VbArgument, VbAsClause, VbAssignOp, VbModifier, VbNode, VbParameter, VbVariance,
};

/// Name the rewrite rule invokes and the template declares.
pub const INLINE_ASSIGN_HELPER_NAME: &str = "__InlineAssignHelper";

const OBSOLETE_MESSAGE: &str = "Please refactor code that uses this function, \
it is a simple work-around to simulate inline assignment in VB!";

static TEMPLATE: Lazy<VbNode> = Lazy::new(build_template);

/// A fresh copy of the helper declaration, ready to splice into a type.
pub fn inline_assign_helper() -> VbNode {
    TEMPLATE.clone()
}

fn build_template() -> VbNode {
    let as_t = || VbAsClause::new(VbNode::id("T"));
    VbNode::MethodBlock {
        is_function: true,
        attributes: vec![VbNode::AttributeList(vec![VbNode::Attribute {
            target: None,
            name: Box::new(VbNode::id("Obsolete")),
            arguments: vec![VbArgument::positional(VbNode::str_lit(OBSOLETE_MESSAGE))],
        }])],
        modifiers: vec![VbModifier::Private, VbModifier::Shared],
        identifier: INLINE_ASSIGN_HELPER_NAME.to_string(),
        type_parameters: vec![VbNode::TypeParameter {
            variance: VbVariance::None,
            name: "T".to_string(),
            constraints: Vec::new(),
        }],
        parameters: vec![
            VbParameter {
                attributes: Vec::new(),
                modifiers: vec![VbModifier::ByRef],
                name: "target".to_string(),
                as_clause: Some(as_t()),
                default: None,
            },
            VbParameter {
                attributes: Vec::new(),
                modifiers: vec![VbModifier::ByVal],
                name: "value".to_string(),
                as_clause: Some(as_t()),
                default: None,
            },
        ],
        return_clause: Some(as_t()),
        body: Some(vec![
            VbNode::assign(VbAssignOp::Simple, VbNode::id("target"), VbNode::id("value")),
            VbNode::ret(Some(VbNode::id("value"))),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_a_private_shared_generic_function() {
        let VbNode::MethodBlock {
            is_function,
            modifiers,
            identifier,
            type_parameters,
            parameters,
            body,
            ..
        } = inline_assign_helper()
        else {
            panic!("expected a method block");
        };
        assert!(is_function);
        assert_eq!(identifier, INLINE_ASSIGN_HELPER_NAME);
        assert_eq!(modifiers, vec![VbModifier::Private, VbModifier::Shared]);
        assert_eq!(type_parameters.len(), 1);
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[0].modifiers, vec![VbModifier::ByRef]);
        assert_eq!(body.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn clones_are_structurally_identical() {
        assert_eq!(inline_assign_helper(), inline_assign_helper());
    }
}
