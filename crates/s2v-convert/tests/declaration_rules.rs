mod common;

use common::*;
use s2v_convert::{translate_unit, ConvertError, SemanticModel, SymbolFacts, TypeFacts, VbNode};
use s2v_syntax::source::{
    AccessorKind, AttributeTarget, Modifiers, ParamModifiers, PredefinedKind, SourceKind, Variance,
};
use s2v_syntax::vb::{VbModifier, VbTypeKind};
use s2v_syntax::SourceArena;

#[test]
fn static_class_becomes_a_module_without_shared_members() {
    let mut arena = SourceArena::new();
    let method = void_method(&mut arena, "Run", Vec::new());
    // Mark the method static too; the module implies it.
    let ret = predefined(&mut arena, PredefinedKind::Void);
    let static_method = arena.alloc(SourceKind::MethodDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC | Modifiers::STATIC,
        return_type: ret,
        identifier: "Helper".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        parameters: Vec::new(),
        body: Some(Vec::new()),
    });
    let class = class_decl(
        &mut arena,
        "Util",
        Modifiers::PUBLIC | Modifiers::STATIC,
        vec![method, static_method],
    );
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root).with_unit_name("Util.cs");

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::TypeBlock {
        kind,
        modifiers,
        members,
        ..
    } = unit_members(&out)[0].uncommented()
    else {
        panic!("expected a type block");
    };
    assert_eq!(*kind, VbTypeKind::Module);
    assert!(!modifiers.contains(&VbModifier::Shared));
    for member in members {
        let VbNode::MethodBlock { modifiers, .. } = member.uncommented() else {
            panic!("expected a method block, got {member:?}");
        };
        assert!(!modifiers.contains(&VbModifier::Shared));
    }
}

#[test]
fn static_container_resolved_through_the_symbol_also_becomes_a_module() {
    // The static modifier sits on another partial declaration; only the
    // resolved symbol knows the container is static.
    let mut arena = SourceArena::new();
    let class = class_decl(&mut arena, "Util", Modifiers::PUBLIC, Vec::new());
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root);

    let mut model = SemanticModel::new();
    model.set_symbol(class, SymbolFacts::static_container());

    let out = translate_unit(&tree, &model).unwrap();
    let VbNode::TypeBlock { kind, .. } = unit_members(&out)[0].uncommented() else {
        panic!("expected a type block");
    };
    assert_eq!(*kind, VbTypeKind::Module);
}

#[test]
fn base_list_splits_on_the_first_entry() {
    // class D : B, IDisposable  ->  Inherits B / Implements IDisposable
    let mut arena = SourceArena::new();
    let base = ident(&mut arena, "B");
    let iface = ident(&mut arena, "IDisposable");
    let class = arena.alloc(SourceKind::ClassDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        identifier: "D".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        base_types: vec![base, iface],
        members: Vec::new(),
    });
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root);

    let mut model = SemanticModel::new();
    model.set_type(base, TypeFacts::default());
    model.set_type(iface, TypeFacts::interface());

    let out = translate_unit(&tree, &model).unwrap();
    let VbNode::TypeBlock {
        inherits,
        implements,
        ..
    } = unit_members(&out)[0].uncommented()
    else {
        panic!("expected a type block");
    };
    assert_eq!(inherits, &vec![VbNode::id("B")]);
    assert_eq!(implements, &vec![VbNode::id("IDisposable")]);
}

#[test]
fn interface_first_base_sends_everything_to_implements() {
    let mut arena = SourceArena::new();
    let iface_a = ident(&mut arena, "IFirst");
    let iface_b = ident(&mut arena, "ISecond");
    let class = arena.alloc(SourceKind::ClassDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        identifier: "D".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        base_types: vec![iface_a, iface_b],
        members: Vec::new(),
    });
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root);

    let mut model = SemanticModel::new();
    model.set_type(iface_a, TypeFacts::interface());
    model.set_type(iface_b, TypeFacts::interface());

    let out = translate_unit(&tree, &model).unwrap();
    let VbNode::TypeBlock {
        inherits,
        implements,
        ..
    } = unit_members(&out)[0].uncommented()
    else {
        panic!("expected a type block");
    };
    assert!(inherits.is_empty());
    assert_eq!(implements.len(), 2);
}

#[test]
fn extension_method_gains_the_attribute_and_the_import_once() {
    let mut arena = SourceArena::new();
    let mut methods = Vec::new();
    for name in ["First", "Second"] {
        let ret = predefined(&mut arena, PredefinedKind::Void);
        let this_ty = ident(&mut arena, "Widget");
        let receiver = arena.alloc(SourceKind::Parameter {
            attribute_lists: Vec::new(),
            modifiers: ParamModifiers::THIS,
            ty: Some(this_ty),
            identifier: "self".to_string(),
            default: None,
        });
        methods.push(arena.alloc(SourceKind::MethodDeclaration {
            attribute_lists: Vec::new(),
            modifiers: Modifiers::PUBLIC | Modifiers::STATIC,
            return_type: ret,
            identifier: name.to_string(),
            type_parameters: Vec::new(),
            constraint_clauses: Vec::new(),
            parameters: vec![receiver],
            body: Some(Vec::new()),
        }));
    }
    let class = class_decl(
        &mut arena,
        "Extensions",
        Modifiers::PUBLIC | Modifiers::STATIC,
        methods,
    );
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let imports = unit_imports(&out);
    assert_eq!(imports.len(), 1, "one import despite two extension methods");
    let VbNode::ImportsStatement { name, .. } = &imports[0] else {
        panic!("expected an imports statement");
    };
    assert_eq!(**name, VbNode::dotted("System.Runtime.CompilerServices"));

    for member in type_members(&unit_members(&out)[0]) {
        let VbNode::MethodBlock { attributes, .. } = member.uncommented() else {
            panic!("expected a method block");
        };
        let VbNode::AttributeList(attrs) = &attributes[0] else {
            panic!("expected an attribute list");
        };
        let VbNode::Attribute { name, .. } = &attrs[0] else {
            panic!("expected an attribute");
        };
        assert_eq!(**name, VbNode::id("Extension"));
    }
}

#[test]
fn out_parameter_becomes_attributed_byref() {
    let mut arena = SourceArena::new();
    let ret = predefined(&mut arena, PredefinedKind::Void);
    let ty = predefined(&mut arena, PredefinedKind::Int);
    let param = arena.alloc(SourceKind::Parameter {
        attribute_lists: Vec::new(),
        modifiers: ParamModifiers::OUT,
        ty: Some(ty),
        identifier: "result".to_string(),
        default: None,
    });
    let method = arena.alloc(SourceKind::MethodDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        return_type: ret,
        identifier: "TryGet".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        parameters: vec![param],
        body: Some(Vec::new()),
    });
    let tree = class_unit(arena, vec![method]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::MethodBlock { parameters, .. } =
        type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a method block");
    };
    assert!(parameters[0].modifiers.contains(&VbModifier::ByRef));
    assert_eq!(parameters[0].attributes.len(), 1);
    let VbNode::ImportsStatement { name, .. } = &unit_imports(&out)[0] else {
        panic!("expected an imports statement");
    };
    assert_eq!(**name, VbNode::dotted("System.Runtime.InteropServices"));
}

#[test]
fn defaulted_parameter_becomes_optional_with_its_value() {
    // void Log(int level = 3) { }
    let mut arena = SourceArena::new();
    let ret = predefined(&mut arena, PredefinedKind::Void);
    let param_ty = predefined(&mut arena, PredefinedKind::Int);
    let default = int(&mut arena, 3);
    let param = arena.alloc(SourceKind::Parameter {
        attribute_lists: Vec::new(),
        modifiers: ParamModifiers::empty(),
        ty: Some(param_ty),
        identifier: "level".to_string(),
        default: Some(default),
    });
    let method = arena.alloc(SourceKind::MethodDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        return_type: ret,
        identifier: "Log".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        parameters: vec![param],
        body: Some(Vec::new()),
    });
    let tree = class_unit(arena, vec![method]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::MethodBlock { parameters, .. } =
        type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a method block");
    };
    assert!(parameters[0].modifiers.contains(&VbModifier::Optional));
    assert_eq!(
        parameters[0].default.as_deref(),
        Some(&VbNode::num_lit("3"))
    );
}

#[test]
fn return_attributes_move_onto_the_as_clause() {
    let mut arena = SourceArena::new();
    let ret = predefined(&mut arena, PredefinedKind::Int);
    let attr_name = ident(&mut arena, "MaybeNull");
    let attr = arena.alloc(SourceKind::Attribute {
        name: attr_name,
        arguments: Vec::new(),
    });
    let list = arena.alloc(SourceKind::AttributeList {
        target: AttributeTarget::Return,
        attributes: vec![attr],
    });
    let method = arena.alloc(SourceKind::MethodDeclaration {
        attribute_lists: vec![list],
        modifiers: Modifiers::PUBLIC,
        return_type: ret,
        identifier: "Get".to_string(),
        type_parameters: Vec::new(),
        constraint_clauses: Vec::new(),
        parameters: Vec::new(),
        body: Some(Vec::new()),
    });
    let tree = class_unit(arena, vec![method]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::MethodBlock {
        attributes,
        return_clause: Some(clause),
        ..
    } = type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a method block with a return clause");
    };
    assert!(attributes.is_empty());
    assert_eq!(clause.attributes.len(), 1);
}

#[test]
fn accessor_return_attributes_move_onto_the_property_as_clause() {
    let mut arena = SourceArena::new();
    let ty = predefined(&mut arena, PredefinedKind::Int);
    let attr_name = ident(&mut arena, "MaybeNull");
    let attr = arena.alloc(SourceKind::Attribute {
        name: attr_name,
        arguments: Vec::new(),
    });
    let list = arena.alloc(SourceKind::AttributeList {
        target: AttributeTarget::Return,
        attributes: vec![attr],
    });
    let getter = arena.alloc(SourceKind::AccessorDeclaration {
        kind: AccessorKind::Get,
        attribute_lists: vec![list],
        modifiers: Modifiers::empty(),
        body: Some(Vec::new()),
    });
    let property = arena.alloc(SourceKind::PropertyDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        ty,
        identifier: "Count".to_string(),
        accessors: vec![getter],
    });
    let tree = class_unit(arena, vec![property]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::PropertyBlock {
        as_clause: Some(clause),
        accessors: Some(blocks),
        ..
    } = type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a property block with accessor blocks");
    };
    assert_eq!(clause.attributes.len(), 1);
    let VbNode::AccessorBlock { attributes, .. } = &blocks[0] else {
        panic!("expected an accessor block");
    };
    assert!(attributes.is_empty());
}

#[test]
fn constraint_clauses_reattach_by_identity() {
    let mut arena = SourceArena::new();
    let t = arena.alloc(SourceKind::TypeParameter {
        variance: Variance::None,
        identifier: "T".to_string(),
    });
    let u = arena.alloc(SourceKind::TypeParameter {
        variance: Variance::None,
        identifier: "U".to_string(),
    });
    let new_constraint = arena.alloc(SourceKind::NewConstraint);
    let clause = arena.alloc(SourceKind::ConstraintClause {
        parameter: u,
        constraints: vec![new_constraint],
    });
    let class = arena.alloc(SourceKind::ClassDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        identifier: "Pair".to_string(),
        type_parameters: vec![t, u],
        constraint_clauses: vec![clause],
        base_types: Vec::new(),
        members: Vec::new(),
    });
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::TypeBlock {
        type_parameters, ..
    } = unit_members(&out)[0].uncommented()
    else {
        panic!("expected a type block");
    };
    let VbNode::TypeParameter { constraints, .. } = &type_parameters[0] else {
        panic!("expected a type parameter");
    };
    assert!(constraints.is_empty());
    let VbNode::TypeParameter { constraints, .. } = &type_parameters[1] else {
        panic!("expected a type parameter");
    };
    assert_eq!(constraints, &vec![VbNode::NewConstraint]);
}

#[test]
fn dangling_constraint_clause_is_a_structural_error() {
    let mut arena = SourceArena::new();
    let t = arena.alloc(SourceKind::TypeParameter {
        variance: Variance::None,
        identifier: "T".to_string(),
    });
    // A parameter node the class does not declare.
    let stray = arena.alloc(SourceKind::TypeParameter {
        variance: Variance::None,
        identifier: "T".to_string(),
    });
    let clause = arena.alloc(SourceKind::ConstraintClause {
        parameter: stray,
        constraints: Vec::new(),
    });
    let class = arena.alloc(SourceKind::ClassDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        identifier: "Holder".to_string(),
        type_parameters: vec![t],
        constraint_clauses: vec![clause],
        base_types: Vec::new(),
        members: Vec::new(),
    });
    let root = unit(&mut arena, vec![class]);
    let tree = arena.freeze(root);

    let err = translate_unit(&tree, &SemanticModel::new()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::StructuralInvariantViolation { .. }
    ));
}

#[test]
fn destructor_becomes_finalize_override() {
    let mut arena = SourceArena::new();
    let dtor = arena.alloc(SourceKind::DestructorDeclaration {
        attribute_lists: Vec::new(),
        body: Vec::new(),
    });
    let tree = class_unit(arena, vec![dtor]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::MethodBlock {
        is_function,
        modifiers,
        identifier,
        ..
    } = type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a method block");
    };
    assert!(!is_function);
    assert_eq!(identifier, "Finalize");
    assert_eq!(
        modifiers,
        &vec![VbModifier::Protected, VbModifier::Overrides]
    );
}

#[test]
fn indexer_becomes_default_property_item() {
    let mut arena = SourceArena::new();
    let ty = predefined(&mut arena, PredefinedKind::String);
    let index_ty = predefined(&mut arena, PredefinedKind::Int);
    let index = arena.alloc(SourceKind::Parameter {
        attribute_lists: Vec::new(),
        modifiers: ParamModifiers::empty(),
        ty: Some(index_ty),
        identifier: "index".to_string(),
        default: None,
    });
    let body = Vec::new();
    let getter = arena.alloc(SourceKind::AccessorDeclaration {
        kind: AccessorKind::Get,
        attribute_lists: Vec::new(),
        modifiers: Modifiers::empty(),
        body: Some(body),
    });
    let indexer = arena.alloc(SourceKind::IndexerDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        ty,
        parameters: vec![index],
        accessors: vec![getter],
    });
    let tree = class_unit(arena, vec![indexer]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::PropertyBlock {
        modifiers,
        identifier,
        parameters,
        accessors,
        ..
    } = type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a property block");
    };
    assert_eq!(identifier, "Item");
    assert_eq!(modifiers[0], VbModifier::Default);
    assert!(modifiers.contains(&VbModifier::ReadOnly));
    assert_eq!(parameters.len(), 1);
    assert!(accessors.is_some(), "bodied accessor is not auto");
}

#[test]
fn unmodified_field_defaults_to_private() {
    let mut arena = SourceArena::new();
    let ty = predefined(&mut arena, PredefinedKind::Int);
    let declarator = arena.alloc(SourceKind::VariableDeclarator {
        identifier: "count".to_string(),
        initializer: None,
    });
    let declaration = arena.alloc(SourceKind::VariableDeclaration {
        ty: Some(ty),
        declarators: vec![declarator],
    });
    let field = arena.alloc(SourceKind::FieldDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::empty(),
        declaration,
    });
    let tree = class_unit(arena, vec![field]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::FieldDeclaration { modifiers, .. } =
        type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a field declaration");
    };
    assert_eq!(modifiers[0], VbModifier::Private);
}

#[test]
fn get_only_auto_property_is_readonly_without_accessor_blocks() {
    let mut arena = SourceArena::new();
    let ty = predefined(&mut arena, PredefinedKind::Int);
    let getter = arena.alloc(SourceKind::AccessorDeclaration {
        kind: AccessorKind::Get,
        attribute_lists: Vec::new(),
        modifiers: Modifiers::empty(),
        body: None,
    });
    let property = arena.alloc(SourceKind::PropertyDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        ty,
        identifier: "Count".to_string(),
        accessors: vec![getter],
    });
    let tree = class_unit(arena, vec![property]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let VbNode::PropertyBlock {
        modifiers,
        accessors,
        ..
    } = type_members(&unit_members(&out)[0])[0].uncommented()
    else {
        panic!("expected a property block");
    };
    assert!(modifiers.contains(&VbModifier::ReadOnly));
    assert!(accessors.is_none(), "auto property stays statement form");
}

#[test]
fn event_field_fans_out_per_declarator() {
    let mut arena = SourceArena::new();
    let ty = ident(&mut arena, "EventHandler");
    let first = arena.alloc(SourceKind::VariableDeclarator {
        identifier: "Opened".to_string(),
        initializer: None,
    });
    let second = arena.alloc(SourceKind::VariableDeclarator {
        identifier: "Closed".to_string(),
        initializer: None,
    });
    let declaration = arena.alloc(SourceKind::VariableDeclaration {
        ty: Some(ty),
        declarators: vec![first, second],
    });
    let event = arena.alloc(SourceKind::EventFieldDeclaration {
        attribute_lists: Vec::new(),
        modifiers: Modifiers::PUBLIC,
        declaration,
    });
    let tree = class_unit(arena, vec![event]);

    let out = translate_unit(&tree, &SemanticModel::new()).unwrap();
    let members = type_members(&unit_members(&out)[0]);
    assert_eq!(members.len(), 2);
    let VbNode::EventDeclaration { identifier, .. } = members[1].uncommented() else {
        panic!("expected an event declaration");
    };
    assert_eq!(identifier, "Closed");
}
