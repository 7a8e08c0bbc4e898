use super::*;
use crate::PrimitiveKind;
use pretty_assertions::assert_eq;

fn declared(name: &str) -> TypeDescriptor {
    TypeDescriptor::declared(name)
}

#[test]
fn collection_hierarchy_assignability() {
    let env = ModelEnv::with_jdk_collections();
    let list = TypeDescriptor::generic("java.util.ArrayList", vec![declared("java.lang.String")]);

    assert!(env.is_assignable(&list, "java.util.ArrayList"));
    assert!(env.is_assignable(&list, "java.util.List"));
    assert!(env.is_assignable(&list, "java.util.Collection"));
    assert!(env.is_assignable(&list, "java.lang.Iterable"));
    assert!(!env.is_assignable(&list, "java.util.Map"));

    assert!(env.is_assignable(&declared("java.util.LinkedHashMap"), "java.util.Map"));
    assert!(env.is_assignable(&declared("java.util.LinkedList"), "java.util.Queue"));
}

#[test]
fn unknown_declarations_are_only_assignable_to_themselves() {
    let env = ModelEnv::new();
    assert!(env.is_assignable(&declared("x.Y"), "x.Y"));
    assert!(!env.is_assignable(&declared("x.Y"), "java.lang.Object"));
    assert!(!env.is_assignable(&TypeDescriptor::primitive(PrimitiveKind::Int), "int"));
}

#[test]
fn cyclic_supertypes_terminate() {
    let env = ModelEnv::new()
        .with(TypeDecl::interface("a.A").extends(declared("a.B")))
        .with(TypeDecl::interface("a.B").extends(declared("a.A")));
    assert!(!env.is_assignable(&declared("a.A"), "a.C"));
    assert!(env.is_assignable(&declared("a.A"), "a.B"));
}

#[test]
fn declared_fields_walk_the_superclass_chain() {
    let env = ModelEnv::new()
        .with(
            TypeDecl::class("com.example.Base")
                .field("id", TypeDescriptor::primitive(PrimitiveKind::Long)),
        )
        .with(TypeDecl::interface("com.example.Named").field_with(
            "PREFIX",
            declared("java.lang.String"),
            Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
        ))
        .with(
            TypeDecl::class("com.example.User")
                .extends(declared("com.example.Base"))
                .extends(declared("com.example.Named"))
                .field("name", declared("java.lang.String")),
        );

    let fields = env.declared_fields(&declared("com.example.User"));
    let ids: Vec<String> = fields.iter().map(DeclarationElement::identity).collect();
    assert_eq!(ids, vec!["com.example.User#name", "com.example.Base#id"]);
}

#[test]
fn enum_constants_only_for_enums() {
    let env = ModelEnv::new()
        .with(TypeDecl::enumeration("com.example.Color", ["RED", "GREEN", "BLUE"]))
        .with(TypeDecl::class("com.example.Paint"));

    assert_eq!(env.enum_constants(&declared("com.example.Color")), vec!["RED", "GREEN", "BLUE"]);
    assert!(env.enum_constants(&declared("com.example.Paint")).is_empty());
    assert_eq!(env.declaration_kind("com.example.Color"), Some(DeclKind::Enum));
    assert_eq!(env.declaration_kind("com.example.Missing"), None);
}

#[test]
fn declare_replaces_existing() {
    let mut env = ModelEnv::new();
    env.declare(TypeDecl::class("a.B"));
    env.declare(TypeDecl::interface("a.B"));
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("a.B").map(TypeDecl::kind), Some(DeclKind::Interface));
}
