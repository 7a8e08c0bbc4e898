use pretty_assertions::assert_eq;
use typedef_ir::{
    DeclarationElement, Modifiers, ModelEnv, PrimitiveKind, TypeDecl, TypeDefinition,
    TypeDescriptor,
};

use crate::{BuildError, BuilderRegistry};

fn declared(name: &str) -> TypeDescriptor {
    TypeDescriptor::declared(name)
}

fn string() -> TypeDescriptor {
    declared("java.lang.String")
}

fn int() -> TypeDescriptor {
    TypeDescriptor::primitive(PrimitiveKind::Int)
}

fn env() -> ModelEnv {
    ModelEnv::with_jdk_collections()
        .with(TypeDecl::enumeration("com.example.Status", ["ACTIVE", "SUSPENDED"]))
        .with(
            TypeDecl::class("com.example.Base")
                .field("id", TypeDescriptor::primitive(PrimitiveKind::Long))
                .field_with(
                    "VERSION",
                    int(),
                    Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
                ),
        )
        .with(
            TypeDecl::class("com.example.User")
                .extends(declared("com.example.Base"))
                .field("name", string())
                .field("status", declared("com.example.Status"))
                .field(
                    "tags",
                    TypeDescriptor::generic("java.util.Set", vec![string()]),
                ),
        )
}

fn build(ty: &TypeDescriptor) -> Result<TypeDefinition, BuildError> {
    BuilderRegistry::with_builtins().build_from_type(&env(), ty)
}

#[test]
fn primitives_are_name_only() {
    for kind in PrimitiveKind::ALL {
        let def = build(&TypeDescriptor::primitive(kind)).unwrap();
        assert_eq!(def.type_name(), kind.keyword());
        assert_eq!(def.type_builder_name(), Some("primitive"));
        assert!(!def.has_shape());
    }
}

#[test]
fn simple_types_are_name_only() {
    let def = build(&declared("java.math.BigDecimal")).unwrap();
    assert_eq!(def.type_builder_name(), Some("simple"));
    assert!(!def.has_shape());
}

#[test]
fn array_item_is_the_component() {
    let def = build(&TypeDescriptor::array(string())).unwrap();
    assert_eq!(def.type_name(), "java.lang.String[]");
    assert_eq!(def.type_builder_name(), Some("array"));
    assert_eq!(def.items().len(), 1);
    assert_eq!(def.items()[0].type_name(), "java.lang.String");
    assert_eq!(def.items()[0].type_builder_name(), Some("simple"));
}

#[test]
fn nested_arrays() {
    let def = build(&TypeDescriptor::array(TypeDescriptor::array(int()))).unwrap();
    assert_eq!(def.items()[0].type_name(), "int[]");
    assert_eq!(def.items()[0].items()[0].type_name(), "int");
}

#[test]
fn enum_constants() {
    let def = build(&declared("com.example.Status")).unwrap();
    assert_eq!(def.type_builder_name(), Some("enum"));
    assert_eq!(def.enums(), ["ACTIVE".to_string(), "SUSPENDED".to_string()]);
}

#[test]
fn collection_item_is_the_element_type() {
    let list = TypeDescriptor::generic("java.util.ArrayList", vec![declared("java.lang.Integer")]);
    let def = build(&list).unwrap();
    assert_eq!(def.type_name(), "java.util.ArrayList<java.lang.Integer>");
    assert_eq!(def.type_builder_name(), Some("collection"));
    let items: Vec<&str> = def.items().iter().map(TypeDefinition::type_name).collect();
    assert_eq!(items, vec!["java.lang.Integer"]);
}

#[test]
fn raw_collection_has_no_items() {
    let def = build(&declared("java.util.List")).unwrap();
    assert_eq!(def.type_builder_name(), Some("collection"));
    assert!(def.items().is_empty());
}

#[test]
fn map_items_are_key_and_value() {
    let map = TypeDescriptor::generic(
        "java.util.HashMap",
        vec![string(), TypeDescriptor::generic("java.util.List", vec![int()])],
    );
    let def = build(&map).unwrap();
    assert_eq!(def.type_builder_name(), Some("map"));
    let items: Vec<&str> = def.items().iter().map(TypeDefinition::type_name).collect();
    assert_eq!(items, vec!["java.lang.String", "java.util.List<int>"]);
    assert_eq!(def.items()[1].items()[0].type_name(), "int");
}

#[test]
fn general_builder_collects_instance_fields() {
    let def = build(&declared("com.example.User")).unwrap();
    assert_eq!(def.type_builder_name(), Some("general"));

    let names: Vec<&str> = def.properties().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["id", "name", "status", "tags"]);

    let id = def.property("id").unwrap();
    assert_eq!(id.type_name(), "long");
    assert_eq!(id.reference(), Some("com.example.Base#id"));

    let status = def.property("status").unwrap();
    assert_eq!(status.reference(), Some("com.example.User#status"));
    assert_eq!(status.enums().len(), 2);

    let tags = def.property("tags").unwrap();
    assert_eq!(tags.type_builder_name(), Some("collection"));
    assert_eq!(tags.items()[0].type_name(), "java.lang.String");
}

#[test]
fn static_fields_are_skipped() {
    let def = build(&declared("com.example.Base")).unwrap();
    assert!(def.property("VERSION").is_none());
    assert!(def.property("id").is_some());
}

#[test]
fn subclass_field_shadows_inherited_one() {
    let env = ModelEnv::new()
        .with(TypeDecl::class("a.Parent").field("value", int()))
        .with(
            TypeDecl::class("a.Child")
                .extends(declared("a.Parent"))
                .field("value", string()),
        );
    let def = BuilderRegistry::with_builtins()
        .build_from_type(&env, &declared("a.Child"))
        .unwrap();
    let value = def.property("value").unwrap();
    assert_eq!(value.type_name(), "java.lang.String");
    assert_eq!(value.reference(), Some("a.Child#value"));
}

#[test]
fn mutually_referencing_classes_terminate() {
    let env = ModelEnv::with_jdk_collections()
        .with(TypeDecl::class("a.Department").field(
            "staff",
            TypeDescriptor::generic("java.util.List", vec![declared("a.Employee")]),
        ))
        .with(TypeDecl::class("a.Employee").field("department", declared("a.Department")));

    let def = BuilderRegistry::with_builtins()
        .build_from_type(&env, &declared("a.Department"))
        .unwrap();

    let employee = &def.property("staff").unwrap().items()[0];
    assert_eq!(employee.type_name(), "a.Employee");
    let back = employee.property("department").unwrap();
    assert_eq!(back.type_name(), "a.Department");
    assert!(!back.has_shape());
}

#[test]
fn unknown_and_variable_types_stay_name_only() {
    for ty in [
        declared("org.unknown.Thing"),
        TypeDescriptor::type_variable("T"),
        TypeDescriptor::wildcard_extends(declared("java.lang.Number")),
    ] {
        let def = build(&ty).unwrap();
        assert_eq!(def, TypeDefinition::new(ty.canonical_name()));
    }
}

#[test]
fn element_reference_on_general_type() {
    let field = DeclarationElement::field("com.example.Foo", "bar", declared("com.example.User"));
    let def = BuilderRegistry::with_builtins()
        .build_from_element(&env(), &field)
        .unwrap();
    assert_eq!(def.reference(), Some("com.example.Foo#bar"));
    assert_eq!(def.properties().len(), 4);
}
