//! The type definition record produced for metadata consumers.
//!
//! A definition is created with its canonical type name and filled in place
//! by at most one builder. The name has no setter: once constructed it stays
//! equal to the canonical name of the type it was built for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured, serializable description of a type's shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Canonical type name.
    #[serde(rename = "type")]
    type_name: String,

    /// Textual identity of the declaration this definition was built from.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    /// Nested definitions: array component, collection element, map key/value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<TypeDefinition>,

    /// Enum constant names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    enums: Vec<String>,

    /// Property name to nested definition, in name order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, TypeDefinition>,

    /// Builder that populated this definition.
    #[serde(
        rename = "typeBuilderName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    type_builder_name: Option<String>,
}

impl TypeDefinition {
    /// Create an empty definition for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        TypeDefinition {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The `$ref` tag, if this definition was built from a declaration.
    #[inline]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = Some(reference.into());
    }

    pub fn items(&self) -> &[TypeDefinition] {
        &self.items
    }

    pub fn push_item(&mut self, item: TypeDefinition) {
        self.items.push(item);
    }

    pub fn enums(&self) -> &[String] {
        &self.enums
    }

    pub fn push_enum(&mut self, constant: impl Into<String>) {
        self.enums.push(constant.into());
    }

    pub fn properties(&self) -> &BTreeMap<String, TypeDefinition> {
        &self.properties
    }

    /// Look up a single property.
    pub fn property(&self, name: &str) -> Option<&TypeDefinition> {
        self.properties.get(name)
    }

    /// Insert a property, replacing any previous definition under `name`.
    pub fn insert_property(&mut self, name: impl Into<String>, definition: TypeDefinition) {
        self.properties.insert(name.into(), definition);
    }

    pub fn type_builder_name(&self) -> Option<&str> {
        self.type_builder_name.as_deref()
    }

    pub fn set_type_builder_name(&mut self, name: impl Into<String>) {
        self.type_builder_name = Some(name.into());
    }

    /// Whether any shape-specific field (items, enums, properties) is set.
    pub fn has_shape(&self) -> bool {
        !self.items.is_empty() || !self.enums.is_empty() || !self.properties.is_empty()
    }
}
