//! Declaration elements: fields, parameters, methods and friends.
//!
//! An element pairs a declared entity with its static type. Its textual
//! identity (`Display`) is what ends up in the `$ref` tag of a type definition
//! built from the element.

use std::fmt;

use bitflags::bitflags;

use crate::TypeDescriptor;

bitflags! {
    /// Declaration modifiers relevant to shape extraction.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        /// Class-level member; never part of an instance's shape.
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        /// Excluded from serialized state by the source language.
        const TRANSIENT = 1 << 5;
    }
}

impl Modifiers {
    #[inline]
    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    #[inline]
    pub fn is_transient(self) -> bool {
        self.contains(Modifiers::TRANSIENT)
    }
}

/// What kind of entity an element declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Field,
    Parameter,
    Method,
    EnumConstant,
    LocalVariable,
}

/// A declared program element with an associated static type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeclarationElement {
    kind: ElementKind,
    name: String,
    owner: Option<String>,
    ty: TypeDescriptor,
    modifiers: Modifiers,
}

impl DeclarationElement {
    /// Create an element with no owner and no modifiers.
    pub fn new(kind: ElementKind, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        DeclarationElement {
            kind,
            name: name.into(),
            owner: None,
            ty,
            modifiers: Modifiers::empty(),
        }
    }

    /// A field declared in `owner`.
    pub fn field(owner: impl Into<String>, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(ElementKind::Field, name, ty).with_owner(owner)
    }

    /// Set the fully-qualified name of the enclosing declaration.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Simple (unqualified) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// The element's static type.
    pub fn as_type(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Stable, human-readable designator: `owner#name`, or `name` alone.
    pub fn identity(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeclarationElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "{owner}#{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
