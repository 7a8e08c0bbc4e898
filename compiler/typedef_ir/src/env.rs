//! The analysis environment queried by builders.
//!
//! `ProcessingEnv` is the boundary to the front-end: whatever produced the
//! type descriptors also knows the declarations behind them. `ModelEnv` is an
//! in-memory implementation fed with `TypeDecl` records, used by front-ends
//! that already hold a resolved model and by tests.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{DeclarationElement, Modifiers, TypeDescriptor};

/// Kind of a nominal declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Shape introspection over static types.
///
/// Implementations must be side-effect free; builders call these from
/// `accept`, which has to stay pure and total.
pub trait ProcessingEnv: Sync {
    /// Kind of the declaration named `name`, if known.
    fn declaration_kind(&self, name: &str) -> Option<DeclKind>;

    /// Whether `ty` is the declaration `target` or one of its subtypes.
    fn is_assignable(&self, ty: &TypeDescriptor, target: &str) -> bool;

    /// Instance and static fields of `ty`, own fields first, then inherited
    /// fields walking up the superclass chain.
    fn declared_fields(&self, ty: &TypeDescriptor) -> Vec<DeclarationElement>;

    /// Constant names of an enum type, in declaration order.
    fn enum_constants(&self, ty: &TypeDescriptor) -> Vec<String>;
}

/// A nominal declaration known to a `ModelEnv`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    name: String,
    kind: DeclKind,
    supertypes: Vec<TypeDescriptor>,
    fields: Vec<DeclarationElement>,
    enum_constants: Vec<String>,
}

impl TypeDecl {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        TypeDecl {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            fields: Vec::new(),
            enum_constants: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Interface, name)
    }

    /// An enum with the given constants.
    pub fn enumeration<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut decl = Self::new(DeclKind::Enum, name);
        decl.enum_constants = constants.into_iter().map(Into::into).collect();
        decl
    }

    /// Add a direct supertype (superclass or implemented interface).
    #[must_use]
    pub fn extends(mut self, supertype: TypeDescriptor) -> Self {
        self.supertypes.push(supertype);
        self
    }

    /// Add an instance field.
    #[must_use]
    pub fn field(self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.field_with(name, ty, Modifiers::PRIVATE)
    }

    /// Add a field with explicit modifiers.
    #[must_use]
    pub fn field_with(
        mut self,
        name: impl Into<String>,
        ty: TypeDescriptor,
        modifiers: Modifiers,
    ) -> Self {
        let field = DeclarationElement::field(self.name.clone(), name, ty).with_modifiers(modifiers);
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    pub fn supertypes(&self) -> &[TypeDescriptor] {
        &self.supertypes
    }

    pub fn fields(&self) -> &[DeclarationElement] {
        &self.fields
    }
}

/// In-memory `ProcessingEnv` backed by a declaration table.
#[derive(Clone, Debug, Default)]
pub struct ModelEnv {
    decls: FxHashMap<String, TypeDecl>,
}

impl ModelEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment pre-populated with the core collection hierarchy.
    pub fn with_jdk_collections() -> Self {
        let mut env = Self::new();
        for decl in jdk_collections() {
            env.declare(decl);
        }
        env
    }

    /// Add or replace a declaration.
    pub fn declare(&mut self, decl: TypeDecl) {
        self.decls.insert(decl.name.clone(), decl);
    }

    #[must_use]
    pub fn with(mut self, decl: TypeDecl) -> Self {
        self.declare(decl);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.decls.get(name)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    fn decl_of(&self, ty: &TypeDescriptor) -> Option<&TypeDecl> {
        ty.declared_name().and_then(|name| self.decls.get(name))
    }
}

impl ProcessingEnv for ModelEnv {
    fn declaration_kind(&self, name: &str) -> Option<DeclKind> {
        self.decls.get(name).map(TypeDecl::kind)
    }

    fn is_assignable(&self, ty: &TypeDescriptor, target: &str) -> bool {
        let Some(start) = ty.declared_name() else {
            return false;
        };

        let mut visited = FxHashSet::default();
        let mut pending = vec![start];
        while let Some(name) = pending.pop() {
            if name == target {
                return true;
            }
            if !visited.insert(name) {
                continue;
            }
            if let Some(decl) = self.decls.get(name) {
                pending.extend(decl.supertypes.iter().filter_map(TypeDescriptor::declared_name));
            }
        }
        false
    }

    fn declared_fields(&self, ty: &TypeDescriptor) -> Vec<DeclarationElement> {
        let mut fields = Vec::new();
        let mut visited = FxHashSet::default();
        let mut current = self.decl_of(ty);

        while let Some(decl) = current {
            if !visited.insert(decl.name.as_str()) {
                break;
            }
            fields.extend(decl.fields.iter().cloned());
            // Fields are only inherited through the superclass chain.
            current = decl
                .supertypes
                .iter()
                .filter_map(|sup| self.decl_of(sup))
                .find(|sup| sup.kind == DeclKind::Class);
        }
        fields
    }

    fn enum_constants(&self, ty: &TypeDescriptor) -> Vec<String> {
        self.decl_of(ty)
            .filter(|decl| decl.kind == DeclKind::Enum)
            .map(|decl| decl.enum_constants.clone())
            .unwrap_or_default()
    }
}

fn jdk_collections() -> Vec<TypeDecl> {
    let iface = |name: &str, sup: &str| {
        TypeDecl::interface(name).extends(TypeDescriptor::declared(sup))
    };
    let class = |name: &str, sup: &str| TypeDecl::class(name).extends(TypeDescriptor::declared(sup));

    vec![
        TypeDecl::class("java.lang.Object"),
        TypeDecl::interface("java.lang.Iterable"),
        iface("java.util.Collection", "java.lang.Iterable"),
        iface("java.util.List", "java.util.Collection"),
        iface("java.util.Set", "java.util.Collection"),
        iface("java.util.SortedSet", "java.util.Set"),
        iface("java.util.Queue", "java.util.Collection"),
        iface("java.util.Deque", "java.util.Queue"),
        TypeDecl::interface("java.util.Map"),
        iface("java.util.SortedMap", "java.util.Map"),
        iface("java.util.concurrent.ConcurrentMap", "java.util.Map"),
        class("java.util.ArrayList", "java.util.List"),
        class("java.util.LinkedList", "java.util.Deque").extends(TypeDescriptor::declared("java.util.List")),
        class("java.util.HashSet", "java.util.Set"),
        class("java.util.LinkedHashSet", "java.util.HashSet"),
        class("java.util.TreeSet", "java.util.SortedSet"),
        class("java.util.HashMap", "java.util.Map"),
        class("java.util.LinkedHashMap", "java.util.HashMap"),
        class("java.util.TreeMap", "java.util.SortedMap"),
        class("java.util.concurrent.ConcurrentHashMap", "java.util.concurrent.ConcurrentMap"),
    ]
}

#[cfg(test)]
mod tests;
