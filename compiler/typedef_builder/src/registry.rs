//! Builder registry.
//!
//! The registry owns the set of builder plugins, kept sorted by ascending
//! priority, and is the entry point for building definitions against a
//! custom plugin set. The process-wide registry with the built-in builders is
//! initialized once on first use and read-only afterwards.

use std::sync::OnceLock;

use rayon::prelude::*;
use typedef_ir::{DeclarationElement, ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::builtins;
use crate::{BuildContext, BuildError, BuildOptions, TypeDefinitionBuilder};

/// Global registry singleton.
static GLOBAL_REGISTRY: OnceLock<BuilderRegistry> = OnceLock::new();

/// Priority-ordered set of builder plugins.
pub struct BuilderRegistry {
    /// Sorted by ascending priority; ties keep registration order.
    builders: Vec<Box<dyn TypeDefinitionBuilder>>,
}

impl BuilderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuilderRegistry {
            builders: Vec::new(),
        }
    }

    /// Create a registry holding the built-in builders.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register_all(&mut registry);
        registry
    }

    /// Register a builder.
    ///
    /// Builders with equal priority stay in registration order, but callers
    /// should not depend on it.
    pub fn register<B: TypeDefinitionBuilder + 'static>(&mut self, builder: B) {
        tracing::trace!(
            builder = builder.name(),
            priority = builder.priority(),
            "registering type definition builder"
        );
        self.builders.push(Box::new(builder));
        self.builders.sort_by_key(|b| b.priority());
    }

    /// All builders in selection order.
    pub fn builders(&self) -> impl Iterator<Item = &dyn TypeDefinitionBuilder> + '_ {
        self.builders
            .iter()
            .map(|b| b.as_ref() as &dyn TypeDefinitionBuilder)
    }

    /// Builder names in selection order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builders.iter().map(|b| b.name())
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// The first builder, in priority order, that accepts `ty`.
    pub fn find(
        &self,
        env: &dyn ProcessingEnv,
        ty: &TypeDescriptor,
    ) -> Option<&dyn TypeDefinitionBuilder> {
        self.builders().find(|builder| {
            let accepted = builder.accept(env, ty);
            tracing::trace!(builder = builder.name(), accepted, "acceptance test");
            accepted
        })
    }

    /// Build the definition of `ty` with default options.
    pub fn build_from_type(
        &self,
        env: &dyn ProcessingEnv,
        ty: &TypeDescriptor,
    ) -> Result<TypeDefinition, BuildError> {
        self.build_type_with(env, ty, BuildOptions::default())
    }

    /// Build the definition of `element`'s type, tagged with its identity.
    pub fn build_from_element(
        &self,
        env: &dyn ProcessingEnv,
        element: &DeclarationElement,
    ) -> Result<TypeDefinition, BuildError> {
        self.build_element_with(env, element, BuildOptions::default())
    }

    pub fn build_type_with(
        &self,
        env: &dyn ProcessingEnv,
        ty: &TypeDescriptor,
        options: BuildOptions,
    ) -> Result<TypeDefinition, BuildError> {
        BuildContext::new(env, self, options).build_type(ty)
    }

    pub fn build_element_with(
        &self,
        env: &dyn ProcessingEnv,
        element: &DeclarationElement,
        options: BuildOptions,
    ) -> Result<TypeDefinition, BuildError> {
        BuildContext::new(env, self, options).build_element(element)
    }

    /// Build many declarations in parallel.
    ///
    /// Each element gets its own context; results come back in input order.
    pub fn build_all(
        &self,
        env: &dyn ProcessingEnv,
        elements: &[DeclarationElement],
        options: BuildOptions,
    ) -> Vec<Result<TypeDefinition, BuildError>> {
        tracing::debug!(count = elements.len(), "building type definitions in parallel");
        elements
            .par_iter()
            .map(|element| self.build_element_with(env, element, options))
            .collect()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the global registry with all built-in builders registered.
pub fn global_registry() -> &'static BuilderRegistry {
    GLOBAL_REGISTRY.get_or_init(BuilderRegistry::with_builtins)
}
