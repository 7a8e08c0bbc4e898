//! Dispatch of a single build and everything nested inside it.
//!
//! A `BuildContext` lives for one top-level request. It picks the first
//! accepting builder for each type and threads two guards through recursive
//! builds:
//!
//! - **Cycle guard**: canonical names of types whose builder is currently
//!   running. Asking for one of them again (a class with a field of its own
//!   type, two classes pointing at each other) yields a name-only definition
//!   instead of re-entering the builder.
//! - **Depth limit**: at most `BuildOptions::max_depth` builders may be
//!   running nested inside one another.

use rustc_hash::FxHashSet;
use typedef_ir::{DeclarationElement, ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::stack::with_stack;
use crate::{BuildError, BuildOptions, BuilderRegistry};

/// Per-request dispatch state.
pub struct BuildContext<'a> {
    env: &'a dyn ProcessingEnv,
    registry: &'a BuilderRegistry,
    options: BuildOptions,
    /// Types whose builder is on the current call path.
    in_progress: FxHashSet<String>,
    depth: usize,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        env: &'a dyn ProcessingEnv,
        registry: &'a BuilderRegistry,
        options: BuildOptions,
    ) -> Self {
        BuildContext {
            env,
            registry,
            options,
            in_progress: FxHashSet::default(),
            depth: 0,
        }
    }

    /// The analysis environment.
    #[inline]
    pub fn env(&self) -> &'a dyn ProcessingEnv {
        self.env
    }

    #[inline]
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Number of builders currently running on this context.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether a builder for `type_name` is on the current call path.
    pub fn is_in_progress(&self, type_name: &str) -> bool {
        self.in_progress.contains(type_name)
    }

    /// Build the definition of `element`'s type and tag it with the
    /// element's identity.
    pub fn build_element(
        &mut self,
        element: &DeclarationElement,
    ) -> Result<TypeDefinition, BuildError> {
        let mut definition = self.build_type(element.as_type())?;
        definition.set_reference(element.identity());
        Ok(definition)
    }

    /// Build the definition of `ty`.
    ///
    /// The result is always named after `ty`'s canonical form. At most one
    /// builder fills it; if none accepts, only the name is set.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %ty, depth = self.depth))]
    pub fn build_type(&mut self, ty: &TypeDescriptor) -> Result<TypeDefinition, BuildError> {
        let type_name = ty.canonical_name();
        let mut definition = TypeDefinition::new(type_name.clone());

        if self.in_progress.contains(&type_name) {
            tracing::trace!(type_name = %type_name, "cycle detected, emitting back-reference");
            return Ok(definition);
        }

        let registry = self.registry;
        let Some(builder) = registry.find(self.env, ty) else {
            tracing::trace!(type_name = %type_name, "no builder accepted");
            return Ok(definition);
        };

        if self.depth >= self.options.max_depth {
            return Err(BuildError::DepthLimitExceeded {
                type_name,
                limit: self.options.max_depth,
            });
        }

        tracing::debug!(type_name = %type_name, builder = builder.name(), "building type definition");

        self.in_progress.insert(type_name.clone());
        self.depth += 1;
        let result = with_stack(|| builder.build(self, ty, &mut definition));
        self.depth -= 1;
        self.in_progress.remove(&type_name);
        result?;

        if self.options.record_builder_name {
            definition.set_type_builder_name(builder.name());
        }
        Ok(definition)
    }
}
