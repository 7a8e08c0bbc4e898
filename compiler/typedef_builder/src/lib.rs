//! Pluggable type-definition building.
//!
//! Given a static type (or a declaration owning one), produce the
//! [`TypeDefinition`] describing its shape for RPC metadata consumers.
//!
//! # Architecture
//!
//! - [`TypeDefinitionBuilder`]: a builder plugin. Each one recognizes a
//!   category of type shape via `accept` and fills definitions via `build`.
//! - [`BuilderRegistry`]: plugins sorted by ascending priority. For each type
//!   the first accepting plugin wins and no other is tried.
//! - [`BuildContext`]: per-request dispatch state, carrying the cycle guard
//!   and depth limit through recursive builds.
//!
//! The free functions [`build_from_type`] and [`build_from_element`] use the
//! process-wide [`global_registry`] holding the [`builtins`].

mod builder;
pub mod builtins;
mod context;
mod error;
mod options;
mod registry;
mod stack;

use std::sync::Once;

pub use builder::{TypeDefinitionBuilder, MAX_PRIORITY, MIN_PRIORITY, NORMAL_PRIORITY};
pub use context::BuildContext;
pub use error::BuildError;
pub use options::{BuildOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV};
pub use registry::{global_registry, BuilderRegistry};

pub use typedef_ir::{DeclarationElement, ProcessingEnv, TypeDefinition, TypeDescriptor};

/// Build the definition of `ty` with the global registry.
///
/// Never fails for want of a builder: unmatched types get a name-only
/// definition.
pub fn build_from_type(
    env: &dyn ProcessingEnv,
    ty: &TypeDescriptor,
) -> Result<TypeDefinition, BuildError> {
    global_registry().build_from_type(env, ty)
}

/// Build the definition of `element`'s type with the global registry and tag
/// it with the element's identity as `$ref`.
pub fn build_from_element(
    env: &dyn ProcessingEnv,
    element: &DeclarationElement,
) -> Result<TypeDefinition, BuildError> {
    global_registry().build_from_element(env, element)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=typedef_builder=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
