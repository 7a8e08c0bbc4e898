//! The builder plugin contract.
//!
//! A builder recognizes one category of type shape (primitives, arrays,
//! collections, maps, enums, plain classes, ...) and fills a
//! `TypeDefinition` for the types it accepts. Builders are stateless
//! strategies; per-build state lives in the [`BuildContext`].
//!
//! # Selection
//!
//! The registry orders builders by ascending [`priority`](TypeDefinitionBuilder::priority)
//! and hands each type to the first builder whose `accept` returns `true`.
//! No other builder is consulted afterwards, even if `build` fails, so a
//! specific builder (say, for sets) outranks a generic fallback (collections)
//! simply by sorting first.

use typedef_ir::{ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError};

/// Highest precedence.
pub const MAX_PRIORITY: i32 = i32::MIN;

/// Precedence of builders that do not say otherwise.
pub const NORMAL_PRIORITY: i32 = 0;

/// Lowest precedence, for catch-all builders.
pub const MIN_PRIORITY: i32 = i32::MAX;

/// A priority-ordered strategy producing type definitions for one shape.
pub trait TypeDefinitionBuilder: Send + Sync {
    /// Stable identifier, recorded as `typeBuilderName`.
    fn name(&self) -> &'static str;

    /// Ordering key; lower sorts first.
    fn priority(&self) -> i32 {
        NORMAL_PRIORITY
    }

    /// Whether this builder handles `ty`.
    ///
    /// Called for every candidate until one accepts, so it must be cheap,
    /// pure and total over well-formed descriptors.
    fn accept(&self, env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool;

    /// Populate `definition` for an accepted `ty`.
    ///
    /// Nested types (elements, keys, fields) are resolved through
    /// [`BuildContext::build_type`] and [`BuildContext::build_element`], which
    /// carry the cycle guard and depth limit.
    fn build(
        &self,
        cx: &mut BuildContext<'_>,
        ty: &TypeDescriptor,
        definition: &mut TypeDefinition,
    ) -> Result<(), BuildError>;
}
