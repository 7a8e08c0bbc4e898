//! The `primitive` builder - `int`, `boolean`, `void` and friends.

use typedef_ir::{ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder};

/// Primitives carry nothing beyond their name.
pub struct PrimitiveBuilder;

impl TypeDefinitionBuilder for PrimitiveBuilder {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn priority(&self) -> i32 {
        -400
    }

    fn accept(&self, _env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        ty.is_primitive()
    }

    fn build(
        &self,
        _cx: &mut BuildContext<'_>,
        _ty: &TypeDescriptor,
        _definition: &mut TypeDefinition,
    ) -> Result<(), BuildError> {
        Ok(())
    }
}
