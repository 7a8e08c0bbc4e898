//! The `array` builder - `T[]` resolves its component as the single item.

use typedef_ir::{ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder};

pub struct ArrayBuilder;

impl TypeDefinitionBuilder for ArrayBuilder {
    fn name(&self) -> &'static str {
        "array"
    }

    fn priority(&self) -> i32 {
        -200
    }

    fn accept(&self, _env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        ty.is_array()
    }

    fn build(
        &self,
        cx: &mut BuildContext<'_>,
        ty: &TypeDescriptor,
        definition: &mut TypeDefinition,
    ) -> Result<(), BuildError> {
        if let Some(component) = ty.component() {
            definition.push_item(cx.build_type(component)?);
        }
        Ok(())
    }
}
