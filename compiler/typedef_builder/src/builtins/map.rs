//! The `map` builder - key and value types become the two items.

use typedef_ir::{ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder};

/// Root of the map hierarchy.
pub const MAP_TYPE: &str = "java.util.Map";

pub struct MapBuilder;

impl TypeDefinitionBuilder for MapBuilder {
    fn name(&self) -> &'static str {
        "map"
    }

    fn accept(&self, env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        ty.is_declared() && env.is_assignable(ty, MAP_TYPE)
    }

    fn build(
        &self,
        cx: &mut BuildContext<'_>,
        ty: &TypeDescriptor,
        definition: &mut TypeDefinition,
    ) -> Result<(), BuildError> {
        // Raw maps have no arguments; subtypes fixing K or V have fewer than two.
        for arg in ty.type_args().iter().take(2) {
            definition.push_item(cx.build_type(arg)?);
        }
        Ok(())
    }
}
