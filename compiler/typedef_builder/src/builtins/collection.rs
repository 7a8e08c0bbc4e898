//! The `collection` builder - the element type becomes the single item.

use typedef_ir::{ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder};

/// Root of the collection hierarchy.
pub const COLLECTION_TYPE: &str = "java.util.Collection";

/// Lists, sets, queues and anything else assignable to `Collection`.
pub struct CollectionBuilder;

impl TypeDefinitionBuilder for CollectionBuilder {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn accept(&self, env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        ty.is_declared() && env.is_assignable(ty, COLLECTION_TYPE)
    }

    fn build(
        &self,
        cx: &mut BuildContext<'_>,
        ty: &TypeDescriptor,
        definition: &mut TypeDefinition,
    ) -> Result<(), BuildError> {
        if let Some(element) = ty.type_args().first() {
            definition.push_item(cx.build_type(element)?);
        }
        Ok(())
    }
}
