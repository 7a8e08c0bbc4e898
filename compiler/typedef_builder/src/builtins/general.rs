//! The `general` builder - plain classes and interfaces.
//!
//! Every non-static field, own or inherited, becomes a property whose
//! definition is built from the field element (so it carries the field's
//! `$ref`). A subclass field shadows an inherited one with the same name.

use typedef_ir::{DeclKind, ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder, MIN_PRIORITY};

/// Catch-all for declared classes and interfaces.
pub struct GeneralBuilder;

impl TypeDefinitionBuilder for GeneralBuilder {
    fn name(&self) -> &'static str {
        "general"
    }

    fn priority(&self) -> i32 {
        MIN_PRIORITY
    }

    fn accept(&self, env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        matches!(
            ty.declared_name().and_then(|name| env.declaration_kind(name)),
            Some(DeclKind::Class | DeclKind::Interface)
        )
    }

    fn build(
        &self,
        cx: &mut BuildContext<'_>,
        ty: &TypeDescriptor,
        definition: &mut TypeDefinition,
    ) -> Result<(), BuildError> {
        for field in cx.env().declared_fields(ty) {
            if field.modifiers().is_static() || definition.property(field.name()).is_some() {
                continue;
            }
            let property = cx.build_element(&field)?;
            definition.insert_property(field.name(), property);
        }
        Ok(())
    }
}
