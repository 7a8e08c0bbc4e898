//! The `enum` builder - records constant names.

use typedef_ir::{DeclKind, ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder};

pub struct EnumBuilder;

impl TypeDefinitionBuilder for EnumBuilder {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn accept(&self, env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        ty.declared_name()
            .and_then(|name| env.declaration_kind(name))
            == Some(DeclKind::Enum)
    }

    fn build(
        &self,
        cx: &mut BuildContext<'_>,
        ty: &TypeDescriptor,
        definition: &mut TypeDefinition,
    ) -> Result<(), BuildError> {
        for constant in cx.env().enum_constants(ty) {
            definition.push_enum(constant);
        }
        Ok(())
    }
}
