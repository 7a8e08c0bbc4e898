//! The `simple` builder - well-known value types with no useful inner shape.

use typedef_ir::{ProcessingEnv, TypeDefinition, TypeDescriptor};

use crate::{BuildContext, BuildError, TypeDefinitionBuilder};

/// Value types described by name alone.
static SIMPLE_TYPES: &[&str] = &[
    "java.lang.Object",
    "java.lang.String",
    "java.lang.CharSequence",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Character",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Number",
    "java.lang.Void",
    "java.math.BigInteger",
    "java.math.BigDecimal",
    "java.util.Date",
    "java.sql.Date",
    "java.sql.Time",
    "java.sql.Timestamp",
    "java.time.Instant",
    "java.time.LocalDate",
    "java.time.LocalTime",
    "java.time.LocalDateTime",
    "java.util.UUID",
];

/// Strings, boxed primitives, big numbers, dates.
pub struct SimpleTypeBuilder;

impl SimpleTypeBuilder {
    /// Whether `name` is one of the well-known simple types.
    pub fn is_simple(name: &str) -> bool {
        SIMPLE_TYPES.contains(&name)
    }
}

impl TypeDefinitionBuilder for SimpleTypeBuilder {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn priority(&self) -> i32 {
        -300
    }

    fn accept(&self, _env: &dyn ProcessingEnv, ty: &TypeDescriptor) -> bool {
        ty.declared_name().is_some_and(Self::is_simple)
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
