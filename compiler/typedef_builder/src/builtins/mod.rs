//! Built-in type definition builders.
//!
//! | Builder      | Priority       | Shape                                   |
//! |--------------|----------------|-----------------------------------------|
//! | `primitive`  | -400           | `int`, `boolean`, ...                   |
//! | `simple`     | -300           | `java.lang.String`, boxed primitives    |
//! | `array`      | -200           | `T[]`, items = [T]                      |
//! | `enum`       | -100           | enum declarations, enums = constants    |
//! | `map`        | 0              | `Map` subtypes, items = [K, V]          |
//! | `collection` | 100            | `Collection` subtypes, items = [E]      |
//! | `general`    | `MIN_PRIORITY` | classes and interfaces, properties      |

mod array;
mod collection;
mod enumeration;
mod general;
mod map;
mod primitive;
mod simple;

pub use array::ArrayBuilder;
pub use collection::CollectionBuilder;
pub use enumeration::EnumBuilder;
pub use general::GeneralBuilder;
pub use map::MapBuilder;
pub use primitive::PrimitiveBuilder;
pub use simple::SimpleTypeBuilder;

use crate::BuilderRegistry;

/// Register all built-in builders with the given registry.
pub fn register_all(registry: &mut BuilderRegistry) {
    registry.register(PrimitiveBuilder);
    registry.register(SimpleTypeBuilder);
    registry.register(ArrayBuilder);
    registry.register(EnumBuilder);
    registry.register(MapBuilder);
    registry.register(CollectionBuilder);
    registry.register(GeneralBuilder);
}

#[cfg(test)]
mod tests;
