//! Data model for type-definition building.
//!
//! - `TypeDescriptor`: static type handle produced by a front-end
//! - `DeclarationElement`: declared entity (field, parameter, ...) with a type
//! - `TypeDefinition`: the serializable output record
//! - `ProcessingEnv`: shape introspection queried by builders, with the
//!   in-memory `ModelEnv` implementation

mod definition;
mod descriptor;
mod element;
mod env;

pub use definition::TypeDefinition;
pub use descriptor::{PrimitiveKind, TypeDescriptor, WildcardBound};
pub use element::{DeclarationElement, ElementKind, Modifiers};
pub use env::{DeclKind, ModelEnv, ProcessingEnv, TypeDecl};
