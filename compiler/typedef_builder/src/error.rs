//! Errors raised while building type definitions.
//!
//! Not finding a builder for a type is not an error; the dispatcher then
//! returns a name-only definition. Everything here aborts the whole build.

use thiserror::Error;

/// Error from a type-definition build.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Nested builds went deeper than `BuildOptions::max_depth`.
    #[error("type definition for `{type_name}` exceeds the nesting limit of {limit}")]
    DepthLimitExceeded {
        /// Type whose build would have exceeded the limit.
        type_name: String,
        /// The configured limit.
        limit: usize,
    },

    /// A builder reported a failure while filling a definition.
    #[error("builder `{builder}` failed on `{type_name}`: {message}")]
    Builder {
        builder: &'static str,
        type_name: String,
        message: String,
    },
}

impl BuildError {
    /// Convenience constructor for builder implementations.
    pub fn builder(
        builder: &'static str,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        BuildError::Builder {
            builder,
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
