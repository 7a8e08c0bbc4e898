//! Build configuration.

/// Environment variable overriding [`BuildOptions::max_depth`].
pub const MAX_DEPTH_ENV: &str = "TYPEDEF_MAX_DEPTH";

/// Default nesting limit for recursive builds.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for a build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Maximum number of builders running nested inside one another.
    pub max_depth: usize,
    /// Stamp the winning builder's name into `typeBuilderName`.
    pub record_builder_name: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            record_builder_name: true,
        }
    }
}

impl BuildOptions {
    /// Defaults, with `max_depth` taken from `TYPEDEF_MAX_DEPTH` when it holds
    /// a valid number.
    pub fn from_env() -> Self {
        let options = Self::default();
        match std::env::var(MAX_DEPTH_ENV) {
            Ok(raw) => options.with_max_depth_str(&raw),
            Err(_) => options,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_builder_name(mut self, record: bool) -> Self {
        self.record_builder_name = record;
        self
    }

    fn with_max_depth_str(self, raw: &str) -> Self {
        match raw.trim().parse::<usize>() {
            Ok(max_depth) => self.with_max_depth(max_depth),
            Err(err) => {
                tracing::warn!(value = raw, %err, "ignoring invalid {MAX_DEPTH_ENV}");
                self
            }
        }
    }
}
