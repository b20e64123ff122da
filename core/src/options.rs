//! Tree builder configuration.

/// Default maximum nesting depth of a type graph.
///
/// Each level of parent nesting, generic argument, tuple element, function
/// argument or metatype instance counts as one level.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options of a [`TreeBuilder`](crate::TreeBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Descriptor graphs nested deeper than this yield no name instead of
    /// exhausting the stack.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BuildOptions {
    pub fn override_with(&mut self, options_override: &BuildOptionsOverride) {
        if let Some(max_depth) = options_override.max_depth {
            self.max_depth = max_depth;
        }
    }
}

/// Partial override of [`BuildOptions`]; `None` fields keep their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptionsOverride {
    pub max_depth: Option<usize>,
}
