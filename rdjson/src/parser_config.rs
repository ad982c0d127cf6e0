// SPDX-License-Identifier: Apache-2.0

/// Nesting depth allowed by [`ParserConfig::default`].
///
/// Each level of array/object nesting costs one recursive call, so the limit
/// keeps hostile input from exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Runtime knobs for [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of arrays/objects open at the same time. The outermost
    /// container is depth 1; `0` rejects every container.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
