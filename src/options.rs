use crate::constants::MAX_DEPTH;

/// What to do when an object repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    #[default]
    Reject,
    LastWins,
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Reject bytes left over after the root value.
    pub strict: bool,
    pub duplicate_keys: DuplicateKeys,
    pub max_depth: usize,
    /// Read `I`/`l`/`L` string lengths as 2/4/8-byte integers instead of one raw byte.
    pub wide_lengths: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_wide_lengths(mut self, wide_lengths: bool) -> Self {
        self.wide_lengths = wide_lengths;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            duplicate_keys: DuplicateKeys::default(),
            max_depth: MAX_DEPTH,
            wide_lengths: false,
        }
    }
}
