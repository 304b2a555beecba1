use serde::{Deserialize, Serialize};

/// Whitespace-control markers recorded on a tag. Trimming itself happens
/// in a later stage; these only say which side asked for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripFlags {
    pub open: bool,
    pub close: bool,
}

impl StripFlags {
    pub fn new(open: bool, close: bool) -> Self {
        Self { open, close }
    }

    /// True if neither side requested stripping.
    pub fn is_empty(&self) -> bool {
        !self.open && !self.close
    }
}
