//! Newtype for the slot name carried by block nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of the insertion point a block targets.
///
/// Empty for decorator blocks and plain blocks, the text after `::` for
/// blocks declared as `name::slot`, and [`SlotName::ANONYMOUS`] when the
/// slot was inferred from a chained inverse.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotName(String);

impl SlotName {
    /// Pipes cannot appear in a user-written slot name, so this can never
    /// collide with a declared one.
    pub const ANONYMOUS: &'static str = "|anonymous|";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == Self::ANONYMOUS
    }
}

impl From<String> for SlotName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SlotName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SlotName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SlotName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_marker() {
        let slot = SlotName::anonymous();
        assert!(slot.is_anonymous());
        assert_eq!(slot, "|anonymous|");
        assert!(!SlotName::new("result").is_anonymous());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&SlotName::new("header")).unwrap();
        assert_eq!(json, r#""header""#);
    }
}
