use serde::{Deserialize, Serialize};

/// Options for an [`AstBuilder`](crate::AstBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuilderConfig {
    /// Template name stamped onto every location built by the default resolver.
    pub source: Option<String>,
    /// Enables `{{#name::slot}}` parsing and anonymous slot inference. When
    /// off, blocks are classified the plain way and never carry a slot name.
    pub named_block_slots: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            source: None,
            named_block_slots: true,
        }
    }
}

impl BuilderConfig {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_named_block_slots(mut self, enabled: bool) -> Self {
        self.named_block_slots = enabled;
        self
    }
}
