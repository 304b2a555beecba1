use crate::config::BuilderConfig;
use crate::locator::{LocInfo, SourceLocator};
use slotbars_types::{RawSpan, SourceLocation};

/// The stateless object the grammar calls into on every reduction.
///
/// Node construction lives in the `path`, `statement` and `block` modules as
/// further `impl` blocks on this type.
#[derive(Debug, Clone)]
pub struct AstBuilder<L = SourceLocator> {
    pub(crate) locator: L,
    pub(crate) config: BuilderConfig,
}

impl AstBuilder<SourceLocator> {
    /// Creates a builder using the default resolver, tagged with `config.source`.
    pub fn new(config: BuilderConfig) -> Self {
        let locator = SourceLocator::new(config.source.clone());
        Self { locator, config }
    }
}

impl Default for AstBuilder<SourceLocator> {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl<L: LocInfo> AstBuilder<L> {
    /// Creates a builder around a caller-supplied resolver.
    pub fn with_locator(locator: L, config: BuilderConfig) -> Self {
        Self { locator, config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Resolves a raw span through the configured resolver.
    pub fn locate(&self, span: &RawSpan) -> SourceLocation {
        self.locator.loc_info(span)
    }
}
