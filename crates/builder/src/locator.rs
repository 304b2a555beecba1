//! Resolution of raw grammar spans into normalized locations.
use slotbars_types::{RawSpan, SourceLocation};

/// Turns the raw span of a reduced production into a [`SourceLocation`].
pub trait LocInfo {
    fn loc_info(&self, span: &RawSpan) -> SourceLocation;
}

impl<F> LocInfo for F
where
    F: Fn(&RawSpan) -> SourceLocation,
{
    fn loc_info(&self, span: &RawSpan) -> SourceLocation {
        self(span)
    }
}

/// Maps spans one-to-one, tagging each location with a template name.
#[derive(Debug, Clone, Default)]
pub struct SourceLocator {
    source: Option<String>,
}

impl SourceLocator {
    pub fn new(source: Option<String>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl LocInfo for SourceLocator {
    fn loc_info(&self, span: &RawSpan) -> SourceLocation {
        SourceLocation::build(self.source.clone(), span)
    }
}
