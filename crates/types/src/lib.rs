pub mod location;
pub mod slot;
pub mod strip;

pub use location::{Position, RawSpan, SourceLocation};
pub use slot::SlotName;
pub use strip::StripFlags;
