//! Semantic actions for a Handlebars-style grammar.
//!
//! The grammar hands this crate already-segmented fragments (path segments,
//! parameter lists, raw delimiter text and raw spans) and gets back nodes of
//! the [`slotbars_ast`] tree. Everything here is a pure function of its
//! inputs; the only dependency is the [`LocInfo`] resolver used to turn raw
//! spans into [`SourceLocation`]s.
//!
//! Besides the classic rules (relative path resolution, open/close tag
//! agreement, decorator classification, whitespace-control flags), block
//! assembly understands the named block slot extension: a block opened as
//! `{{#name::slot}}` targets the insertion point `slot`, and a block whose
//! else-if chain starts with slot declarations gets an anonymous slot.

pub mod block;
pub mod builder;
pub mod config;
pub mod error;
pub mod locator;
pub mod path;
pub mod slot;
pub mod statement;
pub mod strip;
pub mod tags;

// --- Public API ---
pub use block::{CloseBlock, InverseAndProgram, OpenBlock};
pub use builder::AstBuilder;
pub use config::BuilderConfig;
pub use error::{ParseError, Result};
pub use locator::{LocInfo, SourceLocator};
pub use path::{PathSegment, id};
pub use slot::split_slot_suffix;
pub use strip::{strip_comment, strip_flags};
pub use tags::validate_close;

pub use slotbars_types::{RawSpan, SourceLocation, StripFlags};
