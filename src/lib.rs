//! Handlebars-style template AST construction with named block slots.
//!
//! This crate ties the workspace together:
//!
//! - [`ast`]: the node types handed to a template compiler.
//! - [`builder`]: the semantic actions a grammar calls on each reduction,
//!   through [`AstBuilder`].
//! - [`types`]: positions, strip flags and slot names shared by both.
//!
//! ```
//! use slotbars::{AstBuilder, OpenBlock, PathSegment, RawSpan};
//!
//! let builder = AstBuilder::default();
//! let span = RawSpan::new(1, 0, 1, 24);
//! let path = builder.prepare_path(false, &[PathSegment::from_token(None, "eq::result")], &span)?;
//! let body = builder.prepare_program(vec![builder.content("yes", &span)], None);
//! let block = builder.prepare_block(OpenBlock::new(path, "{{#"), body, None, None, false, &span)?;
//!
//! let block = block.as_block().expect("a block node");
//! assert_eq!(block.path.original, "eq");
//! assert_eq!(block.slot_name, "result");
//! # Ok::<(), slotbars::ParseError>(())
//! ```

pub use slotbars_ast as ast;
pub use slotbars_builder as builder;
pub use slotbars_types as types;

// --- Public API ---
pub use slotbars_ast::{
    BlockKind, BlockStatement, Expr, NodeType, PathExpression, Program, Statement,
};
pub use slotbars_builder::{
    AstBuilder, BuilderConfig, CloseBlock, InverseAndProgram, LocInfo, OpenBlock, ParseError,
    PathSegment, Result, SourceLocator, id, split_slot_suffix, strip_comment, strip_flags,
    validate_close,
};
pub use slotbars_types::{Position, RawSpan, SlotName, SourceLocation, StripFlags};
