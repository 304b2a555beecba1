//! Defines the Abstract Syntax Tree (AST) handed to the template compiler.
//!
//! Nodes are closed sum types: [`Statement`] for everything that can appear
//! in a program body and [`Expr`] for everything that can appear as a
//! mustache target, parameter or hash value. Both serialize with a `"type"`
//! discriminant using the classic node names.

pub mod expr;
pub mod statement;

pub use expr::{
    BooleanLiteral, Expr, Hash, HashPair, NullLiteral, NumberLiteral, PathExpression,
    StringLiteral, SubExpression, UndefinedLiteral,
};
pub use statement::{
    BlockKind, BlockStatement, CommentStatement, ContentStatement, MustacheStatement, NodeType,
    PartialBlockStatement, PartialStatement, Program, Statement,
};

pub use slotbars_types::{Position, RawSpan, SlotName, SourceLocation, StripFlags};
