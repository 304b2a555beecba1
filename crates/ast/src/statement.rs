//! Statement nodes and the programs that sequence them.
use crate::expr::{Expr, Hash, PathExpression};
use serde::{Deserialize, Serialize};
use slotbars_types::{SlotName, SourceLocation, StripFlags};

/// Discriminant for every node kind in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Program,
    MustacheStatement,
    Decorator,
    BlockStatement,
    DecoratorBlock,
    NamedBlockSlotStatement,
    PartialStatement,
    PartialBlockStatement,
    ContentStatement,
    CommentStatement,
    PathExpression,
    SubExpression,
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
    UndefinedLiteral,
    NullLiteral,
    Hash,
    HashPair,
}

/// A sequence of statements: the template root or the body of a block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    pub body: Vec<Statement>,
    pub block_params: Option<Vec<String>>,
    pub strip: StripFlags,
    /// Set on the synthetic program wrapping an else-if link.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub chained: bool,
    /// Absent only for an empty program with no explicit span.
    pub loc: Option<SourceLocation>,
}

impl Program {
    pub fn first(&self) -> Option<&Statement> {
        self.body.first()
    }

    pub fn first_mut(&mut self) -> Option<&mut Statement> {
        self.body.first_mut()
    }

    /// True if the first statement is a named block slot declaration.
    pub fn starts_with_named_slot(&self) -> bool {
        self.first()
            .is_some_and(|s| s.node_type() == NodeType::NamedBlockSlotStatement)
    }
}

/// Everything that can appear in a program body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    MustacheStatement(MustacheStatement),
    Decorator(MustacheStatement),
    BlockStatement(BlockStatement),
    DecoratorBlock(BlockStatement),
    NamedBlockSlotStatement(BlockStatement),
    PartialStatement(PartialStatement),
    PartialBlockStatement(PartialBlockStatement),
    ContentStatement(ContentStatement),
    CommentStatement(CommentStatement),
}

impl Statement {
    pub fn node_type(&self) -> NodeType {
        match self {
            Statement::MustacheStatement(_) => NodeType::MustacheStatement,
            Statement::Decorator(_) => NodeType::Decorator,
            Statement::BlockStatement(_) => NodeType::BlockStatement,
            Statement::DecoratorBlock(_) => NodeType::DecoratorBlock,
            Statement::NamedBlockSlotStatement(_) => NodeType::NamedBlockSlotStatement,
            Statement::PartialStatement(_) => NodeType::PartialStatement,
            Statement::PartialBlockStatement(_) => NodeType::PartialBlockStatement,
            Statement::ContentStatement(_) => NodeType::ContentStatement,
            Statement::CommentStatement(_) => NodeType::CommentStatement,
        }
    }

    /// Wraps a block payload in the variant matching `kind`.
    pub fn from_block(kind: BlockKind, block: BlockStatement) -> Self {
        match kind {
            BlockKind::Block => Statement::BlockStatement(block),
            BlockKind::DecoratorBlock => Statement::DecoratorBlock(block),
            BlockKind::NamedBlockSlot => Statement::NamedBlockSlotStatement(block),
        }
    }

    pub fn block_kind(&self) -> Option<BlockKind> {
        match self {
            Statement::BlockStatement(_) => Some(BlockKind::Block),
            Statement::DecoratorBlock(_) => Some(BlockKind::DecoratorBlock),
            Statement::NamedBlockSlotStatement(_) => Some(BlockKind::NamedBlockSlot),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockStatement> {
        match self {
            Statement::BlockStatement(b)
            | Statement::DecoratorBlock(b)
            | Statement::NamedBlockSlotStatement(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut BlockStatement> {
        match self {
            Statement::BlockStatement(b)
            | Statement::DecoratorBlock(b)
            | Statement::NamedBlockSlotStatement(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_mustache(&self) -> Option<&MustacheStatement> {
        match self {
            Statement::MustacheStatement(m) | Statement::Decorator(m) => Some(m),
            _ => None,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Statement::MustacheStatement(m) | Statement::Decorator(m) => &m.loc,
            Statement::BlockStatement(b)
            | Statement::DecoratorBlock(b)
            | Statement::NamedBlockSlotStatement(b) => &b.loc,
            Statement::PartialStatement(p) => &p.loc,
            Statement::PartialBlockStatement(p) => &p.loc,
            Statement::ContentStatement(c) => &c.loc,
            Statement::CommentStatement(c) => &c.loc,
        }
    }
}

/// The three shapes a block node can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Block,
    DecoratorBlock,
    NamedBlockSlot,
}

impl BlockKind {
    pub fn node_type(self) -> NodeType {
        match self {
            BlockKind::Block => NodeType::BlockStatement,
            BlockKind::DecoratorBlock => NodeType::DecoratorBlock,
            BlockKind::NamedBlockSlot => NodeType::NamedBlockSlotStatement,
        }
    }
}

/// A `{{expr}}` output or `{{*decorator}}` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustacheStatement {
    pub path: Expr,
    pub params: Vec<Expr>,
    pub hash: Option<Hash>,
    /// False for `{{{triple}}}` and `{{&amp}}` forms.
    pub escaped: bool,
    pub strip: StripFlags,
    pub loc: SourceLocation,
}

/// Shared payload of `BlockStatement`, `DecoratorBlock` and
/// `NamedBlockSlotStatement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStatement {
    #[serde(with = "crate::expr::tagged_path")]
    pub path: PathExpression,
    pub slot_name: SlotName,
    pub params: Vec<Expr>,
    pub hash: Option<Hash>,
    pub program: Option<Program>,
    pub inverse: Option<Program>,
    pub open_strip: StripFlags,
    pub inverse_strip: Option<StripFlags>,
    pub close_strip: Option<StripFlags>,
    pub loc: SourceLocation,
}

/// `{{> partial}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialStatement {
    pub name: Expr,
    pub params: Vec<Expr>,
    pub hash: Option<Hash>,
    pub indent: String,
    pub strip: StripFlags,
    pub loc: SourceLocation,
}

/// `{{#> partial}}fallback{{/partial}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialBlockStatement {
    #[serde(with = "crate::expr::tagged_path")]
    pub name: PathExpression,
    pub params: Vec<Expr>,
    pub hash: Option<Hash>,
    pub program: Program,
    pub open_strip: StripFlags,
    pub close_strip: Option<StripFlags>,
    pub loc: SourceLocation,
}

/// Literal template text between tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatement {
    pub value: String,
    pub original: String,
    pub loc: SourceLocation,
}

/// `{{! comment }}` or `{{!-- comment --}}`, with markup removed from `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentStatement {
    pub value: String,
    pub strip: StripFlags,
    pub loc: SourceLocation,
}
