//! Leaf and compound statements: mustaches, raw blocks, programs, partials.
use crate::block::{CloseBlock, OpenBlock};
use crate::builder::AstBuilder;
use crate::error::{ParseError, Result};
use crate::locator::LocInfo;
use crate::path::id;
use crate::strip::{strip_comment, strip_flags};
use crate::tags::validate_close;
use slotbars_ast::{
    BlockStatement, BooleanLiteral, CommentStatement, ContentStatement, Expr, Hash, HashPair,
    MustacheStatement, NullLiteral, NumberLiteral, PartialBlockStatement, PartialStatement,
    Program, Statement, StringLiteral, SubExpression, UndefinedLiteral,
};
use slotbars_types::{RawSpan, SlotName, SourceLocation, StripFlags};

/// True if the raw open delimiter marks a decorator (`{{*` or `{{#*`).
pub(crate) fn is_decorator(open: &str) -> bool {
    open.contains('*')
}

/// `{{{` and `{{&` turn escaping off. The fourth character wins when there is
/// one, so `{{~{` is caught as well.
fn is_escaped(open: &str) -> bool {
    let flag = open.chars().nth(3).or_else(|| open.chars().nth(2));
    !matches!(flag, Some('{' | '&'))
}

impl<L: LocInfo> AstBuilder<L> {
    /// Builds a `MustacheStatement`, or a `Decorator` when the open
    /// delimiter carries `*`.
    pub fn prepare_mustache(
        &self,
        path: Expr,
        params: Vec<Expr>,
        hash: Option<Hash>,
        open: &str,
        strip: StripFlags,
        span: &RawSpan,
    ) -> Statement {
        let mustache = MustacheStatement {
            path,
            params,
            hash,
            escaped: is_escaped(open),
            strip,
            loc: self.locate(span),
        };
        if is_decorator(open) {
            Statement::Decorator(mustache)
        } else {
            Statement::MustacheStatement(mustache)
        }
    }

    /// Builds a `{{{{raw}}}}...{{{{/raw}}}}` block. The body is taken verbatim
    /// and whitespace control does not apply.
    pub fn prepare_raw_block(
        &self,
        open: OpenBlock,
        contents: Vec<Statement>,
        close: &str,
        span: &RawSpan,
    ) -> Result<Statement> {
        validate_close(&open.path, close)?;

        let loc = self.locate(span);
        let program = Program {
            body: contents,
            block_params: None,
            strip: StripFlags::default(),
            chained: false,
            loc: Some(loc.clone()),
        };

        Ok(Statement::BlockStatement(BlockStatement {
            path: open.path,
            slot_name: SlotName::default(),
            params: open.params,
            hash: open.hash,
            program: Some(program),
            inverse: None,
            open_strip: StripFlags::default(),
            inverse_strip: Some(StripFlags::default()),
            close_strip: Some(StripFlags::default()),
            loc,
        }))
    }

    /// Wraps a statement sequence. Without an explicit location the program
    /// spans its first to its last statement; an empty program has none.
    pub fn prepare_program(&self, statements: Vec<Statement>, loc: Option<SourceLocation>) -> Program {
        let loc = loc.or_else(|| match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => Some(SourceLocation::merge(first.loc(), last.loc())),
            _ => None,
        });

        Program {
            body: statements,
            block_params: None,
            strip: StripFlags::default(),
            chained: false,
            loc,
        }
    }

    /// Builds a `{{#> partial}}fallback{{/partial}}` node.
    pub fn prepare_partial_block(
        &self,
        open: OpenBlock,
        program: Program,
        close: CloseBlock,
        span: &RawSpan,
    ) -> Result<Statement> {
        validate_close(&open.path, close.name().unwrap_or_default())?;

        Ok(Statement::PartialBlockStatement(PartialBlockStatement {
            name: open.path,
            params: open.params,
            hash: open.hash,
            program,
            open_strip: open.strip,
            close_strip: Some(close.strip),
            loc: self.locate(span),
        }))
    }

    /// Builds a `{{> partial}}` node from its raw delimiters.
    pub fn prepare_partial(
        &self,
        name: Expr,
        params: Vec<Expr>,
        hash: Option<Hash>,
        open: &str,
        close: &str,
        span: &RawSpan,
    ) -> Statement {
        Statement::PartialStatement(PartialStatement {
            name,
            params,
            hash,
            indent: String::new(),
            strip: strip_flags(open, close),
            loc: self.locate(span),
        })
    }

    pub fn content(&self, text: &str, span: &RawSpan) -> Statement {
        Statement::ContentStatement(ContentStatement {
            value: text.to_string(),
            original: text.to_string(),
            loc: self.locate(span),
        })
    }

    /// Builds a comment from its raw text, markup included.
    pub fn comment(&self, raw: &str, span: &RawSpan) -> Statement {
        Statement::CommentStatement(CommentStatement {
            value: strip_comment(raw),
            strip: strip_flags(raw, raw),
            loc: self.locate(span),
        })
    }

    pub fn sub_expression(
        &self,
        path: Expr,
        params: Vec<Expr>,
        hash: Option<Hash>,
        span: &RawSpan,
    ) -> Expr {
        Expr::SubExpression(SubExpression {
            path: Box::new(path),
            params,
            hash,
            loc: self.locate(span),
        })
    }

    pub fn hash(&self, pairs: Vec<HashPair>, span: &RawSpan) -> Hash {
        Hash {
            pairs,
            loc: self.locate(span),
        }
    }

    /// `key=value`. A bracketed key is unwrapped like a path segment.
    pub fn hash_pair(&self, key: &str, value: Expr, span: &RawSpan) -> HashPair {
        HashPair {
            key: id(key).to_string(),
            value,
            loc: self.locate(span),
        }
    }

    pub fn string_literal(&self, value: &str, span: &RawSpan) -> Expr {
        Expr::StringLiteral(StringLiteral {
            value: value.to_string(),
            original: value.to_string(),
            loc: self.locate(span),
        })
    }

    /// Rejects tokens that do not read as a finite number.
    pub fn number_literal(&self, raw: &str, span: &RawSpan) -> Result<Expr> {
        let loc = self.locate(span);
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::NumberLiteral(NumberLiteral {
                value,
                original: raw.to_string(),
                loc,
            })),
            _ => Err(ParseError::InvalidNumber {
                original: raw.to_string(),
                loc,
            }),
        }
    }

    pub fn boolean_literal(&self, raw: &str, span: &RawSpan) -> Expr {
        Expr::BooleanLiteral(BooleanLiteral {
            value: raw == "true",
            original: raw.to_string(),
            loc: self.locate(span),
        })
    }

    pub fn undefined_literal(&self, span: &RawSpan) -> Expr {
        Expr::UndefinedLiteral(UndefinedLiteral {
            loc: self.locate(span),
        })
    }

    pub fn null_literal(&self, span: &RawSpan) -> Expr {
        Expr::NullLiteral(NullLiteral {
            loc: self.locate(span),
        })
    }
}
