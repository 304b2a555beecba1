//! Source positions attached to every AST node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw positional span as reported by the grammar, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpan {
    pub first_line: usize,
    pub first_column: usize,
    pub last_line: usize,
    pub last_column: usize,
}

impl RawSpan {
    pub fn new(first_line: usize, first_column: usize, last_line: usize, last_column: usize) -> Self {
        Self {
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }
}

/// A single line/column point in the template source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The normalized span of a node, optionally tagged with the name of the
/// template it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub source: Option<String>,
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    /// Normalizes a raw grammar span.
    pub fn build(source: Option<String>, span: &RawSpan) -> Self {
        Self {
            source,
            start: Position::new(span.first_line, span.first_column),
            end: Position::new(span.last_line, span.last_column),
        }
    }

    /// Spans from the start of `first` to the end of `last`. The source name
    /// is taken from `first`.
    pub fn merge(first: &SourceLocation, last: &SourceLocation) -> Self {
        Self {
            source: first.source.clone(),
            start: first.start,
            end: last.end,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}@{}-{}", source, self.start, self.end),
            None => write!(f, "{}-{}", self.start, self.end),
        }
    }
}

impl From<&RawSpan> for SourceLocation {
    fn from(span: &RawSpan) -> Self {
        SourceLocation::build(None, span)
    }
}
