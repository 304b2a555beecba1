use slotbars_types::SourceLocation;
use thiserror::Error;

/// A structural error found while assembling the tree. The enclosing parse
/// aborts on the first one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("{open} doesn't match {close} - {}", .loc.start)]
    TagMismatch {
        open: String,
        close: String,
        loc: SourceLocation,
    },

    #[error("Invalid path: {original} - {}", .loc.start)]
    InvalidPath { original: String, loc: SourceLocation },

    #[error("Unexpected inverse block on decorator - {}", .loc.start)]
    InverseOnDecorator { loc: SourceLocation },

    #[error("Invalid number: {original} - {}", .loc.start)]
    InvalidNumber { original: String, loc: SourceLocation },
}

impl ParseError {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            ParseError::TagMismatch { loc, .. }
            | ParseError::InvalidPath { loc, .. }
            | ParseError::InverseOnDecorator { loc }
            | ParseError::InvalidNumber { loc, .. } => loc,
        }
    }

    pub fn line_number(&self) -> usize {
        self.loc().start.line
    }

    pub fn column(&self) -> usize {
        self.loc().start.column
    }

    pub fn end_line_number(&self) -> usize {
        self.loc().end.line
    }

    pub fn end_column(&self) -> usize {
        self.loc().end.column
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
