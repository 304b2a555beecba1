//! Open/close tag agreement.
use crate::error::{ParseError, Result};
use slotbars_ast::PathExpression;

/// Checks that a close tag names the same thing as its open tag.
///
/// `close` is the close tag's declared name as written: either a bare name
/// or the `original` of its path. The error points at the open tag.
pub fn validate_close(open: &PathExpression, close: &str) -> Result<()> {
    if open.original != close {
        return Err(ParseError::TagMismatch {
            open: open.original.clone(),
            close: close.to_string(),
            loc: open.loc.clone(),
        });
    }
    Ok(())
}
