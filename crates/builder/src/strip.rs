//! Whitespace-control flags and comment markup.
use once_cell::sync::Lazy;
use regex::Regex;
use slotbars_types::StripFlags;

const STRIP_MARKER: char = '~';

static COMMENT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\{~?!-?-?").expect("comment open pattern is valid"));
static COMMENT_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?-?~?\}\}$").expect("comment close pattern is valid"));

/// Reads the strip markers off raw delimiter text.
///
/// `open` is set when the third character of the opening delimiter is `~`
/// (`{{~`), `close` when the third-from-last character of the closing
/// delimiter is `~` (`~}}`).
pub fn strip_flags(open: &str, close: &str) -> StripFlags {
    StripFlags {
        open: open.chars().nth(2) == Some(STRIP_MARKER),
        close: close.chars().rev().nth(2) == Some(STRIP_MARKER),
    }
}

/// Removes `{{!`, `{{!--` and the matching close markup (with optional
/// strip markers) from a raw comment, leaving its inner text.
pub fn strip_comment(comment: &str) -> String {
    let inner = COMMENT_OPEN.replace(comment, "");
    COMMENT_CLOSE.replace(&inner, "").into_owned()
}
