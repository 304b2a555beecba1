//! Path resolution: `foo.bar`, `../name`, `this.[odd key]`, `@index`.
use crate::builder::AstBuilder;
use crate::error::{ParseError, Result};
use crate::locator::LocInfo;
use slotbars_ast::PathExpression;
use slotbars_types::RawSpan;

/// One segment of a path as split by the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// The identifier with any `[...]` wrapping removed.
    pub part: String,
    /// The token as written.
    pub original: String,
    /// The separator preceding this segment (`.` or `/`), absent for the first.
    pub separator: Option<String>,
}

impl PathSegment {
    /// Builds a segment from a raw identifier token.
    pub fn from_token(separator: Option<&str>, token: &str) -> Self {
        Self {
            part: id(token).to_string(),
            original: token.to_string(),
            separator: separator.map(str::to_string),
        }
    }

    /// A segment written with bracket-literal syntax is never treated as
    /// `.`, `..` or `this`.
    pub fn is_literal(&self) -> bool {
        self.original != self.part
    }

    fn is_reference_token(&self) -> bool {
        !self.is_literal() && matches!(self.part.as_str(), ".." | "." | "this")
    }
}

/// Unwraps a bracket-literal identifier: `[foo bar]` becomes `foo bar`.
pub fn id(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('[') && token.ends_with(']') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

impl<L: LocInfo> AstBuilder<L> {
    /// Folds path segments into a [`PathExpression`].
    ///
    /// Leading `..` segments raise `depth`, `.` and `this` are dropped, and
    /// every other segment is kept in `parts`. Once a segment has been kept,
    /// a later `.`, `..` or `this` is an [`ParseError::InvalidPath`].
    pub fn prepare_path(
        &self,
        data: bool,
        segments: &[PathSegment],
        span: &RawSpan,
    ) -> Result<PathExpression> {
        let loc = self.locate(span);

        let mut original = if data { String::from("@") } else { String::new() };
        let mut parts: Vec<String> = Vec::with_capacity(segments.len());
        let mut depth = 0;
        let mut depth_string = String::new();

        for segment in segments {
            if let Some(separator) = &segment.separator {
                original.push_str(separator);
            }
            original.push_str(&segment.part);

            if segment.is_reference_token() {
                if !parts.is_empty() {
                    return Err(ParseError::InvalidPath { original, loc });
                }
                if segment.part == ".." {
                    depth += 1;
                    depth_string.push_str("../");
                }
            } else {
                parts.push(segment.part.clone());
            }
        }

        log::trace!(
            "resolved path '{}' (depth {} '{}', {} parts)",
            original,
            depth,
            depth_string,
            parts.len()
        );

        Ok(PathExpression {
            data,
            depth,
            parts,
            original,
            loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits a dotted/slashed path the way the lexer would.
    fn segments(path: &str) -> Vec<PathSegment> {
        let mut out = Vec::new();
        let mut separator: Option<String> = None;
        let mut token = String::new();
        let mut in_brackets = false;
        for c in path.chars() {
            match c {
                '[' => {
                    in_brackets = true;
                    token.push(c);
                }
                ']' => {
                    in_brackets = false;
                    token.push(c);
                }
                '/' if !in_brackets => {
                    out.push(PathSegment::from_token(separator.as_deref(), &token));
                    token.clear();
                    separator = Some("/".into());
                }
                '.' if !in_brackets && !token.is_empty() && token != "." && token != ".." => {
                    out.push(PathSegment::from_token(separator.as_deref(), &token));
                    token.clear();
                    separator = Some(".".into());
                }
                _ => token.push(c),
            }
        }
        out.push(PathSegment::from_token(separator.as_deref(), &token));
        out
    }

    fn resolve(data: bool, path: &str) -> Result<PathExpression> {
        AstBuilder::default().prepare_path(data, &segments(path), &RawSpan::new(1, 0, 1, 10))
    }

    #[test]
    fn test_id_unwraps_brackets() {
        assert_eq!(id("[foo bar]"), "foo bar");
        assert_eq!(id("[this]"), "this");
        assert_eq!(id("foo"), "foo");
        assert_eq!(id("["), "[");
        assert_eq!(id("[]"), "");
    }

    #[test]
    fn test_plain_segments_are_kept_in_order() {
        let path = resolve(false, "foo.bar.baz").unwrap();
        assert_eq!(path.depth, 0);
        assert_eq!(path.parts, vec!["foo", "bar", "baz"]);
        assert_eq!(path.original, "foo.bar.baz");
        assert!(!path.data);
    }

    #[test]
    fn test_parent_segments_raise_depth() {
        let path = resolve(false, "../../foo.bar").unwrap();
        assert_eq!(path.depth, 2);
        assert_eq!(path.parts, vec!["foo", "bar"]);
        assert_eq!(path.original, "../../foo.bar");
    }

    #[test]
    fn test_this_and_dot_are_elided() {
        let path = resolve(false, "this/foo").unwrap();
        assert_eq!(path.depth, 0);
        assert_eq!(path.parts, vec!["foo"]);
        assert_eq!(path.original, "this/foo");

        let path = resolve(false, "./foo").unwrap();
        assert_eq!(path.parts, vec!["foo"]);
    }

    #[test]
    fn test_reference_after_segment_is_invalid() {
        let err = resolve(false, "foo.this").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPath { ref original, .. } if original == "foo.this"));

        let err = resolve(false, "foo/../bar").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPath { ref original, .. } if original == "foo/.."));
        assert_eq!(err.line_number(), 1);
    }

    #[test]
    fn test_bracket_literal_is_not_a_reference() {
        let path = resolve(false, "foo.[this]").unwrap();
        assert_eq!(path.parts, vec!["foo", "this"]);
        assert_eq!(path.original, "foo.this");
    }

    #[test]
    fn test_data_and_bare_parent_paths() {
        let path = resolve(true, "root").unwrap();
        assert!(path.data);
        assert_eq!(path.original, "@root");
        assert_eq!(path.parts, vec!["root"]);

        let path = resolve(false, "..").unwrap();
        assert_eq!(path.depth, 1);
        assert!(path.parts.is_empty());
        assert_eq!(path.canonical(), path.original);
    }

    #[test]
    fn test_canonical_form_matches_original() {
        for written in ["foo", "foo.bar", "../foo", "../../a.b.c", "..", "../.."] {
            let path = resolve(false, written).unwrap();
            assert_eq!(path.canonical(), path.original, "path {written}");
        }
        let path = resolve(true, "root.name").unwrap();
        assert_eq!(path.canonical(), "@root.name");
    }
}
