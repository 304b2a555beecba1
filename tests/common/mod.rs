pub mod fixtures;

use slotbars::{
    AstBuilder, CloseBlock, PathExpression, PathSegment, Program, RawSpan, Statement, strip_flags,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A span covering one whole line.
pub fn line(n: usize) -> RawSpan {
    RawSpan::new(n, 0, n, 80)
}

/// Splits a path the way the lexer does: `/` and `.` separate segments,
/// `..` and `.` are tokens of their own, and `[...]` is kept intact.
pub fn segments(written: &str) -> Vec<PathSegment> {
    let mut out = Vec::new();
    let mut separator: Option<String> = None;
    let mut token = String::new();
    let mut in_brackets = false;

    for c in written.chars() {
        match c {
            '[' | ']' => {
                in_brackets = c == '[';
                token.push(c);
            }
            '/' if !in_brackets => {
                out.push(PathSegment::from_token(separator.as_deref(), &token));
                token.clear();
                separator = Some("/".to_string());
            }
            '.' if !in_brackets && !token.is_empty() && token != "." && token != ".." => {
                out.push(PathSegment::from_token(separator.as_deref(), &token));
                token.clear();
                separator = Some(".".to_string());
            }
            _ => token.push(c),
        }
    }
    out.push(PathSegment::from_token(separator.as_deref(), &token));
    out
}

pub fn path(builder: &AstBuilder, written: &str, at: usize) -> PathExpression {
    let (data, written) = match written.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, written),
    };
    builder
        .prepare_path(data, &segments(written), &line(at))
        .expect("fixture path is valid")
}

/// `{{/name}}` with the given raw close delimiter.
pub fn close_tag(builder: &AstBuilder, name: &str, close: &str, at: usize) -> Option<CloseBlock> {
    Some(CloseBlock::new(
        path(builder, name, at),
        strip_flags("{{/", close),
    ))
}

pub fn text(builder: &AstBuilder, value: &str, at: usize) -> Program {
    builder.prepare_program(vec![builder.content(value, &line(at))], None)
}

pub fn only_block(program: &Program) -> &slotbars::BlockStatement {
    match program.body.as_slice() {
        [statement] => statement.as_block().expect("a block node"),
        other => panic!("expected one statement, found {}", other.len()),
    }
}

pub fn first(program: &Option<Program>) -> &Statement {
    &program.as_ref().expect("program present").body[0]
}
