use slotbars::{AstBuilder, OpenBlock, Program, Result, Statement};

use super::{close_tag, line, path, text};

/// `{{#card}}body{{else header}}h{{else footer}}f{{/card}}`, with the else
/// links declaring named slots.
pub fn card_with_slot_chain(builder: &AstBuilder) -> Result<Statement> {
    let footer = builder.prepare_named_slot_chain(
        OpenBlock::new(path(builder, "footer", 3), "{{else "),
        text(builder, "f", 3),
        None,
        &line(3),
    )?;
    let header = builder.prepare_named_slot_chain(
        OpenBlock::new(path(builder, "header", 2), "{{else "),
        text(builder, "h", 2),
        Some(footer),
        &line(2),
    )?;
    builder.prepare_block(
        OpenBlock::new(path(builder, "card", 1), "{{#"),
        text(builder, "body", 1),
        Some(header),
        close_tag(builder, "card", "~}}", 4),
        false,
        &line(1),
    )
}

/// `{{#if a}}A{{else if b}}B{{~else~}}C{{/if~}}`.
pub fn if_else_if_else(builder: &AstBuilder) -> Result<Statement> {
    let terminal = builder.prepare_inverse("{{~else~}}", text(builder, "C", 3));
    let link = builder.prepare_inverse_chain(
        OpenBlock::new(path(builder, "if", 2), "{{else ")
            .with_params(vec![path(builder, "b", 2).into()]),
        text(builder, "B", 2),
        Some(terminal),
        &line(2),
    )?;
    builder.prepare_block(
        OpenBlock::new(path(builder, "if", 1), "{{#").with_params(vec![path(builder, "a", 1).into()]),
        text(builder, "A", 1),
        Some(link),
        close_tag(builder, "if", "~}}", 4),
        false,
        &line(1),
    )
}

pub fn root(builder: &AstBuilder, statements: Vec<Statement>) -> Program {
    builder.prepare_program(statements, None)
}
