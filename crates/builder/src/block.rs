//! Block assembly: classification, named block slots, inverse chains.
//!
//! A block goes through the same steps no matter which grammar production
//! produced it:
//!
//! 1. Classify: a `*` in the open delimiter makes it a decorator block.
//! 2. Non-decorators may carry a `::slot` suffix on their name, which is
//!    split off the path so the close tag still matches.
//! 3. Link the inverse branch. Decorators cannot have one. A chained
//!    (else-if) inverse that opens with a slot declaration gives the block an
//!    anonymous slot, and the outer close tag's strip flags are handed down
//!    to the first block of the chain.
//! 4. Check the close tag against the (suffix-free) open path.
//! 5. Attach block params, then swap branches for inverted sections.
use crate::builder::AstBuilder;
use crate::error::{ParseError, Result};
use crate::locator::LocInfo;
use crate::slot::{split_slot_suffix, strip_slot_suffix};
use crate::statement::is_decorator;
use crate::strip::strip_flags;
use crate::tags::validate_close;
use slotbars_ast::{BlockKind, BlockStatement, Expr, Hash, PathExpression, Program, Statement};
use slotbars_types::{RawSpan, SlotName, StripFlags};

/// The open tag of a block, partial block or raw block.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenBlock {
    pub path: PathExpression,
    pub params: Vec<Expr>,
    pub hash: Option<Hash>,
    pub block_params: Option<Vec<String>>,
    pub strip: StripFlags,
    /// The raw opening delimiter, e.g. `{{#`, `{{~#*` or `{{else `.
    pub open: String,
}

impl OpenBlock {
    pub fn new(path: PathExpression, open: impl Into<String>) -> Self {
        Self {
            path,
            params: Vec::new(),
            hash: None,
            block_params: None,
            strip: StripFlags::default(),
            open: open.into(),
        }
    }

    /// The open tag of a raw block, which has no delimiter markers.
    pub fn raw(path: PathExpression, params: Vec<Expr>, hash: Option<Hash>) -> Self {
        Self {
            params,
            hash,
            ..Self::new(path, "")
        }
    }

    pub fn with_params(mut self, params: Vec<Expr>) -> Self {
        self.params = params;
        self
    }

    pub fn with_hash(mut self, hash: Hash) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn with_block_params(mut self, names: Vec<String>) -> Self {
        self.block_params = Some(names);
        self
    }

    pub fn with_strip(mut self, strip: StripFlags) -> Self {
        self.strip = strip;
        self
    }

    pub fn is_decorator(&self) -> bool {
        is_decorator(&self.open)
    }
}

/// The close tag of a block. Chain links have no close tag of their own and
/// pass one carrying only strip flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseBlock {
    pub path: Option<PathExpression>,
    pub strip: StripFlags,
}

impl CloseBlock {
    pub fn new(path: PathExpression, strip: StripFlags) -> Self {
        Self {
            path: Some(path),
            strip,
        }
    }

    pub fn strip_only(strip: StripFlags) -> Self {
        Self { path: None, strip }
    }

    pub fn name(&self) -> Option<&str> {
        self.path.as_ref().map(|p| p.original.as_str())
    }
}

/// An `{{else}}` branch, or one link of an `{{else if}}` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseAndProgram {
    pub program: Program,
    pub strip: StripFlags,
    /// True for an else-if link, false for a terminal else.
    pub chain: bool,
}

impl InverseAndProgram {
    /// Second phase of chain construction: the chained block never sees its
    /// own close tag, so it takes the strip flags of the enclosing one.
    fn propagate_close_strip(&mut self, close_strip: Option<StripFlags>) {
        if let Some(block) = self.program.first_mut().and_then(Statement::as_block_mut) {
            block.close_strip = close_strip;
        }
    }
}

/// Splits a `::slot` suffix off a block path, keeping `original` and the
/// last part in agreement.
fn extract_slot_name(path: &mut PathExpression) -> Option<SlotName> {
    let (name, slot) = split_slot_suffix(&path.original)?;
    let (name, slot) = (name.to_string(), SlotName::new(slot));

    path.original = name;
    if let Some(last) = path.parts.last_mut() {
        *last = strip_slot_suffix(last).to_string();
    }
    Some(slot)
}

impl<L: LocInfo> AstBuilder<L> {
    /// Builds a `BlockStatement` or `DecoratorBlock`.
    ///
    /// `inverted` marks `{{^name}}` sections, whose written body is the
    /// inverse branch.
    pub fn prepare_block(
        &self,
        open: OpenBlock,
        program: Program,
        inverse_and_program: Option<InverseAndProgram>,
        close: Option<CloseBlock>,
        inverted: bool,
        span: &RawSpan,
    ) -> Result<Statement> {
        let (kind, block) =
            self.assemble_block(open, program, inverse_and_program, close, inverted, span)?;
        Ok(Statement::from_block(kind, block))
    }

    /// Builds a `NamedBlockSlotStatement`: a block whose slot is its own path,
    /// with parameters and hash dropped.
    pub fn prepare_named_block_slot(
        &self,
        open: OpenBlock,
        program: Program,
        inverse_and_program: Option<InverseAndProgram>,
        close: Option<CloseBlock>,
        inverted: bool,
        span: &RawSpan,
    ) -> Result<Statement> {
        let (_, mut block) =
            self.assemble_block(open, program, inverse_and_program, close, inverted, span)?;

        block.slot_name = SlotName::new(block.path.original.clone());
        block.params = Vec::new();
        block.hash = None;

        Ok(Statement::from_block(BlockKind::NamedBlockSlot, block))
    }

    /// A terminal `{{else}}` branch. `raw_inverse` is the full else tag.
    pub fn prepare_inverse(&self, raw_inverse: &str, program: Program) -> InverseAndProgram {
        InverseAndProgram {
            program,
            strip: strip_flags(raw_inverse, raw_inverse),
            chain: false,
        }
    }

    /// One `{{else name ...}}` link. The link becomes a block of its own,
    /// closed by the strip flags of whatever follows it, and is wrapped in a
    /// chained program spanning its body.
    pub fn prepare_inverse_chain(
        &self,
        open: OpenBlock,
        program: Program,
        next: Option<InverseAndProgram>,
        span: &RawSpan,
    ) -> Result<InverseAndProgram> {
        self.chain_link(BlockKind::Block, open, program, next, span)
    }

    /// Like [`prepare_inverse_chain`](Self::prepare_inverse_chain), but the
    /// link declares a named slot: `{{#card}}...{{else header}}...{{/card}}`.
    pub fn prepare_named_slot_chain(
        &self,
        open: OpenBlock,
        program: Program,
        next: Option<InverseAndProgram>,
        span: &RawSpan,
    ) -> Result<InverseAndProgram> {
        self.chain_link(BlockKind::NamedBlockSlot, open, program, next, span)
    }

    fn chain_link(
        &self,
        kind: BlockKind,
        open: OpenBlock,
        program: Program,
        next: Option<InverseAndProgram>,
        span: &RawSpan,
    ) -> Result<InverseAndProgram> {
        let strip = open.strip;
        let body_loc = program.loc.clone();
        let close = next.as_ref().map(|n| CloseBlock::strip_only(n.strip));

        let link = match kind {
            BlockKind::NamedBlockSlot => {
                self.prepare_named_block_slot(open, program, next, close, false, span)?
            }
            _ => self.prepare_block(open, program, next, close, false, span)?,
        };
        let mut wrapper = self.prepare_program(vec![link], body_loc);
        wrapper.chained = true;

        Ok(InverseAndProgram {
            program: wrapper,
            strip,
            chain: true,
        })
    }

    fn assemble_block(
        &self,
        mut open: OpenBlock,
        mut program: Program,
        inverse_and_program: Option<InverseAndProgram>,
        close: Option<CloseBlock>,
        inverted: bool,
        span: &RawSpan,
    ) -> Result<(BlockKind, BlockStatement)> {
        let loc = self.locate(span);
        let decorator = open.is_decorator();
        let mut slot_name = SlotName::default();

        let kind = if decorator {
            log::debug!("block '{}' is a decorator", open.path.original);
            BlockKind::DecoratorBlock
        } else {
            if self.config.named_block_slots {
                if let Some(slot) = extract_slot_name(&mut open.path) {
                    log::debug!("block '{}' targets slot '{}'", open.path.original, slot);
                    slot_name = slot;
                }
            }
            BlockKind::Block
        };

        let mut inverse = None;
        let mut inverse_strip = None;
        if let Some(mut inverse_branch) = inverse_and_program {
            if decorator {
                let loc = inverse_branch.program.loc.clone().unwrap_or(loc);
                return Err(ParseError::InverseOnDecorator { loc });
            }

            // Only an else-if chain can introduce slots; a terminal else
            // starting with a slot declaration is left alone.
            if slot_name.is_empty()
                && self.config.named_block_slots
                && inverse_branch.chain
                && inverse_branch.program.starts_with_named_slot()
            {
                log::debug!("block '{}' gets an anonymous slot", open.path.original);
                slot_name = SlotName::anonymous();
            }

            if inverse_branch.chain {
                inverse_branch.propagate_close_strip(close.as_ref().map(|c| c.strip));
            }

            inverse_strip = Some(inverse_branch.strip);
            inverse = Some(inverse_branch.program);
        }

        if let Some(name) = close.as_ref().and_then(CloseBlock::name) {
            validate_close(&open.path, name)?;
        }

        program.block_params = open.block_params;

        let (program, inverse) = if inverted {
            log::debug!("swapping branches of inverted block '{}'", open.path.original);
            (inverse, Some(program))
        } else {
            (Some(program), inverse)
        };

        Ok((
            kind,
            BlockStatement {
                path: open.path,
                slot_name,
                params: open.params,
                hash: open.hash,
                program,
                inverse,
                open_strip: open.strip,
                inverse_strip,
                close_strip: close.map(|c| c.strip),
                loc,
            },
        ))
    }
}
