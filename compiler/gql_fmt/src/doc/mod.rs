//! Print Instructions
//!
//! The intermediate document every node renders to. A document is a flat
//! list of instructions; nesting exists only through indentation deltas.
//!
//! # Line Model
//!
//! - `Text` is printed as is.
//! - `SoftLine` prints its compact form when the enclosing line fits,
//!   otherwise a newline, the indent change, and its break prefix.
//! - `HardLine` always ends the line.
//! - `Comment` floats until flattening turns it into text and hard lines.

use std::borrow::Cow;

use gql_ir::Location;

/// Indentation change carried by a line instruction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IndentDelta {
    #[default]
    None,
    Indent,
    Dedent,
}

impl IndentDelta {
    /// Apply to an indentation level, never going below zero.
    #[inline]
    pub fn apply(self, level: usize) -> usize {
        match self {
            IndentDelta::None => level,
            IndentDelta::Indent => level + 1,
            IndentDelta::Dedent => level.saturating_sub(1),
        }
    }
}

/// One step of a rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintInstruction<'a> {
    Text(Cow<'a, str>),
    SoftLine {
        compact: &'static str,
        break_prefix: &'static str,
        indent: IndentDelta,
    },
    HardLine(IndentDelta),
    /// Raw comment text, without the leading `#`.
    Comment(&'a str),
}

impl<'a> PrintInstruction<'a> {
    #[inline]
    pub fn text(value: impl Into<Cow<'a, str>>) -> Self {
        PrintInstruction::Text(value.into())
    }

    #[inline]
    pub fn soft(compact: &'static str, break_prefix: &'static str, indent: IndentDelta) -> Self {
        PrintInstruction::SoftLine {
            compact,
            break_prefix,
            indent,
        }
    }

    #[inline]
    pub fn hard() -> Self {
        PrintInstruction::HardLine(IndentDelta::None)
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, PrintInstruction::Comment(_))
    }

    /// Hard lines and comments end the line they appear on.
    #[inline]
    pub fn forces_break(&self) -> bool {
        matches!(
            self,
            PrintInstruction::HardLine(_) | PrintInstruction::Comment(_)
        )
    }
}

/// The result of reducing one node: its instructions plus the location
/// ancestors navigate from.
#[derive(Clone, Debug, Default)]
pub struct TransformedNode<'a> {
    pub instructions: Vec<PrintInstruction<'a>>,
    pub location: Option<&'a Location>,
}

impl<'a> TransformedNode<'a> {
    pub fn new(instructions: Vec<PrintInstruction<'a>>, location: Option<&'a Location>) -> Self {
        TransformedNode {
            instructions,
            location,
        }
    }
}

/// Concatenate `items`, placing a copy of `separator` between neighbours.
pub fn join<'a>(
    items: impl IntoIterator<Item = Vec<PrintInstruction<'a>>>,
    separator: &[PrintInstruction<'a>],
) -> Vec<PrintInstruction<'a>> {
    let mut joined = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            joined.extend_from_slice(separator);
        }
        joined.extend(item);
    }
    joined
}

/// Split comments from everything else, keeping relative order in both.
pub fn split_comments<'a>(
    instructions: Vec<PrintInstruction<'a>>,
) -> (Vec<PrintInstruction<'a>>, Vec<PrintInstruction<'a>>) {
    instructions
        .into_iter()
        .partition(PrintInstruction::is_comment)
}

/// Split off the comments that precede the first non-comment instruction.
/// Later comments stay where they are.
pub fn split_leading_comments<'a>(
    mut instructions: Vec<PrintInstruction<'a>>,
) -> (Vec<PrintInstruction<'a>>, Vec<PrintInstruction<'a>>) {
    let leading = instructions
        .iter()
        .take_while(|instruction| instruction.is_comment())
        .count();
    let rest = instructions.split_off(leading);
    (instructions, rest)
}

/// Whether any item contains a hard line or a comment.
pub fn has_forced_break(items: &[Vec<PrintInstruction<'_>>]) -> bool {
    items.iter().flatten().any(PrintInstruction::forces_break)
}
