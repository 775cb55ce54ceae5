//! Comment Flattening
//!
//! Turns the floating `Comment` instructions of a finished document into
//! text lines. A comment always occupies whole lines: the line before it
//! is ended, and a hard line follows it.

use crate::doc::PrintInstruction;
use crate::options::PrintOptions;

/// Replace every comment with `#` lines, forcing breaks around it.
///
/// The output contains no `Comment` instructions.
pub fn flatten<'a>(
    instructions: Vec<PrintInstruction<'a>>,
    options: &PrintOptions,
) -> Vec<PrintInstruction<'a>> {
    let space = options.space();
    let mut flat: Vec<PrintInstruction<'a>> = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        let PrintInstruction::Comment(text) = instruction else {
            flat.push(instruction);
            continue;
        };
        if !options.preserve_comments {
            continue;
        }

        trim_trailing_spaces(&mut flat);
        match flat.last_mut() {
            Some(PrintInstruction::Text(_)) => flat.push(PrintInstruction::hard()),
            Some(last) => {
                if let PrintInstruction::SoftLine { indent, .. } = *last {
                    *last = PrintInstruction::HardLine(indent);
                }
            }
            None => {}
        }

        for (index, line) in text.trim().split('\n').enumerate() {
            if index > 0 {
                flat.push(PrintInstruction::hard());
            }
            let line = line.trim();
            if line.is_empty() {
                flat.push(PrintInstruction::text("#"));
            } else {
                flat.push(PrintInstruction::text(format!("#{space}{line}")));
            }
        }
        flat.push(PrintInstruction::hard());
    }
    flat
}

/// Strip trailing spaces from the last texts, dropping texts left empty.
fn trim_trailing_spaces(flat: &mut Vec<PrintInstruction<'_>>) {
    while let Some(PrintInstruction::Text(text)) = flat.last_mut() {
        let trimmed_len = text.trim_end_matches(' ').len();
        if trimmed_len > 0 {
            if trimmed_len < text.len() {
                text.to_mut().truncate(trimmed_len);
            }
            return;
        }
        flat.pop();
    }
}
