//! Line-Width Renderer
//!
//! Renders a flattened document to text. Every logical line (the run
//! between two hard lines) is built twice at once: a compact form with all
//! soft lines collapsed, and a broken form with every soft line turned into
//! a newline. The compact form wins when it fits.

use tracing::trace;

use crate::doc::{IndentDelta, PrintInstruction};
use crate::options::PrintOptions;

/// Render state for one document.
struct LineRenderer<'o> {
    options: &'o PrintOptions,
    /// Indentation of the line being built.
    level: usize,
    /// Indentation after the line if it ends up broken.
    future: usize,
    compact: String,
    broken: String,
    /// Indentation owed to the broken form once the next text arrives.
    pending_indent: Option<usize>,
    output: String,
}

impl<'o> LineRenderer<'o> {
    fn new(options: &'o PrintOptions) -> Self {
        LineRenderer {
            options,
            level: 0,
            future: 0,
            compact: String::new(),
            broken: String::new(),
            pending_indent: None,
            output: String::new(),
        }
    }

    fn text(&mut self, text: &str) {
        self.compact.push_str(text);
        self.push_broken(text);
    }

    fn soft_line(&mut self, compact: &str, break_prefix: &str, indent: IndentDelta) {
        self.compact.push_str(compact);
        self.future = indent.apply(self.future);
        self.broken.push('\n');
        self.pending_indent = Some(self.future);
        self.push_broken(break_prefix);
    }

    fn hard_line(&mut self, indent: IndentDelta) {
        self.flush();
        self.level = indent.apply(self.level);
        self.future = self.level;
        self.output.push('\n');
    }

    /// Append to the broken form, writing owed indentation before the
    /// first visible text of a broken line.
    fn push_broken(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(level) = self.pending_indent.take() {
            self.write_indent_to_broken(level);
        }
        self.broken.push_str(text);
    }

    fn write_indent_to_broken(&mut self, level: usize) {
        if self.options.is_pretty() {
            for _ in 0..level {
                self.broken.push_str(&self.options.indentation_step);
            }
        }
    }

    /// Emit the current line in whichever form applies.
    fn flush(&mut self) {
        let start_level = self.level;
        let indent_width = start_level * self.options.indentation_step.chars().count();
        let width = indent_width + self.compact.chars().count();
        let fits = !self.options.is_pretty() || width <= self.options.max_line_length;
        trace!(width, fits, "line");

        let line = if fits {
            std::mem::take(&mut self.compact)
        } else {
            self.level = self.future;
            std::mem::take(&mut self.broken)
        };
        if !line.is_empty() {
            if self.options.is_pretty() && !line.starts_with('\n') {
                for _ in 0..start_level {
                    self.output.push_str(&self.options.indentation_step);
                }
            }
            self.output.push_str(&line);
        }

        self.compact.clear();
        self.broken.clear();
        self.pending_indent = None;
        self.future = self.level;
    }
}

/// Render flattened instructions to the final string.
///
/// `Comment` instructions must already be flattened; any left are skipped.
pub fn render(instructions: &[PrintInstruction<'_>], options: &PrintOptions) -> String {
    let mut renderer = LineRenderer::new(options);
    for instruction in instructions {
        match instruction {
            PrintInstruction::Text(text) => renderer.text(text),
            PrintInstruction::SoftLine {
                compact,
                break_prefix,
                indent,
            } => renderer.soft_line(compact, break_prefix, *indent),
            PrintInstruction::HardLine(indent) => renderer.hard_line(*indent),
            PrintInstruction::Comment(_) => {}
        }
    }
    renderer.flush();

    let trimmed = renderer.output.trim_matches('\n');
    let mut output = String::with_capacity(trimmed.len() + 1);
    output.push_str(trimmed);
    if options.is_pretty() {
        output.push('\n');
    }
    output
}
