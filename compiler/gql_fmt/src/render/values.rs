//! Literals and type references.

use gql_ir::ast::{ListType, ListValue, Location, NamedType, NonNullType, ObjectValue, StringValue};
use gql_ir::ChildKey;

use super::templates::ListStyle;
use super::{end, instructions, start, take, Children, Doc, Printer};
use crate::doc::{join, split_comments, PrintInstruction};

impl Printer {
    /// Source text printed verbatim after its comments.
    pub(super) fn literal<'a>(&self, loc: Option<&'a Location>, text: &'a str) -> Doc<'a> {
        let mut out = self.comments.collect(start(loc));
        out.push(PrintInstruction::text(text));
        out
    }

    pub(super) fn string_value<'a>(&self, node: &'a StringValue) -> Doc<'a> {
        let mut out = self.comments.collect(start(node.loc.as_ref()));
        if node.block {
            out.extend(block_string(&node.value));
        } else {
            out.push(PrintInstruction::text(quoted(&node.value)));
        }
        out
    }

    pub(super) fn list_value<'a>(&self, node: &'a ListValue, children: &mut Children<'a>) -> Doc<'a> {
        let loc = node.loc.as_ref();
        self.wrapped_list(
            instructions(children.take_list(ChildKey::Values)),
            ListStyle::brackets(self.pretty),
            start(loc),
            end(loc),
        )
    }

    pub(super) fn object_value<'a>(
        &self,
        node: &'a ObjectValue,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let loc = node.loc.as_ref();
        self.wrapped_list(
            instructions(children.take_list(ChildKey::Fields)),
            ListStyle::object(self.pretty),
            start(loc),
            end(loc),
        )
    }

    pub(super) fn named_type<'a>(&self, node: &'a NamedType, children: &mut Children<'a>) -> Doc<'a> {
        let mut out = self.comments.collect(start(node.loc.as_ref()));
        out.extend(take(children, ChildKey::Name).instructions);
        out
    }

    /// `[T]`, with every comment inside hoisted in front.
    pub(super) fn list_type<'a>(&self, node: &'a ListType, children: &mut Children<'a>) -> Doc<'a> {
        let loc = node.loc.as_ref();
        let (inner_comments, inner) = split_comments(take(children, ChildKey::Type).instructions);
        let mut out = self.comments.collect(start(loc));
        out.extend(inner_comments);
        out.extend(self.comments.collect(end(loc)));
        out.push(PrintInstruction::text("["));
        out.extend(inner);
        out.push(PrintInstruction::text("]"));
        out
    }

    pub(super) fn non_null_type<'a>(
        &self,
        node: &'a NonNullType,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let (mut out, inner) = split_comments(take(children, ChildKey::Type).instructions);
        out.extend(self.comments.collect(end(node.loc.as_ref())));
        out.extend(inner);
        out.push(PrintInstruction::text("!"));
        out
    }
}

/// JSON-style quoted string.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            control if u32::from(control) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", u32::from(control)));
            }
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// `"""…"""`, spread over lines when the body has line breaks or would
/// fuse with the closing delimiter.
fn block_string(value: &str) -> Doc<'static> {
    let body = value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\"\"\"", "\\\"\"\"");
    let fuses = body.ends_with('\\') || (body.ends_with('"') && !body.ends_with("\\\"\"\""));
    if !body.contains('\n') && !fuses {
        return vec![PrintInstruction::text(format!("\"\"\"{body}\"\"\""))];
    }

    let lines = body
        .split('\n')
        .map(|line| vec![PrintInstruction::text(line.to_owned())]);
    let mut out = vec![PrintInstruction::text("\"\"\""), PrintInstruction::hard()];
    out.extend(join(lines, &[PrintInstruction::hard()]));
    out.push(PrintInstruction::hard());
    out.push(PrintInstruction::text("\"\"\""));
    out
}
