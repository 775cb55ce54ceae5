//! Shapes shared by several node kinds.

use gql_ir::{TokenKind, TokenRef};

use super::{closing, instructions, next, seek, Doc, Printer};
use crate::doc::{
    has_forced_break, join, split_comments, split_leading_comments, IndentDelta, PrintInstruction,
    TransformedNode,
};
use crate::navigator::skip_comments;

/// Brackets and separators of a wrapped list.
#[derive(Copy, Clone, Debug)]
pub(super) struct ListStyle {
    open: &'static str,
    close: &'static str,
    /// Compact form just inside both brackets.
    spacer: &'static str,
    /// Compact form between elements.
    delimiter: &'static str,
    /// One element per line whenever pretty.
    multi_line: bool,
}

impl ListStyle {
    /// `(a, b)`
    pub(super) fn parens(pretty: bool) -> Self {
        ListStyle {
            open: "(",
            close: ")",
            spacer: "",
            delimiter: comma(pretty),
            multi_line: false,
        }
    }

    /// `[a, b]`
    pub(super) fn brackets(pretty: bool) -> Self {
        ListStyle {
            open: "[",
            close: "]",
            spacer: "",
            delimiter: comma(pretty),
            multi_line: false,
        }
    }

    /// `{ a: 1, b: 2 }`
    pub(super) fn object(pretty: bool) -> Self {
        ListStyle {
            open: "{",
            close: "}",
            spacer: if pretty { " " } else { "" },
            delimiter: comma(pretty),
            multi_line: false,
        }
    }

    /// Selection sets and definition bodies.
    pub(super) fn block() -> Self {
        ListStyle {
            open: "{",
            close: "}",
            spacer: "",
            delimiter: ",",
            multi_line: true,
        }
    }
}

fn comma(pretty: bool) -> &'static str {
    if pretty {
        ", "
    } else {
        ","
    }
}

/// Separator family of a delimited list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Delimited {
    /// `implements A & B`
    Interfaces,
    /// `= A | B`
    Members,
    /// `on QUERY | FIELD`
    Locations,
}

impl Delimited {
    fn initializer(self) -> &'static str {
        match self {
            Delimited::Interfaces => "implements",
            Delimited::Members => "=",
            Delimited::Locations => "on",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Delimited::Interfaces => "&",
            Delimited::Members | Delimited::Locations => "|",
        }
    }

    /// Break prefix of the first element.
    fn leader(self) -> &'static str {
        match self {
            Delimited::Interfaces => "& ",
            Delimited::Members | Delimited::Locations => "| ",
        }
    }

    fn token(self) -> TokenKind {
        match self {
            Delimited::Interfaces => TokenKind::Amp,
            Delimited::Members | Delimited::Locations => TokenKind::Pipe,
        }
    }

    /// Text before the initializer and before the first element. Keywords
    /// always need a real space; `=` only gets the optional one.
    fn spacer(self, space: &'static str) -> &'static str {
        match self {
            Delimited::Members => space,
            Delimited::Interfaces | Delimited::Locations => " ",
        }
    }
}

impl Printer {
    pub(super) fn space<'a>(&self) -> PrintInstruction<'a> {
        PrintInstruction::text(self.space)
    }

    /// Prefix `doc` with the optional space unless it is empty.
    pub(super) fn with_space<'a>(&self, doc: Doc<'a>) -> Doc<'a> {
        if doc.is_empty() {
            return doc;
        }
        let mut spaced = Vec::with_capacity(doc.len() + 1);
        spaced.push(self.space());
        spaced.extend(doc);
        spaced
    }

    /// Directive suffix: ` @a @b`, or nothing.
    pub(super) fn directives<'a>(&self, directives: Vec<TransformedNode<'a>>) -> Doc<'a> {
        self.with_space(join(instructions(directives), &[self.space()]))
    }

    /// `open elements close`, compact when it fits, one element per line
    /// otherwise.
    pub(super) fn wrapped_list<'a>(
        &self,
        items: Vec<Doc<'a>>,
        style: ListStyle,
        open: Option<TokenRef<'a>>,
        close: Option<TokenRef<'a>>,
    ) -> Doc<'a> {
        let mut out = self.comments.collect(open);
        let closing = self.comments.collect(close);
        out.push(PrintInstruction::text(style.open));
        if items.is_empty() {
            out.extend(closing);
            out.push(PrintInstruction::text(style.close));
            return out;
        }

        let multi_line = self.pretty
            && (style.multi_line || has_forced_break(&items) || !closing.is_empty());
        let (first, separator, last) = if multi_line {
            (
                PrintInstruction::HardLine(IndentDelta::Indent),
                PrintInstruction::hard(),
                PrintInstruction::HardLine(IndentDelta::Dedent),
            )
        } else {
            (
                PrintInstruction::soft(style.spacer, "", IndentDelta::Indent),
                PrintInstruction::soft(style.delimiter, "", IndentDelta::None),
                PrintInstruction::soft(style.spacer, "", IndentDelta::Dedent),
            )
        };

        out.push(first);
        out.extend(join(items, &[separator]));
        out.push(last);
        out.extend(closing);
        out.push(PrintInstruction::text(style.close));
        out
    }

    /// `(…)` found from `from`; nothing when there are no elements.
    pub(super) fn argument_set<'a>(
        &self,
        items: Vec<TransformedNode<'a>>,
        from: Option<TokenRef<'a>>,
    ) -> Doc<'a> {
        self.bracketed(items, ListStyle::parens(self.pretty), from, TokenKind::ParenL, TokenKind::ParenR)
    }

    /// `{…}` definition body found from `from`; nothing when empty.
    pub(super) fn block_set<'a>(
        &self,
        items: Vec<TransformedNode<'a>>,
        from: Option<TokenRef<'a>>,
    ) -> Doc<'a> {
        self.bracketed(items, ListStyle::block(), from, TokenKind::BraceL, TokenKind::BraceR)
    }

    fn bracketed<'a>(
        &self,
        items: Vec<TransformedNode<'a>>,
        style: ListStyle,
        from: Option<TokenRef<'a>>,
        open_kind: TokenKind,
        close_kind: TokenKind,
    ) -> Doc<'a> {
        if items.is_empty() {
            return Vec::new();
        }
        let open = seek(from, open_kind);
        let close = closing(&items, open, close_kind);
        self.wrapped_list(instructions(items), style, open, close)
    }

    /// `initializer A & B` style lists. Elements keep their own comments
    /// only through the delimiter and name tokens walked here.
    pub(super) fn delimited_list<'a>(
        &self,
        items: Vec<TransformedNode<'a>>,
        kind: Delimited,
        initializer: Option<TokenRef<'a>>,
    ) -> Doc<'a> {
        if items.is_empty() {
            return Vec::new();
        }

        let mut running = next(initializer);
        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let (delimiter, name) = match skip_comments(running) {
                Some(token) if token.kind() == kind.token() => {
                    (Some(token), seek(token.next(), TokenKind::Name))
                }
                significant => (None, seek(significant, TokenKind::Name)),
            };
            running = next(name);
            let comments = self.comments.collect_all(&[delimiter, name]);
            let (_, element) = split_comments(item.instructions);
            entries.push((comments, element));
        }
        let has_comments = entries.iter().any(|(comments, _)| !comments.is_empty());
        let spacer = kind.spacer(self.space);

        let mut out = self.comments.collect(initializer);
        if out.is_empty() {
            out.push(PrintInstruction::text(spacer));
        }
        out.push(PrintInstruction::text(kind.initializer()));

        for (index, (comments, element)) in entries.into_iter().enumerate() {
            if !has_comments {
                if index == 0 {
                    out.push(PrintInstruction::soft(spacer, kind.leader(), IndentDelta::None));
                } else {
                    out.push(PrintInstruction::soft(self.space, "", IndentDelta::None));
                    out.push(PrintInstruction::text(kind.glyph()));
                    out.push(self.space());
                }
            } else {
                let bare = comments.is_empty();
                out.extend(comments);
                if self.pretty && bare {
                    out.push(PrintInstruction::hard());
                }
                if self.pretty || index > 0 {
                    out.push(PrintInstruction::text(kind.glyph()));
                    out.push(self.space());
                } else if bare {
                    out.push(PrintInstruction::text(spacer));
                }
            }
            out.extend(element);
        }
        out
    }

    /// A description followed by a line break. The break is left to the
    /// comments when the keyword or name carries any.
    pub(super) fn description<'a>(
        &self,
        description: Option<TransformedNode<'a>>,
        anchor_comments: &[PrintInstruction<'a>],
    ) -> Doc<'a> {
        let Some(description) = description else {
            return Vec::new();
        };
        let mut out = description.instructions;
        if self.pretty && anchor_comments.is_empty() {
            out.push(PrintInstruction::hard());
        }
        out
    }

    /// ` = value`, with the comments of the value's first token hoisted in
    /// front of the `=`.
    pub(super) fn default_value<'a>(
        &self,
        value: Option<TransformedNode<'a>>,
        from: Option<TokenRef<'a>>,
    ) -> Doc<'a> {
        let Some(value) = value else {
            return Vec::new();
        };
        let (value_comments, rest) = split_leading_comments(value.instructions);
        let mut out = self.comments.collect(seek(from, TokenKind::Equals));
        out.extend(value_comments);
        if out.is_empty() {
            out.push(self.space());
        }
        out.push(PrintInstruction::text("="));
        out.push(self.space());
        out.extend(rest);
        out
    }
}
