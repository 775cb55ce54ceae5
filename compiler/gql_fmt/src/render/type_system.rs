//! Schema, type, and directive definitions and their extensions.

use gql_ir::ast::{
    DirectiveDefinition, FieldDefinition, InputValueDefinition, Location, OperationTypeDefinition,
};
use gql_ir::{ChildKey, TokenKind, TokenRef};

use super::templates::Delimited;
use super::{
    closing, end, keyword, last_end, next, seek, start, take, Children, Doc, Printer, TypeKeyword,
};
use crate::doc::{PrintInstruction, TransformedNode};

/// `extend`, keyword, and name tokens of a named definition.
///
/// Definitions may open with a description, so the keyword is the first
/// name token; extensions open with `extend` itself.
fn named_tokens(loc: Option<&Location>, extension: bool) -> [Option<TokenRef<'_>>; 3] {
    let first = start(loc);
    let (extend, keyword) = if extension {
        (first, seek(next(first), TokenKind::Name))
    } else {
        (None, seek(first, TokenKind::Name))
    };
    [extend, keyword, seek(next(keyword), TokenKind::Name)]
}

impl Printer {
    /// Description, anchor comments, and `[extend ]keyword`.
    fn header<'a>(
        &self,
        tokens: &[Option<TokenRef<'a>>],
        description: Option<TransformedNode<'a>>,
        word: &'static str,
        extension: bool,
    ) -> Doc<'a> {
        let comments = self.comments.collect_all(tokens);
        let mut out = self.description(description, &comments);
        out.extend(comments);
        if extension {
            out.push(PrintInstruction::text("extend "));
        }
        out.push(PrintInstruction::text(word));
        out
    }

    /// `[extend ]keyword Name`
    fn named_header<'a>(
        &self,
        tokens: &[Option<TokenRef<'a>>; 3],
        children: &mut Children<'a>,
        word: &'static str,
        extension: bool,
    ) -> Doc<'a> {
        let description = children.take(ChildKey::Description);
        let mut out = self.header(tokens, description, word, extension);
        out.push(PrintInstruction::text(" "));
        out.extend(take(children, ChildKey::Name).instructions);
        out
    }

    pub(super) fn schema<'a>(
        &self,
        loc: Option<&'a Location>,
        extension: bool,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let first = start(loc);
        let (extend, schema) = if extension {
            (first, seek(next(first), TokenKind::Name))
        } else {
            (None, seek(first, TokenKind::Name))
        };
        let description = children.take(ChildKey::Description);
        let directives = children.take_list(ChildKey::Directives);
        let brace_from = next(last_end(&directives).or(schema));

        let mut out = self.header(&[extend, schema], description, "schema", extension);
        out.extend(self.directives(directives));
        let operation_types = children.take_list(ChildKey::OperationTypes);
        out.extend(self.with_space(self.block_set(operation_types, brace_from)));
        out
    }

    pub(super) fn operation_type_definition<'a>(
        &self,
        node: &'a OperationTypeDefinition,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let operation = start(node.loc.as_ref());
        let colon = seek(next(operation), TokenKind::Colon);
        let mut out = self.comments.collect_all(&[operation, colon]);
        out.push(PrintInstruction::text(node.operation.as_str()));
        out.push(PrintInstruction::text(":"));
        out.push(self.space());
        out.extend(take(children, ChildKey::Type).instructions);
        out
    }

    pub(super) fn scalar<'a>(
        &self,
        loc: Option<&'a Location>,
        extension: bool,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let tokens = named_tokens(loc, extension);
        let mut out = self.named_header(&tokens, children, "scalar", extension);
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out
    }

    /// Object types and interfaces: `type Name implements A & B @d { … }`.
    pub(super) fn object_like<'a>(
        &self,
        loc: Option<&'a Location>,
        kind: TypeKeyword,
        extension: bool,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let tokens = named_tokens(loc, extension);
        let name_token = tokens[2];
        let mut out = self.named_header(&tokens, children, kind.as_str(), extension);

        let interfaces = children.take_list(ChildKey::Interfaces);
        let directives = children.take_list(ChildKey::Directives);
        let implements = if interfaces.is_empty() {
            None
        } else {
            keyword(next(name_token), "implements")
        };
        let brace_from = next(
            last_end(&directives)
                .or_else(|| last_end(&interfaces))
                .or(name_token),
        );

        out.extend(self.delimited_list(interfaces, Delimited::Interfaces, implements));
        out.extend(self.directives(directives));
        let fields = children.take_list(ChildKey::Fields);
        out.extend(self.with_space(self.block_set(fields, brace_from)));
        out
    }

    pub(super) fn field_definition<'a>(
        &self,
        node: &'a FieldDefinition,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let name_token = seek(start(node.loc.as_ref()), TokenKind::Name);
        let arguments = children.take_list(ChildKey::Arguments);
        let colon = seek(next(last_end(&arguments).or(name_token)), TokenKind::Colon);

        let comments = self.comments.collect_all(&[name_token, colon]);
        let mut out = self.description(children.take(ChildKey::Description), &comments);
        out.extend(comments);
        out.extend(take(children, ChildKey::Name).instructions);
        out.extend(self.argument_set(arguments, next(name_token)));
        out.push(PrintInstruction::text(":"));
        out.push(self.space());
        out.extend(take(children, ChildKey::Type).instructions);
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out
    }

    pub(super) fn input_value_definition<'a>(
        &self,
        node: &'a InputValueDefinition,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let name_token = seek(start(node.loc.as_ref()), TokenKind::Name);
        let colon = seek(next(name_token), TokenKind::Colon);
        let ty = take(children, ChildKey::Type);
        let default_from = next(end(ty.location));

        let comments = self.comments.collect_all(&[name_token, colon]);
        let mut out = self.description(children.take(ChildKey::Description), &comments);
        out.extend(comments);
        out.extend(take(children, ChildKey::Name).instructions);
        out.push(PrintInstruction::text(":"));
        out.push(self.space());
        out.extend(ty.instructions);
        out.extend(self.default_value(children.take(ChildKey::DefaultValue), default_from));
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out
    }

    /// `union Name @d = A | B`
    pub(super) fn union_like<'a>(
        &self,
        loc: Option<&'a Location>,
        extension: bool,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let tokens = named_tokens(loc, extension);
        let mut out = self.named_header(&tokens, children, "union", extension);

        let directives = children.take_list(ChildKey::Directives);
        let types = children.take_list(ChildKey::Types);
        let equals = if types.is_empty() {
            None
        } else {
            seek(next(last_end(&directives).or(tokens[2])), TokenKind::Equals)
        };

        out.extend(self.directives(directives));
        out.extend(self.delimited_list(types, Delimited::Members, equals));
        out
    }

    /// Enums and input objects: `keyword Name @d { … }`.
    pub(super) fn braced_definition<'a>(
        &self,
        loc: Option<&'a Location>,
        kind: TypeKeyword,
        extension: bool,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let tokens = named_tokens(loc, extension);
        let mut out = self.named_header(&tokens, children, kind.as_str(), extension);

        let directives = children.take_list(ChildKey::Directives);
        let brace_from = next(last_end(&directives).or(tokens[2]));
        out.extend(self.directives(directives));

        let body_key = if kind == TypeKeyword::Enum {
            ChildKey::Values
        } else {
            ChildKey::Fields
        };
        let body = children.take_list(body_key);
        out.extend(self.with_space(self.block_set(body, brace_from)));
        out
    }

    pub(super) fn enum_value_definition<'a>(
        &self,
        loc: Option<&'a Location>,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let name_token = seek(start(loc), TokenKind::Name);
        let comments = self.comments.collect(name_token);
        let mut out = self.description(children.take(ChildKey::Description), &comments);
        out.extend(comments);
        out.extend(take(children, ChildKey::Name).instructions);
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out
    }

    pub(super) fn directive_definition<'a>(
        &self,
        node: &'a DirectiveDefinition,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let directive = seek(start(node.loc.as_ref()), TokenKind::Name);
        let at = seek(next(directive), TokenKind::At);
        let name_token = seek(next(at), TokenKind::Name);

        let arguments = children.take_list(ChildKey::Arguments);
        let close = if arguments.is_empty() {
            None
        } else {
            let open = seek(next(name_token), TokenKind::ParenL);
            closing(&arguments, open, TokenKind::ParenR)
        };
        let repeatable = if node.repeatable {
            keyword(next(close.or(name_token)), "repeatable")
        } else {
            None
        };
        let on = keyword(next(repeatable.or(close).or(name_token)), "on");

        let comments = self.comments.collect_all(&[directive, at, name_token]);
        let mut out = self.description(children.take(ChildKey::Description), &comments);
        out.extend(comments);
        out.push(PrintInstruction::text("directive"));
        out.push(self.space());
        out.push(PrintInstruction::text("@"));
        out.extend(take(children, ChildKey::Name).instructions);
        out.extend(self.argument_set(arguments, next(name_token)));

        if node.repeatable {
            let comments = self.comments.collect(repeatable);
            let word = if comments.is_empty() {
                " repeatable"
            } else {
                "repeatable"
            };
            out.extend(comments);
            out.push(PrintInstruction::text(word));
        }

        let locations = children.take_list(ChildKey::Locations);
        out.extend(self.delimited_list(locations, Delimited::Locations, on));
        out
    }
}
