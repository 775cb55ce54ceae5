//! Documents, operations, selections, and fragments.

use gql_ir::ast::{
    Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, OperationType, SelectionSet, Variable,
};
use gql_ir::{ChildKey, Location, TokenKind};

use super::templates::ListStyle;
use super::{closing, end, instructions, next, seek, start, take, Children, Doc, Printer};
use crate::doc::{join, split_comments, PrintInstruction};

impl Printer {
    pub(super) fn document<'a>(&self, node: &'a Document, children: &mut Children<'a>) -> Doc<'a> {
        let definitions = children
            .take_list(ChildKey::Definitions)
            .into_iter()
            .map(|definition| {
                definition
                    .instructions
                    .into_iter()
                    .skip_while(|instruction| matches!(instruction, PrintInstruction::HardLine(_)))
                    .collect::<Vec<_>>()
            });

        let separator = if self.pretty {
            vec![PrintInstruction::hard(), PrintInstruction::hard()]
        } else {
            vec![PrintInstruction::hard()]
        };
        let mut out = join(definitions, &separator);

        let trailing = self.comments.collect(end(node.loc.as_ref()));
        if self.pretty && !trailing.is_empty() {
            out.push(PrintInstruction::hard());
            out.push(PrintInstruction::hard());
        }
        out.extend(trailing);
        out
    }

    pub(super) fn operation_definition<'a>(
        &self,
        node: &'a OperationDefinition,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let selection_set = take(children, ChildKey::SelectionSet);
        let keyword = start(node.loc.as_ref());
        let shorthand = match keyword {
            Some(token) => token.kind() == TokenKind::BraceL,
            None => {
                node.operation == OperationType::Query
                    && node.name.is_none()
                    && node.variable_definitions.is_empty()
                    && node.directives.is_empty()
            }
        };
        if shorthand {
            return selection_set.instructions;
        }

        let name_token = node
            .name
            .as_ref()
            .and_then(|_| seek(next(keyword), TokenKind::Name));
        let mut out = self.comments.collect_all(&[keyword, name_token]);
        out.push(PrintInstruction::text(node.operation.as_str()));
        if let Some(name) = children.take(ChildKey::Name) {
            out.push(PrintInstruction::text(" "));
            out.extend(name.instructions);
        }

        let variables = children.take_list(ChildKey::VariableDefinitions);
        if !variables.is_empty() {
            let open = seek(next(name_token.or(keyword)), TokenKind::ParenL);
            let close = closing(&variables, open, TokenKind::ParenR);
            out.extend(self.wrapped_list(
                instructions(variables),
                ListStyle::parens(self.pretty),
                open,
                close,
            ));
        }

        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out.extend(self.with_space(selection_set.instructions));
        out
    }

    pub(super) fn variable_definition<'a>(&self, children: &mut Children<'a>) -> Doc<'a> {
        let variable = take(children, ChildKey::Variable);
        let ty = take(children, ChildKey::Type);
        let colon = seek(next(end(variable.location)), TokenKind::Colon);
        let default_from = next(end(ty.location));

        let (mut out, variable) = split_comments(variable.instructions);
        out.extend(self.comments.collect(colon));
        out.extend(variable);
        out.push(PrintInstruction::text(":"));
        out.push(self.space());
        out.extend(ty.instructions);
        out.extend(self.default_value(children.take(ChildKey::DefaultValue), default_from));
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out
    }

    pub(super) fn variable<'a>(&self, node: &'a Variable, children: &mut Children<'a>) -> Doc<'a> {
        let loc = node.loc.as_ref();
        let mut out = self.comments.collect_all(&[start(loc), end(loc)]);
        out.push(PrintInstruction::text("$"));
        out.extend(take(children, ChildKey::Name).instructions);
        out
    }

    pub(super) fn selection_set<'a>(
        &self,
        node: &'a SelectionSet,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let loc = node.loc.as_ref();
        self.wrapped_list(
            instructions(children.take_list(ChildKey::Selections)),
            ListStyle::block(),
            start(loc),
            end(loc),
        )
    }

    pub(super) fn field<'a>(&self, node: &'a Field, children: &mut Children<'a>) -> Doc<'a> {
        let first = start(node.loc.as_ref());
        let alias = children.take(ChildKey::Alias);
        let (alias_token, colon, name_token) = if alias.is_some() {
            let colon = seek(next(first), TokenKind::Colon);
            (first, colon, seek(next(colon), TokenKind::Name))
        } else {
            (None, None, first)
        };

        let mut out = self.comments.collect_all(&[alias_token, colon, name_token]);
        if let Some(alias) = alias {
            out.extend(alias.instructions);
            out.push(PrintInstruction::text(":"));
            out.push(self.space());
        }
        out.extend(take(children, ChildKey::Name).instructions);
        out.extend(self.argument_set(children.take_list(ChildKey::Arguments), next(name_token)));
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        if let Some(selection_set) = children.take(ChildKey::SelectionSet) {
            out.extend(self.with_space(selection_set.instructions));
        }
        out
    }

    /// `name: value`, shared by arguments and object fields.
    pub(super) fn argument<'a>(
        &self,
        loc: Option<&'a Location>,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let name_token = start(loc);
        let colon = seek(next(name_token), TokenKind::Colon);
        let mut out = self.comments.collect_all(&[name_token, colon]);
        out.extend(take(children, ChildKey::Name).instructions);
        out.push(PrintInstruction::text(":"));
        out.push(self.space());
        out.extend(take(children, ChildKey::Value).instructions);
        out
    }

    pub(super) fn fragment_spread<'a>(
        &self,
        node: &'a FragmentSpread,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let spread = start(node.loc.as_ref());
        let name_token = seek(next(spread), TokenKind::Name);
        let mut out = self.comments.collect_all(&[spread, name_token]);
        out.push(PrintInstruction::text("..."));
        out.extend(take(children, ChildKey::Name).instructions);
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out
    }

    pub(super) fn inline_fragment<'a>(
        &self,
        node: &'a InlineFragment,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let spread = start(node.loc.as_ref());
        let type_condition = children.take(ChildKey::TypeCondition);
        let on = type_condition
            .as_ref()
            .and_then(|_| seek(next(spread), TokenKind::Name));

        let mut out = self.comments.collect_all(&[spread, on]);
        out.push(PrintInstruction::text("..."));
        if let Some(type_condition) = type_condition {
            out.push(PrintInstruction::text("on "));
            out.extend(type_condition.instructions);
        }
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out.extend(self.with_space(take(children, ChildKey::SelectionSet).instructions));
        out
    }

    pub(super) fn fragment_definition<'a>(
        &self,
        node: &'a FragmentDefinition,
        children: &mut Children<'a>,
    ) -> Doc<'a> {
        let keyword = start(node.loc.as_ref());
        let name_token = seek(next(keyword), TokenKind::Name);
        let on = seek(next(name_token), TokenKind::Name);

        let mut out = self.comments.collect_all(&[keyword, name_token, on]);
        out.push(PrintInstruction::text("fragment "));
        out.extend(take(children, ChildKey::Name).instructions);
        out.push(PrintInstruction::text(" on "));
        out.extend(take(children, ChildKey::TypeCondition).instructions);
        out.extend(self.directives(children.take_list(ChildKey::Directives)));
        out.extend(self.with_space(take(children, ChildKey::SelectionSet).instructions));
        out
    }

    pub(super) fn directive<'a>(&self, node: &'a Directive, children: &mut Children<'a>) -> Doc<'a> {
        let at = start(node.loc.as_ref());
        let name_token = seek(next(at), TokenKind::Name);
        let mut out = self.comments.collect_all(&[at, name_token]);
        out.push(PrintInstruction::text("@"));
        out.extend(take(children, ChildKey::Name).instructions);
        out.extend(self.argument_set(children.take_list(ChildKey::Arguments), next(name_token)));
        out
    }
}
