//! Node Renderers
//!
//! One rendering routine per syntax kind, dispatched from a single
//! exhaustive `match` in [`Printer::reduce`]. Every routine receives the
//! already-rendered children of its node and returns the node's
//! instructions.
//!
//! # Punctuation
//!
//! Brackets, colons, `=`, `&`, `|`, `@`, and keywords have no nodes of
//! their own. Renderers find their tokens from the node's location and
//! from the locations kept on child results, then collect the comments
//! attached there. Without locations every lookup comes back empty and the
//! node renders without comments.
//!
//! # Submodules
//!
//! - `templates`: shared shapes (bracketed lists, delimited lists,
//!   descriptions, default values, directive suffixes)
//! - `executable`: documents, operations, selections, fragments
//! - `values`: literals, variables, and type references
//! - `type_system`: schema, type, and directive definitions and their
//!   extensions

mod executable;
mod templates;
mod type_system;
mod values;

use gql_ir::{ChildKey, Location, NodeRef, TokenKind, TokenRef};

use crate::doc::{PrintInstruction, TransformedNode};
use crate::navigator::{seek_forward, CommentCollector};
use crate::options::PrintOptions;
use crate::transform::{ChildResults, Reducer};

/// Instructions of one rendered fragment.
type Doc<'a> = Vec<PrintInstruction<'a>>;

type Children<'a> = ChildResults<TransformedNode<'a>>;

/// Reducer turning nodes into print instructions.
pub(crate) struct Printer {
    comments: CommentCollector,
    /// `" "` when pretty, `""` when minified.
    space: &'static str,
    pretty: bool,
}

impl Printer {
    pub(crate) fn new(options: &PrintOptions) -> Self {
        Printer {
            comments: CommentCollector::new(options.preserve_comments),
            space: options.space(),
            pretty: options.is_pretty(),
        }
    }
}

impl<'a> Reducer<'a> for Printer {
    type Output = TransformedNode<'a>;

    fn reduce(&mut self, node: NodeRef<'a>, mut children: Children<'a>) -> TransformedNode<'a> {
        let children = &mut children;
        let instructions = match node {
            NodeRef::Name(n) => vec![PrintInstruction::text(n.value.as_str())],
            NodeRef::Document(n) => self.document(n, children),
            NodeRef::OperationDefinition(n) => self.operation_definition(n, children),
            NodeRef::VariableDefinition(_) => self.variable_definition(children),
            NodeRef::Variable(n) => self.variable(n, children),
            NodeRef::SelectionSet(n) => self.selection_set(n, children),
            NodeRef::Field(n) => self.field(n, children),
            NodeRef::Argument(n) => self.argument(n.loc.as_ref(), children),
            NodeRef::FragmentSpread(n) => self.fragment_spread(n, children),
            NodeRef::InlineFragment(n) => self.inline_fragment(n, children),
            NodeRef::FragmentDefinition(n) => self.fragment_definition(n, children),
            NodeRef::IntValue(n) => self.literal(n.loc.as_ref(), n.value.as_str()),
            NodeRef::FloatValue(n) => self.literal(n.loc.as_ref(), n.value.as_str()),
            NodeRef::StringValue(n) => self.string_value(n),
            NodeRef::BooleanValue(n) => {
                self.literal(n.loc.as_ref(), if n.value { "true" } else { "false" })
            }
            NodeRef::NullValue(n) => self.literal(n.loc.as_ref(), "null"),
            NodeRef::EnumValue(n) => self.literal(n.loc.as_ref(), n.value.as_str()),
            NodeRef::ListValue(n) => self.list_value(n, children),
            NodeRef::ObjectValue(n) => self.object_value(n, children),
            // Same shape as an argument: `name: value`.
            NodeRef::ObjectField(n) => self.argument(n.loc.as_ref(), children),
            NodeRef::Directive(n) => self.directive(n, children),
            NodeRef::NamedType(n) => self.named_type(n, children),
            NodeRef::ListType(n) => self.list_type(n, children),
            NodeRef::NonNullType(n) => self.non_null_type(n, children),
            NodeRef::SchemaDefinition(n) => self.schema(n.loc.as_ref(), false, children),
            NodeRef::OperationTypeDefinition(n) => self.operation_type_definition(n, children),
            NodeRef::ScalarTypeDefinition(n) => self.scalar(n.loc.as_ref(), false, children),
            NodeRef::ObjectTypeDefinition(n) => {
                self.object_like(n.loc.as_ref(), TypeKeyword::Type, false, children)
            }
            NodeRef::FieldDefinition(n) => self.field_definition(n, children),
            NodeRef::InputValueDefinition(n) => self.input_value_definition(n, children),
            NodeRef::InterfaceTypeDefinition(n) => {
                self.object_like(n.loc.as_ref(), TypeKeyword::Interface, false, children)
            }
            NodeRef::UnionTypeDefinition(n) => self.union_like(n.loc.as_ref(), false, children),
            NodeRef::EnumTypeDefinition(n) => {
                self.braced_definition(n.loc.as_ref(), TypeKeyword::Enum, false, children)
            }
            NodeRef::EnumValueDefinition(n) => {
                self.enum_value_definition(n.loc.as_ref(), children)
            }
            NodeRef::InputObjectTypeDefinition(n) => {
                self.braced_definition(n.loc.as_ref(), TypeKeyword::Input, false, children)
            }
            NodeRef::DirectiveDefinition(n) => self.directive_definition(n, children),
            NodeRef::SchemaExtension(n) => self.schema(n.loc.as_ref(), true, children),
            NodeRef::ScalarTypeExtension(n) => self.scalar(n.loc.as_ref(), true, children),
            NodeRef::ObjectTypeExtension(n) => {
                self.object_like(n.loc.as_ref(), TypeKeyword::Type, true, children)
            }
            NodeRef::InterfaceTypeExtension(n) => {
                self.object_like(n.loc.as_ref(), TypeKeyword::Interface, true, children)
            }
            NodeRef::UnionTypeExtension(n) => self.union_like(n.loc.as_ref(), true, children),
            NodeRef::EnumTypeExtension(n) => {
                self.braced_definition(n.loc.as_ref(), TypeKeyword::Enum, true, children)
            }
            NodeRef::InputObjectTypeExtension(n) => {
                self.braced_definition(n.loc.as_ref(), TypeKeyword::Input, true, children)
            }
        };
        TransformedNode::new(instructions, node.loc())
    }
}

/// Keyword family of a named type definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TypeKeyword {
    Type,
    Interface,
    Enum,
    Input,
}

impl TypeKeyword {
    fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::Type => "type",
            TypeKeyword::Interface => "interface",
            TypeKeyword::Enum => "enum",
            TypeKeyword::Input => "input",
        }
    }
}

// Token lookups

fn start(loc: Option<&Location>) -> Option<TokenRef<'_>> {
    loc.and_then(Location::start_token)
}

fn end(loc: Option<&Location>) -> Option<TokenRef<'_>> {
    loc.and_then(Location::end_token)
}

fn next(token: Option<TokenRef<'_>>) -> Option<TokenRef<'_>> {
    token.and_then(TokenRef::next)
}

fn seek(from: Option<TokenRef<'_>>, kind: TokenKind) -> Option<TokenRef<'_>> {
    seek_forward(from, kind, None)
}

fn keyword<'a>(from: Option<TokenRef<'a>>, word: &str) -> Option<TokenRef<'a>> {
    seek_forward(from, TokenKind::Name, Some(word))
}

/// Last token of the last node that has a location.
fn last_end<'a>(nodes: &[TransformedNode<'a>]) -> Option<TokenRef<'a>> {
    nodes.iter().rev().find_map(|node| end(node.location))
}

/// Closing bracket of a list: the first `kind` token after the last
/// element, or after the opening bracket.
fn closing<'a>(
    items: &[TransformedNode<'a>],
    open: Option<TokenRef<'a>>,
    kind: TokenKind,
) -> Option<TokenRef<'a>> {
    seek(next(last_end(items).or(open)), kind)
}

// Child access

fn take<'a>(children: &mut Children<'a>, key: ChildKey) -> TransformedNode<'a> {
    children.take(key).unwrap_or_default()
}

fn instructions(nodes: Vec<TransformedNode<'_>>) -> Vec<Doc<'_>> {
    nodes.into_iter().map(|node| node.instructions).collect()
}

#[cfg(test)]
mod tests;
