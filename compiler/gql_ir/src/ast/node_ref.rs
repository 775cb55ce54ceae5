//! Borrowed view over any syntax node.

use std::fmt;

use super::{
    Argument, BooleanValue, Definition, Directive, DirectiveDefinition, Document, EnumTypeDefinition,
    EnumTypeExtension, EnumValue, EnumValueDefinition, Field, FieldDefinition, FloatValue,
    FragmentDefinition, FragmentSpread, InlineFragment, InputObjectTypeDefinition,
    InputObjectTypeExtension, InputValueDefinition, IntValue, InterfaceTypeDefinition,
    InterfaceTypeExtension, ListType, ListValue, Location, Name, NamedType, NonNullType, NullValue,
    ObjectField, ObjectTypeDefinition, ObjectTypeExtension, ObjectValue, OperationDefinition,
    OperationTypeDefinition, ScalarTypeDefinition, ScalarTypeExtension, SchemaDefinition,
    SchemaExtension, Selection, SelectionSet, StringValue, Type, UnionTypeDefinition,
    UnionTypeExtension, Value, Variable, VariableDefinition,
};

macro_rules! define_node_ref {
    ($($kind:ident),* $(,)?) => {
        /// A borrowed reference to one node of any kind.
        #[derive(Copy, Clone, Debug)]
        pub enum NodeRef<'a> {
            $($kind(&'a $kind),)*
        }

        /// The closed set of syntax kinds.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($kind,)*
        }

        impl<'a> NodeRef<'a> {
            pub fn kind(self) -> NodeKind {
                match self {
                    $(NodeRef::$kind(_) => NodeKind::$kind,)*
                }
            }

            /// Source location of the node, if the parser recorded one.
            pub fn loc(self) -> Option<&'a Location> {
                match self {
                    $(NodeRef::$kind(node) => node.loc.as_ref(),)*
                }
            }
        }

        $(
            impl<'a> From<&'a $kind> for NodeRef<'a> {
                fn from(node: &'a $kind) -> Self {
                    NodeRef::$kind(node)
                }
            }
        )*
    };
}

define_node_ref! {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<'a> From<&'a Definition> for NodeRef<'a> {
    fn from(definition: &'a Definition) -> Self {
        match definition {
            Definition::Operation(node) => node.into(),
            Definition::Fragment(node) => node.into(),
            Definition::Schema(node) => node.into(),
            Definition::Scalar(node) => node.into(),
            Definition::Object(node) => node.into(),
            Definition::Interface(node) => node.into(),
            Definition::Union(node) => node.into(),
            Definition::Enum(node) => node.into(),
            Definition::InputObject(node) => node.into(),
            Definition::Directive(node) => node.into(),
            Definition::SchemaExtension(node) => node.into(),
            Definition::ScalarExtension(node) => node.into(),
            Definition::ObjectExtension(node) => node.into(),
            Definition::InterfaceExtension(node) => node.into(),
            Definition::UnionExtension(node) => node.into(),
            Definition::EnumExtension(node) => node.into(),
            Definition::InputObjectExtension(node) => node.into(),
        }
    }
}

impl<'a> From<&'a Selection> for NodeRef<'a> {
    fn from(selection: &'a Selection) -> Self {
        match selection {
            Selection::Field(node) => node.into(),
            Selection::FragmentSpread(node) => node.into(),
            Selection::InlineFragment(node) => node.into(),
        }
    }
}

impl<'a> From<&'a Value> for NodeRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Variable(node) => node.into(),
            Value::Int(node) => node.into(),
            Value::Float(node) => node.into(),
            Value::String(node) => node.into(),
            Value::Boolean(node) => node.into(),
            Value::Null(node) => node.into(),
            Value::Enum(node) => node.into(),
            Value::List(node) => node.into(),
            Value::Object(node) => node.into(),
        }
    }
}

impl<'a> From<&'a Type> for NodeRef<'a> {
    fn from(ty: &'a Type) -> Self {
        match ty {
            Type::Named(node) => node.into(),
            Type::List(node) => NodeRef::ListType(node),
            Type::NonNull(node) => NodeRef::NonNullType(node),
        }
    }
}

/// Name of a structural field holding child nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChildKey {
    Alias,
    Arguments,
    Definitions,
    DefaultValue,
    Description,
    Directives,
    Fields,
    Interfaces,
    Locations,
    Name,
    OperationTypes,
    SelectionSet,
    Selections,
    Type,
    TypeCondition,
    Types,
    Value,
    Values,
    Variable,
    VariableDefinitions,
}

/// Contents of one structural field.
#[derive(Clone, Debug)]
pub enum NodeChild<'a> {
    Node(NodeRef<'a>),
    List(Vec<NodeRef<'a>>),
}

/// Accumulates children in declaration order.
struct ChildList<'a>(Vec<(ChildKey, NodeChild<'a>)>);

impl<'a> ChildList<'a> {
    fn new() -> Self {
        ChildList(Vec::new())
    }

    fn node(mut self, key: ChildKey, node: impl Into<NodeRef<'a>>) -> Self {
        self.0.push((key, NodeChild::Node(node.into())));
        self
    }

    fn opt<T>(self, key: ChildKey, node: Option<&'a T>) -> Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        match node {
            Some(node) => self.node(key, node),
            None => self,
        }
    }

    fn list<T>(mut self, key: ChildKey, nodes: &'a [T]) -> Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        let nodes = nodes.iter().map(Into::into).collect();
        self.0.push((key, NodeChild::List(nodes)));
        self
    }

    fn finish(self) -> Vec<(ChildKey, NodeChild<'a>)> {
        self.0
    }
}

impl<'a> NodeRef<'a> {
    /// Structural children in declaration order.
    ///
    /// Absent optional children are omitted; list fields are always
    /// present, possibly empty. Scalar fields and locations are not
    /// children.
    pub fn children(self) -> Vec<(ChildKey, NodeChild<'a>)> {
        use ChildKey as K;

        let children = ChildList::new();
        let children = match self {
            NodeRef::Name(_)
            | NodeRef::IntValue(_)
            | NodeRef::FloatValue(_)
            | NodeRef::StringValue(_)
            | NodeRef::BooleanValue(_)
            | NodeRef::NullValue(_)
            | NodeRef::EnumValue(_) => children,
            NodeRef::Document(n) => children.list(K::Definitions, &n.definitions),
            NodeRef::OperationDefinition(n) => children
                .opt(K::Name, n.name.as_ref())
                .list(K::VariableDefinitions, &n.variable_definitions)
                .list(K::Directives, &n.directives)
                .node(K::SelectionSet, &n.selection_set),
            NodeRef::VariableDefinition(n) => children
                .node(K::Variable, &n.variable)
                .node(K::Type, &n.ty)
                .opt(K::DefaultValue, n.default_value.as_ref())
                .list(K::Directives, &n.directives),
            NodeRef::Variable(n) => children.node(K::Name, &n.name),
            NodeRef::SelectionSet(n) => children.list(K::Selections, &n.selections),
            NodeRef::Field(n) => children
                .opt(K::Alias, n.alias.as_ref())
                .node(K::Name, &n.name)
                .list(K::Arguments, &n.arguments)
                .list(K::Directives, &n.directives)
                .opt(K::SelectionSet, n.selection_set.as_ref()),
            NodeRef::Argument(n) => children.node(K::Name, &n.name).node(K::Value, &n.value),
            NodeRef::FragmentSpread(n) => children
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives),
            NodeRef::InlineFragment(n) => children
                .opt(K::TypeCondition, n.type_condition.as_ref())
                .list(K::Directives, &n.directives)
                .node(K::SelectionSet, &n.selection_set),
            NodeRef::FragmentDefinition(n) => children
                .node(K::Name, &n.name)
                .node(K::TypeCondition, &n.type_condition)
                .list(K::Directives, &n.directives)
                .node(K::SelectionSet, &n.selection_set),
            NodeRef::ListValue(n) => children.list(K::Values, &n.values),
            NodeRef::ObjectValue(n) => children.list(K::Fields, &n.fields),
            NodeRef::ObjectField(n) => children.node(K::Name, &n.name).node(K::Value, &n.value),
            NodeRef::Directive(n) => children
                .node(K::Name, &n.name)
                .list(K::Arguments, &n.arguments),
            NodeRef::NamedType(n) => children.node(K::Name, &n.name),
            NodeRef::ListType(n) => children.node(K::Type, &n.ty),
            NodeRef::NonNullType(n) => children.node(K::Type, &n.ty),
            NodeRef::SchemaDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .list(K::Directives, &n.directives)
                .list(K::OperationTypes, &n.operation_types),
            NodeRef::OperationTypeDefinition(n) => children.node(K::Type, &n.ty),
            NodeRef::ScalarTypeDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives),
            NodeRef::ObjectTypeDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Interfaces, &n.interfaces)
                .list(K::Directives, &n.directives)
                .list(K::Fields, &n.fields),
            NodeRef::FieldDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Arguments, &n.arguments)
                .node(K::Type, &n.ty)
                .list(K::Directives, &n.directives),
            NodeRef::InputValueDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .node(K::Type, &n.ty)
                .opt(K::DefaultValue, n.default_value.as_ref())
                .list(K::Directives, &n.directives),
            NodeRef::InterfaceTypeDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Interfaces, &n.interfaces)
                .list(K::Directives, &n.directives)
                .list(K::Fields, &n.fields),
            NodeRef::UnionTypeDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives)
                .list(K::Types, &n.types),
            NodeRef::EnumTypeDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives)
                .list(K::Values, &n.values),
            NodeRef::EnumValueDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives),
            NodeRef::InputObjectTypeDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives)
                .list(K::Fields, &n.fields),
            NodeRef::DirectiveDefinition(n) => children
                .opt(K::Description, n.description.as_ref())
                .node(K::Name, &n.name)
                .list(K::Arguments, &n.arguments)
                .list(K::Locations, &n.locations),
            NodeRef::SchemaExtension(n) => children
                .list(K::Directives, &n.directives)
                .list(K::OperationTypes, &n.operation_types),
            NodeRef::ScalarTypeExtension(n) => children
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives),
            NodeRef::ObjectTypeExtension(n) => children
                .node(K::Name, &n.name)
                .list(K::Interfaces, &n.interfaces)
                .list(K::Directives, &n.directives)
                .list(K::Fields, &n.fields),
            NodeRef::InterfaceTypeExtension(n) => children
                .node(K::Name, &n.name)
                .list(K::Interfaces, &n.interfaces)
                .list(K::Directives, &n.directives)
                .list(K::Fields, &n.fields),
            NodeRef::UnionTypeExtension(n) => children
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives)
                .list(K::Types, &n.types),
            NodeRef::EnumTypeExtension(n) => children
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives)
                .list(K::Values, &n.values),
            NodeRef::InputObjectTypeExtension(n) => children
                .node(K::Name, &n.name)
                .list(K::Directives, &n.directives)
                .list(K::Fields, &n.fields),
        };
        children.finish()
    }
}
