//! Documents, operations, selections, and fragments.

use std::fmt;

use super::{
    DirectiveDefinition, Directive, EnumTypeDefinition, EnumTypeExtension,
    InputObjectTypeDefinition, InputObjectTypeExtension, InterfaceTypeDefinition,
    InterfaceTypeExtension, Location, NamedType, ObjectTypeDefinition, ObjectTypeExtension,
    ScalarTypeDefinition, ScalarTypeExtension, SchemaDefinition, SchemaExtension, Type,
    UnionTypeDefinition, UnionTypeExtension, Value, Variable,
};

/// An identifier.
#[derive(Clone, Debug)]
pub struct Name {
    pub value: String,
    pub loc: Option<Location>,
}

impl Name {
    /// A name without location, for trees built by hand.
    pub fn new(value: impl Into<String>) -> Self {
        Name {
            value: value.into(),
            loc: None,
        }
    }
}

/// Root of every parsed source.
#[derive(Clone, Debug)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Location>,
}

/// Any top-level definition.
#[derive(Clone, Debug)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Directive(DirectiveDefinition),
    SchemaExtension(SchemaExtension),
    ScalarExtension(ScalarTypeExtension),
    ObjectExtension(ObjectTypeExtension),
    InterfaceExtension(InterfaceTypeExtension),
    UnionExtension(UnionTypeExtension),
    EnumExtension(EnumTypeExtension),
    InputObjectExtension(InputObjectTypeExtension),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// Keyword lookup; `None` for any other name.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationType::Query),
            "mutation" => Some(OperationType::Mutation),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}
