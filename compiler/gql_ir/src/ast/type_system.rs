//! Schema, type, and directive definitions plus their extensions.

use super::{Directive, Location, Name, NamedType, OperationType, StringValue, Type, Value};

#[derive(Clone, Debug)]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Option<Location>,
}

/// `query: Query` inside a schema definition.
#[derive(Clone, Debug)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub ty: NamedType,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ScalarTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: Type,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

/// Argument definition or input-object field.
#[derive(Clone, Debug)]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct InterfaceTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct UnionTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct EnumTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct InputObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<Name>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct SchemaExtension {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ScalarTypeExtension {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ObjectTypeExtension {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct InterfaceTypeExtension {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct UnionTypeExtension {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct EnumTypeExtension {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct InputObjectTypeExtension {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Location>,
}
