//! GraphQL syntax tree.
//!
//! One struct per syntax kind, grouped into executable definitions,
//! values, type references, and type-system definitions. Every node
//! carries an optional [`Location`]; parsers that skip locations leave it
//! `None`.
//!
//! # Child Enumeration
//!
//! [`NodeRef`] borrows any node and lists its structural children in
//! declaration order via [`NodeRef::children`]. Tree walkers use this
//! instead of matching every struct themselves.

mod executable;
mod node_ref;
mod type_system;
mod types;
mod values;

pub use executable::{
    Argument, Definition, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    Name, OperationDefinition, OperationType, Selection, SelectionSet, VariableDefinition,
};
pub use node_ref::{ChildKey, NodeChild, NodeKind, NodeRef};
pub use type_system::{
    DirectiveDefinition, EnumTypeDefinition, EnumTypeExtension, EnumValueDefinition,
    FieldDefinition, InputObjectTypeDefinition, InputObjectTypeExtension, InputValueDefinition,
    InterfaceTypeDefinition, InterfaceTypeExtension, ObjectTypeDefinition, ObjectTypeExtension,
    OperationTypeDefinition, ScalarTypeDefinition, ScalarTypeExtension, SchemaDefinition,
    SchemaExtension, UnionTypeDefinition, UnionTypeExtension,
};
pub use types::{Directive, ListType, NamedType, NonNullType, Type};
pub use values::{
    BooleanValue, EnumValue, FloatValue, IntValue, ListValue, NullValue, ObjectField,
    ObjectValue, StringValue, Value, Variable,
};

pub use crate::Location;
