//! Type references and directive applications.

use super::{Argument, Location, Name};

/// A type reference such as `[String!]!`.
#[derive(Clone, Debug)]
pub enum Type {
    Named(NamedType),
    List(Box<ListType>),
    NonNull(Box<NonNullType>),
}

#[derive(Clone, Debug)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Location>,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        NamedType {
            name: Name::new(name),
            loc: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ListType {
    pub ty: Type,
    pub loc: Option<Location>,
}

/// `T!`; the parser never nests one non-null inside another.
#[derive(Clone, Debug)]
pub struct NonNullType {
    pub ty: Type,
    pub loc: Option<Location>,
}

/// `@name(args)`
#[derive(Clone, Debug)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Location>,
}
