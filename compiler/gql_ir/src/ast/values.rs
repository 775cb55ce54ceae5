//! Input values and variables.

use super::{Location, Name};

#[derive(Clone, Debug)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

/// `$name`
#[derive(Clone, Debug)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Location>,
}

/// Integer literal, kept as written.
#[derive(Clone, Debug)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Location>,
}

/// Float literal, kept as written.
#[derive(Clone, Debug)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Location>,
}

/// String literal. `value` is the cooked text; `block` records whether
/// the source used `"""` delimiters.
#[derive(Clone, Debug)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    pub loc: Option<Location>,
}

impl StringValue {
    pub fn new(value: impl Into<String>, block: bool) -> Self {
        StringValue {
            value: value.into(),
            block,
            loc: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct NullValue {
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}
