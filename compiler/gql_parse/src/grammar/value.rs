//! Values, directives, and type references.

use gql_ir::ast::{
    BooleanValue, Directive, EnumValue, FloatValue, IntValue, ListType, ListValue, NamedType,
    NonNullType, NullValue, ObjectField, ObjectValue, StringValue, Type, Value, Variable,
};
use gql_ir::TokenKind;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Any value; variables are rejected when `is_const`.
    pub(crate) fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<Value> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            let token = self.current();
            match token.kind {
                TokenKind::BracketL => {
                    let values = self.any(
                        TokenKind::BracketL,
                        |parser| parser.parse_value_literal(is_const),
                        TokenKind::BracketR,
                    )?;
                    Ok(Value::List(ListValue {
                        values,
                        loc: self.loc(start),
                    }))
                }
                TokenKind::BraceL => {
                    let fields = self.any(
                        TokenKind::BraceL,
                        |parser| parser.parse_object_field(is_const),
                        TokenKind::BraceR,
                    )?;
                    Ok(Value::Object(ObjectValue {
                        fields,
                        loc: self.loc(start),
                    }))
                }
                TokenKind::Int => {
                    self.cursor.advance();
                    Ok(Value::Int(IntValue {
                        value: token.value.to_string(),
                        loc: self.loc(start),
                    }))
                }
                TokenKind::Float => {
                    self.cursor.advance();
                    Ok(Value::Float(FloatValue {
                        value: token.value.to_string(),
                        loc: self.loc(start),
                    }))
                }
                TokenKind::String | TokenKind::BlockString => {
                    Ok(Value::String(self.parse_string_literal()?))
                }
                TokenKind::Name => {
                    self.cursor.advance();
                    let loc = self.loc(start);
                    Ok(match &*token.value {
                        "true" => Value::Boolean(BooleanValue { value: true, loc }),
                        "false" => Value::Boolean(BooleanValue { value: false, loc }),
                        "null" => Value::Null(NullValue { loc }),
                        other => Value::Enum(EnumValue {
                            value: other.to_owned(),
                            loc,
                        }),
                    })
                }
                TokenKind::Dollar if is_const => {
                    let name = self.cursor.peek(1);
                    Err(ParseError::VariableInConstant {
                        name: name.value.to_string(),
                        line: token.line,
                        column: token.column,
                    })
                }
                TokenKind::Dollar => Ok(Value::Variable(self.parse_variable()?)),
                _ => Err(ParseError::unexpected(token)),
            }
        })
    }

    fn parse_object_field(&mut self, is_const: bool) -> ParseResult<ObjectField> {
        let start = self.start();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_string_literal(&mut self) -> ParseResult<StringValue> {
        let start = self.start();
        let token = self.current();
        let block = match token.kind {
            TokenKind::String => false,
            TokenKind::BlockString => true,
            _ => return Err(ParseError::expected("string", token)),
        };
        self.cursor.advance();
        Ok(StringValue {
            value: token.value.to_string(),
            block,
            loc: self.loc(start),
        })
    }

    /// `$ Name`
    pub(crate) fn parse_variable(&mut self) -> ParseResult<Variable> {
        let start = self.start();
        self.expect(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            loc: self.loc(start),
        })
    }

    /// `Directive*`
    pub(crate) fn parse_directives(&mut self, is_const: bool) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.check(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    /// `@ Name Arguments?`
    fn parse_directive(&mut self, is_const: bool) -> ParseResult<Directive> {
        let start = self.start();
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    /// `NamedType`, `[ Type ]`, or either followed by `!`
    pub(crate) fn parse_type_reference(&mut self) -> ParseResult<Type> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            let ty = if self.eat(TokenKind::BracketL) {
                let inner = self.parse_type_reference()?;
                self.expect(TokenKind::BracketR)?;
                Type::List(Box::new(ListType {
                    ty: inner,
                    loc: self.loc(start),
                }))
            } else {
                Type::Named(self.parse_named_type()?)
            };

            if self.eat(TokenKind::Bang) {
                return Ok(Type::NonNull(Box::new(NonNullType {
                    ty,
                    loc: self.loc(start),
                })));
            }
            Ok(ty)
        })
    }

    pub(crate) fn parse_named_type(&mut self) -> ParseResult<NamedType> {
        let start = self.start();
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            loc: self.loc(start),
        })
    }
}
