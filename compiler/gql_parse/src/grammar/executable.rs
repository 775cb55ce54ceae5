//! Documents, operations, selections, and fragments.

use gql_ir::ast::{
    Argument, Definition, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    Name, OperationDefinition, OperationType, Selection, SelectionSet, VariableDefinition,
};
use gql_ir::TokenKind;
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// `SOF Definition+ EOF`
    pub(crate) fn parse_document(&mut self) -> ParseResult<Document> {
        let start = self.start();
        let definitions = self.many(TokenKind::Sof, Self::parse_definition, TokenKind::Eof)?;
        Ok(Document {
            definitions,
            loc: self.loc(start),
        })
    }

    fn parse_definition(&mut self) -> ParseResult<Definition> {
        if self.check(TokenKind::BraceL) {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }

        let has_description = self.peek_description();
        let keyword = if has_description {
            self.cursor.peek(1)
        } else {
            self.current()
        };
        trace!(keyword = &*keyword.value, "definition");

        if keyword.kind == TokenKind::Name {
            let definition = match &*keyword.value {
                "schema" => Some(Definition::Schema(self.parse_schema_definition()?)),
                "scalar" => Some(Definition::Scalar(self.parse_scalar_type_definition()?)),
                "type" => Some(Definition::Object(self.parse_object_type_definition()?)),
                "interface" => Some(Definition::Interface(
                    self.parse_interface_type_definition()?,
                )),
                "union" => Some(Definition::Union(self.parse_union_type_definition()?)),
                "enum" => Some(Definition::Enum(self.parse_enum_type_definition()?)),
                "input" => Some(Definition::InputObject(
                    self.parse_input_object_type_definition()?,
                )),
                "directive" => Some(Definition::Directive(self.parse_directive_definition()?)),
                _ => None,
            };
            if let Some(definition) = definition {
                return Ok(definition);
            }

            if has_description {
                let description = self.current();
                return Err(ParseError::UnexpectedDescription {
                    line: description.line,
                    column: description.column,
                });
            }

            match &*keyword.value {
                "query" | "mutation" | "subscription" => {
                    return Ok(Definition::Operation(self.parse_operation_definition()?));
                }
                "fragment" => {
                    return Ok(Definition::Fragment(self.parse_fragment_definition()?));
                }
                "extend" => return self.parse_type_system_extension(),
                _ => {}
            }
        }

        Err(ParseError::unexpected(keyword))
    }

    /// `SelectionSet` or `OperationType Name? VariableDefinitions? Directives? SelectionSet`
    fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition> {
        let start = self.start();
        if self.check(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.check(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.optional_many(
            TokenKind::ParenL,
            Self::parse_variable_definition,
            TokenKind::ParenR,
        )?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_operation_type(&mut self) -> ParseResult<OperationType> {
        let token = self.current();
        let operation = match token.kind {
            TokenKind::Name => OperationType::from_keyword(&token.value),
            _ => None,
        };
        match operation {
            Some(operation) => {
                self.cursor.advance();
                Ok(operation)
            }
            None => Err(ParseError::expected("operation type", token)),
        }
    }

    /// `Variable : Type DefaultValue? Directives[Const]?`
    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition> {
        let start = self.start();
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.eat(TokenKind::Equals) {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    /// `{ Selection+ }`
    pub(crate) fn parse_selection_set(&mut self) -> ParseResult<SelectionSet> {
        ensure_sufficient_stack(|| {
            let start = self.start();
            let selections =
                self.many(TokenKind::BraceL, Self::parse_selection, TokenKind::BraceR)?;
            Ok(SelectionSet {
                selections,
                loc: self.loc(start),
            })
        })
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.check(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// `Alias? Name Arguments? Directives? SelectionSet?`
    fn parse_field(&mut self) -> ParseResult<Field> {
        let start = self.start();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.eat(TokenKind::Colon) {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.check(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// `( Argument+ )?`
    pub(crate) fn parse_arguments(&mut self, is_const: bool) -> ParseResult<Vec<Argument>> {
        self.optional_many(
            TokenKind::ParenL,
            |parser| parser.parse_argument(is_const),
            TokenKind::ParenR,
        )
    }

    fn parse_argument(&mut self, is_const: bool) -> ParseResult<Argument> {
        let start = self.start();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    /// `... FragmentName Directives?` or `... TypeCondition? Directives? SelectionSet`
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        let start = self.start();
        self.expect(TokenKind::Spread)?;

        let has_type_condition = self.eat_keyword("on");
        if !has_type_condition && self.check(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition = if has_type_condition {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    /// `fragment FragmentName on NamedType Directives? SelectionSet`
    fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        let start = self.start();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// Any name but `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<Name> {
        if self.cursor.check_keyword("on") {
            return Err(ParseError::unexpected(self.current()));
        }
        self.parse_name()
    }

    pub(crate) fn parse_name(&mut self) -> ParseResult<Name> {
        let start = self.start();
        let token = self.current();
        if token.kind != TokenKind::Name {
            return Err(ParseError::expected(TokenKind::Name.describe(), token));
        }
        self.cursor.advance();
        Ok(Name {
            value: token.value.to_string(),
            loc: self.loc(start),
        })
    }
}
