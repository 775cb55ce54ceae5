//! Type-system definitions and extensions.

use gql_ir::ast::{
    Definition, DirectiveDefinition, EnumTypeDefinition, EnumTypeExtension, EnumValueDefinition,
    FieldDefinition, InputObjectTypeDefinition, InputObjectTypeExtension, InputValueDefinition,
    InterfaceTypeDefinition, InterfaceTypeExtension, Name, NamedType, ObjectTypeDefinition,
    ObjectTypeExtension, OperationTypeDefinition, ScalarTypeDefinition, ScalarTypeExtension,
    SchemaDefinition, SchemaExtension, StringValue, UnionTypeDefinition, UnionTypeExtension,
};
use gql_ir::TokenKind;

use crate::{ParseError, ParseResult, Parser};

/// Locations a directive may be declared for.
const DIRECTIVE_LOCATIONS: &[&str] = &[
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

impl Parser<'_> {
    pub(crate) fn peek_description(&self) -> bool {
        self.check(TokenKind::String) || self.check(TokenKind::BlockString)
    }

    fn parse_description(&mut self) -> ParseResult<Option<StringValue>> {
        if self.peek_description() {
            self.parse_string_literal().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `Description? schema Directives[Const]? { OperationTypeDefinition+ }`
    pub(crate) fn parse_schema_definition(&mut self) -> ParseResult<SchemaDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    /// `OperationType : NamedType`
    fn parse_operation_type_definition(&mut self) -> ParseResult<OperationTypeDefinition> {
        let start = self.start();
        let operation = self.parse_operation_type()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            ty,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_scalar_type_definition(&mut self) -> ParseResult<ScalarTypeDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_object_type_definition(&mut self) -> ParseResult<ObjectTypeDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `implements &? NamedType (& NamedType)*`
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<NamedType>> {
        if self.eat_keyword("implements") {
            self.delimited_many(TokenKind::Amp, Self::parse_named_type)
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_fields_definition(&mut self) -> ParseResult<Vec<FieldDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )
    }

    /// `Description? Name ArgumentsDefinition? : Type Directives[Const]?`
    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_argument_definitions(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::ParenL,
            Self::parse_input_value_definition,
            TokenKind::ParenR,
        )
    }

    /// `Description? Name : Type DefaultValue? Directives[Const]?`
    fn parse_input_value_definition(&mut self) -> ParseResult<InputValueDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.eat(TokenKind::Equals) {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_interface_type_definition(
        &mut self,
    ) -> ParseResult<InterfaceTypeDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_union_type_definition(&mut self) -> ParseResult<UnionTypeDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let types = self.parse_union_member_types()?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    /// `= |? NamedType (| NamedType)*`
    fn parse_union_member_types(&mut self) -> ParseResult<Vec<NamedType>> {
        if self.eat(TokenKind::Equals) {
            self.delimited_many(TokenKind::Pipe, Self::parse_named_type)
        } else {
            Ok(Vec::new())
        }
    }

    pub(crate) fn parse_enum_type_definition(&mut self) -> ParseResult<EnumTypeDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_enum_values_definition(&mut self) -> ParseResult<Vec<EnumValueDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_enum_value_definition,
            TokenKind::BraceR,
        )
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        let token = self.current();
        if matches!(&*token.value, "true" | "false" | "null") {
            return Err(ParseError::unexpected(token));
        }
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_input_object_type_definition(
        &mut self,
    ) -> ParseResult<InputObjectTypeDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_input_fields_definition(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_input_value_definition,
            TokenKind::BraceR,
        )
    }

    /// `Description? directive @ Name ArgumentsDefinition? repeatable? on DirectiveLocations`
    pub(crate) fn parse_directive_definition(&mut self) -> ParseResult<DirectiveDefinition> {
        let start = self.start();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        let repeatable = self.eat_keyword("repeatable");
        self.expect_keyword("on")?;
        let locations = self.delimited_many(TokenKind::Pipe, Self::parse_directive_location)?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(start),
        })
    }

    fn parse_directive_location(&mut self) -> ParseResult<Name> {
        let token = self.current();
        let name = self.parse_name()?;
        if DIRECTIVE_LOCATIONS.contains(&name.value.as_str()) {
            Ok(name)
        } else {
            Err(ParseError::UnknownDirectiveLocation {
                name: name.value,
                line: token.line,
                column: token.column,
            })
        }
    }

    /// `extend` followed by any type-system definition keyword.
    pub(crate) fn parse_type_system_extension(&mut self) -> ParseResult<Definition> {
        let keyword = self.cursor.peek(1);
        if keyword.kind == TokenKind::Name {
            match &*keyword.value {
                "schema" => return Ok(Definition::SchemaExtension(self.parse_schema_extension()?)),
                "scalar" => {
                    return Ok(Definition::ScalarExtension(
                        self.parse_scalar_type_extension()?,
                    ))
                }
                "type" => {
                    return Ok(Definition::ObjectExtension(
                        self.parse_object_type_extension()?,
                    ))
                }
                "interface" => {
                    return Ok(Definition::InterfaceExtension(
                        self.parse_interface_type_extension()?,
                    ))
                }
                "union" => {
                    return Ok(Definition::UnionExtension(
                        self.parse_union_type_extension()?,
                    ))
                }
                "enum" => {
                    return Ok(Definition::EnumExtension(self.parse_enum_type_extension()?))
                }
                "input" => {
                    return Ok(Definition::InputObjectExtension(
                        self.parse_input_object_type_extension()?,
                    ))
                }
                _ => {}
            }
        }
        Err(ParseError::unexpected(keyword))
    }

    fn parse_schema_extension(&mut self) -> ParseResult<SchemaExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.optional_many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(SchemaExtension {
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_extension(&mut self) -> ParseResult<ScalarTypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        if directives.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(ScalarTypeExtension {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_object_type_extension(&mut self) -> ParseResult<ObjectTypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_extension(&mut self) -> ParseResult<InterfaceTypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_union_type_extension(&mut self) -> ParseResult<UnionTypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let types = self.parse_union_member_types()?;
        if directives.is_empty() && types.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(UnionTypeExtension {
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    fn parse_enum_type_extension(&mut self) -> ParseResult<EnumTypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(EnumTypeExtension {
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_type_extension(&mut self) -> ParseResult<InputObjectTypeExtension> {
        let start = self.start();
        self.expect_keyword("extend")?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(ParseError::unexpected(self.current()));
        }
        Ok(InputObjectTypeExtension {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }
}
