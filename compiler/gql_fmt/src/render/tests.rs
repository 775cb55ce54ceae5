#![allow(clippy::unwrap_used)]

use gql_ir::ast::{Definition, Directive, Document, Field, FieldDefinition, Selection};
use gql_ir::NodeRef;
use gql_parse::{parse, parse_with_options, ParseOptions};
use pretty_assertions::assert_eq;

use crate::{print, print_node, PrintOptions};

/// Pretty, pretty with comments, minified, minified with comments.
fn all_modes() -> [PrintOptions; 4] {
    [
        PrintOptions::default(),
        PrintOptions::default().with_preserve_comments(true),
        PrintOptions::minified(),
        PrintOptions::minified().with_preserve_comments(true),
    ]
}

fn assert_prints<'a>(node: impl Into<NodeRef<'a>>, expected: [&str; 4]) {
    let node = node.into();
    for (options, expected) in all_modes().iter().zip(expected) {
        assert_eq!(print_node(node, options), expected, "{options:?}");
    }
}

/// Only the comment-preserving modes.
fn assert_prints_with_comments<'a>(node: impl Into<NodeRef<'a>>, pretty: &str, minified: &str) {
    let node = node.into();
    let options = all_modes();
    assert_eq!(print_node(node, &options[1]), pretty);
    assert_eq!(print_node(node, &options[3]), minified);
}

fn first_field(document: &Document) -> &Field {
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    field
}

fn first_operation_directive(document: &Document) -> &Directive {
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    &operation.directives[0]
}

fn first_field_definition(document: &Document) -> &FieldDefinition {
    let Definition::Object(object) = &document.definitions[0] else {
        panic!("expected an object type");
    };
    &object.fields[0]
}

// Fields

#[test]
fn test_field_with_comments_on_every_token() {
    let document = parse(
        r"
        {
          # block comment 1
          myAlias # inline comment 1
          # block comment 2
          : # inline comment 2
          # block comment 3
          myField # inline comment 3
          # block comment 4
          ( # inline comment 4
            myArg: 42
          # block comment 5
          ) # inline comment 5
          # block comment 6
          @myDirective # inline comment 6
          # block comment 7
          @myOtherDirective # inline comment 7
          {
            mySubField
          }
        }
        ",
    )
    .unwrap();

    assert_prints(
        first_field(&document),
        [
            "myAlias: myField(myArg: 42) @myDirective @myOtherDirective {\n  mySubField\n}\n",
            "\
# block comment 1
# inline comment 1
# block comment 2
# inline comment 2
# block comment 3
# inline comment 3
myAlias: myField
# block comment 4
# inline comment 4
(
  myArg: 42
# block comment 5
# inline comment 5
)
# block comment 6
# inline comment 6
@myDirective
# block comment 7
# inline comment 7
@myOtherDirective {
  mySubField
}
",
            "myAlias:myField(myArg:42)@myDirective@myOtherDirective{mySubField}",
            "\
#block comment 1
#inline comment 1
#block comment 2
#inline comment 2
#block comment 3
#inline comment 3
myAlias:myField
#block comment 4
#inline comment 4
(myArg:42
#block comment 5
#inline comment 5
)
#block comment 6
#inline comment 6
@myDirective
#block comment 7
#inline comment 7
@myOtherDirective{mySubField}",
        ],
    );
}

#[test]
fn test_field_arguments_break_when_too_long() {
    let document = parse(
        r#"
        {
          myField(myArg1: "my very very long string", myArg2: "my very very long string") {
            mySubField
          }
        }
        "#,
    )
    .unwrap();
    let field = first_field(&document);

    assert_eq!(
        print_node(field, &PrintOptions::default()),
        r#"myField(
  myArg1: "my very very long string"
  myArg2: "my very very long string"
) {
  mySubField
}
"#
    );
    assert_eq!(
        print_node(field, &PrintOptions::minified()),
        r#"myField(myArg1:"my very very long string",myArg2:"my very very long string"){mySubField}"#
    );
}

#[test]
fn test_comment_between_arguments_breaks_the_list() {
    let document = parse(
        r#"
        {
          myField(
            myArg1: 42
            # comment
            myArg2: "my string"
          )
        }
        "#,
    )
    .unwrap();

    assert_prints_with_comments(
        first_field(&document),
        "myField(\n  myArg1: 42\n  # comment\n  myArg2: \"my string\"\n)\n",
        "myField(myArg1:42\n#comment\nmyArg2:\"my string\")",
    );
}

// Field definitions

#[test]
fn test_field_definition_with_comments_on_every_token() {
    let document = parse(
        r#"
        type MyType {
          # block comment 1
          "my description" # inline comment 1
          # block comment 2
          myField # inline comment 2
          # block comment 3
          ( # inline comment 3
            myArg: MyInputType = 42
          # block comment 4
          ) # inline comment 4
          # block comment 5
          : # inline comment 5
          # block comment 6
          MyOutputType # inline comment 6
          # block comment 7
          @myDirective # inline comment 7
          # block comment 8
          @myOtherDirective # inline comment 8
        }
        "#,
    )
    .unwrap();

    assert_prints(
        first_field_definition(&document),
        [
            "\"my description\"\nmyField(myArg: MyInputType = 42): MyOutputType @myDirective @myOtherDirective\n",
            r#"# block comment 1
# inline comment 1
"my description"
# block comment 2
# inline comment 2
# block comment 5
# inline comment 5
myField
# block comment 3
# inline comment 3
(
  myArg: MyInputType = 42
# block comment 4
# inline comment 4
):
# block comment 6
# inline comment 6
MyOutputType
# block comment 7
# inline comment 7
@myDirective
# block comment 8
# inline comment 8
@myOtherDirective
"#,
            r#""my description"myField(myArg:MyInputType=42):MyOutputType@myDirective@myOtherDirective"#,
            r#"#block comment 1
#inline comment 1
"my description"
#block comment 2
#inline comment 2
#block comment 5
#inline comment 5
myField
#block comment 3
#inline comment 3
(myArg:MyInputType=42
#block comment 4
#inline comment 4
):
#block comment 6
#inline comment 6
MyOutputType
#block comment 7
#inline comment 7
@myDirective
#block comment 8
#inline comment 8
@myOtherDirective"#,
        ],
    );
}

#[test]
fn test_comment_between_argument_definitions() {
    let document = parse(
        r"
        type MyType {
          myField(
            myArg1: MyInputType1
            # comment
            myArg2: MyInputType2
          ): MyOutputType
        }
        ",
    )
    .unwrap();

    assert_prints_with_comments(
        first_field_definition(&document),
        "myField(\n  myArg1: MyInputType1\n  # comment\n  myArg2: MyInputType2\n): MyOutputType\n",
        "myField(myArg1:MyInputType1\n#comment\nmyArg2:MyInputType2):MyOutputType",
    );
}

// Directives

#[test]
fn test_directive_with_comments_on_every_token() {
    let document = parse(
        r#"
        query
        # block comment 1
        @ # inline comment 1
        # block comment 2
        myDirective # inline comment 2
        # block comment 3
        ( # inline comment 3
          myArg: "my string"
        # block comment 4
        ) # inline comment 4
        {
          myField
        }
        "#,
    )
    .unwrap();

    assert_prints(
        first_operation_directive(&document),
        [
            "@myDirective(myArg: \"my string\")\n",
            r#"# block comment 1
# inline comment 1
# block comment 2
# inline comment 2
@myDirective
# block comment 3
# inline comment 3
(
  myArg: "my string"
# block comment 4
# inline comment 4
)
"#,
            r#"@myDirective(myArg:"my string")"#,
            r#"#block comment 1
#inline comment 1
#block comment 2
#inline comment 2
@myDirective
#block comment 3
#inline comment 3
(myArg:"my string"
#block comment 4
#inline comment 4
)"#,
        ],
    );
}

#[test]
fn test_comment_between_directive_arguments() {
    let document = parse(
        r#"
        query @myDirective(
          myArg1: "my string"
          # comment
          myArg2: 42
        ) {
          myField
        }
        "#,
    )
    .unwrap();

    assert_prints_with_comments(
        first_operation_directive(&document),
        "@myDirective(\n  myArg1: \"my string\"\n  # comment\n  myArg2: 42\n)\n",
        "@myDirective(myArg1:\"my string\"\n#comment\nmyArg2:42)",
    );
}

// Directive definitions

#[test]
fn test_directive_definition_with_comments_on_every_token() {
    let document = parse(
        r#"
        # block comment 1
        "my description" # inline comment 1
        # block comment 2
        directive # inline comment 2
        # block comment 3
        @ # inline comment 3
        # block comment 4
        myDirective # inline comment 4
        # block comment 5
        ( # inline comment 5
          myArg: Int = 42
        # block comment 6
        ) # inline comment 6
        # block comment 7
        repeatable # inline comment 7
        # block comment 8
        on # inline comment 8
        # block comment 9
        | # inline comment 9
        # block comment 10
        QUERY # inline comment 10
        # block comment 11
        | # inline comment 11
        # block comment 12
        MUTATION # inline comment 12
        "#,
    )
    .unwrap();

    assert_prints(
        &document.definitions[0],
        [
            "\"my description\"\ndirective @myDirective(myArg: Int = 42) repeatable on QUERY | MUTATION\n",
            r#"# block comment 1
# inline comment 1
"my description"
# block comment 2
# inline comment 2
# block comment 3
# inline comment 3
# block comment 4
# inline comment 4
directive @myDirective
# block comment 5
# inline comment 5
(
  myArg: Int = 42
# block comment 6
# inline comment 6
)
# block comment 7
# inline comment 7
repeatable
# block comment 8
# inline comment 8
on
# block comment 9
# inline comment 9
# block comment 10
# inline comment 10
| QUERY
# block comment 11
# inline comment 11
# block comment 12
# inline comment 12
| MUTATION
"#,
            r#""my description"directive@myDirective(myArg:Int=42) repeatable on QUERY|MUTATION"#,
            r#"#block comment 1
#inline comment 1
"my description"
#block comment 2
#inline comment 2
#block comment 3
#inline comment 3
#block comment 4
#inline comment 4
directive@myDirective
#block comment 5
#inline comment 5
(myArg:Int=42
#block comment 6
#inline comment 6
)
#block comment 7
#inline comment 7
repeatable
#block comment 8
#inline comment 8
on
#block comment 9
#inline comment 9
#block comment 10
#inline comment 10
QUERY
#block comment 11
#inline comment 11
#block comment 12
#inline comment 12
|MUTATION"#,
        ],
    );
}

#[test]
fn test_directive_definition_comments_on_the_on_keyword() {
    let document = parse(
        r"
        directive @myDirective
        # block comment
        on # inline comment
        QUERY | MUTATION
        ",
    )
    .unwrap();

    assert_prints(
        &document.definitions[0],
        [
            "directive @myDirective on QUERY | MUTATION\n",
            "directive @myDirective\n# block comment\n# inline comment\non QUERY | MUTATION\n",
            "directive@myDirective on QUERY|MUTATION",
            "directive@myDirective\n#block comment\n#inline comment\non QUERY|MUTATION",
        ],
    );
}

#[test]
fn test_directive_definition_locations_break_when_too_long() {
    let document = parse(
        r"
        directive @myDirective
        # block comment
        on # inline comment
        | QUERY
        | MUTATION
        | SUBSCRIPTION
        | FIELD
        | FRAGMENT_DEFINITION
        | FRAGMENT_SPREAD
        | INLINE_FRAGMENT
        | VARIABLE_DEFINITION
        ",
    )
    .unwrap();
    let locations = "\
| QUERY
| MUTATION
| SUBSCRIPTION
| FIELD
| FRAGMENT_DEFINITION
| FRAGMENT_SPREAD
| INLINE_FRAGMENT
| VARIABLE_DEFINITION
";
    let minified_locations = "QUERY|MUTATION|SUBSCRIPTION|FIELD|FRAGMENT_DEFINITION|FRAGMENT_SPREAD|INLINE_FRAGMENT|VARIABLE_DEFINITION";

    assert_prints(
        &document.definitions[0],
        [
            &format!("directive @myDirective on\n{locations}"),
            &format!("directive @myDirective\n# block comment\n# inline comment\non\n{locations}"),
            &format!("directive@myDirective on {minified_locations}"),
            &format!("directive@myDirective\n#block comment\n#inline comment\non {minified_locations}"),
        ],
    );
}

#[test]
fn test_directive_definition_comments_between_locations() {
    let document = parse(
        r"
        directive @myDirective on QUERY
        # block comment 9
        | # inline comment 9
        # block comment 10
        MUTATION # inline comment 10
        | SUBSCRIPTION
        ",
    )
    .unwrap();

    assert_prints(
        &document.definitions[0],
        [
            "directive @myDirective on QUERY | MUTATION | SUBSCRIPTION\n",
            "\
directive @myDirective on
| QUERY
# block comment 9
# inline comment 9
# block comment 10
# inline comment 10
| MUTATION
| SUBSCRIPTION
",
            "directive@myDirective on QUERY|MUTATION|SUBSCRIPTION",
            "\
directive@myDirective on QUERY
#block comment 9
#inline comment 9
#block comment 10
#inline comment 10
|MUTATION|SUBSCRIPTION",
        ],
    );
}

#[test]
fn test_directive_definition_comment_between_arguments() {
    let document = parse(
        r"
        directive @myDirective (
          myArg1: MyInputType1
          # comment
          myArg2: MyInputType1
        ) on QUERY
        ",
    )
    .unwrap();

    assert_prints_with_comments(
        &document.definitions[0],
        "directive @myDirective(\n  myArg1: MyInputType1\n  # comment\n  myArg2: MyInputType1\n) on QUERY\n",
        "directive@myDirective(myArg1:MyInputType1\n#comment\nmyArg2:MyInputType1) on QUERY",
    );
}

// Documents

#[test]
fn test_document_keeps_trailing_comments() {
    let document = parse(
        r"
        type MyObjectType {
          field: Int
        }
        # block comment
        # inline comment
        ",
    )
    .unwrap();

    assert_prints(
        &document,
        [
            "type MyObjectType {\n  field: Int\n}\n",
            "type MyObjectType {\n  field: Int\n}\n\n# block comment\n# inline comment\n",
            "type MyObjectType{field:Int}",
            "type MyObjectType{field:Int}\n#block comment\n#inline comment",
        ],
    );
}

#[test]
fn test_print_joins_nodes_with_a_newline() {
    let document = parse("scalar A scalar B").unwrap();
    let printed = print(
        document.definitions.iter().map(NodeRef::from),
        &PrintOptions::minified(),
    );
    assert_eq!(printed, "scalar A\nscalar B");
}

#[test]
fn test_tree_without_locations_prints_without_comments() {
    let source = "# dropped\nquery Q($a: Int = 1) { a # dropped\n }";
    let document = parse_with_options(source, ParseOptions { no_location: true }).unwrap();
    let options = PrintOptions::default().with_preserve_comments(true);
    assert_eq!(
        print_node(&document, &options),
        "query Q($a: Int = 1) {\n  a\n}\n"
    );
}

// Type system definitions

#[test]
fn test_enum_definition_with_comments_on_every_token() {
    let document = parse(
        r#"
        # block comment 1
        "my description" # inline comment 1
        # block comment 2
        enum # inline comment 2
        # block comment 3
        MyEnumType # inline comment 3
        # block comment 4
        @myDirective # inline comment 4
        # block comment 5
        @myOtherDirective # inline comment 5
        # block comment 6
        { # inline comment 6
          MY_ENUM_VALUE
          MY_OTHER_ENUM_VALUE
        # block comment 7
        } # inline comment 7
        "#,
    )
    .unwrap();

    assert_prints(
        &document.definitions[0],
        [
            "\"my description\"\nenum MyEnumType @myDirective @myOtherDirective {\n  MY_ENUM_VALUE\n  MY_OTHER_ENUM_VALUE\n}\n",
            r#"# block comment 1
# inline comment 1
"my description"
# block comment 2
# inline comment 2
# block comment 3
# inline comment 3
enum MyEnumType
# block comment 4
# inline comment 4
@myDirective
# block comment 5
# inline comment 5
@myOtherDirective
# block comment 6
# inline comment 6
{
  MY_ENUM_VALUE
  MY_OTHER_ENUM_VALUE
# block comment 7
# inline comment 7
}
"#,
            r#""my description"enum MyEnumType@myDirective@myOtherDirective{MY_ENUM_VALUE,MY_OTHER_ENUM_VALUE}"#,
            r#"#block comment 1
#inline comment 1
"my description"
#block comment 2
#inline comment 2
#block comment 3
#inline comment 3
enum MyEnumType
#block comment 4
#inline comment 4
@myDirective
#block comment 5
#inline comment 5
@myOtherDirective
#block comment 6
#inline comment 6
{MY_ENUM_VALUE,MY_OTHER_ENUM_VALUE
#block comment 7
#inline comment 7
}"#,
        ],
    );
}

#[test]
fn test_union_comment_puts_every_member_on_its_own_line() {
    let document = parse("union U = A\n# comment\n| B").unwrap();
    assert_prints(
        &document.definitions[0],
        [
            "union U = A | B\n",
            "union U =\n| A\n# comment\n| B\n",
            "union U=A|B",
            "union U=A\n#comment\n|B",
        ],
    );
}

#[test]
fn test_object_interfaces_break_when_too_long() {
    let document = parse(
        "type MyObjectType implements MyVeryVeryLongInterfaceType1 & MyVeryVeryLongInterfaceType2",
    )
    .unwrap();
    let node = &document.definitions[0];

    assert_eq!(
        print_node(node, &PrintOptions::default()),
        "type MyObjectType implements\n& MyVeryVeryLongInterfaceType1\n& MyVeryVeryLongInterfaceType2\n"
    );
    assert_eq!(
        print_node(node, &PrintOptions::minified()),
        "type MyObjectType implements MyVeryVeryLongInterfaceType1&MyVeryVeryLongInterfaceType2"
    );
}

#[test]
fn test_object_comments_between_interfaces() {
    let document = parse(
        r"
        type MyObjectType implements MyType1
        # block comment 9
        & # inline comment 9
        # block comment 10
        MyType2 # inline comment 10
        & MyType3
        ",
    )
    .unwrap();

    assert_prints(
        &document.definitions[0],
        [
            "type MyObjectType implements MyType1 & MyType2 & MyType3\n",
            "\
type MyObjectType implements
& MyType1
# block comment 9
# inline comment 9
# block comment 10
# inline comment 10
& MyType2
& MyType3
",
            "type MyObjectType implements MyType1&MyType2&MyType3",
            "\
type MyObjectType implements MyType1
#block comment 9
#inline comment 9
#block comment 10
#inline comment 10
&MyType2&MyType3",
        ],
    );
}

/// Pretty and minified output of every definition in `source`.
fn assert_definitions(source: &str, pretty: &[&str], minified: &[&str]) {
    let document = parse(source).unwrap();
    for (index, definition) in document.definitions.iter().enumerate() {
        assert_eq!(print_node(definition, &PrintOptions::default()), pretty[index]);
        assert_eq!(print_node(definition, &PrintOptions::minified()), minified[index]);
    }
    assert_eq!(document.definitions.len(), pretty.len());
}

#[test]
fn test_schema_and_extension() {
    assert_definitions(
        "schema @d { query: Q mutation: M } extend schema @e { subscription: S }",
        &[
            "schema @d {\n  query: Q\n  mutation: M\n}\n",
            "extend schema @e {\n  subscription: S\n}\n",
        ],
        &[
            "schema@d{query:Q,mutation:M}",
            "extend schema@e{subscription:S}",
        ],
    );
}

#[test]
fn test_scalar_and_extension() {
    assert_definitions(
        r#""Dates" scalar Date @specifiedBy(url: "x") extend scalar Date @d"#,
        &[
            "\"Dates\"\nscalar Date @specifiedBy(url: \"x\")\n",
            "extend scalar Date @d\n",
        ],
        &[
            r#""Dates"scalar Date@specifiedBy(url:"x")"#,
            "extend scalar Date@d",
        ],
    );
}

#[test]
fn test_object_interface_and_extensions() {
    assert_definitions(
        "type Foo implements A & B @d { a(x: Int = 1, y: [ID!]!): Int } \
         interface I { f: Int } \
         extend type Foo @e \
         extend interface I implements J @d { g: Int }",
        &[
            "type Foo implements A & B @d {\n  a(x: Int = 1, y: [ID!]!): Int\n}\n",
            "interface I {\n  f: Int\n}\n",
            "extend type Foo @e\n",
            "extend interface I implements J @d {\n  g: Int\n}\n",
        ],
        &[
            "type Foo implements A&B@d{a(x:Int=1,y:[ID!]!):Int}",
            "interface I{f:Int}",
            "extend type Foo@e",
            "extend interface I implements J@d{g:Int}",
        ],
    );
}

#[test]
fn test_union_enum_input_and_extensions() {
    assert_definitions(
        "union U @d = A | B \
         extend union U @e = | C | D \
         enum E { A B @deprecated } \
         extend enum E @d \
         input I { a: Int = 1 @d, b: [String!] } \
         extend input I { c: ID }",
        &[
            "union U @d = A | B\n",
            "extend union U @e = C | D\n",
            "enum E {\n  A\n  B @deprecated\n}\n",
            "extend enum E @d\n",
            "input I {\n  a: Int = 1 @d\n  b: [String!]\n}\n",
            "extend input I {\n  c: ID\n}\n",
        ],
        &[
            "union U@d=A|B",
            "extend union U@e=C|D",
            "enum E{A,B@deprecated}",
            "extend enum E@d",
            "input I{a:Int=1@d,b:[String!]}",
            "extend input I{c:ID}",
        ],
    );
}

#[test]
fn test_directive_definition_without_arguments() {
    assert_definitions(
        "directive @a repeatable on FIELD_DEFINITION | ENUM_VALUE",
        &["directive @a repeatable on FIELD_DEFINITION | ENUM_VALUE\n"],
        &["directive@a repeatable on FIELD_DEFINITION|ENUM_VALUE"],
    );
}

#[test]
fn test_block_description_is_indented_with_its_field() {
    let document = parse(
        r#"
        type T {
          """
          First line.
            Indented line.
          """
          f: Int
        }
        "#,
    )
    .unwrap();

    assert_eq!(
        print_node(&document, &PrintOptions::default()),
        "type T {\n  \"\"\"\n  First line.\n    Indented line.\n  \"\"\"\n  f: Int\n}\n"
    );
    assert_eq!(
        print_node(&document, &PrintOptions::minified()),
        "type T{\"\"\"\nFirst line.\n  Indented line.\n\"\"\"f:Int}"
    );
}

#[test]
fn test_default_value_hoists_only_its_leading_comments() {
    let document = parse("type T {\n  f(a: Int =\n  # c\n  1): Int\n}").unwrap();
    assert_prints_with_comments(
        first_field_definition(&document),
        "f(\n  a: Int\n  # c\n  = 1\n): Int\n",
        "f(a:Int\n#c\n=1):Int",
    );

    // A comment on the closing bracket stays inside the value.
    let document = parse("type T {\n  f(a: [[Int!]!] = [[1]] # c\n  ): Int\n}").unwrap();
    assert_prints_with_comments(
        first_field_definition(&document),
        "f(\n  a: [[Int!]!] = [\n    [1]\n  # c\n  ]\n): Int\n",
        "f(a:[[Int!]!]=[[1]\n#c\n]):Int",
    );
}

// Executable definitions

#[test]
fn test_variables_defaults_and_input_values() {
    let document =
        parse("query Q($a: [Int!]! = [1, 2] @d, $b: String) { f(o: { a: 1, b: [] }, e: RED, n: null) }")
            .unwrap();

    assert_eq!(
        print_node(&document, &PrintOptions::default()),
        "query Q($a: [Int!]! = [1, 2] @d, $b: String) {\n  f(o: { a: 1, b: [] }, e: RED, n: null)\n}\n"
    );
    assert_eq!(
        print_node(&document, &PrintOptions::minified()),
        "query Q($a:[Int!]!=[1,2]@d,$b:String){f(o:{a:1,b:[]},e:RED,n:null)}"
    );
}

#[test]
fn test_fragments_and_spreads() {
    let document = parse(
        "fragment F on T @d { ...G @e ... on U { a } ... @skip(if: true) { b } }",
    )
    .unwrap();

    assert_eq!(
        print_node(&document, &PrintOptions::default()),
        "fragment F on T @d {\n  ...G @e\n  ...on U {\n    a\n  }\n  ... @skip(if: true) {\n    b\n  }\n}\n"
    );
    assert_eq!(
        print_node(&document, &PrintOptions::minified()),
        "fragment F on T@d{...G@e,...on U{a},...@skip(if:true){b}}"
    );
}

#[test]
fn test_shorthand_query_stays_shorthand() {
    let document = parse("{ a } query { b } mutation M { c }").unwrap();
    assert_eq!(
        print_node(&document, &PrintOptions::default()),
        "{\n  a\n}\n\nquery {\n  b\n}\n\nmutation M {\n  c\n}\n"
    );
}

#[test]
fn test_string_values_are_escaped() {
    let document = parse(r#"{ f(a: "tab\there \"q\" \u00e9") }"#).unwrap();
    assert_eq!(
        print_node(&document, &PrintOptions::minified()),
        "{f(a:\"tab\\there \\\"q\\\" é\")}"
    );
}

#[test]
fn test_minified_block_string_ends_with_its_delimiter() {
    let document = parse("{ f(a: \"\"\"\nx\ny\"\"\") }").unwrap();
    let value = &first_field(&document).arguments[0].value;
    assert_eq!(
        print_node(value, &PrintOptions::minified()),
        "\"\"\"\nx\ny\n\"\"\""
    );
}

#[test]
fn test_union_with_commented_first_member() {
    let document = parse("union U =\n# first\nA | B").unwrap();
    assert_prints(
        &document.definitions[0],
        [
            "union U = A | B\n",
            "union U =\n# first\n| A\n| B\n",
            "union U=A|B",
            "union U=\n#first\nA|B",
        ],
    );
}

#[test]
fn test_empty_collections_have_no_separator() {
    let document = parse("{ f(a: [], b: {}) }").unwrap();
    assert_eq!(
        print_node(&document, &PrintOptions::default()),
        "{\n  f(a: [], b: {})\n}\n"
    );

    let commented = parse("{ f(a: [\n# inside\n]) }").unwrap();
    let options = PrintOptions::minified().with_preserve_comments(true);
    assert_eq!(print_node(&commented, &options), "{f(a:[\n#inside\n])}");
}
