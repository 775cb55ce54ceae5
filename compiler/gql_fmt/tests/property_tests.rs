//! Property-based tests for the GraphQL printer.
//!
//! Random operations, optionally with a labelled comment before any field
//! or inside list and object arguments, are checked for:
//! 1. Idempotence: print(parse(print(parse(x)))) == print(parse(x))
//! 2. Comment conservation: every label survives, in order, exactly once
//! 3. Mode orthogonality: minified output is never indented

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use std::fmt::Write;

use gql_fmt::{print_node, PrintOptions};
use proptest::prelude::*;

// -- Source Generation Strategies --

#[derive(Clone, Debug)]
struct FieldSpec {
    alias: Option<String>,
    name: String,
    arguments: Vec<(String, String)>,
    commented: bool,
    children: Vec<FieldSpec>,
}

/// Field, alias, and argument names. The prefix keeps them clear of
/// `true`, `false`, `null`, and `on`.
fn name_strategy(prefix: &'static str) -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_]{0,10}")
        .unwrap()
        .prop_map(move |name| format!("{prefix}{name}"))
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..100_000).prop_map(|n| n.to_string()),
        (-1000i64..0).prop_map(|n| n.to_string()),
        prop::string::string_regex("[a-zA-Z0-9 _]{0,30}")
            .unwrap()
            .prop_map(|s| format!("\"{s}\"")),
        Just("RED".to_owned()),
        Just("true".to_owned()),
        Just("null".to_owned()),
        Just("$var".to_owned()),
        prop::collection::vec(0i64..100, 0..4).prop_map(|items| {
            let items: Vec<_> = items.iter().map(ToString::to_string).collect();
            format!("[{}]", items.join(", "))
        }),
        (0i64..100).prop_map(|n| format!("{{ key: {n}, other: \"value\" }}")),
    ]
}

/// Marks where `write_field` puts the next labelled comment. `@` never
/// occurs in generated values.
const COMMENT_MARK: &str = "@C";

/// Lists and objects with a comment after the opening bracket, after an
/// element, or before the closing bracket.
fn commented_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(format!("[{COMMENT_MARK} 1, 2]")),
        Just(format!("[1, {COMMENT_MARK} 2]")),
        Just(format!("[1, 2 {COMMENT_MARK}]")),
        Just(format!("[[1 {COMMENT_MARK}], [2]]")),
        Just(format!("{{ key: 1 {COMMENT_MARK} other: \"value\" }}")),
        Just(format!("{{ key: [3 {COMMENT_MARK}] {COMMENT_MARK} }}")),
    ]
}

fn argument_strategy(value_comments: bool) -> BoxedStrategy<(String, String)> {
    if value_comments {
        let value = prop_oneof![value_strategy(), commented_value_strategy()];
        (name_strategy("arg_"), value).boxed()
    } else {
        (name_strategy("arg_"), value_strategy()).boxed()
    }
}

fn field_strategy(value_comments: bool) -> impl Strategy<Value = FieldSpec> {
    let leaf = (
        prop::option::of(name_strategy("alias_")),
        name_strategy("f_"),
        prop::collection::vec(argument_strategy(value_comments), 0..3),
        any::<bool>(),
    )
        .prop_map(|(alias, name, arguments, commented)| FieldSpec {
            alias,
            name,
            arguments,
            commented,
            children: Vec::new(),
        });

    leaf.prop_recursive(3, 32, 4, move |inner| {
        (
            prop::option::of(name_strategy("alias_")),
            name_strategy("f_"),
            prop::collection::vec(argument_strategy(value_comments), 0..3),
            any::<bool>(),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(alias, name, arguments, commented, children)| FieldSpec {
                alias,
                name,
                arguments,
                commented,
                children,
            })
    })
}

/// Source text and its number of labelled comments.
fn operation_strategy() -> impl Strategy<Value = (String, usize)> {
    operation_with(false)
}

/// Like `operation_strategy`, with comments inside argument values too.
fn commented_operation_strategy() -> impl Strategy<Value = (String, usize)> {
    operation_with(true)
}

fn operation_with(value_comments: bool) -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(field_strategy(value_comments), 1..4).prop_map(|fields| {
        let mut source = String::from("query Generated($var: Int) {\n");
        let mut labels = 0;
        for field in &fields {
            write_field(field, 1, &mut labels, &mut source);
        }
        source.push_str("}\n");
        (source, labels)
    })
}

fn write_field(field: &FieldSpec, depth: usize, labels: &mut usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if field.commented {
        *labels += 1;
        writeln!(out, "{indent}# comment {labels}").unwrap();
    }
    out.push_str(&indent);
    if let Some(alias) = &field.alias {
        write!(out, "{alias}: ").unwrap();
    }
    out.push_str(&field.name);
    if !field.arguments.is_empty() {
        let arguments: Vec<_> = field
            .arguments
            .iter()
            .map(|(name, value)| format!("{name}: {}", place_comments(value, labels)))
            .collect();
        write!(out, "({})", arguments.join(", ")).unwrap();
    }
    if field.children.is_empty() {
        out.push('\n');
        return;
    }
    out.push_str(" {\n");
    for child in &field.children {
        write_field(child, depth + 1, labels, out);
    }
    writeln!(out, "{indent}}}").unwrap();
}

/// Replace each comment mark with the next labelled comment.
fn place_comments(value: &str, labels: &mut usize) -> String {
    let mut parts = value.split(COMMENT_MARK);
    let mut out = parts.next().unwrap_or_default().to_owned();
    for part in parts {
        *labels += 1;
        writeln!(out, "# comment {labels}").unwrap();
        out.push_str(part);
    }
    out
}

// -- Helpers --

fn parse_and_print(source: &str, options: &PrintOptions) -> Result<String, String> {
    let document = gql_parse::parse(source).map_err(|error| format!("{error}\n{source}"))?;
    Ok(print_node(&document, options))
}

fn all_modes() -> [PrintOptions; 4] {
    [
        PrintOptions::default(),
        PrintOptions::default().with_preserve_comments(true),
        PrintOptions::minified(),
        PrintOptions::minified().with_preserve_comments(true),
    ]
}

/// `comment N` labels in output order.
fn labels_in(printed: &str) -> Vec<usize> {
    printed
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix('#'))
        .filter_map(|comment| comment.trim().strip_prefix("comment "))
        .map(|label| label.parse().unwrap())
        .collect()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_printing_is_idempotent((source, _) in operation_strategy()) {
        for options in &all_modes() {
            let first = parse_and_print(&source, options).map_err(TestCaseError::fail)?;
            let second = parse_and_print(&first, options).map_err(TestCaseError::fail)?;
            prop_assert_eq!(&first, &second, "{:?}", options);
        }
    }

    #[test]
    fn prop_comments_are_conserved((source, labels) in operation_strategy()) {
        let expected: Vec<usize> = (1..=labels).collect();
        for options in &all_modes() {
            let printed = parse_and_print(&source, options).map_err(TestCaseError::fail)?;
            if options.preserve_comments {
                prop_assert_eq!(labels_in(&printed), expected.clone());
            } else {
                prop_assert!(!printed.contains('#'));
            }
        }
    }

    #[test]
    fn prop_value_comments_are_idempotent_and_conserved(
        (source, labels) in commented_operation_strategy()
    ) {
        let expected: Vec<usize> = (1..=labels).collect();
        for options in &all_modes() {
            let first = parse_and_print(&source, options).map_err(TestCaseError::fail)?;
            let second = parse_and_print(&first, options).map_err(TestCaseError::fail)?;
            prop_assert_eq!(&first, &second, "{:?}", options);
            if options.preserve_comments {
                prop_assert_eq!(labels_in(&first), expected.clone());
            } else {
                prop_assert!(!first.contains('#'));
            }
        }
    }

    #[test]
    fn prop_minified_output_is_not_indented((source, labels) in operation_strategy()) {
        let printed = parse_and_print(&source, &PrintOptions::minified())
            .map_err(TestCaseError::fail)?;
        prop_assert!(!printed.contains('\n'));

        let preserved = parse_and_print(
            &source,
            &PrintOptions::minified().with_preserve_comments(true),
        )
        .map_err(TestCaseError::fail)?;
        prop_assert_eq!(preserved.lines().count(), printed.lines().count() + 2 * labels);
        for line in preserved.lines() {
            prop_assert!(!line.starts_with(' '), "{}", line);
        }
    }
}
