//! Printing already-printed output changes nothing.
//!
//! For every fixture and every mode, `print(parse(print(parse(x))))` must
//! equal `print(parse(x))`, and preserved comments must survive both passes.

#![allow(clippy::unwrap_used)]

use std::fmt::Write;

use gql_fmt::{print_node, PrintOptions};
use gql_ir::{NodeRef, TokenKind};
use pretty_assertions::assert_eq;

const FIXTURES: &[(&str, &str)] = &[
    ("kitchen_sink", include_str!("fixtures/kitchen_sink.graphql")),
    (
        "schema_kitchen_sink",
        include_str!("fixtures/schema_kitchen_sink.graphql"),
    ),
];

fn modes() -> [PrintOptions; 4] {
    [
        PrintOptions::default(),
        PrintOptions::default().with_preserve_comments(true),
        PrintOptions::minified(),
        PrintOptions::minified().with_preserve_comments(true),
    ]
}

fn reprint(source: &str, options: &PrintOptions) -> String {
    let document = gql_parse::parse(source)
        .unwrap_or_else(|error| panic!("failed to parse:\n{source}\n{error}"));
    print_node(&document, options)
}

/// Comment texts of a source file, in order.
fn source_comments(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter_map(|line| line.split_once('#').map(|(_, comment)| comment.trim()))
        .collect()
}

#[test]
fn test_fixtures_are_idempotent() {
    for (name, source) in FIXTURES {
        for options in &modes() {
            let first = reprint(source, options);
            let second = reprint(&first, options);
            assert_eq!(first, second, "{name} with {options:?}");
        }
    }
}

#[test]
fn test_fixtures_keep_every_comment() {
    for (name, source) in FIXTURES {
        let expected = source_comments(source);
        for options in &modes() {
            let printed = reprint(source, options);
            if options.preserve_comments {
                assert_eq!(source_comments(&printed), expected, "{name} with {options:?}");
            } else {
                assert!(!printed.contains('#'), "{name} with {options:?}");
            }
        }
    }
}

#[test]
fn test_pretty_output_has_no_trailing_whitespace() {
    for (name, source) in FIXTURES {
        let options = PrintOptions::default().with_preserve_comments(true);
        let printed = reprint(source, &options);
        for line in printed.lines() {
            assert_eq!(line, line.trim_end(), "{name}");
        }
        assert!(printed.ends_with("}\n") || printed.ends_with("comment\n"));
    }
}

#[test]
fn test_minified_output_has_no_indentation() {
    for (name, source) in FIXTURES {
        let options = PrintOptions::minified().with_preserve_comments(true);
        let printed = reprint(source, &options);
        for line in printed.lines() {
            assert!(!line.starts_with(' '), "{name}: {line:?}");
        }
        assert!(!printed.ends_with('\n'), "{name}");
    }
}

/// The source with `# label N` after every significant token, and for
/// each label the index of the definition its token belongs to.
fn label_every_token(source: &str) -> (String, Vec<usize>) {
    let document = gql_parse::parse(source).unwrap();
    let spans: Vec<_> = document
        .definitions
        .iter()
        .map(|definition| NodeRef::from(definition).loc().unwrap().span())
        .collect();
    let tokens = document.loc.as_ref().unwrap().source().tokens();

    let mut labelled = String::with_capacity(source.len() * 2);
    let mut owners = Vec::new();
    let mut copied = 0;
    for token in tokens.iter() {
        if matches!(token.kind, TokenKind::Sof | TokenKind::Eof | TokenKind::Comment) {
            continue;
        }
        let end = token.span.to_range().end;
        labelled.push_str(&source[copied..end]);
        copied = end;

        owners.push(
            spans
                .iter()
                .position(|span| span.start <= token.span.start && token.span.end <= span.end)
                .unwrap(),
        );
        writeln!(labelled, " # label {}", owners.len()).unwrap();
    }
    labelled.push_str(&source[copied..]);
    (labelled, owners)
}

/// `label N` numbers in output order.
fn labels_in(printed: &str) -> Vec<usize> {
    printed
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix('#'))
        .filter_map(|comment| comment.trim().strip_prefix("label "))
        .map(|label| label.parse().unwrap())
        .collect()
}

#[test]
fn test_comment_after_every_token_is_kept_and_stable() {
    let (source, owners) = label_every_token(include_str!("fixtures/schema_kitchen_sink.graphql"));
    for options in &modes() {
        let first = reprint(&source, options);
        let second = reprint(&first, options);
        assert_eq!(first, second, "{options:?}");

        let labels = labels_in(&first);
        if !options.preserve_comments {
            assert!(labels.is_empty(), "{options:?}");
            continue;
        }

        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=owners.len()).collect::<Vec<_>>(), "{options:?}");

        // Comments may move to the front of their construct, never into
        // another definition.
        let printed_owners: Vec<_> = labels.iter().map(|label| owners[label - 1]).collect();
        assert!(
            printed_owners.windows(2).all(|pair| pair[0] <= pair[1]),
            "{options:?}\n{first}"
        );
    }
}

#[test]
fn test_comments_inside_default_values_stay_inside() {
    let sources = [
        "query Q($a: In = {x: 1 # c\n y: 2}) { a }",
        "type T {\n  f(a: [[Int!]!] = [[1]] # c\n  ): Int\n}",
        "type T {\n  f(a: In = { x: [1, 2 # c\n  ] }): Int\n}",
    ];
    for source in sources {
        for options in &modes() {
            let first = reprint(source, options);
            let second = reprint(&first, options);
            assert_eq!(first, second, "{source} with {options:?}");

            if options.preserve_comments {
                let equals = first.find('=').unwrap();
                let comment = first.find('#').unwrap();
                assert!(equals < comment, "{first}");
            }
        }
    }
}
