//! GQL Formatter
//!
//! Width-aware GraphQL printer that can carry source comments into its
//! output.
//!
//! # Architecture
//!
//! Printing runs in four stages:
//!
//! 1. **Transform**: bottom-up reduction of the tree ([`transform`]) with one
//!    renderer per node kind, producing print instructions ([`doc`])
//! 2. **Attach**: renderers pull comments from the token stream around the
//!    punctuation they print ([`navigator`])
//! 3. **Flatten**: floating comments become `#` lines ([`comments`])
//! 4. **Layout**: each line is printed compact if it fits, broken
//!    otherwise ([`layout`])
//!
//! # Modes
//!
//! Pretty output is spaced, indented, and ends with one newline. Minified
//! output drops every optional space and only breaks lines where comments
//! or block strings force it.
//!
//! # Example
//!
//! ```
//! use gql_fmt::{print_node, PrintOptions};
//!
//! let document = gql_parse::parse("{ a(x: 1, y: 2) }").unwrap();
//! assert_eq!(print_node(&document, &PrintOptions::default()), "{\n  a(x: 1, y: 2)\n}\n");
//! assert_eq!(print_node(&document, &PrintOptions::minified()), "{a(x:1,y:2)}");
//! ```

pub mod comments;
pub mod doc;
pub mod layout;
pub mod navigator;
pub mod options;
mod render;
pub mod transform;

use gql_ir::NodeRef;
use tracing::debug;

pub use doc::{IndentDelta, PrintInstruction, TransformedNode};
pub use options::{PrintMode, PrintOptions, INDENTATION_STEP, MAX_LINE_LENGTH};

use render::Printer;

/// Print one node of any kind.
#[tracing::instrument(level = "debug", skip_all)]
pub fn print_node<'a>(node: impl Into<NodeRef<'a>>, options: &PrintOptions) -> String {
    let node = node.into();
    let mut printer = Printer::new(options);
    let transformed = transform::transform(node, &mut printer);
    debug!(
        kind = %node.kind(),
        instructions = transformed.instructions.len(),
        "transformed"
    );

    let flat = comments::flatten(transformed.instructions, options);
    debug!(instructions = flat.len(), "flattened");
    layout::render(&flat, options)
}

/// Print several nodes independently and join the results with a newline.
#[tracing::instrument(level = "debug", skip_all)]
pub fn print<'a>(nodes: impl IntoIterator<Item = NodeRef<'a>>, options: &PrintOptions) -> String {
    nodes
        .into_iter()
        .map(|node| print_node(node, options))
        .collect::<Vec<_>>()
        .join("\n")
}
