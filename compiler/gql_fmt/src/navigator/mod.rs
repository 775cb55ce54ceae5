//! Token Navigator
//!
//! Stateless lookups over the token stream of a parsed source. Punctuation
//! such as colons, brackets, `&`, `|`, and `=` never gets its own node, so
//! renderers find it here, starting from the tokens their locations point
//! at.
//!
//! # Comment Attachment
//!
//! A token owns:
//! - the run of comments directly before it, each on its own line (block)
//! - the comment directly after it on its last line (inline)

use gql_ir::{TokenKind, TokenRef};

use crate::doc::PrintInstruction;

/// First token at or after `from` with the given kind and, if given, value.
pub fn seek_forward<'a>(
    from: Option<TokenRef<'a>>,
    kind: TokenKind,
    value: Option<&str>,
) -> Option<TokenRef<'a>> {
    let mut running = from;
    while let Some(token) = running {
        if matches(token, kind, value) {
            return Some(token);
        }
        running = token.next();
    }
    None
}

/// First token at or before `from` with the given kind and, if given, value.
pub fn seek_backward<'a>(
    from: Option<TokenRef<'a>>,
    kind: TokenKind,
    value: Option<&str>,
) -> Option<TokenRef<'a>> {
    let mut running = from;
    while let Some(token) = running {
        if matches(token, kind, value) {
            return Some(token);
        }
        running = token.prev();
    }
    None
}

/// First non-comment token at or after `from`.
pub fn skip_comments(from: Option<TokenRef<'_>>) -> Option<TokenRef<'_>> {
    let mut running = from;
    while let Some(token) = running {
        if token.kind() != TokenKind::Comment {
            return Some(token);
        }
        running = token.next();
    }
    None
}

fn matches(token: TokenRef<'_>, kind: TokenKind, value: Option<&str>) -> bool {
    token.kind() == kind && value.map_or(true, |value| token.value() == value)
}

/// Line on which `token` ends.
///
/// Block strings are the only tokens spanning several lines and record
/// just their first; their last is counted from the source text.
pub fn end_line(token: TokenRef<'_>) -> u32 {
    if token.kind() != TokenKind::BlockString {
        return token.line();
    }
    let end = token.span().to_range().end;
    let body = token.source().body();
    let consumed = body.get(..end).unwrap_or(body);
    1 + count_line_breaks(consumed)
}

/// `\r\n`, `\r`, and `\n` each count once.
fn count_line_breaks(text: &str) -> u32 {
    let mut count = 0;
    let mut bytes = text.bytes().peekable();
    while let Some(byte) = bytes.next() {
        match byte {
            b'\n' => count += 1,
            b'\r' => {
                if bytes.peek() == Some(&b'\n') {
                    bytes.next();
                }
                count += 1;
            }
            _ => {}
        }
    }
    count
}

/// Collects the comments attached to anchor tokens.
///
/// Disabled collectors return nothing, so renderers call them
/// unconditionally.
#[derive(Copy, Clone, Debug)]
pub struct CommentCollector {
    enabled: bool,
}

impl CommentCollector {
    pub fn new(enabled: bool) -> Self {
        CommentCollector { enabled }
    }

    /// Block comments before `token`, in source order, then its inline
    /// comment.
    pub fn collect<'a>(&self, token: Option<TokenRef<'a>>) -> Vec<PrintInstruction<'a>> {
        let Some(token) = token.filter(|_| self.enabled) else {
            return Vec::new();
        };

        let mut comments = Vec::new();
        let mut running = token.prev();
        while let Some(comment) = running.filter(|prev| starts_own_line(*prev)) {
            comments.push(PrintInstruction::Comment(comment.value()));
            running = comment.prev();
        }
        comments.reverse();

        if let Some(next) = token.next() {
            if next.kind() == TokenKind::Comment && next.line() == end_line(token) {
                comments.push(PrintInstruction::Comment(next.value()));
            }
        }
        comments
    }

    /// Comments of several anchors, concatenated in argument order.
    pub fn collect_all<'a>(&self, tokens: &[Option<TokenRef<'a>>]) -> Vec<PrintInstruction<'a>> {
        tokens.iter().flat_map(|token| self.collect(*token)).collect()
    }
}

/// A comment that does not share a line with the token before it.
fn starts_own_line(token: TokenRef<'_>) -> bool {
    token.kind() == TokenKind::Comment
        && token
            .prev()
            .map_or(true, |prev| token.line() != end_line(prev))
}
