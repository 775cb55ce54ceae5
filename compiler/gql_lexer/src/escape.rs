//! String cooking: escape processing and block string dedent.
//!
//! # Escapes
//!
//! Quoted strings accept `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t`,
//! fixed-width `\uXXXX` (surrogate pairs combined), and variable-width
//! `\u{X...}`. Block strings only know the `\"""` escape.

/// Unescape the content between the quotes of a string literal.
///
/// Returns the offending escape sequence on failure.
pub(crate) fn unescape_string(content: &str) -> Result<String, String> {
    if !content.contains('\\') {
        return Ok(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let digits: String = chars.by_ref().take_while(|&c| c != '}').collect();
                let scalar = u32::from_str_radix(&digits, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("\\u{{{digits}}}"))?;
                result.push(scalar);
            }
            Some('u') => {
                let high = read_hex4(&mut chars).ok_or("\\u")?;
                result.push(decode_utf16_escape(high, &mut chars)?);
            }
            Some(other) => return Err(format!("\\{other}")),
            None => return Err("\\".to_owned()),
        }
    }
    Ok(result)
}

fn read_hex4(chars: &mut impl Iterator<Item = char>) -> Option<u32> {
    let digits: String = chars.take(4).collect();
    if digits.len() != 4 {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}

/// Resolve a `\uXXXX` code unit, pairing a high surrogate with a following
/// `\uXXXX` low surrogate.
fn decode_utf16_escape(
    high: u32,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<char, String> {
    let sequence = || format!("\\u{high:04X}");
    if !(0xD800..0xDC00).contains(&high) {
        return char::from_u32(high).ok_or_else(sequence);
    }
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(sequence());
    }
    let low = read_hex4(chars).ok_or_else(sequence)?;
    if !(0xDC00..0xE000).contains(&low) {
        return Err(sequence());
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)).ok_or_else(sequence)
}

/// Cook the raw body of a block string (between the `"""` delimiters).
///
/// Unescapes `\"""`, removes the common indentation of all lines but the
/// first, and drops leading and trailing blank lines.
pub(crate) fn block_string_value(raw: &str) -> String {
    let raw = raw.replace("\\\"\"\"", "\"\"\"");
    let lines = split_lines(&raw);

    let mut common_indent = usize::MAX;
    let mut first_non_empty = None;
    let mut last_non_empty = None;
    for (i, line) in lines.iter().enumerate() {
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        first_non_empty.get_or_insert(i);
        last_non_empty = Some(i);
        if i != 0 && indent < common_indent {
            common_indent = indent;
        }
    }

    let (Some(first), Some(last)) = (first_non_empty, last_non_empty) else {
        return String::new();
    };

    lines[first..=last]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            if first + offset == 0 || common_indent == usize::MAX {
                *line
            } else {
                line.get(common_indent..).unwrap_or("")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on `\r\n`, `\n`, or `\r`.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Count of leading spaces and tabs, in bytes.
fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
