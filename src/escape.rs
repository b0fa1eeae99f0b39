//! Per-code-point escaping for TOML basic strings.
//!
//! Each input character is classified once and either copied verbatim or
//! replaced by its escape sequence, so no character is ever escaped twice.
//!
//! | Input | Single-line | Multi-line |
//! |-------|-------------|------------|
//! | printable ASCII | verbatim | verbatim |
//! | `"` | `\"` | verbatim, except `"""` runs and trailing quotes |
//! | `\` | `\\` | `\\` |
//! | `\n` | `\n` | verbatim |
//! | `\t` `\r` `\b` `\f` | short escape | short escape |
//! | other control, DEL | `\uXXXX` | `\uXXXX` |
//! | non-ASCII | `\uXXXX` / `\UXXXXXXXX` | verbatim |

use std::fmt::Write;

/// Escapes `text` for embedding between the quotes of a single-line basic string.
///
/// The output is pure printable ASCII and never contains an unescaped `"`.
///
/// # Examples
///
/// ```rust
/// use toml_literal::escape::escape_single_line;
///
/// assert_eq!(escape_single_line(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_single_line("tab\there"), r"tab\there");
/// assert_eq!(escape_single_line("café"), r"caf\u00E9");
/// assert_eq!(escape_single_line("🦀"), r"\U0001F980");
/// ```
#[must_use]
pub fn escape_single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            ' '..='~' => out.push(ch),
            _ => push_escaped(&mut out, ch),
        }
    }
    out
}

/// Escapes `text` for the body of a multi-line basic string.
///
/// Newlines and non-ASCII characters stay verbatim. Every complete run of
/// three quotes becomes `\"\"\"`, and quotes at the very end of the body are
/// escaped so they cannot merge with the closing delimiter.
///
/// # Examples
///
/// ```rust
/// use toml_literal::escape::escape_multiline;
///
/// assert_eq!(escape_multiline("a\"\"\"b"), r#"a\"\"\"b"#);
/// assert_eq!(escape_multiline("one\ntwo"), "one\ntwo");
/// assert_eq!(escape_multiline("ends with \""), r#"ends with \""#);
/// ```
#[must_use]
pub fn escape_multiline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut run = 1;
                while chars.next_if_eq(&'"').is_some() {
                    run += 1;
                }
                let trailing = chars.peek().is_none();
                for _ in 0..run / 3 {
                    out.push_str("\\\"\\\"\\\"");
                }
                let rest = if trailing { "\\\"" } else { "\"" };
                for _ in 0..run % 3 {
                    out.push_str(rest);
                }
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push('\n'),
            ' '..='~' => out.push(ch),
            c if c.is_control() => push_escaped(&mut out, c),
            _ => out.push(ch),
        }
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        '\u{0008}' => out.push_str("\\b"),
        '\u{000C}' => out.push_str("\\f"),
        c if (c as u32) <= 0xFFFF => {
            let _ = write!(out, "\\u{:04X}", c as u32);
        }
        c => {
            let _ = write!(out, "\\U{:08X}", c as u32);
        }
    }
}

/// Escape for whitespace that opens a continuation line, where TOML would
/// otherwise trim it. `None` for any other char.
pub(crate) fn escape_leading(ch: char) -> Option<&'static str> {
    match ch {
        ' ' => Some("\\u0020"),
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        _ => None,
    }
}

/// Length in chars of the escape sequence or plain character starting at `chars[0]`.
///
/// Used by the wrapper to avoid cutting inside an escape sequence.
pub(crate) fn unit_len(chars: &[char]) -> usize {
    match chars {
        ['\\', 'u', ..] => 6.min(chars.len()),
        ['\\', 'U', ..] => 10.min(chars.len()),
        ['\\', _, ..] => 2,
        _ => 1,
    }
}
