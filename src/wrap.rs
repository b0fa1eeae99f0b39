//! Line wrapping for multi-line string bodies.
//!
//! [`wrap`] splits an escaped body into fragments of at most `max_length`
//! chars. Two break strategies compete, checked in this order:
//!
//! 1. **Existing newline**: a newline before `max_length` ends the fragment.
//!    The line break is real, so no continuation marker is needed.
//! 2. **Word boundary**: otherwise, if the rest is too long, cut after the last
//!    space in the window and append a continuation marker (`\` + newline).
//!
//! TOML trims all whitespace following a line-ending backslash. Cuts prefer
//! points where the next fragment starts with a non-whitespace char. When the
//! window offers none, as inside a long run of spaces, the cut falls on the
//! window edge and the next fragment opens with the escaped form of its
//! leading whitespace (`\u0020`, `\n`, `\t`, `\r`). Cuts never split an
//! escape sequence.
//!
//! ```rust
//! use toml_literal::wrap::{strip_continuations, wrap};
//!
//! let text = "the quick brown fox\njumps over the lazy dog";
//! let lines = wrap(text, 12);
//! assert_eq!(
//!     lines,
//!     vec!["the quick \\\n", "brown fox\n", "jumps over \\\n", "the lazy dog"],
//! );
//! assert_eq!(strip_continuations(&lines.concat()), text);
//!
//! let spaced = wrap(&format!("a{}b", " ".repeat(10)), 9);
//! assert_eq!(spaced, vec![format!("a{}\\\n", " ".repeat(8)), r"\u0020 b".to_string()]);
//! ```

use crate::escape::{escape_leading, unit_len};
use crate::WrapStrategy;

/// The continuation marker appended to every cut that is not a real newline.
pub const CONTINUATION: &str = "\\\n";

/// Wraps `text` with the lossless [`WrapStrategy::Exact`] strategy.
///
/// Inside a multi-line basic string the fragments decode to `text`. Joining
/// them and removing every [`CONTINUATION`] yields `text` itself whenever no
/// fragment had to escape its leading whitespace.
///
/// No fragment is longer than `max_length` chars without its marker. The one
/// exception is a `max_length` narrower than a single escape sequence, which
/// is then kept whole on its own fragment.
#[must_use]
pub fn wrap(text: &str, max_length: usize) -> Vec<String> {
    wrap_with(text, max_length, WrapStrategy::Exact)
}

/// Wraps `text` with an explicit strategy.
///
/// [`WrapStrategy::Compatible`] drops the character that follows each cut.
/// Use it only to reproduce output of older encoders byte for byte.
#[must_use]
pub fn wrap_with(text: &str, max_length: usize, strategy: WrapStrategy) -> Vec<String> {
    let max_length = max_length.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut rest = chars.as_slice();
    let mut continued = false;
    let mut lines = Vec::new();

    while !rest.is_empty() {
        let fragment = match strategy {
            WrapStrategy::Exact => next_line_exact(rest, max_length, continued),
            WrapStrategy::Compatible => next_line_compatible(rest, max_length),
        };
        continued = fragment.continued;
        lines.push(fragment.text);
        rest = rest.get(fragment.consumed..).unwrap_or_default();
    }

    lines
}

/// Removes every continuation marker from wrapped output.
///
/// Marker detection skips escaped backslashes, so `\\` followed by a real
/// newline is left alone.
#[must_use]
pub fn strip_continuations(wrapped: &str) -> String {
    let chars: Vec<char> = wrapped.chars().collect();
    let mut out = String::with_capacity(wrapped.len());
    let mut i = 0;
    while i < chars.len() {
        match &chars[i..] {
            ['\\', '\n', ..] => i += 2,
            _ => {
                let len = unit_len(&chars[i..]);
                out.extend(&chars[i..i + len]);
                i += len;
            }
        }
    }
    out
}

/// Splits `text` into slices of at most `max_length` chars for joining with
/// [`CONTINUATION`], never inside an escape sequence.
///
/// Used for fixed-width chunking, where newlines and spaces carry no special
/// weight. A slice after the first that would start with whitespace opens
/// with its escaped form instead.
///
/// ```rust
/// use toml_literal::wrap::chunk;
///
/// assert_eq!(chunk("abcdefg", 3), vec!["abc", "def", "g"]);
/// assert_eq!(chunk(r"ab\u00E9cd", 4), vec!["ab", r"\u00E9", "cd"]);
/// let spaced = chunk(&format!("a{}b", " ".repeat(9)), 8);
/// assert_eq!(spaced, vec![format!("a{}", " ".repeat(7)), r"\u0020 b".to_string()]);
/// ```
#[must_use]
pub fn chunk(text: &str, max_length: usize) -> Vec<String> {
    let max_length = max_length.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut rest = chars.as_slice();
    let mut chunks = Vec::new();

    while !rest.is_empty() {
        let mut piece = String::new();
        let (body, budget) = if chunks.is_empty() {
            (rest, max_length)
        } else {
            escape_head(rest, max_length, &mut piece)
        };
        let cut = if body.len() <= budget {
            body.len()
        } else {
            hard_cut(body, budget)
        };
        piece.extend(&body[..cut]);
        chunks.push(piece);
        rest = &body[cut..];
    }

    chunks
}

struct Fragment {
    text: String,
    consumed: usize,
    continued: bool,
}

fn next_line_exact(rest: &[char], max_length: usize, after_continuation: bool) -> Fragment {
    let mut text = String::new();
    let (body, budget) = if after_continuation {
        escape_head(rest, max_length, &mut text)
    } else {
        (rest, max_length)
    };
    let offset = rest.len() - body.len();

    if let Some(newline) = find_newline(body, budget) {
        text.extend(&body[..=newline]);
        return Fragment {
            text,
            consumed: offset + newline + 1,
            continued: false,
        };
    }

    if body.len() <= budget {
        text.extend(body);
        return Fragment {
            text,
            consumed: rest.len(),
            continued: false,
        };
    }

    let cut = body[..budget]
        .iter()
        .enumerate()
        .rev()
        .find(|&(i, &c)| c == ' ' && starts_clean(&body[i + 1..]))
        .map(|(i, _)| i + 1)
        .unwrap_or_else(|| hard_cut(body, budget));

    text.extend(&body[..cut]);
    text.push_str(CONTINUATION);
    Fragment {
        text,
        consumed: offset + cut,
        continued: true,
    }
}

/// Mirrors the historical wrapper, which resumes one char past each cut.
fn next_line_compatible(rest: &[char], max_length: usize) -> Fragment {
    if let Some(newline) = find_newline(rest, max_length) {
        return Fragment {
            text: rest[..=newline].iter().collect(),
            consumed: newline + 2,
            continued: false,
        };
    }

    if rest.len() <= max_length {
        return Fragment {
            text: rest.iter().collect(),
            consumed: rest.len(),
            continued: false,
        };
    }

    let (end, consumed) = match rest[..max_length].iter().rposition(|&c| c == ' ') {
        Some(space) => (space + 1, space + 2),
        None => (max_length, max_length),
    };
    let mut text: String = rest[..end].iter().collect();
    text.push_str(CONTINUATION);
    Fragment {
        text,
        consumed,
        continued: true,
    }
}

fn find_newline(rest: &[char], max_length: usize) -> Option<usize> {
    rest.iter().position(|&c| c == '\n').filter(|&i| i < max_length)
}

/// Writes the escaped form of leading whitespace into `out` and returns the
/// remaining input with the width left for it.
fn escape_head<'a>(
    rest: &'a [char],
    max_length: usize,
    out: &mut String,
) -> (&'a [char], usize) {
    match rest.split_first() {
        Some((&ch, tail)) => match escape_leading(ch) {
            Some(escaped) => {
                out.push_str(escaped);
                (tail, max_length.saturating_sub(escaped.len()))
            }
            None => (rest, max_length),
        },
        None => (rest, max_length),
    }
}

/// TOML trims whitespace after a line-ending backslash.
fn starts_clean(rest: &[char]) -> bool {
    rest.first().map_or(true, |&c| escape_leading(c).is_none())
}

/// Picks the last escape boundary within `max_length`, preferring one that
/// leaves the remainder starting clean. A zero width cuts nothing; an escape
/// wider than the window is taken whole.
fn hard_cut(rest: &[char], max_length: usize) -> usize {
    if max_length == 0 {
        return 0;
    }

    let mut last = None;
    let mut clean = None;
    let mut pos = 0;
    while pos < rest.len() {
        let next = pos + unit_len(&rest[pos..]);
        if next > max_length {
            break;
        }
        pos = next;
        last = Some(pos);
        if starts_clean(&rest[pos..]) {
            clean = Some(pos);
        }
    }

    clean.or(last).unwrap_or_else(|| unit_len(rest))
}
