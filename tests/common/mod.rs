//! Minimal TOML string-literal decoder used to check round trips.
//!
//! Handles bare keys, basic strings and multi-line basic strings, and rejects
//! anything a conforming parser would reject (raw control characters, bare
//! quotes, unknown escapes, `"""` inside a block).

#![allow(dead_code)]

pub fn decode(source: &str) -> Result<String, String> {
    if let Some(body) = source
        .strip_prefix("\"\"\"")
        .and_then(|s| s.strip_suffix("\"\"\""))
    {
        let body = body
            .strip_prefix("\r\n")
            .or_else(|| body.strip_prefix('\n'))
            .unwrap_or(body);
        return unescape(body, true);
    }

    if let Some(body) = source
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    {
        return unescape(body, false);
    }

    if !source.is_empty()
        && source
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Ok(source.to_string());
    }

    Err(format!("not a string literal: {:?}", source))
}

fn unescape(body: &str, multiline: bool) -> Result<String, String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    let mut raw_quotes = 0;

    while let Some(ch) = chars.next() {
        if ch == '"' {
            raw_quotes += 1;
            if !multiline || raw_quotes >= 3 {
                return Err(format!("unescaped quote in {:?}", body));
            }
            out.push(ch);
            continue;
        }
        raw_quotes = 0;

        match ch {
            '\\' => {
                let escape = chars.next().ok_or("dangling backslash")?;
                match escape {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    'b' => out.push('\u{0008}'),
                    'f' => out.push('\u{000C}'),
                    '"' => out.push('"'),
                    '\\' => out.push('\\'),
                    'u' => out.push(hex(&mut chars, 4)?),
                    'U' => out.push(hex(&mut chars, 8)?),
                    '\n' if multiline => {
                        while chars
                            .next_if(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
                            .is_some()
                        {}
                    }
                    other => return Err(format!("invalid escape \\{:?}", other)),
                }
            }
            '\n' if multiline => out.push(ch),
            '\t' => out.push(ch),
            c if c.is_control() => return Err(format!("raw control character {:?}", c)),
            c => out.push(c),
        }
    }

    Ok(out)
}

fn hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, len: usize) -> Result<char, String> {
    let digits: String = chars.by_ref().take(len).collect();
    if digits.len() != len {
        return Err(format!("short unicode escape {:?}", digits));
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid unicode escape {:?}", digits))
}
