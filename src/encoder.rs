//! Value to literal-token encoding.
//!
//! The [`Encoder`] turns one scalar [`Value`] into the single [`Token`] that
//! represents it in a TOML document:
//!
//! - **Booleans, integers, floats**: fixed textual forms
//! - **Date/time values**: RFC 3339 with a `Z` offset, truncated to seconds
//! - **Text**: bare, quoted, or a multi-line block depending on content
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root, which run with
//! [`EncoderOptions::default`]:
//!
//! ```rust
//! use toml_literal::{encode_primitive, TokenKind, Value};
//!
//! let token = encode_primitive(&Value::from(42)).unwrap();
//! assert_eq!(token.kind(), TokenKind::Integer);
//! assert_eq!(token.source(), "42");
//! ```
//!
//! ## Custom thresholds
//!
//! ```rust
//! use toml_literal::{Encoder, EncoderOptions, TokenKind};
//!
//! let encoder = Encoder::new(EncoderOptions::new().with_multiline_min_newlines(1));
//! let token = encoder.encode_str("one\ntwo", false);
//! assert_eq!(token.kind(), TokenKind::MultilineString);
//! assert_eq!(token.source(), "\"\"\"\none\ntwo\"\"\"");
//! ```

use crate::escape::{escape_multiline, escape_single_line};
use crate::wrap::{chunk, wrap_with, CONTINUATION};
use crate::{EncoderOptions, Error, Result, Temporal, Token, TokenKind, Value};
use chrono::{DateTime, Datelike, Utc};

const TRIPLE_QUOTE: &str = "\"\"\"";

/// Encodes values into literal tokens.
///
/// The encoder is stateless apart from its options, so one instance can be
/// shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    #[must_use]
    pub fn new(options: EncoderOptions) -> Self {
        Encoder { options }
    }

    #[must_use]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encodes a scalar value into its literal token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrimitive`] for arrays and tables, and
    /// [`Error::InvalidTemporal`] if a date/time falls outside years 0000 to
    /// 9999, which RFC 3339 cannot express.
    pub fn encode_primitive(&self, value: &Value) -> Result<Token> {
        match value {
            Value::Boolean(b) => Ok(Token::new(
                TokenKind::Boolean,
                if *b { "true" } else { "false" },
            )),
            Value::Integer(i) => Ok(Token::new(TokenKind::Integer, i.to_string())),
            Value::Float(f) => Ok(Token::new(TokenKind::Float, format_float(*f))),
            Value::Temporal(t) => Ok(Token::new(TokenKind::Date, format_temporal(t)?)),
            Value::Text(s) => Ok(self.encode_str(s, false)),
            Value::Array(_) | Value::Table(_) => {
                Err(Error::not_primitive(value, value.type_name()))
            }
        }
    }

    /// Encodes a text value, rejecting every other variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is not [`Value::Text`].
    pub fn encode_string(&self, value: &Value, bare_allowed: bool) -> Result<Token> {
        match value {
            Value::Text(s) => Ok(self.encode_str(s, bare_allowed)),
            other => Err(Error::invalid_argument(other, other.type_name())),
        }
    }

    /// Encodes text, choosing the most compact legal form.
    ///
    /// In order: empty text is `""`; key-like text is bare when
    /// `bare_allowed`; long or multi-line text becomes a multi-line block;
    /// anything else is a quoted single-line string.
    #[must_use]
    pub fn encode_str(&self, text: &str, bare_allowed: bool) -> Token {
        if text.is_empty() {
            return Token::new(TokenKind::String, "\"\"");
        }
        if bare_allowed && is_bare(text) {
            return Token::new(TokenKind::BareString, text);
        }

        let newlines = text.chars().filter(|&c| c == '\n').count();
        if newlines >= self.options.multiline_min_newlines
            || text.chars().count() > self.options.multiline_threshold
        {
            return self.encode_multiline(text);
        }

        Token::new(
            TokenKind::String,
            format!("\"{}\"", escape_single_line(text)),
        )
    }

    /// Encodes text as a multi-line basic string.
    ///
    /// Short bodies are emitted as is; longer ones are wrapped at
    /// [`EncoderOptions::wrap_width`] and closed with a continuation marker.
    #[must_use]
    pub fn encode_multiline(&self, text: &str) -> Token {
        let escaped = escape_multiline(text);
        let source = if escaped.chars().count() <= self.options.multiline_inline_max {
            format!("{TRIPLE_QUOTE}\n{escaped}{TRIPLE_QUOTE}")
        } else {
            let body = wrap_with(&escaped, self.options.wrap_width, self.options.wrap_strategy)
                .concat();
            format!("{TRIPLE_QUOTE}\n{body}{CONTINUATION}{TRIPLE_QUOTE}")
        };
        Token::new(TokenKind::MultilineString, source)
    }

    /// Encodes text as a multi-line basic string cut into fixed-width slices.
    ///
    /// Unlike [`Encoder::encode_multiline`] this ignores spaces and newlines
    /// when choosing cut points.
    #[must_use]
    pub fn encode_multiline_chunked(&self, text: &str, max_line_length: usize) -> Token {
        let escaped = escape_multiline(text);
        let body = chunk(&escaped, max_line_length).join(CONTINUATION);
        Token::new(
            TokenKind::MultilineString,
            format!("{TRIPLE_QUOTE}\n{body}{TRIPLE_QUOTE}"),
        )
    }
}

/// ASCII letters, digits, `_` and `-`.
fn is_bare(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f == f64::INFINITY {
        "inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        // Debug keeps a fractional part or exponent, so `1.0` stays a float
        format!("{:?}", f)
    }
}

fn format_temporal(temporal: &Temporal) -> Result<String> {
    let seconds = temporal.epoch_millis().div_euclid(1000);
    let instant = DateTime::<Utc>::from_timestamp(seconds, 0)
        .filter(|instant| (0..=9999).contains(&instant.year()))
        .ok_or_else(|| Error::invalid_temporal(&temporal.to_string()))?;
    Ok(instant.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn encoder() -> Encoder {
        Encoder::default()
    }

    #[test]
    fn test_boolean_before_integer() {
        let t = encoder().encode_primitive(&Value::Boolean(true)).unwrap();
        let one = encoder().encode_primitive(&Value::Integer(1)).unwrap();
        assert_eq!(t, Token::new(TokenKind::Boolean, "true"));
        assert_eq!(one, Token::new(TokenKind::Integer, "1"));
        assert_ne!(t, one);
    }

    #[test]
    fn test_integers() {
        for (n, text) in [(0, "0"), (-17, "-17"), (i64::MAX, "9223372036854775807")] {
            let token = encoder().encode_primitive(&Value::Integer(n)).unwrap();
            assert_eq!(token.source(), text);
        }
    }

    #[test]
    fn test_floats_keep_float_syntax() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(1e100), "1e100");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_temporal_truncates_to_seconds() {
        let datetime = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_milli_opt(10, 30, 5, 999)
            .unwrap();
        let token = encoder().encode_primitive(&Value::from(datetime)).unwrap();
        assert_eq!(token, Token::new(TokenKind::Date, "2024-01-15T10:30:05Z"));
    }

    #[test]
    fn test_temporal_floors_before_epoch() {
        let datetime = NaiveDate::from_ymd_opt(1969, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 500)
            .unwrap();
        let token = encoder().encode_primitive(&Value::from(datetime)).unwrap();
        assert_eq!(token.source(), "1969-12-31T23:59:59Z");
    }

    #[test]
    fn test_temporal_variants() {
        let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let token = encoder().encode_primitive(&Value::from(date)).unwrap();
        assert_eq!(token.source(), "2000-02-29T00:00:00Z");

        let time = NaiveTime::from_hms_opt(7, 45, 0).unwrap();
        let token = encoder().encode_primitive(&Value::from(time)).unwrap();
        assert_eq!(token.source(), "1970-01-01T07:45:00Z");

        let offset = DateTime::parse_from_rfc3339("2024-06-01T12:00:00+02:00").unwrap();
        let token = encoder().encode_primitive(&Value::from(offset)).unwrap();
        assert_eq!(token.source(), "2024-06-01T10:00:00Z");
    }

    #[test]
    fn test_temporal_year_range() {
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        let token = encoder().encode_primitive(&Value::from(first)).unwrap();
        assert_eq!(token.source(), "0000-01-01T00:00:00Z");

        let last = NaiveDate::from_ymd_opt(9999, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let token = encoder().encode_primitive(&Value::from(last)).unwrap();
        assert_eq!(token.source(), "9999-12-31T23:59:59Z");

        for year in [-5, -1, 10000, 12000] {
            let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            let err = encoder().encode_primitive(&Value::from(date)).unwrap_err();
            assert!(matches!(err, Error::InvalidTemporal(_)), "year {year}");
        }
    }

    #[test]
    fn test_containers_are_not_primitive() {
        let err = encoder()
            .encode_primitive(&Value::from(vec![1, 2]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::NotPrimitive {
                value: "[1, 2]".to_string(),
                type_name: "array",
            }
        );
    }

    #[test]
    fn test_encode_string_rejects_non_text() {
        let err = encoder().encode_string(&Value::from(3), true).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                value: "3".to_string(),
                type_name: "integer",
            }
        );
    }

    #[test]
    fn test_selector_order() {
        let e = encoder();
        assert_eq!(e.encode_str("", true).source(), "\"\"");
        assert_eq!(e.encode_str("abc-1", true).kind(), TokenKind::BareString);
        assert_eq!(e.encode_str("abc-1", false).source(), "\"abc-1\"");
        assert_eq!(e.encode_str("a b", true).source(), "\"a b\"");
        assert_eq!(e.encode_str("one\ntwo", false).source(), "\"one\\ntwo\"");
    }

    #[test]
    fn test_long_bare_text_stays_bare() {
        let key = "k".repeat(80);
        let token = encoder().encode_str(&key, true);
        assert_eq!(token, Token::new(TokenKind::BareString, key));
    }

    #[test]
    fn test_multiline_thresholds() {
        let e = encoder();
        assert_eq!(e.encode_str(&"x".repeat(50), false).kind(), TokenKind::String);
        assert_eq!(
            e.encode_str(&"x".repeat(51), false).kind(),
            TokenKind::MultilineString
        );
        assert_eq!(
            e.encode_str("a\nb\ncdefgh", false).kind(),
            TokenKind::MultilineString
        );
    }

    #[test]
    fn test_short_multiline_is_not_wrapped() {
        let token = encoder().encode_multiline("a\nb\nc");
        assert_eq!(token.source(), "\"\"\"\na\nb\nc\"\"\"");
    }

    #[test]
    fn test_long_multiline_is_wrapped() {
        let text = "word ".repeat(30);
        let token = encoder().encode_multiline(text.trim_end());
        let source = token.source();
        assert!(source.starts_with("\"\"\"\n"));
        assert!(source.ends_with("\\\n\"\"\""));
        for line in source.lines() {
            assert!(line.chars().count() <= 76, "line too long: {line:?}");
        }
    }

    #[test]
    fn test_chunked() {
        let token = encoder().encode_multiline_chunked("abcdefgh", 3);
        assert_eq!(token.source(), "\"\"\"\nabc\\\ndef\\\ngh\"\"\"");
        assert_eq!(
            encoder().encode_multiline_chunked("", 3).source(),
            "\"\"\"\n\"\"\""
        );
    }
}
