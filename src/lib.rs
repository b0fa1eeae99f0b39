//! # toml_literal
//!
//! Encodes scalar values into the exact literal tokens of a TOML document.
//!
//! This is the encoding half of a round-trip-preserving document library. For
//! each value it chooses among the legal textual forms (bare key, quoted
//! string, multi-line block) and produces text that decodes back to the same
//! value.
//!
//! ## Key Features
//!
//! - **Exhaustive dispatch**: [`Value`] is a closed enum, so a boolean can never
//!   be mistaken for an integer
//! - **Compact strings**: key-like text stays bare where the caller allows it
//! - **Readable blocks**: long or multi-line text becomes a `"""` block wrapped
//!   at word boundaries and existing newlines
//! - **Lossless**: every string token decodes to the original text
//! - **Serde Compatible**: any `T: Serialize` scalar converts through [`to_token`]
//!
//! ## Quick Start
//!
//! ```rust
//! use toml_literal::{encode_primitive, encode_str, TokenKind, Value};
//!
//! let token = encode_primitive(&Value::from(true)).unwrap();
//! assert_eq!(token.source(), "true");
//!
//! let key = encode_str("server-1", true);
//! assert_eq!(key.kind(), TokenKind::BareString);
//! assert_eq!(key.source(), "server-1");
//!
//! let quoted = encode_str("say \"hi\"", false);
//! assert_eq!(quoted.source(), r#""say \"hi\"""#);
//! ```
//!
//! ### Multi-line text
//!
//! ```rust
//! use toml_literal::{encode_str, TokenKind};
//!
//! let token = encode_str("first\nsecond\nthird", false);
//! assert_eq!(token.kind(), TokenKind::MultilineString);
//! assert_eq!(token.source(), "\"\"\"\nfirst\nsecond\nthird\"\"\"");
//! ```
//!
//! ### Structural tokens
//!
//! ```rust
//! use toml_literal::{newline_element, structural_token, whitespace_token, TokenKind};
//!
//! let open = structural_token(TokenKind::DoubleSquareLeftBracket).unwrap();
//! assert_eq!(open.source(), "[[");
//! assert_eq!(whitespace_token("  ").kind(), TokenKind::Whitespace);
//! assert_eq!(newline_element().to_string(), "\n");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every operation is pure; structural tokens are immutable `static` items
//! - Proper error propagation with `Result` types

pub mod encoder;
pub mod error;
pub mod escape;
pub mod format;
pub mod map;
pub mod options;
pub mod ser;
pub mod token;
pub mod value;
pub mod wrap;

pub use encoder::Encoder;
pub use error::{Error, Result};
pub use map::TomlMap;
pub use options::{EncoderOptions, WrapStrategy};
pub use ser::{to_value, ValueSerializer};
pub use token::{
    newline_element, structural_token, whitespace_token, NewlineElement, Token, TokenKind,
};
pub use value::{Temporal, Value};

use serde::Serialize;

/// Encodes a scalar value into its literal token with default options.
///
/// # Examples
///
/// ```rust
/// use toml_literal::{encode_primitive, TokenKind, Value};
///
/// let token = encode_primitive(&Value::from(1.0)).unwrap();
/// assert_eq!(token.kind(), TokenKind::Float);
/// assert_eq!(token.source(), "1.0");
/// ```
///
/// # Errors
///
/// Returns [`Error::NotPrimitive`] for arrays and tables.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_primitive(value: &Value) -> Result<Token> {
    Encoder::default().encode_primitive(value)
}

/// Encodes a text value with default options.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_string(value: &Value, bare_allowed: bool) -> Result<Token> {
    Encoder::default().encode_string(value, bare_allowed)
}

/// Encodes text with default options. See [`Encoder::encode_str`].
#[must_use]
pub fn encode_str(text: &str, bare_allowed: bool) -> Token {
    Encoder::default().encode_str(text, bare_allowed)
}

/// Encodes text as a wrapped multi-line string with default options.
#[must_use]
pub fn encode_multiline(text: &str) -> Token {
    Encoder::default().encode_multiline(text)
}

/// Encodes text as a multi-line string cut into slices of `max_line_length`.
///
/// [`EncoderOptions::chunk_width`] holds the conventional width of 120.
///
/// # Examples
///
/// ```rust
/// use toml_literal::{encode_multiline_chunked, EncoderOptions};
///
/// let width = EncoderOptions::default().chunk_width;
/// let token = encode_multiline_chunked(&"x".repeat(200), width);
/// assert_eq!(token.source().matches("\\\n").count(), 1);
/// ```
#[must_use]
pub fn encode_multiline_chunked(text: &str, max_line_length: usize) -> Token {
    Encoder::default().encode_multiline_chunked(text, max_line_length)
}

/// Serializes any `T: Serialize` scalar straight into a literal token.
///
/// # Examples
///
/// ```rust
/// use toml_literal::to_token;
///
/// assert_eq!(to_token(&42u8).unwrap().source(), "42");
/// assert_eq!(to_token("plain").unwrap().source(), "\"plain\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::NotPrimitive`] if `value` serializes to an array or table,
/// or any error from [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_token<T>(value: &T) -> Result<Token>
where
    T: ?Sized + Serialize,
{
    encode_primitive(&to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_use_default_options() {
        let text = "y".repeat(60);
        assert_eq!(encode_str(&text, false), Encoder::default().encode_str(&text, false));
        assert_eq!(encode_multiline(&text).kind(), TokenKind::MultilineString);
    }

    #[test]
    fn test_to_token_rejects_containers() {
        let err = to_token(&vec!["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            Error::NotPrimitive {
                value: r#"["a", "b"]"#.to_string(),
                type_name: "array",
            }
        );
    }

    #[test]
    fn test_encode_string_with_text_value() {
        let token = encode_string(&Value::from("abc_1"), true).unwrap();
        assert_eq!(token, Token::new(TokenKind::BareString, "abc_1"));
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Token>();
        assert_send_sync::<Value>();
        assert_send_sync::<Encoder>();
        assert_send_sync::<NewlineElement>();
    }
}
