//! Lexical tokens produced by the encoder.
//!
//! A [`Token`] is an immutable `(kind, literal text)` pair where the text is
//! exactly what appears in the serialized document. Tokens have value
//! semantics: two tokens with equal kind and text are interchangeable.
//!
//! The structural tokens (`[`, `]`, `[[`, `]]`, `,` and newline) are `static`
//! items shared by every caller; [`structural_token`] looks them up by kind.
//!
//! ```rust
//! use toml_literal::{structural_token, TokenKind};
//!
//! let comma = structural_token(TokenKind::Comma).unwrap();
//! assert_eq!(comma.source(), ",");
//!
//! assert!(structural_token(TokenKind::Integer).is_err());
//! ```

use crate::{Error, Result};
use std::borrow::Cow;
use std::fmt;

/// The lexical category of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Boolean,
    Integer,
    Float,
    Date,
    /// Single-line basic string, `"..."`.
    String,
    /// Unquoted key-like string.
    BareString,
    /// Multi-line basic string, `"""..."""`.
    MultilineString,
    Whitespace,
    SquareLeftBracket,
    SquareRightBracket,
    DoubleSquareLeftBracket,
    DoubleSquareRightBracket,
    Comma,
    Newline,
}

impl TokenKind {
    /// Returns `true` for kinds that have a fixed text in the structural table.
    #[inline]
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::SquareLeftBracket
                | TokenKind::SquareRightBracket
                | TokenKind::DoubleSquareLeftBracket
                | TokenKind::DoubleSquareRightBracket
                | TokenKind::Comma
                | TokenKind::Newline
        )
    }
}

/// One lexical unit of serialized TOML.
///
/// # Examples
///
/// ```rust
/// use toml_literal::{encode_str, Token, TokenKind};
///
/// let token = encode_str("abc-1", true);
/// assert_eq!(token, Token::new(TokenKind::BareString, "abc-1"));
/// assert_eq!(token.to_string(), "abc-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    source: Cow<'static, str>,
}

impl Token {
    /// Creates a token owning its literal text.
    pub fn new(kind: TokenKind, source: impl Into<String>) -> Self {
        Token {
            kind,
            source: Cow::Owned(source.into()),
        }
    }

    const fn from_static(kind: TokenKind, source: &'static str) -> Self {
        Token {
            kind,
            source: Cow::Borrowed(source),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact text this token contributes to the document.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn into_source(self) -> String {
        self.source.into_owned()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

static SQUARE_LEFT_BRACKET: Token = Token::from_static(TokenKind::SquareLeftBracket, "[");
static SQUARE_RIGHT_BRACKET: Token = Token::from_static(TokenKind::SquareRightBracket, "]");
static DOUBLE_SQUARE_LEFT_BRACKET: Token =
    Token::from_static(TokenKind::DoubleSquareLeftBracket, "[[");
static DOUBLE_SQUARE_RIGHT_BRACKET: Token =
    Token::from_static(TokenKind::DoubleSquareRightBracket, "]]");
static COMMA: Token = Token::from_static(TokenKind::Comma, ",");
static NEWLINE: Token = Token::from_static(TokenKind::Newline, "\n");

static NEWLINE_ELEMENT: NewlineElement = NewlineElement {
    tokens: std::slice::from_ref(&NEWLINE),
};

/// Returns the shared token for a structural kind.
///
/// # Errors
///
/// Returns [`Error::UnknownTag`] if `kind` is not one of the structural kinds.
pub fn structural_token(kind: TokenKind) -> Result<&'static Token> {
    match kind {
        TokenKind::SquareLeftBracket => Ok(&SQUARE_LEFT_BRACKET),
        TokenKind::SquareRightBracket => Ok(&SQUARE_RIGHT_BRACKET),
        TokenKind::DoubleSquareLeftBracket => Ok(&DOUBLE_SQUARE_LEFT_BRACKET),
        TokenKind::DoubleSquareRightBracket => Ok(&DOUBLE_SQUARE_RIGHT_BRACKET),
        TokenKind::Comma => Ok(&COMMA),
        TokenKind::Newline => Ok(&NEWLINE),
        other => Err(Error::UnknownTag(other)),
    }
}

/// Wraps `source` verbatim as a whitespace token. The text is not validated.
#[must_use]
pub fn whitespace_token(source: &str) -> Token {
    Token::new(TokenKind::Whitespace, source)
}

/// A document element consisting of a single bare newline.
///
/// The element layer uses one shared instance, returned by [`newline_element`].
#[derive(Debug, PartialEq, Eq)]
pub struct NewlineElement {
    tokens: &'static [Token],
}

impl NewlineElement {
    #[must_use]
    pub fn tokens(&self) -> &'static [Token] {
        self.tokens
    }
}

impl fmt::Display for NewlineElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens
            .iter()
            .try_for_each(|token| fmt::Display::fmt(token, f))
    }
}

/// Returns the process-wide newline element.
#[must_use]
pub fn newline_element() -> &'static NewlineElement {
    &NEWLINE_ELEMENT
}
