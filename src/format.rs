//! TOML Literal Forms
//!
//! This module documents the literal forms produced by this library and the
//! rules used to choose between them.
//!
//! # Scalars
//!
//! | Value | Literal | Example |
//! |-------|---------|---------|
//! | Boolean | `true` / `false` | `enabled = true` |
//! | Integer | Decimal, optional `-` | `port = 8080` |
//! | Float | Decimal with `.` or exponent, `nan`, `inf`, `-inf` | `ratio = 1.0` |
//! | Date/time | RFC 3339, seconds precision, `Z` offset | `at = 2024-01-15T10:30:00Z` |
//!
//! Date/time values are normalized to UTC: values without an offset are read
//! as UTC, a bare date means midnight, and a bare time is placed on
//! 1970-01-01. Sub-second precision is floored away.
//!
//! # Strings
//!
//! Text takes the first matching form:
//!
//! 1. Empty text: `""`
//! 2. Bare, when the position allows it and every char is in `[A-Za-z0-9_-]`:
//!    `server-1`
//! 3. Multi-line block, when the text has two or more newlines or is longer
//!    than 50 chars
//! 4. Quoted single-line string: `"a b"`
//!
//! ## Quoted strings
//!
//! Only printable ASCII appears between the quotes. Everything else is escaped:
//!
//! ```text
//! \"  - quote
//! \\  - backslash
//! \n  - newline
//! \t \r \b \f - other short escapes
//! \uXXXX      - other control characters and non-ASCII in the BMP
//! \UXXXXXXXX  - characters outside the BMP
//! ```
//!
//! ## Multi-line blocks
//!
//! The body starts on the line after the opening `"""` (TOML drops that first
//! newline). Newlines and non-ASCII text stay verbatim; backslashes, tabs and
//! other control characters are escaped, and `"""` becomes `\"\"\"`.
//!
//! Bodies of up to 50 chars are written as is:
//!
//! ```text
//! """
//! first
//! second"""
//! ```
//!
//! Longer bodies are wrapped at 75 columns and end with a continuation:
//!
//! ```text
//! """
//! Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
//! tempor incididunt ut labore et dolore magna aliqua.\
//! """
//! ```
//!
//! A trailing `\` removes the newline and any leading whitespace of the next
//! line, so wrapping never lets a continuation line begin with whitespace.
//!
//! # Structural tokens
//!
//! | Kind | Text |
//! |------|------|
//! | `SquareLeftBracket` | `[` |
//! | `SquareRightBracket` | `]` |
//! | `DoubleSquareLeftBracket` | `[[` |
//! | `DoubleSquareRightBracket` | `]]` |
//! | `Comma` | `,` |
//! | `Newline` | `\n` |

// This module contains only documentation; no implementation code
