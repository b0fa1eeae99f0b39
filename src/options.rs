//! Configuration options for literal encoding.
//!
//! This module provides types to tune how text is laid out:
//!
//! - [`EncoderOptions`]: thresholds for switching to multi-line strings and
//!   the column budgets used when wrapping them
//! - [`WrapStrategy`]: how the line wrapper resumes after a cut
//!
//! The thresholds are stylistic, not format requirements; any value produces
//! valid TOML.
//!
//! ## Examples
//!
//! ```rust
//! use toml_literal::{Encoder, EncoderOptions, TokenKind};
//!
//! // Switch to multi-line strings earlier
//! let options = EncoderOptions::new().with_multiline_threshold(10);
//! let encoder = Encoder::new(options);
//!
//! let token = encoder.encode_str("eleven char", false);
//! assert_eq!(token.kind(), TokenKind::MultilineString);
//! ```

/// How the line wrapper continues after cutting a fragment.
///
/// # Examples
///
/// ```rust
/// use toml_literal::wrap::wrap_with;
/// use toml_literal::WrapStrategy;
///
/// let exact = wrap_with("aaa bbb", 4, WrapStrategy::Exact);
/// assert_eq!(exact, vec!["aaa \\\n", "bbb"]);
///
/// // The historical behaviour drops the character after the cut
/// let compatible = wrap_with("aaa bbb", 4, WrapStrategy::Compatible);
/// assert_eq!(compatible, vec!["aaa \\\n", "bb"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WrapStrategy {
    /// Resume immediately after the cut. Lossless.
    #[default]
    Exact,
    /// Skip one extra character after every cut, matching older output.
    Compatible,
}

/// Configuration options for the [`Encoder`](crate::Encoder).
///
/// # Examples
///
/// ```rust
/// use toml_literal::{EncoderOptions, WrapStrategy};
///
/// let options = EncoderOptions::new();
/// assert_eq!(options.multiline_threshold, 50);
/// assert_eq!(options.wrap_width, 75);
/// assert_eq!(options.chunk_width, 120);
///
/// let options = EncoderOptions::new()
///     .with_wrap_width(100)
///     .with_wrap_strategy(WrapStrategy::Compatible);
/// assert_eq!(options.wrap_width, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Text with at least this many newlines becomes a multi-line string.
    pub multiline_min_newlines: usize,
    /// Text longer than this many chars becomes a multi-line string.
    pub multiline_threshold: usize,
    /// Escaped multi-line bodies up to this many chars are not wrapped.
    pub multiline_inline_max: usize,
    /// Column budget for word/newline-aware wrapping.
    pub wrap_width: usize,
    /// Slice width for [`Encoder::encode_multiline_chunked`](crate::Encoder::encode_multiline_chunked)
    /// callers that do not pass an explicit width.
    pub chunk_width: usize,
    pub wrap_strategy: WrapStrategy,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            multiline_min_newlines: 2,
            multiline_threshold: 50,
            multiline_inline_max: 50,
            wrap_width: 75,
            chunk_width: 120,
            wrap_strategy: WrapStrategy::default(),
        }
    }
}

impl EncoderOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the newline count that forces the multi-line form.
    #[must_use]
    pub fn with_multiline_min_newlines(mut self, count: usize) -> Self {
        self.multiline_min_newlines = count;
        self
    }

    /// Sets the length above which text uses the multi-line form.
    #[must_use]
    pub fn with_multiline_threshold(mut self, length: usize) -> Self {
        self.multiline_threshold = length;
        self
    }

    /// Sets the escaped body length up to which multi-line strings stay unwrapped.
    #[must_use]
    pub fn with_multiline_inline_max(mut self, length: usize) -> Self {
        self.multiline_inline_max = length;
        self
    }

    /// Sets the column budget for wrapping long multi-line strings.
    ///
    /// Widths below 1 are clamped to 1.
    #[must_use]
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Sets the default slice width for chunked multi-line strings.
    ///
    /// Widths below 1 are clamped to 1.
    #[must_use]
    pub fn with_chunk_width(mut self, width: usize) -> Self {
        self.chunk_width = width.max(1);
        self
    }

    #[must_use]
    pub fn with_wrap_strategy(mut self, strategy: WrapStrategy) -> Self {
        self.wrap_strategy = strategy;
        self
    }
}
