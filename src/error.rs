//! Error types for TOML literal encoding.
//!
//! Every failure in this crate means the caller passed a value with no
//! literal form in the requested position. Nothing is recovered internally;
//! errors carry enough context (the rendered value and its type name) to
//! diagnose the call site.
//!
//! ## Error Categories
//!
//! - **Not primitive**: a container value reached the primitive dispatcher
//! - **Invalid argument**: a string-only operation received a non-text value
//! - **Unknown tag**: a structural token was requested for a non-structural kind
//! - **Serde bridge**: a `Serialize` type produced something TOML cannot hold
//!
//! ## Examples
//!
//! ```rust
//! use toml_literal::{encode_primitive, Error, Value};
//!
//! let result = encode_primitive(&Value::Array(vec![Value::from(1)]));
//!
//! if let Err(Error::NotPrimitive { type_name, .. }) = result {
//!     assert_eq!(type_name, "array");
//! }
//! ```

use crate::TokenKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding TOML literals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value that has no single-token literal form was passed to the
    /// primitive dispatcher.
    #[error("{value} of type {type_name} is not a primitive value")]
    NotPrimitive {
        value: String,
        type_name: &'static str,
    },

    /// A string-only operation received a non-text value.
    #[error("Given value must be a string, found {value} of type {type_name}")]
    InvalidArgument {
        value: String,
        type_name: &'static str,
    },

    /// The kind has no entry in the structural token table.
    #[error("No structural token for kind {0:?}")]
    UnknownTag(TokenKind),

    /// A date/time value has no RFC 3339 rendering, e.g. a year outside
    /// 0000 to 9999.
    #[error("Invalid temporal value: {0}")]
    InvalidTemporal(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a [`Error::NotPrimitive`] from the rejected value's rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_literal::Error;
    ///
    /// let err = Error::not_primitive("[1, 2]", "array");
    /// assert_eq!(err.to_string(), "[1, 2] of type array is not a primitive value");
    /// ```
    pub fn not_primitive(value: impl fmt::Display, type_name: &'static str) -> Self {
        Error::NotPrimitive {
            value: value.to_string(),
            type_name,
        }
    }

    /// Creates an [`Error::InvalidArgument`] for a non-text input.
    pub fn invalid_argument(value: impl fmt::Display, type_name: &'static str) -> Self {
        Error::InvalidArgument {
            value: value.to_string(),
            type_name,
        }
    }

    /// Creates an [`Error::InvalidTemporal`] error.
    pub fn invalid_temporal(msg: &str) -> Self {
        Error::InvalidTemporal(msg.to_string())
    }

    /// Creates an unsupported type error for types that have no TOML scalar form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_literal::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
