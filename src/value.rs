//! Dynamic value representation for TOML data.
//!
//! This module provides the [`Value`] enum which holds any value a TOML
//! document can contain, and [`Temporal`] for its date/time flavours.
//!
//! Only the scalar variants (boolean, integer, float, temporal, text) have a
//! single-token literal form. Arrays and tables are carried so the document
//! layer can keep whole trees in one type; the encoder rejects them.
//!
//! ## Creating Values
//!
//! ```rust
//! use toml_literal::{Temporal, Value};
//! use chrono::NaiveDate;
//!
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let date = Value::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//!
//! assert!(boolean.is_primitive());
//! assert_eq!(number.type_name(), "integer");
//! assert_eq!(text.as_str(), Some("hello"));
//! assert!(matches!(date, Value::Temporal(Temporal::Date(_))));
//! ```

use crate::TomlMap;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;

/// A dynamically-typed TOML value.
///
/// Variants never coerce into one another: a `Boolean` is not an `Integer`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Temporal(Temporal),
    Text(String),
    Array(Vec<Value>),
    Table(TomlMap),
}

/// A date, time, or date-time value.
///
/// Values without an offset are read as UTC. A bare time is anchored to
/// 1970-01-01.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temporal {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
}

impl Temporal {
    /// Normalizes the value to a UTC instant.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Temporal::Date(date) => date.and_time(NaiveTime::default()).and_utc(),
            Temporal::Time(time) => NaiveDate::default().and_time(*time).and_utc(),
            Temporal::DateTime(datetime) => datetime.and_utc(),
            Temporal::OffsetDateTime(datetime) => datetime.with_timezone(&Utc),
        }
    }

    /// Milliseconds since the Unix epoch, negative before 1970.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_literal::Temporal;
    /// use chrono::NaiveTime;
    ///
    /// let noon = Temporal::Time(NaiveTime::from_hms_milli_opt(12, 0, 0, 250).unwrap());
    /// assert_eq!(noon.epoch_millis(), 12 * 3_600_000 + 250);
    /// ```
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.to_utc().timestamp_millis()
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Date(date) => write!(f, "{}", date),
            Temporal::Time(time) => write!(f, "{}", time),
            Temporal::DateTime(datetime) => {
                write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.f"))
            }
            Temporal::OffsetDateTime(datetime) => write!(f, "{}", datetime.to_rfc3339()),
        }
    }
}

impl Value {
    /// The lowercase name of the active variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Temporal(_) => "datetime",
            Value::Text(_) => "string",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    /// Returns `true` for the variants that encode to a single literal token.
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Table(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is text, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Diagnostic rendering in inline TOML style.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::Temporal(t) => write!(f, "{}", t),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Table(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {} = {}", key, value)?;
                }
                if !map.is_empty() {
                    f.write_str(" ")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Temporal> for Value {
    fn from(value: Temporal) -> Self {
        Value::Temporal(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Temporal(Temporal::Date(value))
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::Temporal(Temporal::Time(value))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Temporal(Temporal::DateTime(value))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Temporal(Temporal::OffsetDateTime(value))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Temporal(Temporal::OffsetDateTime(value.fixed_offset()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<TomlMap> for Value {
    fn from(value: TomlMap) -> Self {
        Value::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_is_not_integer() {
        assert_eq!(Value::from(true).as_i64(), None);
        assert_eq!(Value::from(1).as_bool(), None);
        assert_ne!(Value::from(true), Value::from(1));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(1.5).type_name(), "float");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(vec![1, 2]).type_name(), "array");
        assert_eq!(Value::Table(TomlMap::new()).type_name(), "table");
    }

    #[test]
    fn test_display_containers() {
        let mut map = TomlMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(vec!["x", "y"]));
        assert_eq!(Value::Table(map).to_string(), r#"{ a = 1, b = ["x", "y"] }"#);
        assert_eq!(Value::Table(TomlMap::new()).to_string(), "{}");
    }

    #[test]
    fn test_display_temporal() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-01-15");

        let datetime = date.and_hms_milli_opt(10, 30, 5, 250).unwrap();
        assert_eq!(Value::from(datetime).to_string(), "2024-01-15T10:30:05.250");
    }

    #[test]
    fn test_temporal_normalization() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        assert_eq!(Temporal::Date(date).epoch_millis(), 86_400_000);

        let offset = DateTime::parse_from_rfc3339("1970-01-01T01:00:00+01:00").unwrap();
        assert_eq!(Temporal::OffsetDateTime(offset).epoch_millis(), 0);

        let before = NaiveDate::from_ymd_opt(1969, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 500)
            .unwrap();
        assert_eq!(Temporal::DateTime(before).epoch_millis(), -500);
    }
}
