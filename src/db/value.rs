//! Values exchanged with the database.
//!
//! `SqlValue` is the single currency for both directions: arguments bound into
//! catalog statements and cells read back from result sets. Every variant has
//! a literal form for the audit log and a rendering for output.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::escape::quote_literal;

/// A single SQL value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Render this value the way it would appear embedded in statement text.
    ///
    /// Used only for the audit log; execution always binds values separately.
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(true) => "TRUE".to_string(),
            SqlValue::Bool(false) => "FALSE".to_string(),
            SqlValue::Int(i) => i.to_string(),
            SqlValue::Float(f) if f.is_finite() => f.to_string(),
            // NaN and infinities only exist as quoted text in PostgreSQL
            SqlValue::Float(f) => quote_literal(&f.to_string()),
            SqlValue::Text(s) => quote_literal(s),
            SqlValue::Date(d) => quote_literal(&d.format("%Y-%m-%d").to_string()),
            SqlValue::Timestamp(ts) => quote_literal(&ts.format("%Y-%m-%d %H:%M:%S").to_string()),
            SqlValue::Bytes(b) => format!("'\\x{}'", hex::encode(b)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Human-facing rendering used by table output.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Bool(b) => write!(f, "{}", b),
            SqlValue::Int(i) => write!(f, "{}", i),
            SqlValue::Float(v) => write!(f, "{}", v),
            SqlValue::Text(s) => write!(f, "{}", s),
            SqlValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            SqlValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            SqlValue::Bytes(b) => write!(f, "\\x{}", hex::encode(b)),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

/// Trait for database values that can be extracted to Rust types.
///
/// Lets result consumers pull typed data out of a cell without matching on
/// every variant.
pub trait DatabaseValue: Clone + fmt::Debug {
    /// Extract as String if the value is string-like.
    fn as_string(&self) -> Option<String>;

    /// Extract as i64 if the value is numeric (floats are truncated).
    fn as_i64(&self) -> Option<i64>;

    /// Extract as f64 if the value is numeric.
    fn as_f64(&self) -> Option<f64>;

    /// Extract as bool if the value is boolean.
    fn as_bool(&self) -> Option<bool>;

    fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }
}

impl DatabaseValue for SqlValue {
    fn as_string(&self) -> Option<String> {
        match self {
            SqlValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int(i) => Some(*i),
            SqlValue::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Int(i) => Some(*i as f64),
            SqlValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
