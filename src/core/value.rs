//! Coercion of value tree nodes into primitive types
//!
//! The tree itself is a [`serde_json::Value`]. This module names its
//! variants ([`ValueKind`]) and defines how a node is converted into a
//! requested primitive ([`FromValue`]). A conversion that is not possible
//! yields `None` and the caller falls back to its default.

use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;

/// The shape of a value tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Map,
}

impl ValueKind {
    /// Get the kind of a node
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Map,
        }
    }

    /// Check if nodes of this kind have children
    pub fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Map)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Sequence => write!(f, "sequence"),
            Self::Map => write!(f, "map"),
        }
    }
}

/// Conversion from a resolved node into a primitive type
pub trait FromValue: Sized {
    /// Convert `value`, or return `None` when it has no representation in `Self`
    fn from_value(value: &Value) -> Option<Self>;
}

/// Strings render raw, every other node renders as compact JSON text.
impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        Some(render_string(value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i)
                } else {
                    n.as_f64().and_then(truncate_f64)
                }
            }
            Value::String(s) => parse_int_literal(s).ok(),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|f| f != 0.0),
            Value::String(s) => match s.to_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Render a node in its canonical display form
pub fn render_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a signed integer literal with an optional base prefix
///
/// Accepts an optional `+`/`-` sign followed by anything
/// [`parse_uint_literal`] accepts. The value must fit in `i64`.
pub fn parse_int_literal(s: &str) -> Result<i64, ParseIntError> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ('-', &s[1..]),
        Some(b'+') => ('+', &s[1..]),
        _ => ('+', s),
    };

    let (radix, digits) = split_radix(rest);
    i64::from_str_radix(&format!("{sign}{digits}"), radix)
}

/// Parse an unsigned integer literal with an optional base prefix
///
/// `0x`/`0X` selects hexadecimal, `0o`/`0O` and a bare leading `0` select
/// octal, `0b`/`0B` selects binary, anything else is decimal.
pub fn parse_uint_literal(s: &str) -> Result<u64, ParseIntError> {
    let (radix, digits) = split_radix(s);
    u64::from_str_radix(&format!("+{digits}"), radix)
}

/// Split a base prefix off `s`
///
/// The caller prepends exactly one sign before handing the digits to
/// `from_str_radix`, so a sign left inside the digits is rejected.
fn split_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => (16, &s[2..]),
            b'o' | b'O' => (8, &s[2..]),
            b'b' | b'B' => (2, &s[2..]),
            _ => (8, &s[1..]),
        }
    } else {
        (10, s)
    }
}

fn truncate_f64(f: f64) -> Option<i64> {
    const BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63

    let truncated = f.trunc();
    if truncated.is_finite() && truncated >= -BOUND && truncated < BOUND {
        Some(truncated as i64)
    } else {
        None
    }
}
