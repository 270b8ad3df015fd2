// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use serde::Serialize;

/// A parsed (or default) value stored in [Matches](crate::Matches).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value (the default for string options).
    Null,
    /// Flags, boolean options and the `true`/`false` literals.
    Bool(bool),
    /// Numeric options and numeric literals.
    Number(f64),
    /// Anything that is not converted.
    String(String),
    /// Array options and command trailing arguments.
    Array(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Returns the boolean, if this is a [Value::Bool].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is a [Value::Number].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is a [Value::String].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [Value::Array].
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns `true` for [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if n.is_infinite() => {
                let sign = if *n < 0.0 { "-" } else { "" };
                write!(f, "{}Infinity", sign)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(v) => {
                let items: Vec<String> = v.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", items.join(","))
            }
        }
    }
}

/// Parse a numeric literal.
///
/// Accepts decimal and exponent forms, `Infinity` and the `0x`, `0o` and
/// `0b` radix prefixes. Surrounding whitespace is ignored; an empty string
/// is not a number.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();

    match s {
        "" => return None,
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => (),
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => 10,
    };

    if radix != 10 {
        let digits = &s[2..];

        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }

        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    // Rejects "inf", "nan" and friends which the float parser would accept.
    let numeric = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));

    if !numeric {
        return None;
    }

    s.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Convert a raw command-line string into the value it looks like.
///
/// `"true"` and `"false"` become booleans, `"null"` and `"undefined"`
/// become [Value::Null], numeric literals become numbers and everything
/// else is left as a string.
pub fn cast(raw: &str) -> Value {
    match raw {
        "undefined" | "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => match parse_number(raw) {
            Some(n) => Value::Number(n),
            None => Value::String(raw.into()),
        },
    }
}
