//! Conversion rules from environment text to typed values.
//!
//! Responsibilities:
//! - Define the [`EnvValue`] trait implemented by every supported target type.
//! - Classify conversion failures as syntax or range problems.
//!
//! Does NOT handle:
//! - Looking up variables (see `source`).
//! - Default fallback or panicking (see `reader`).
//!
//! Invariants:
//! - Text is parsed exactly as given; surrounding whitespace is never trimmed.
//! - Integers are base-10 with an optional leading `+` or `-`.
//! - Floats are rounded once, directly to the target width. A finite literal
//!   that rounds to infinity is a range failure.

use std::fmt;
use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::constants::{FALSE_TOKENS, INFINITY_TOKENS, TRUE_TOKENS};

/// The target type of a conversion, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Bool,
    Int,
    Int64,
    Float32,
    Float64,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Int64 => "int64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// Why a piece of text could not be converted.
///
/// Reasons never embed the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The text is not a valid literal of the target type.
    Syntax(String),
    /// The text is a valid literal but does not fit the target type.
    Range,
}

/// A type that can be read from an environment variable.
pub trait EnvValue: Sized {
    const KIND: ValueKind;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure>;
}

impl EnvValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure> {
        Ok(raw.to_string())
    }
}

impl EnvValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure> {
        if TRUE_TOKENS.iter().any(|token| *token == raw) {
            Ok(true)
        } else if FALSE_TOKENS.iter().any(|token| *token == raw) {
            Ok(false)
        } else {
            Err(ParseFailure::Syntax(format!(
                "expected one of {} or {}",
                TRUE_TOKENS.join(", "),
                FALSE_TOKENS.join(", ")
            )))
        }
    }
}

impl EnvValue for isize {
    const KIND: ValueKind = ValueKind::Int;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure> {
        parse_integer(raw)
    }
}

impl EnvValue for i64 {
    const KIND: ValueKind = ValueKind::Int64;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure> {
        parse_integer(raw)
    }
}

impl EnvValue for f32 {
    const KIND: ValueKind = ValueKind::Float32;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure> {
        parse_float(raw)
    }
}

impl EnvValue for f64 {
    const KIND: ValueKind = ValueKind::Float64;

    fn parse_env(raw: &str) -> Result<Self, ParseFailure> {
        parse_float(raw)
    }
}

fn parse_integer<T>(raw: &str) -> Result<T, ParseFailure>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::Range,
        _ => ParseFailure::Syntax(err.to_string()),
    })
}

fn parse_float<T>(raw: &str) -> Result<T, ParseFailure>
where
    T: FromStr<Err = ParseFloatError> + Into<f64> + Copy,
{
    let value = raw
        .parse::<T>()
        .map_err(|err| ParseFailure::Syntax(err.to_string()))?;
    if Into::<f64>::into(value).is_infinite() && !is_infinity_literal(raw) {
        return Err(ParseFailure::Range);
    }
    Ok(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    INFINITY_TOKENS
        .iter()
        .any(|token| unsigned.eq_ignore_ascii_case(token))
}
