//! Shorthand accessors bound to the process environment.
//!
//! Each function is equivalent to calling the same method on
//! [`EnvReader::new()`](crate::EnvReader::new).

use crate::reader::EnvReader;

const PROCESS: EnvReader = EnvReader::new();

/// The raw value of `key`, or `default` when it is unset. Never panics.
pub fn get_string(key: &str, default: impl Into<String>) -> String {
    PROCESS.get_string(key, default)
}

/// # Panics
///
/// Panics if `key` is set to anything other than a recognized boolean token.
#[track_caller]
pub fn get_bool(key: &str, default: bool) -> bool {
    PROCESS.get_bool(key, default)
}

/// # Panics
///
/// Panics if `key` is set to anything other than a base-10 `isize`.
#[track_caller]
pub fn get_int(key: &str, default: isize) -> isize {
    PROCESS.get_int(key, default)
}

/// # Panics
///
/// Panics if `key` is set to anything other than a base-10 `i64`.
#[track_caller]
pub fn get_int64(key: &str, default: i64) -> i64 {
    PROCESS.get_int64(key, default)
}

/// # Panics
///
/// Panics if `key` is set to anything other than a float literal within `f32` range.
#[track_caller]
pub fn get_float32(key: &str, default: f32) -> f32 {
    PROCESS.get_float32(key, default)
}

/// # Panics
///
/// Panics if `key` is set to anything other than a float literal within `f64` range.
#[track_caller]
pub fn get_float64(key: &str, default: f64) -> f64 {
    PROCESS.get_float64(key, default)
}
