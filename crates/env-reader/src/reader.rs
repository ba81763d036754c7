//! Typed accessors over an environment provider.
//!
//! Responsibilities:
//! - Look up a key, fall back to the caller's default when it is absent, and
//!   convert present text with the rules in `value`.
//! - Offer panicking accessors and `try_` twins that share one code path.
//!
//! Invariants:
//! - An absent key always yields the default and never fails.
//! - A present key is always converted, even when its value is empty.
//! - A value that is not valid Unicode is treated as present and converted
//!   lossily before parsing.

use std::env::VarError;

use crate::error::EnvError;
use crate::source::{ReadEnv, SystemEnv};
use crate::value::EnvValue;

/// Reads typed values from an environment provider.
///
/// `EnvReader::new()` reads the process environment. Tests substitute a fake
/// table with [`EnvReader::with_env`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvReader<E = SystemEnv> {
    env: E,
}

impl EnvReader<SystemEnv> {
    /// Create a reader over the process environment.
    pub const fn new() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: ReadEnv> EnvReader<E> {
    /// Create a reader over the given provider.
    pub const fn with_env(env: E) -> Self {
        Self { env }
    }

    /// The underlying provider.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Look up and convert `key`, reporting absence as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is present but cannot be converted.
    pub fn lookup<T: EnvValue>(&self, key: &str) -> Result<Option<T>, EnvError> {
        let raw = match self.env.var(key) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return Ok(None),
            Err(VarError::NotUnicode(os)) => os.to_string_lossy().into_owned(),
        };
        T::parse_env(&raw)
            .map(Some)
            .map_err(|failure| EnvError::from_failure(key, T::KIND, failure))
    }

    /// Convert `key`, or return `default` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is present but cannot be converted.
    pub fn try_get_or<T: EnvValue>(&self, key: &str, default: T) -> Result<T, EnvError> {
        match self.lookup(key)? {
            Some(value) => Ok(value),
            None => {
                tracing::trace!(key = %key, "environment variable not set, using default");
                Ok(default)
            }
        }
    }

    /// Convert `key`, or return `default` when it is absent.
    ///
    /// # Panics
    ///
    /// Panics if the variable is present but cannot be converted.
    #[track_caller]
    pub fn get_or<T: EnvValue>(&self, key: &str, default: T) -> T {
        match self.try_get_or(key, default) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(
                    key = %err.key(),
                    expected = %err.expected(),
                    "environment variable cannot be converted"
                );
                panic!("{err}");
            }
        }
    }

    /// The raw value of `key`, or `default` when it is absent. Never panics.
    pub fn get_string(&self, key: &str, default: impl Into<String>) -> String {
        match self.lookup::<String>(key) {
            Ok(Some(value)) => value,
            _ => default.into(),
        }
    }

    /// # Panics
    ///
    /// Panics unless the value is one of `1 t T TRUE true True 0 f F FALSE false False`.
    #[track_caller]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    /// # Panics
    ///
    /// Panics if the value is not a base-10 integer that fits in `isize`.
    #[track_caller]
    pub fn get_int(&self, key: &str, default: isize) -> isize {
        self.get_or(key, default)
    }

    /// # Panics
    ///
    /// Panics if the value is not a base-10 integer that fits in `i64`.
    #[track_caller]
    pub fn get_int64(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    /// # Panics
    ///
    /// Panics if the value is not a float literal within `f32` range.
    #[track_caller]
    pub fn get_float32(&self, key: &str, default: f32) -> f32 {
        self.get_or(key, default)
    }

    /// # Panics
    ///
    /// Panics if the value is not a float literal within `f64` range.
    #[track_caller]
    pub fn get_float64(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    pub fn try_get_bool(&self, key: &str, default: bool) -> Result<bool, EnvError> {
        self.try_get_or(key, default)
    }

    pub fn try_get_int(&self, key: &str, default: isize) -> Result<isize, EnvError> {
        self.try_get_or(key, default)
    }

    pub fn try_get_int64(&self, key: &str, default: i64) -> Result<i64, EnvError> {
        self.try_get_or(key, default)
    }

    pub fn try_get_float32(&self, key: &str, default: f32) -> Result<f32, EnvError> {
        self.try_get_or(key, default)
    }

    pub fn try_get_float64(&self, key: &str, default: f64) -> Result<f64, EnvError> {
        self.try_get_or(key, default)
    }
}
