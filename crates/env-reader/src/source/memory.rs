#![cfg(any(test, feature = "test-support"))]

use std::collections::HashMap;
use std::env::VarError;
use std::sync::{PoisonError, RwLock};

use super::ReadEnv;

/// Environment table held in memory, for tests that must not touch the
/// process environment.
///
/// All methods take `&self`. Backed by an `RwLock`, so one instance can be
/// shared across threads.
///
/// ```ignore
/// let env = InMemoryEnv::new();
/// env.set("APP_PORT", "8080");
/// assert_eq!(env.var("APP_PORT").as_deref(), Ok("8080"));
///
/// let env: InMemoryEnv = [("APP_DEBUG", "1")].into_iter().collect();
/// assert!(env.var("APP_PORT").is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or(VarError::NotPresent)
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: RwLock::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}
