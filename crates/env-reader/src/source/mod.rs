//! Lookup-by-key abstraction over the process environment.
//!
//! # Examples
//!
//! ```
//! use env_reader::source::{ReadEnv, SystemEnv};
//!
//! fn region<E: ReadEnv>(env: &E) -> String {
//!     env.var("APP_REGION").unwrap_or_else(|_| "local".to_string())
//! }
//!
//! let region = region(&SystemEnv);
//! # let _ = region;
//! ```
//!
//! ```ignore
//! use env_reader::source::InMemoryEnv;
//!
//! let env = InMemoryEnv::new();
//! env.set("APP_REGION", "eu-west-1");
//!
//! assert_eq!(region(&env), "eu-west-1");
//! ```

mod memory;
mod system;

use std::env::VarError;

#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryEnv;
pub use system::SystemEnv;

/// Read access to an environment table.
///
/// `Err(VarError::NotPresent)` means the key is absent. Every other outcome,
/// including `Err(VarError::NotUnicode(_))`, means the key is present.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}
