//! Typed access to process environment variables.
//!
//! Every accessor takes a key and a default. An unset variable silently
//! yields the default; a variable that is set but cannot be converted to the
//! requested type is a fatal error (panic). Each panicking accessor has a
//! `try_` twin that returns [`EnvError`] instead, using identical parsing
//! rules.
//!
//! # Quick Start
//!
//! ```
//! let workers = env_reader::get_int("APP_WORKERS", 4);
//! let verbose = env_reader::get_bool("APP_VERBOSE", false);
//! # let _ = (workers, verbose);
//! ```
//!
//! Code that should not read the real process environment takes an
//! [`EnvReader`] over any [`ReadEnv`] provider:
//!
//! | Provider | Backing | `Send + Sync` |
//! |----------|---------|---------------|
//! | [`SystemEnv`] | `std::env::var` | Yes |
//! | [`InMemoryEnv`]* | `RwLock<HashMap>` | Yes |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.

pub mod constants;
mod error;
mod process;
mod reader;
pub mod source;
mod value;

pub use error::EnvError;
pub use process::{get_bool, get_float32, get_float64, get_int, get_int64, get_string};
pub use reader::EnvReader;
#[cfg(any(test, feature = "test-support"))]
pub use source::InMemoryEnv;
pub use source::{ReadEnv, SystemEnv};
pub use value::{EnvValue, ParseFailure, ValueKind};
