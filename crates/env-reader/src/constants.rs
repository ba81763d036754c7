//! Token tables shared by the boolean parser.
//!
//! The accepted set is deliberately closed: mixed-case spellings such as
//! `tRuE`, and words such as `yes`/`no`, are rejected.

/// Text accepted as `true`.
pub const TRUE_TOKENS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Text accepted as `false`.
pub const FALSE_TOKENS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

/// Unsigned spellings of infinity accepted by the float parsers (compared
/// case-insensitively).
pub const INFINITY_TOKENS: &[&str] = &["inf", "infinity"];
