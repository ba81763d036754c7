//! Workspace architecture checks. All checks live in `tests/`.
