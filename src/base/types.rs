//! Common type aliases for error and result handling.

/// Crate-wide error type.
pub type Err = anyhow::Error;
/// Crate-wide result type.
pub type Res<T> = Result<T, Err>;
/// Result with no success value.
pub type Void = Res<()>;
