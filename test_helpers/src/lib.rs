//! Test helpers shared across crates in the outcome workspace.
//!
//! Provides small, concrete error types with predictable `Display`
//! renderings so unit and integration tests can exercise typed recovery
//! and fault equality without redefining fixtures in every file.

use thiserror::Error;

/// Error raised when textual input does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("format failure: {detail}")]
pub struct FormatFailure {
    /// Human-readable description of the malformed input.
    pub detail: String,
}

impl FormatFailure {
    /// Builds a failure describing `detail`.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Error raised when a keyed lookup misses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing key: {key}")]
pub struct MissingKey {
    /// Key that was requested but absent.
    pub key: String,
}

impl MissingKey {
    /// Builds a miss for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Parses a decimal integer, reporting malformed input as [`FormatFailure`].
///
/// # Errors
///
/// Returns a [`FormatFailure`] naming the offending input when it is not a
/// valid decimal integer.
pub fn parse_decimal(input: &str) -> Result<i64, FormatFailure> {
    input
        .trim()
        .parse()
        .map_err(|_| FormatFailure::new(format!("not a decimal integer: {input:?}")))
}
