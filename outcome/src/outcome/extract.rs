//! Terminal extraction of a plain value from an outcome.
//!
//! Extraction is propagate-by-default: nothing here captures. The
//! combinators fold panics into failures; these methods are where a caller
//! chooses to leave the outcome model again.

use std::panic::panic_any;

use crate::fault::Fault;

use super::Outcome;

impl<T> Outcome<T> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Re-raises a failure by panicking with the stored [`Fault`] as the
    /// panic payload. An enclosing [`Outcome::capture`] recovers the
    /// identical fault, type identity included.
    #[must_use]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => panic_any(fault),
        }
    }

    /// Returns the success value, or `default` for any failure.
    ///
    /// The fault is not inspected and `default` is evaluated eagerly by the
    /// caller; use [`Outcome::unwrap_or_else`] when the fallback is costly.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or the result of `recover` on the fault.
    ///
    /// `recover` is not captured: a panic it raises propagates to the
    /// caller.
    #[must_use]
    pub fn unwrap_or_else(self, recover: impl FnOnce(Fault) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => recover(fault),
        }
    }
}
