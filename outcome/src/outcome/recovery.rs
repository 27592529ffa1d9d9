//! Typed, selective recovery from failures.
//!
//! Each method here applies only when the outcome is a failure whose fault
//! downcasts to the requested error type. In every other case, whether a
//! success or a failure of some other type, the original outcome is
//! returned unchanged, preserving its identity under equality. The recovery
//! callback itself runs under capture, like any other combinator callback.

use crate::capture::run_captured;
use crate::fault::Fault;

use super::Outcome;

impl<T> Outcome<T> {
    /// Recovers a value from a failure of the specific error type `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{IntoOutcome, Outcome};
    /// use std::num::ParseIntError;
    ///
    /// let parsed: Outcome<i32> = "nope".parse().into_outcome();
    /// let recovered = parsed.correct(|_: &ParseIntError| -1);
    /// assert_eq!(recovered, Outcome::success(-1));
    /// ```
    #[must_use]
    pub fn correct<E, F>(self, recover: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        F: FnOnce(&E) -> T,
    {
        match self {
            Self::Failure(fault) => {
                let captured =
                    run_captured("correct", || fault.downcast_ref::<E>().map(recover));
                match captured {
                    Ok(Some(value)) => Self::Success(value),
                    Ok(None) => Self::Failure(fault),
                    Err(raised) => Self::Failure(raised),
                }
            }
            success => success,
        }
    }

    /// Replaces a failure of type `E` with a different fault.
    ///
    /// The result of `recover` becomes the new failure; a panic inside
    /// `recover` likewise becomes the new failure. Non-matching outcomes
    /// pass through unchanged.
    #[must_use]
    pub fn correct_error<E, Q, F>(self, recover: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        Q: Into<Fault>,
        F: FnOnce(&E) -> Q,
    {
        match self {
            Self::Failure(fault) => {
                let captured = run_captured("correct_error", || {
                    fault.downcast_ref::<E>().map(|error| recover(error).into())
                });
                match captured {
                    Ok(Some(replacement)) => Self::Failure(replacement),
                    Ok(None) => Self::Failure(fault),
                    Err(raised) => Self::Failure(raised),
                }
            }
            success => success,
        }
    }

    /// Recovers with a full outcome from a failure of type `E`.
    ///
    /// `recover` decides the resulting variant itself, so a recovery can
    /// deliberately produce another failure. Non-matching outcomes pass
    /// through unchanged.
    #[must_use]
    pub fn correct_with<E, F>(self, recover: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        F: FnOnce(&E) -> Self,
    {
        match self {
            Self::Failure(fault) => {
                let captured =
                    run_captured("correct_with", || fault.downcast_ref::<E>().map(recover));
                match captured {
                    Ok(Some(outcome)) => outcome,
                    Ok(None) => Self::Failure(fault),
                    Err(raised) => Self::Failure(raised),
                }
            }
            success => success,
        }
    }
}
