//! Extensions for folding `Result` values into [`Outcome`] concisely.
//!
//! These helpers reduce repetitive `match`/`map_err` boilerplate at the
//! boundary where `Result`-returning code enters an outcome pipeline.
//!
//! # Examples
//!
//! ```
//! use outcome::{IntoOutcome, Outcome};
//!
//! let port: Outcome<u16> = "8080".parse().into_outcome();
//! assert_eq!(port, Outcome::success(8080));
//! ```

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Generic extension mapping any `Result<T, E>` with `E: Into<Fault>` into
/// an [`Outcome<T>`].
pub trait IntoOutcome<T> {
    /// Converts `self` into an outcome, folding the error side into a
    /// [`Fault`]-carrying failure.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Into<Fault>,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.into()),
        }
    }
}
