//! Mapping, chaining, and fallback combinators.
//!
//! Every combinator here is capture-by-default: the single point at which
//! it invokes a caller-supplied callback is wrapped so a panic folds into a
//! failure of the result type instead of unwinding through the pipeline.
//! An existing failure always short-circuits with its fault untouched.

use crate::capture::run_captured;

use super::Outcome;

impl<T> Outcome<T> {
    /// Transforms the success value with `f`.
    ///
    /// A failure propagates unchanged. A panic inside `f` becomes the
    /// failure of the returned outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let halved = Outcome::success(10).map(|n| n / 2);
    /// assert_eq!(halved, Outcome::success(5));
    ///
    /// let divisor = 0;
    /// let exploded = Outcome::success(10).map(move |n| n / divisor);
    /// assert!(exploded.is_failure());
    /// ```
    #[must_use]
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Outcome<R> {
        match self {
            Self::Success(value) => Outcome::from_captured(run_captured("map", move || f(value))),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Chains a further outcome-producing step.
    ///
    /// A failure propagates unchanged. `selector` runs under capture; a
    /// failure it returns propagates as-is, and a panic it raises becomes
    /// the failure of the returned outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Fault, Outcome};
    ///
    /// let checked = Outcome::success(5).and_then(|n| {
    ///     if n > 0 {
    ///         Outcome::success(n)
    ///     } else {
    ///         Outcome::failure(Fault::message("not positive"))
    ///     }
    /// });
    /// assert_eq!(checked, Outcome::success(5));
    /// ```
    #[must_use]
    pub fn and_then<R>(self, selector: impl FnOnce(T) -> Outcome<R>) -> Outcome<R> {
        match self {
            Self::Success(value) => match run_captured("and_then", move || selector(value)) {
                Ok(inner) => inner,
                Err(fault) => Outcome::Failure(fault),
            },
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Chains a further step and combines both values.
    ///
    /// `selector` borrows the current value to produce an inner outcome;
    /// `combiner` then consumes the original value together with the inner
    /// one. The two callbacks run under independent captures: a panic in
    /// either folds into the failure of the returned outcome, but each
    /// capture only covers its own step. A failure returned by `selector`
    /// propagates as-is and `combiner` is never invoked.
    #[must_use]
    pub fn and_then_with<S, R>(
        self,
        selector: impl FnOnce(&T) -> Outcome<S>,
        combiner: impl FnOnce(T, S) -> R,
    ) -> Outcome<R> {
        match self {
            Self::Failure(fault) => Outcome::Failure(fault),
            Self::Success(value) => {
                let inner = match run_captured("and_then_with.selector", || selector(&value)) {
                    Ok(inner) => inner,
                    Err(fault) => return Outcome::Failure(fault),
                };
                match inner {
                    Outcome::Failure(fault) => Outcome::Failure(fault),
                    Outcome::Success(produced) => Outcome::from_captured(run_captured(
                        "and_then_with.combiner",
                        move || combiner(value, produced),
                    )),
                }
            }
        }
    }

    /// Replaces a failure with the outcome produced by `alternative`.
    ///
    /// A success returns itself and `alternative` is never evaluated. Any
    /// failure, whatever its fault type, triggers `alternative` under
    /// capture.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let kept = Outcome::success(7).or_else(|| Outcome::success(0));
    /// assert_eq!(kept, Outcome::success(7));
    /// ```
    #[must_use]
    pub fn or_else(self, alternative: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => match run_captured("or_else", alternative) {
                Ok(outcome) => outcome,
                Err(fault) => Self::Failure(fault),
            },
        }
    }

    /// Replaces a failure with the plain value produced by `alternative`.
    ///
    /// The value-returning form of [`Outcome::or_else`], with the same
    /// evaluation and capture rules.
    #[must_use]
    pub fn or_else_value(self, alternative: impl FnOnce() -> T) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::from_captured(run_captured("or_else_value", alternative)),
        }
    }
}
