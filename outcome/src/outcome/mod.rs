//! The two-variant outcome value: construction, matching, and conversion.
//!
//! Transformation combinators live in sibling modules: mapping and
//! chaining in `combinators`, typed recovery in `recovery`, and value
//! extraction in `extract`.

use crate::capture::run_captured;
use crate::fault::Fault;

mod combinators;
mod extract;
mod recovery;

#[cfg(test)]
mod tests;

/// A computed value or a captured failure.
///
/// An outcome is immutable once constructed: every combinator consumes the
/// outcome it is given and produces a new one, so the variant of a value in
/// hand never changes. Equality is structural and variant-sensitive: a
/// success never equals a failure, successes compare by value, and failures
/// compare by their [`Fault`]s.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let doubled = Outcome::success(21).map(|n| n * 2);
/// assert_eq!(doubled, Outcome::success(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the fault describes why.
    Failure(Fault),
}

impl<T> Outcome<T> {
    /// Wraps `value` as a success.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps `error` as a failure.
    ///
    /// Accepts any ordinary error value or a prebuilt [`Fault`]; wrap a
    /// bare message with [`Fault::message`] first.
    #[must_use]
    pub fn failure(error: impl Into<Fault>) -> Self {
        Self::Failure(error.into())
    }

    /// Runs `op` and wraps its return value; a panic becomes a failure.
    ///
    /// This is the entry point for folding arbitrary panicking code into
    /// the outcome model.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let divisor = 0;
    /// let quotient = Outcome::capture(|| 10 / divisor);
    /// assert!(quotient.is_failure());
    /// ```
    pub fn capture(op: impl FnOnce() -> T) -> Self {
        Self::from_captured(run_captured("capture", op))
    }

    /// Runs `op`, which already yields an outcome.
    ///
    /// Only a panic during `op` is folded into a failure; a returned
    /// outcome of either variant passes through unchanged.
    pub fn capture_outcome(op: impl FnOnce() -> Self) -> Self {
        match run_captured("capture_outcome", op) {
            Ok(outcome) => outcome,
            Err(fault) => Self::Failure(fault),
        }
    }

    /// True when this outcome holds a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True when this outcome holds a fault.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the fault, if present.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Dispatches to exactly one callback and returns its result.
    ///
    /// Unlike the combinators, matching does not capture: a panic raised by
    /// either callback propagates to the caller unmodified. This keeps the
    /// choice between capture and propagation explicit at each call site.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Fault) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Action form of [`Outcome::fold`], dispatching by reference.
    ///
    /// Follows the same no-capture discipline as `fold`.
    pub fn visit(&self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&Fault)) {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Converts into the standard result shape.
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    pub(crate) fn from_captured(captured: Result<T, Fault>) -> Self {
        match captured {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Fault>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
