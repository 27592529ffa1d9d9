//! Conversions from foreign error shapes into [`Fault`].
//!
//! The blanket conversion lets `Outcome::failure` and the `IntoOutcome`
//! extension accept any ordinary error value directly. Bare message
//! strings go through [`Fault::message`] instead: a blanket over every
//! `Error` type rules out additional `From<&str>`/`From<String>` impls,
//! since coherence must allow those types to implement `Error` upstream.

use super::types::Fault;

impl<E> From<E> for Fault
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
