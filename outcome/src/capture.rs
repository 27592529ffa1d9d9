//! The single panic-capture point shared by every combinator.

use std::panic::{self, AssertUnwindSafe};

use crate::fault::Fault;

/// Runs `op`, folding a panic into a [`Fault`].
///
/// `stage` names the calling combinator for the trace event emitted when a
/// panic is captured.
pub(crate) fn run_captured<T>(stage: &'static str, op: impl FnOnce() -> T) -> Result<T, Fault> {
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let fault = Fault::from_panic(payload);
            tracing::debug!(stage, fault = %fault, "captured panic");
            Err(fault)
        }
    }
}
