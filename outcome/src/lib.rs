//! A composable success-or-failure outcome type.
//!
//! [`Outcome<T>`] holds either a computed value or a captured [`Fault`].
//! Producers construct outcomes directly or through the capture family;
//! pipelines compose further outcomes with combinators that fold a panic at
//! each stage into a failure; terminal consumers extract a plain value or
//! branch on the variant.
//!
//! The combinator library is capture-by-default: a panic raised by a
//! mapper, selector, or recovery callback becomes a [`Fault`] at that stage
//! instead of unwinding through the pipeline. Direct extraction
//! ([`Outcome::unwrap`], [`Outcome::fold`]) is propagate-by-default, so
//! each call site chooses its discipline explicitly.
//!
//! With the default `serde` feature, outcomes cross a serde boundary using
//! the schema documented in the wire module ([`WireFault`]).
//!
//! # Examples
//!
//! ```
//! use outcome::{Fault, IntoOutcome, Outcome};
//!
//! let greeting = "3".parse::<u32>().into_outcome()
//!     .and_then(|count| {
//!         if count == 0 {
//!             Outcome::failure(Fault::message("nobody to greet"))
//!         } else {
//!             Outcome::success(count)
//!         }
//!     })
//!     .map(|count| format!("hello x{count}"))
//!     .unwrap_or_else(|fault| fault.to_string());
//! assert_eq!(greeting, "hello x3");
//! ```

mod capture;
mod fault;
mod outcome;
mod result_ext;
#[cfg(feature = "serde")]
mod wire;

pub use fault::{CapturedPanic, Fault, MessageFault};
pub use outcome::Outcome;
pub use result_ext::IntoOutcome;
#[cfg(feature = "serde")]
pub use wire::WireFault;
