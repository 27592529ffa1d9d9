//! Fault payloads carried by failed outcomes.

mod constructors;
mod conversions;
mod helpers;
mod types;

pub use types::{CapturedPanic, Fault, MessageFault};
