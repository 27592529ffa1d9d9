//! The fault carrier and the concrete error types it mints itself.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use thiserror::Error;

/// Type-erased error payload attached to a failed [`Outcome`].
///
/// A `Fault` wraps any `std::error::Error + Send + Sync + 'static` value
/// behind an [`Arc`], recording the concrete type's identity and name at
/// construction so selective recovery can test for it later. Cloning is
/// cheap and shares the payload; the payload itself is never mutated.
///
/// Two faults are equal when they record the same concrete type and render
/// the same message. [`Hash`] combines the same two components, so faults
/// are usable as map keys alongside the outcomes that carry them.
///
/// [`Outcome`]: crate::Outcome
#[derive(Clone)]
pub struct Fault {
    pub(super) payload: Arc<dyn std::error::Error + Send + Sync + 'static>,
    pub(super) type_id: TypeId,
    pub(super) type_name: &'static str,
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.payload.to_string() == other.payload.to_string()
    }
}

impl Eq for Fault {}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.payload.to_string().hash(state);
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("type", &self.type_name)
            .field("message", &format_args!("{}", self.payload))
            .finish()
    }
}

/// Ad-hoc error used when a failure is described by a bare message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MessageFault {
    message: String,
}

impl MessageFault {
    /// Builds a fault description from `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Text supplied when the fault was raised.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error minted when a panic is captured inside a combinator.
///
/// String payloads keep their text verbatim; any other payload is reported
/// as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("captured panic: {message}")]
pub struct CapturedPanic {
    message: String,
}

impl CapturedPanic {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Rendered panic payload.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
