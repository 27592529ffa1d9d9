//! Constructors for [`Fault`].

use std::any::{Any, TypeId};
use std::sync::Arc;

use super::types::{CapturedPanic, Fault, MessageFault};

impl Fault {
    /// Wraps a concrete error value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Fault;
    ///
    /// let fault = Fault::new(std::fmt::Error);
    /// assert!(fault.is::<std::fmt::Error>());
    /// ```
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            payload: Arc::new(error),
            type_id: TypeId::of::<E>(),
            type_name: std::any::type_name::<E>(),
        }
    }

    /// Wraps a bare message as an ad-hoc [`MessageFault`].
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(MessageFault::new(text))
    }

    /// Folds a panic payload into a fault.
    ///
    /// A payload that is itself a `Fault` (re-raised by
    /// [`Outcome::unwrap`](crate::Outcome::unwrap)) is reused unchanged so
    /// type identity survives a re-capture; anything else becomes a
    /// [`CapturedPanic`].
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(payload) => Self::new(CapturedPanic::new(render_payload(payload.as_ref()))),
        }
    }
}

fn render_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "opaque panic payload".to_owned()
    }
}
