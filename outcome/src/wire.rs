//! Wire format for passing outcomes through a serde boundary.
//!
//! An outcome serializes as a map tagged by an `outcome` field holding
//! `"success"` or `"failure"`. A success carries its value under `value`; a
//! failure carries a structured error under `error`, rendered from the
//! fault's recorded type name and `Display` output:
//!
//! ```json
//! {"outcome": "success", "value": 42}
//! {"outcome": "failure", "error": {"type": "core::fmt::Error", "message": "..."}}
//! ```
//!
//! Concrete error values do not cross the boundary: deserializing a failure
//! yields a fault wrapping [`WireFault`], which preserves the reported type
//! name and message. Two failures deserialized from the same bytes compare
//! equal; a deserialized failure does not compare equal to the in-process
//! original, whose concrete type it no longer has.

use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Error standing in for a failure received over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}: {message}")]
pub struct WireFault {
    type_name: String,
    message: String,
}

impl WireFault {
    /// Error type name reported by the sending side.
    #[must_use]
    pub fn reported_type(&self) -> &str {
        &self.type_name
    }

    /// Message reported by the sending side.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize, Deserialize)]
struct WireError {
    #[serde(rename = "type")]
    type_name: String,
    message: String,
}

#[derive(Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum WireOutcome<T> {
    Success { value: T },
    Failure { error: WireError },
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(value) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("outcome", "success")?;
                state.serialize_field("value", value)?;
                state.end()
            }
            Self::Failure(fault) => {
                let error = WireError {
                    type_name: fault.type_name().to_owned(),
                    message: fault.to_string(),
                };
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("outcome", "failure")?;
                state.serialize_field("error", &error)?;
                state.end()
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WireOutcome::<T>::deserialize(deserializer)? {
            WireOutcome::Success { value } => Ok(Self::Success(value)),
            WireOutcome::Failure { error } => Ok(Self::Failure(Fault::new(WireFault {
                type_name: error.type_name,
                message: error.message,
            }))),
        }
    }
}
