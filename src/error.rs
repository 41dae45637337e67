//! Error type for caller-contract violations
//!
//! Expected no-ops (a rate-limited shot, removing an absent object, a bullet
//! touching its own shooter) are not errors and never surface here.

use std::error::Error;
use std::fmt;

use crate::sim::{ObjectId, ObjectKind};

#[derive(Debug)]
pub enum SimError {
    /// A control intent name outside `thrust`, `turn_left`, `turn_right`, `attack`
    UnknownIntent(String),
    /// Tick delta was negative or not finite
    InvalidDelta(f32),
    /// An object with this id is already live
    DuplicateId(ObjectId),
    /// Every id below `u32::MAX` has been handed out
    IdsExhausted,
    /// No live object has this id
    UnknownObject(ObjectId),
    /// `id` or `kind` in a data patch does not match the target object
    FieldMismatch {
        field: &'static str,
        expected: String,
        found: String,
    },
    /// The field does not exist on this kind of object
    UnsupportedField {
        field: &'static str,
        kind: ObjectKind,
    },
    /// The field is present but its value is out of range
    InvalidValue { field: &'static str, reason: String },
    /// A tuning value failed validation
    Config(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnknownIntent(name) => write!(f, "unknown control intent {name:?}"),
            SimError::InvalidDelta(delta) => {
                write!(f, "tick delta must be finite and non-negative, got {delta}")
            }
            SimError::DuplicateId(id) => write!(f, "object {id} already exists"),
            SimError::IdsExhausted => write!(f, "no object ids left"),
            SimError::UnknownObject(id) => write!(f, "object {id} does not exist"),
            SimError::FieldMismatch {
                field,
                expected,
                found,
            } => write!(f, "{field} mismatch: expected {expected}, found {found}"),
            SimError::UnsupportedField { field, kind } => {
                write!(f, "field {field:?} is not supported on {kind:?} objects")
            }
            SimError::InvalidValue { field, reason } => {
                write!(f, "invalid value for {field:?}: {reason}")
            }
            SimError::Config(msg) => write!(f, "invalid tuning: {msg}"),
            SimError::Io(err) => write!(f, "io error: {err}"),
            SimError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            SimError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Json(err)
    }
}
