//! Errors raised while assembling an intervention configuration.

use std::fmt;

use crate::device::InvalidGeometryError;

/// Errors surfaced while assembling an intervention configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum InterventionError {
    /// A collaborator parameter is out of range.
    InvalidParam { field: &'static str, reason: String },
    /// The instrument geometry is ill-defined.
    Device(InvalidGeometryError),
}

impl InterventionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InterventionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParam { field, reason } => {
                write!(f, "invalid intervention param {field}: {reason}")
            }
            Self::Device(err) => write!(f, "instrument: {err}"),
        }
    }
}

impl std::error::Error for InterventionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Device(err) => Some(err),
            Self::InvalidParam { .. } => None,
        }
    }
}

impl From<InvalidGeometryError> for InterventionError {
    fn from(err: InvalidGeometryError) -> Self {
        Self::Device(err)
    }
}
