//! Error types returned by the coordinate converter.

use crate::dms::{Axis, Orientation};
use thiserror::Error;

/// A decimal coordinate that can't be converted to DMS because it is not finite or lies outside
/// of its axis' domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{axis} {value} is outside of the range [-{max}, {max}]", max = .axis.max_degrees())]
pub struct OutOfRangeError {
    pub axis: Axis,
    pub value: f64,
}

/// The first rule broken by a DMS component, as reported by `validate_dms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("orientation {orientation} can't be used for {axis}")]
    Orientation { axis: Axis, orientation: Orientation },

    #[error("degrees must be between 0 and {max}, got {degrees}")]
    DegreesRange { degrees: u16, max: u16 },

    #[error("minutes must be between 0 and 59, got {minutes}")]
    MinutesRange { minutes: u8 },

    #[error("seconds must be between 0 and 59, got {seconds}")]
    SecondsRange { seconds: u8 },

    #[error("{max}° {axis} can't carry {minutes}' {seconds}\"")]
    BoundaryOverflow {
        axis: Axis,
        max: u16,
        minutes: u8,
        seconds: u8,
    },
}

/// A DMS coordinate that was refused by `dms_to_decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid DMS {axis}: {source}")]
pub struct InvalidDmsError {
    pub axis: Axis,
    pub source: ValidationError,
}

/// Any error produced by this crate, for callers that chain parsing and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),

    #[error(transparent)]
    InvalidDms(#[from] InvalidDmsError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unable to parse DMS coordinate: {0}")]
    Parse(String),
}
