#![forbid(unsafe_code)]

pub mod convert;
pub mod dms;
pub mod error;
pub mod parse;
pub mod version;

pub use convert::{decimal_to_dms, dms_to_decimal, validate_dms};
pub use dms::{Axis, DmsComponent, DmsCoordinate, Orientation};
pub use error::{Error, InvalidDmsError, OutOfRangeError, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

/// A latitude/longitude pair in decimal degrees. This is the form in which coordinates are
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl DecimalCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        DecimalCoordinate {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate out of two values that may or may not be present (e.g. the stored
    /// default of a form field). A coordinate with only one axis is meaningless, so this returns
    /// `None` unless both are there.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => self.latitude,
            Axis::Longitude => self.longitude,
        }
    }

    pub fn to_dms(&self) -> Result<DmsCoordinate, OutOfRangeError> {
        decimal_to_dms(self.longitude, self.latitude)
    }
}

impl fmt::Display for DecimalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
