//! Degrees/minutes/seconds representation of a geographic coordinate.

mod orientation;

pub use orientation::Orientation;

use crate::{convert, error::ValidationError, parse, DecimalCoordinate, Error, InvalidDmsError};
use nom::error::context;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two geographic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest magnitude (in degrees) allowed on this axis.
    pub const fn max_degrees(self) -> u16 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// Label used for zero and positive decimal values.
    pub const fn positive(self) -> Orientation {
        match self {
            Axis::Latitude => Orientation::N,
            Axis::Longitude => Orientation::E,
        }
    }

    /// Label used for negative decimal values.
    pub const fn negative(self) -> Orientation {
        match self {
            Axis::Latitude => Orientation::S,
            Axis::Longitude => Orientation::W,
        }
    }

    /// The two labels a user can pick from for this axis, positive first.
    pub const fn orientations(self) -> [Orientation; 2] {
        [self.positive(), self.negative()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A single axis of a coordinate. The orientation carries the sign; degrees, minutes and seconds
/// are always magnitudes.
///
/// The fields are public so that values collected from a form or deserialized from JSON can be
/// handed to the converter as-is. Use `DmsComponent::new` to get a component that is known to be
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DmsComponent {
    pub orientation: Orientation,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl DmsComponent {
    /// Create a new component, checking it against the axis implied by its orientation.
    pub fn new(
        orientation: Orientation,
        degrees: u16,
        minutes: u8,
        seconds: u8,
    ) -> Result<Self, ValidationError> {
        let component = DmsComponent {
            orientation,
            degrees,
            minutes,
            seconds,
        };
        convert::validate_dms(&component, orientation.axis())?;
        Ok(component)
    }

    pub fn axis(&self) -> Axis {
        self.orientation.axis()
    }

    /// Unsigned value of the component in decimal degrees.
    pub fn magnitude(&self) -> f64 {
        convert::degrees_to_decimal(
            self.degrees as f64,
            self.minutes as f64,
            self.seconds as f64,
        )
    }

    /// Parse a component written as e.g. `48°51'24"N` or `N 48 51 24`. Only the syntax is checked
    /// here; the ranges are checked by `validate_dms`.
    pub fn parse(i: parse::Input) -> parse::Result<Self> {
        use nom::{branch::alt, sequence::tuple};

        let (i, (orientation, (degrees, minutes, seconds))) = alt((
            context(
                "Leading orientation",
                tuple((parse::padded(Orientation::parse), parse::magnitude)),
            ),
            context("Trailing orientation", Self::parse_trailing_orientation),
        ))(i)?;

        let component = DmsComponent {
            orientation,
            degrees,
            minutes,
            seconds,
        };
        Ok((i, component))
    }

    fn parse_trailing_orientation(i: parse::Input) -> parse::Result<(Orientation, (u16, u8, u8))> {
        use nom::sequence::tuple;

        let (i, (magnitude, orientation)) =
            tuple((parse::magnitude, parse::padded(Orientation::parse)))(i)?;
        Ok((i, (orientation, magnitude)))
    }

    /// Parse a complete string as a single component.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        parse::complete(text.as_bytes(), Self::parse)
    }
}

impl fmt::Display for DmsComponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}°{}'{}\"{}",
            self.degrees, self.minutes, self.seconds, self.orientation
        )
    }
}

/// Latitude and longitude, each in DMS form. This is a display/edit-time value: the decimal pair
/// is the one that gets stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DmsCoordinate {
    pub lat: DmsComponent,
    pub lon: DmsComponent,
}

impl DmsCoordinate {
    pub fn get(&self, axis: Axis) -> &DmsComponent {
        match axis {
            Axis::Latitude => &self.lat,
            Axis::Longitude => &self.lon,
        }
    }

    pub fn to_decimal(&self) -> Result<DecimalCoordinate, InvalidDmsError> {
        convert::dms_to_decimal(self)
    }

    /// Parse a latitude and a longitude entered as text. Each part must carry an orientation
    /// that belongs to its axis.
    pub fn from_text(lat: &str, lon: &str) -> Result<Self, Error> {
        let lat = DmsComponent::from_text(lat)?;
        let lon = DmsComponent::from_text(lon)?;

        for (axis, component) in [(Axis::Latitude, &lat), (Axis::Longitude, &lon)].iter() {
            if component.axis() != *axis {
                return Err(InvalidDmsError {
                    axis: *axis,
                    source: ValidationError::Orientation {
                        axis: *axis,
                        orientation: component.orientation,
                    },
                }
                .into());
            }
        }

        Ok(DmsCoordinate { lat, lon })
    }
}

impl fmt::Display for DmsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.lat, self.lon)
    }
}
