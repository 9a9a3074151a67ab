//! Conversion between decimal and DMS coordinates.
//!
//! Seconds are rounded to the nearest whole second when going from decimal to DMS, so converting
//! a value there and back again is exact to within half a second (1/7200 of a degree).

use crate::{
    dms::{Axis, DmsComponent, DmsCoordinate},
    error::{InvalidDmsError, OutOfRangeError, ValidationError},
    DecimalCoordinate,
};

/// Convert latitude and longitude coordinates from degrees/minutes/seconds to decimal.
pub fn degrees_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60. + seconds / 3600.
}

/// Convert a decimal longitude/latitude pair to DMS. Zero is labelled N (or E).
pub fn decimal_to_dms(longitude: f64, latitude: f64) -> Result<DmsCoordinate, OutOfRangeError> {
    let lat = component_from_decimal(latitude, Axis::Latitude)?;
    let lon = component_from_decimal(longitude, Axis::Longitude)?;
    Ok(DmsCoordinate { lat, lon })
}

/// Convert a DMS coordinate back to decimal, refusing any component that `validate_dms` rejects.
pub fn dms_to_decimal(dms: &DmsCoordinate) -> Result<DecimalCoordinate, InvalidDmsError> {
    let latitude = component_to_decimal(&dms.lat, Axis::Latitude)?;
    let longitude = component_to_decimal(&dms.lon, Axis::Longitude)?;
    Ok(DecimalCoordinate {
        latitude,
        longitude,
    })
}

/// Check a single component against the rules for `axis`, returning the first one it breaks.
pub fn validate_dms(component: &DmsComponent, axis: Axis) -> Result<(), ValidationError> {
    let max = axis.max_degrees();

    if component.orientation.axis() != axis {
        return Err(ValidationError::Orientation {
            axis,
            orientation: component.orientation,
        });
    }
    if component.degrees > max {
        return Err(ValidationError::DegreesRange {
            degrees: component.degrees,
            max,
        });
    }
    if component.minutes > 59 {
        return Err(ValidationError::MinutesRange {
            minutes: component.minutes,
        });
    }
    if component.seconds > 59 {
        return Err(ValidationError::SecondsRange {
            seconds: component.seconds,
        });
    }
    if component.degrees == max && (component.minutes != 0 || component.seconds != 0) {
        return Err(ValidationError::BoundaryOverflow {
            axis,
            max,
            minutes: component.minutes,
            seconds: component.seconds,
        });
    }

    Ok(())
}

fn component_from_decimal(value: f64, axis: Axis) -> Result<DmsComponent, OutOfRangeError> {
    let max = axis.max_degrees();
    if !value.is_finite() || value.abs() > max as f64 {
        return Err(OutOfRangeError { axis, value });
    }

    // -0.0 >= 0.0, so negative zero is labelled positive as well
    let orientation = if value >= 0. {
        axis.positive()
    } else {
        axis.negative()
    };

    let magnitude = value.abs();
    let mut degrees = magnitude.floor() as u16;
    let remainder_minutes = (magnitude - magnitude.floor()) * 60.;
    let mut minutes = remainder_minutes.floor() as u8;
    let remainder_seconds = (remainder_minutes - remainder_minutes.floor()) * 60.;
    let mut seconds = remainder_seconds.round() as u8;

    // Rounding may push the seconds up to 60, which then has to be carried through the minutes
    // and into the degrees.
    if seconds >= 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        degrees += 1;
    }

    if degrees > max {
        degrees = max;
        minutes = 0;
        seconds = 0;
    }

    Ok(DmsComponent {
        orientation,
        degrees,
        minutes,
        seconds,
    })
}

fn component_to_decimal(component: &DmsComponent, axis: Axis) -> Result<f64, InvalidDmsError> {
    validate_dms(component, axis).map_err(|source| InvalidDmsError { axis, source })?;

    let magnitude = component.magnitude();
    if component.orientation.is_negative() {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}
