//! Hemisphere labels for DMS coordinates.

use crate::{dms::Axis, impl_parse_for_enum};
use derive_try_from_primitive::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// One-letter hemisphere label. The discriminant is the ASCII code of the letter, so that an
/// orientation can be read straight out of a byte of user input.
#[derive(Debug, Clone, Copy, TryFromPrimitive, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    N = 0x4e, // 'N'
    S = 0x53, // 'S'
    E = 0x45, // 'E'
    W = 0x57, // 'W'
}

impl_parse_for_enum!(Orientation, be_u8);

impl Orientation {
    /// The axis this label belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Orientation::N | Orientation::S => Axis::Latitude,
            Orientation::E | Orientation::W => Axis::Longitude,
        }
    }

    /// Returns `true` for the labels that stand for a negative decimal value (south and west).
    pub fn is_negative(self) -> bool {
        self == Orientation::S || self == Orientation::W
    }

    /// English name of the hemisphere.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::N => "North",
            Orientation::S => "South",
            Orientation::E => "East",
            Orientation::W => "West",
        }
    }

    pub fn as_char(self) -> char {
        self as u8 as char
    }
}

impl TryFrom<char> for Orientation {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if !c.is_ascii() {
            return Err(c);
        }
        Orientation::try_from(c as u8).map_err(|_| c)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod test {
    use super::Orientation;
    use crate::dms::Axis;
    use std::convert::TryFrom;

    #[test]
    fn test_orientation_from_ascii() {
        assert_eq!(Orientation::try_from(b'N'), Ok(Orientation::N));
        assert_eq!(Orientation::try_from(b'W'), Ok(Orientation::W));
        assert_eq!(Orientation::try_from(b'n'), Err(b'n'));
        assert_eq!(Orientation::try_from('E'), Ok(Orientation::E));
        assert_eq!(Orientation::try_from('°'), Err('°'));
    }

    #[test]
    fn test_orientation_axis_and_sign() {
        assert_eq!(Orientation::S.axis(), Axis::Latitude);
        assert_eq!(Orientation::E.axis(), Axis::Longitude);
        assert!(Orientation::S.is_negative());
        assert!(Orientation::W.is_negative());
        assert!(!Orientation::N.is_negative());
        assert!(!Orientation::E.is_negative());
        assert_eq!(Orientation::W.name(), "West");
    }

    #[test]
    fn test_parse_orientation() {
        let (rest, o) = Orientation::parse(b"S 12").unwrap();
        assert_eq!(o, Orientation::S);
        assert_eq!(rest, b" 12");
        assert!(Orientation::parse(b"X").is_err());
    }
}
