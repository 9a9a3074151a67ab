use libgeodms::{
    decimal_to_dms, dms_to_decimal, validate_dms, Axis, DecimalCoordinate, DmsComponent,
    DmsCoordinate, Orientation, ValidationError,
};

/// Half a second of arc, in degrees.
const TOLERANCE: f64 = 1. / 7200. + 1e-9;

fn assert_round_trip(lat: f64, lon: f64) {
    let dms = decimal_to_dms(lon, lat).unwrap();
    let back = dms_to_decimal(&dms).unwrap();
    assert!(
        (back.latitude - lat).abs() <= TOLERANCE,
        "latitude {} came back as {} via {}",
        lat,
        back.latitude,
        dms
    );
    assert!(
        (back.longitude - lon).abs() <= TOLERANCE,
        "longitude {} came back as {} via {}",
        lon,
        back.longitude,
        dms
    );
}

#[test]
fn round_trip_within_half_a_second() {
    // Odd step sizes so that the grid doesn't line up with whole minutes or seconds
    let mut lat = -90.;
    while lat <= 90. {
        let mut lon = -180.;
        while lon <= 180. {
            assert_round_trip(lat, lon);
            lon += 0.7919;
        }
        lat += 0.3817;
    }

    for &(lat, lon) in &[
        (90., 180.),
        (-90., -180.),
        (0., 0.),
        (89.99999, 179.99999),
        (-89.999861, -179.999861),
        (0.000138, -0.000139),
    ] {
        assert_round_trip(lat, lon);
    }
}

#[test]
fn zero_is_north_and_east() {
    let dms = decimal_to_dms(0., 0.).unwrap();
    assert_eq!(dms.lat.orientation, Orientation::N);
    assert_eq!(dms.lon.orientation, Orientation::E);

    let dms = decimal_to_dms(-1e-9, -1e-9).unwrap();
    assert_eq!(dms.lat.orientation, Orientation::S);
    assert_eq!(dms.lon.orientation, Orientation::W);
    // Rounds down to zero, but keeps its sign
    assert_eq!((dms.lat.degrees, dms.lat.minutes, dms.lat.seconds), (0, 0, 0));
}

#[test]
fn boundary_values_are_exact() {
    let dms = decimal_to_dms(180., 90.).unwrap();
    assert_eq!(dms.to_string(), "90°0'0\"N 180°0'0\"E");

    let dms = decimal_to_dms(-180., -90.).unwrap();
    assert_eq!(dms.to_string(), "90°0'0\"S 180°0'0\"W");
    assert_eq!(
        dms_to_decimal(&dms).unwrap(),
        DecimalCoordinate::new(-90., -180.)
    );
}

#[test]
fn overflowing_the_boundary_is_rejected() {
    let overflow = DmsComponent {
        orientation: Orientation::N,
        degrees: 90,
        minutes: 1,
        seconds: 0,
    };
    assert!(matches!(
        validate_dms(&overflow, Axis::Latitude),
        Err(ValidationError::BoundaryOverflow { .. })
    ));

    let exact = DmsComponent {
        minutes: 0,
        ..overflow
    };
    assert_eq!(validate_dms(&exact, Axis::Latitude), Ok(()));
}

#[test]
fn malformed_seconds_are_not_clamped() {
    let dms = DmsCoordinate {
        lat: DmsComponent {
            orientation: Orientation::N,
            degrees: 10,
            minutes: 0,
            seconds: 75,
        },
        lon: DmsComponent::new(Orientation::E, 10, 0, 0).unwrap(),
    };
    let err = dms_to_decimal(&dms).unwrap_err();
    assert_eq!(err.axis, Axis::Latitude);
    assert_eq!(err.source, ValidationError::SecondsRange { seconds: 75 });
}

#[test]
fn form_round_trip_through_text() {
    // A stored default is shown in the form, edited by the user, and stored again
    let stored = DecimalCoordinate::from_parts(Some(-33.8688), Some(151.2093)).unwrap();
    let shown = stored.to_dms().unwrap();
    assert_eq!(shown.to_string(), "33°52'8\"S 151°12'33\"E");

    let entered = DmsCoordinate::from_text("33°52'8\"S", "151°12'33\"E").unwrap();
    assert_eq!(entered, shown);
    let saved = entered.to_decimal().unwrap();
    assert!((saved.latitude - stored.latitude).abs() <= TOLERANCE);
    assert!((saved.longitude - stored.longitude).abs() <= TOLERANCE);
}
