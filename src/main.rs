use libgeodms::{version, DecimalCoordinate, DmsCoordinate, Error};
use log::{debug, error};
use std::{env, process};

fn usage() -> String {
    format!(
        "Usage: {name} <latitude> <longitude>\n\
         \n\
         Decimal input (e.g. `{name} 48.8566 2.3522`) is printed as DMS, and DMS input\n\
         (e.g. `{name} \"48°51'24\\\"N\" \"2°21'8\\\"E\"`) is printed as decimal.",
        name = version::name()
    )
}

/// Convert the two positional arguments in whichever direction they call for.
fn run(lat: &str, lon: &str) -> Result<String, Error> {
    match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
        (Ok(latitude), Ok(longitude)) => {
            debug!("converting decimal ({}, {}) to DMS", latitude, longitude);
            let dms = DecimalCoordinate::new(latitude, longitude).to_dms()?;
            Ok(dms.to_string())
        }
        _ => {
            debug!("converting DMS ({:?}, {:?}) to decimal", lat, lon);
            let decimal = DmsCoordinate::from_text(lat, lon)?.to_decimal()?;
            Ok(decimal.to_string())
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let output = match args.as_slice() {
        [flag] if flag == "--version" || flag == "-V" => Ok(version::banner()),
        [flag] if flag == "--help" || flag == "-h" => Ok(usage()),
        [lat, lon] => run(lat, lon),
        _ => {
            eprintln!("{}", usage());
            process::exit(2);
        }
    };

    match output {
        Ok(s) => println!("{}", s),
        Err(e) => {
            error!("conversion failed: {:?}", e);
            eprintln!("{}: {}", version::name(), e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::run;
    use libgeodms::Error;

    #[test]
    fn test_run_both_directions() {
        assert_eq!(run("48.8566", "2.3522").unwrap(), "48°51'24\"N 2°21'8\"E");
        assert_eq!(
            run("48°51'24\"N", "2°21'8\"E").unwrap(),
            "48.856667, 2.352222"
        );
    }

    #[test]
    fn test_run_reports_errors() {
        assert!(matches!(run("95", "0"), Err(Error::OutOfRange(_))));
        assert!(matches!(run("90°30'0\"N", "0 0 0 E"), Err(Error::InvalidDms(_))));
        assert!(matches!(run("north", "east"), Err(Error::Parse(_))));
    }
}
