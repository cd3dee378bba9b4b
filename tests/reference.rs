use approx::assert_relative_eq;
use orbit_data::format::scientific;
use orbit_data::scenario::Scenario;
use orbit_data::{compute, Field, InvalidReason, OrbitError, OrbitQuery};

const EARTH: &str = "5.972e24";
const ISS_MASS: &str = "391000";
const ISS_RADIUS: &str = "6770000";

fn assert_invalid(result: orbit_data::error::Result<orbit_data::OrbitResult>, field: Field) {
    match result {
        Err(OrbitError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected invalid {}, got {:?}", field, other),
    }
}

/// The International Space Station, as in the form's default fields.
#[test]
fn test_reference_scenario() {
    let result = compute(EARTH, ISS_MASS, ISS_RADIUS).unwrap();
    let lines = result.lines();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Planet Mass: 5.9720E+24 kg");
    assert_eq!(lines[1], "Satellite Mass: 3.9100E+05 kg");
    assert_eq!(lines[2], "Orbit Radius: 6.7700E+06 m");
    assert_eq!(lines[3], "Sat. Velocity: 7.6723E+03 m/s");
    assert_eq!(lines[4], "Sat. Period: 1.5401E+00 hours");
    assert_eq!(lines[5], "Sat. Acceleration: 8.6949E+00 m/s²");

    // Sanity check against the ISS's real period of about 92.7 minutes. Our G
    // and circular assumption put us within a percent.
    assert_relative_eq!(result.period_hours() * 60.0, 92.7, max_relative = 1e-2);
    assert_eq!(Scenario::iss().compute().unwrap(), result);
}

#[test]
fn test_satellite_mass_has_no_effect() {
    let base = compute(EARTH, ISS_MASS, ISS_RADIUS).unwrap();
    for mass in ["1", "0", "-3.5", "7.342e22", "1e300"].iter() {
        let other = compute(EARTH, mass, ISS_RADIUS).unwrap();
        assert_eq!(other.velocity(), base.velocity());
        assert_eq!(other.period_hours(), base.period_hours());
        assert_eq!(other.acceleration(), base.acceleration());
        assert_eq!(other.lines()[3..], base.lines()[3..]);
    }
}

#[test]
fn test_bad_radius() {
    assert_invalid(compute(EARTH, ISS_MASS, "0"), Field::OrbitRadius);
    assert_invalid(compute(EARTH, ISS_MASS, "-1"), Field::OrbitRadius);
    assert_invalid(compute(EARTH, ISS_MASS, "-inf"), Field::OrbitRadius);
}

#[test]
fn test_bad_planet_mass() {
    assert_invalid(compute("-1", ISS_MASS, ISS_RADIUS), Field::PlanetMass);
    assert_invalid(compute("0.0", ISS_MASS, ISS_RADIUS), Field::PlanetMass);
}

#[test]
fn test_non_numeric() {
    assert_invalid(compute("abc", ISS_MASS, ISS_RADIUS), Field::PlanetMass);
    assert_invalid(compute(EARTH, "abc", ISS_RADIUS), Field::SatelliteMass);
    assert_invalid(compute(EARTH, ISS_MASS, "abc"), Field::OrbitRadius);
    assert_invalid(compute(EARTH, ISS_MASS, "6,770,000"), Field::OrbitRadius);

    // Empty fields are distinguishable from garbage
    match compute("", ISS_MASS, ISS_RADIUS) {
        Err(OrbitError::InvalidInput { reason, .. }) => assert_eq!(reason, InvalidReason::Empty),
        other => panic!("expected empty field, got {:?}", other),
    }
}

/// Every displayed number reads back to within the precision shown.
#[test]
fn test_display_precision() {
    let cases = [
        (EARTH, ISS_MASS, ISS_RADIUS),
        ("7.342e22", "1000", "1.9e6"),
        ("1.989e30", "5.972e24", "1.496e11"),
        ("1", "1", "1"),
        ("6.4171e23", "1e-3", "9.376e6"),
    ];
    for (planet, satellite, radius) in cases.iter() {
        let result = compute(planet, satellite, radius).unwrap();
        for quantity in result.quantities().iter() {
            let text = quantity.value_text();
            let (mantissa, _) = text.split_once('E').unwrap();
            assert_eq!(mantissa.trim_start_matches('-').len(), "d.dddd".len());

            let parsed: f64 = text.parse().unwrap();
            assert_relative_eq!(parsed, quantity.value, max_relative = 5e-5);
        }
    }
}

#[test]
fn test_idempotent() {
    let first = compute(EARTH, ISS_MASS, ISS_RADIUS).unwrap().to_string();
    let second = compute(EARTH, ISS_MASS, ISS_RADIUS).unwrap().to_string();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_numeric_and_text_agree() {
    let from_text = compute(EARTH, ISS_MASS, ISS_RADIUS).unwrap();
    let from_numbers = OrbitQuery::new(5.972e24, 391000.0, 6.77e6)
        .unwrap()
        .compute()
        .unwrap();
    assert_eq!(from_text, from_numbers);
    assert_eq!(scientific(from_numbers.velocity()), "7.6723E+03");
}
