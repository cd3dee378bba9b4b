//! The orbit calculator: three inputs in, six labeled values out.
//!
//! Inputs usually arrive as text (from the command line or the shell), so
//! [compute] takes strings and does the parsing. If you already have numbers,
//! build an [OrbitQuery] with [OrbitQuery::new] and call
//! [OrbitQuery::compute].
//!
//! The satellite mass is accepted and echoed back, but no formula uses it.
//! A circular orbit around a much heavier primary doesn't depend on it.

use std::fmt;

use log::debug;

use crate::astro::circular::CircularOrbit;
use crate::astro::{HasMass, PointMass, SECONDS_PER_HOUR};
use crate::error::{Field, InvalidReason, OrbitError, Result};
use crate::format::Quantity;

/// A validated set of inputs.
///
/// Planet mass and orbit radius are guaranteed finite and positive. The
/// satellite mass is whatever parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitQuery {
    planet_mass: f64,
    satellite_mass: f64,
    orbit_radius: f64,
}

/// Everything we display about an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitResult {
    query: OrbitQuery,
    velocity: f64,
    period_hours: f64,
    acceleration: f64,
}

/// Parses and validates the three fields, then computes the orbit.
pub fn compute(
    planet_mass: &str,
    satellite_mass: &str,
    orbit_radius: &str,
) -> Result<OrbitResult> {
    OrbitQuery::parse(planet_mass, satellite_mass, orbit_radius)?.compute()
}

/// Parses a single field. This only checks that the text is a number; range
/// checks happen in [OrbitQuery::new].
///
/// Single underscores between digits are allowed as separators, so
/// `6_770_000` reads as `6770000`.
pub fn parse_field(field: Field, text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OrbitError::invalid(field, InvalidReason::Empty));
    }
    let not_a_number = || OrbitError::invalid(field, InvalidReason::NotANumber);
    let digits = strip_separators(text).ok_or_else(not_a_number)?;
    digits.parse::<f64>().map_err(|_| not_a_number())
}

/// Removes `_` separators, or returns None if one isn't flanked by digits.
fn strip_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let is_digit = |c: Option<u8>| c.map_or(false, |c| c.is_ascii_digit());
        if !is_digit(before) || !is_digit(after) {
            return None;
        }
    }
    Some(text.replace('_', ""))
}

fn check_positive(field: Field, value: f64) -> Result<f64> {
    if !value.is_finite() {
        Err(OrbitError::invalid(field, InvalidReason::NotFinite))
    } else if value <= 0.0 {
        Err(OrbitError::invalid(field, InvalidReason::NotPositive))
    } else {
        Ok(value)
    }
}

impl OrbitQuery {
    pub fn new(planet_mass: f64, satellite_mass: f64, orbit_radius: f64) -> Result<Self> {
        Ok(OrbitQuery {
            planet_mass: check_positive(Field::PlanetMass, planet_mass)?,
            satellite_mass,
            orbit_radius: check_positive(Field::OrbitRadius, orbit_radius)?,
        })
    }

    /// Fields are checked in display order, and the first bad one is
    /// reported.
    pub fn parse(planet_mass: &str, satellite_mass: &str, orbit_radius: &str) -> Result<Self> {
        let planet_mass = parse_field(Field::PlanetMass, planet_mass)
            .and_then(|m| check_positive(Field::PlanetMass, m))?;
        let satellite_mass = parse_field(Field::SatelliteMass, satellite_mass)?;
        let orbit_radius = parse_field(Field::OrbitRadius, orbit_radius)?;
        Self::new(planet_mass, satellite_mass, orbit_radius)
    }

    pub fn planet_mass(&self) -> f64 {
        self.planet_mass
    }

    pub fn satellite_mass(&self) -> f64 {
        self.satellite_mass
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn planet(&self) -> PointMass {
        PointMass::with_mass(self.planet_mass)
    }

    pub fn orbit(&self) -> CircularOrbit<PointMass> {
        CircularOrbit::new(self.planet(), self.orbit_radius)
    }

    pub fn compute(&self) -> Result<OrbitResult> {
        let orbit = self.orbit();
        if orbit.primary().mu() <= 0.0 {
            // G * M underflowed
            return Err(OrbitError::invalid(Field::PlanetMass, InvalidReason::OutOfRange));
        }

        let result = OrbitResult {
            query: *self,
            velocity: orbit.velocity(),
            period_hours: orbit.period() / SECONDS_PER_HOUR,
            acceleration: orbit.acceleration(),
        };

        // Overflow gives infinities; underflow (e.g. r^3 for a tiny radius)
        // gives zeros, which can't be right for a real orbit either
        let outputs = [result.velocity, result.period_hours, result.acceleration];
        if outputs.iter().any(|&x| !(x.is_finite() && x > 0.0)) {
            return Err(OrbitError::invalid(Field::OrbitRadius, InvalidReason::OutOfRange));
        }

        debug!(
            "M = {} kg, r = {} m: v = {} m/s, T = {} h, a = {} m/s^2",
            self.planet_mass,
            self.orbit_radius,
            result.velocity,
            result.period_hours,
            result.acceleration
        );
        Ok(result)
    }
}

impl OrbitResult {
    pub fn query(&self) -> &OrbitQuery {
        &self.query
    }

    /// Orbital speed, in m/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Orbital period, in hours
    pub fn period_hours(&self) -> f64 {
        self.period_hours
    }

    /// Gravitational acceleration at the orbit, in m/s^2
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// The six displayed values, in display order: the three inputs, then
    /// velocity, period and acceleration.
    pub fn quantities(&self) -> [Quantity; 6] {
        let input = |field: Field, value| Quantity::new(field.label(), value, field.unit());
        [
            input(Field::PlanetMass, self.query.planet_mass),
            input(Field::SatelliteMass, self.query.satellite_mass),
            input(Field::OrbitRadius, self.query.orbit_radius),
            Quantity::new("Sat. Velocity", self.velocity, "m/s"),
            Quantity::new("Sat. Period", self.period_hours, "hours"),
            Quantity::new("Sat. Acceleration", self.acceleration, "m/s\u{b2}"),
        ]
    }

    pub fn lines(&self) -> Vec<String> {
        self.quantities().iter().map(|q| q.to_string()).collect()
    }
}

impl fmt::Display for OrbitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, quantity) in self.quantities().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", quantity)?;
        }
        Ok(())
    }
}
