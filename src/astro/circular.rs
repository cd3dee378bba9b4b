//! Circular orbits: a satellite at constant distance from the primary's
//! center. All inputs are SI (meters, m^3/s^2) and so are the outputs.
//!
//! These are raw formulas. They don't check their inputs, so a non-positive
//! radius or mu gives back infinities or NaN. Validate before calling.

use std::f64::consts::PI;

use super::HasMass;

/// Speed needed to hold a circular orbit of the given radius.
pub fn velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}

/// Time for one revolution, in seconds.
pub fn period(radius: f64, mu: f64) -> f64 {
    (4.0 * radius.powi(3) * PI * PI / mu).sqrt()
}

/// Gravitational (centripetal) acceleration at the given radius.
pub fn acceleration(radius: f64, mu: f64) -> f64 {
    mu / radius.powi(2)
}

/// A circular orbit around some primary.
#[derive(Debug, Clone, Copy)]
pub struct CircularOrbit<P> {
    primary: P,
    radius: f64,
}

impl<P> CircularOrbit<P> {
    pub fn new(primary: P, radius: f64) -> Self {
        CircularOrbit { primary, radius }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: HasMass> CircularOrbit<P> {
    pub fn velocity(&self) -> f64 {
        velocity(self.radius, self.primary.mu())
    }

    pub fn period(&self) -> f64 {
        period(self.radius, self.primary.mu())
    }

    pub fn acceleration(&self) -> f64 {
        acceleration(self.radius, self.primary.mu())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::astro::{PointMass, NEWTON_G};

    // Kerbol and Kerbin, from the KSP wiki. Useful because the numbers are
    // published directly in terms of mu.
    const KERBIN_ORBIT_RADIUS: f64 = 13_599_840_256.0;
    const KERBIN_ORBIT_PERIOD: f64 = 9_203_544.6;
    const KERBOL_MU: f64 = 1.1723328e18;

    #[test]
    fn test_kerbin_period() {
        let orbit = CircularOrbit::new(PointMass::with_mu(KERBOL_MU), KERBIN_ORBIT_RADIUS);
        assert_relative_eq!(orbit.period(), KERBIN_ORBIT_PERIOD, max_relative = 1e-6);
    }

    #[test]
    fn test_vis_viva_consistency() {
        // For a circular orbit, v^2 / r is the acceleration, and v * T is the
        // circumference.
        let mu = NEWTON_G * 5.972e24;
        for &r in [6.77e6, 4.2164e7, 3.844e8].iter() {
            let v = velocity(r, mu);
            assert_relative_eq!(v * v / r, acceleration(r, mu), max_relative = 1e-12);
            assert_relative_eq!(v * period(r, mu), 2.0 * PI * r, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_kepler_third_law() {
        // T^2 / r^3 is constant for a fixed primary
        let mu = NEWTON_G * 5.972e24;
        let ratio = |r: f64| period(r, mu).powi(2) / r.powi(3);
        assert_relative_eq!(ratio(7.0e6), ratio(4.0e8), max_relative = 1e-12);
        assert_relative_eq!(ratio(7.0e6), 4.0 * PI * PI / mu, max_relative = 1e-12);
    }
}
