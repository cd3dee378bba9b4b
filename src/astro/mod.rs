//! Physical constants and closed-form circular-orbit mechanics.
//!
//! The important items in this module are:
//! - [HasMass], implemented by anything that can act as the primary of an
//!   orbit, and [PointMass], the simplest such thing.
//! - [circular], which holds the formulas for an orbit of constant radius.

pub mod circular;

// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.673e-11;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A point mass with no other physical properties.
///
/// Useful for satisfying a [HasMass] trait bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass(f64);

/// A trait indicating this object can be used in physical computations that
/// require a massive body.
pub trait HasMass {
    /// The standard gravitational parameter of this object
    fn mu(&self) -> f64;
}

impl PointMass {
    /// Constructs a new mass
    pub fn with_mu(mu: f64) -> Self {
        Self(mu)
    }

    /// Constructs a mass from kilograms
    pub fn with_mass(mass: f64) -> Self {
        Self(NEWTON_G * mass)
    }
}

impl HasMass for PointMass {
    fn mu(&self) -> f64 {
        self.0
    }
}
