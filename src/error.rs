use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One of the three input fields of an orbit query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PlanetMass,
    SatelliteMass,
    OrbitRadius,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Nothing was typed
    Empty,
    /// Text isn't a real number
    NotANumber,
    /// Parsed, but to an infinity or NaN
    NotFinite,
    /// Zero or negative, where the formulas need a positive value
    NotPositive,
    /// Valid on its own, but too extreme for the formulas to stay finite
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: Field,
        reason: InvalidReason,
    },

    #[error("could not read presets from {}: {source}", .path.display())]
    PresetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preset file: {0}")]
    PresetFormat(#[from] toml::de::Error),

    #[error("no preset named {0:?}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, OrbitError>;

impl OrbitError {
    pub fn invalid(field: Field, reason: InvalidReason) -> Self {
        OrbitError::InvalidInput { field, reason }
    }

    /// Whether this came from validating calculator input, as opposed to
    /// loading presets.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, OrbitError::InvalidInput { .. })
    }
}

impl Field {
    pub const ALL: [Field; 3] = [Field::PlanetMass, Field::SatelliteMass, Field::OrbitRadius];

    pub fn label(self) -> &'static str {
        match self {
            Field::PlanetMass => "Planet Mass",
            Field::SatelliteMass => "Satellite Mass",
            Field::OrbitRadius => "Orbit Radius",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::PlanetMass | Field::SatelliteMass => "kg",
            Field::OrbitRadius => "m",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidReason::Empty => "no value given",
            InvalidReason::NotANumber => "not a number",
            InvalidReason::NotFinite => "must be finite",
            InvalidReason::NotPositive => "must be greater than zero",
            InvalidReason::OutOfRange => "out of computable range",
        };
        f.write_str(s)
    }
}
