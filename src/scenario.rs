//! Named sets of input text, used to pre-fill the three fields.
//!
//! Two presets are built in. More can be loaded from a TOML file:
//!
//! ```toml
//! [[scenario]]
//! name = "moon"
//! planet_mass = "5.972e24"
//! satellite_mass = "7.342e22"
//! orbit_radius = "3.844e8"
//! ```
//!
//! Values are kept as text so they go through the same parsing as anything a
//! user types.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::calculator::{self, OrbitResult};
use crate::error::{OrbitError, Result};

/// The International Space Station orbiting Earth.
pub const ISS: &str = "iss";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub planet_mass: String,
    pub satellite_mass: String,
    pub orbit_radius: String,
}

#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    scenario: Vec<Scenario>,
}

/// An ordered collection of scenarios, looked up by case-insensitive name.
#[derive(Debug, Clone)]
pub struct Presets {
    scenarios: Vec<Scenario>,
}

impl Scenario {
    pub fn new(name: &str, planet_mass: &str, satellite_mass: &str, orbit_radius: &str) -> Self {
        Scenario {
            name: name.to_owned(),
            planet_mass: planet_mass.to_owned(),
            satellite_mass: satellite_mass.to_owned(),
            orbit_radius: orbit_radius.to_owned(),
        }
    }

    /// The reference scenario: Earth, and the ISS at 6770 km.
    pub fn iss() -> Self {
        Scenario::new(ISS, "5.972e24", "391000", "6770000")
    }

    /// A 1000 kg satellite in geostationary orbit.
    pub fn geo() -> Self {
        Scenario::new("geo", "5.972e24", "1000", "42164000")
    }

    pub fn compute(&self) -> Result<OrbitResult> {
        calculator::compute(&self.planet_mass, &self.satellite_mass, &self.orbit_radius)
    }
}

impl Default for Presets {
    fn default() -> Self {
        Presets {
            scenarios: vec![Scenario::iss(), Scenario::geo()],
        }
    }
}

impl Presets {
    pub fn empty() -> Self {
        Presets { scenarios: vec![] }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, name: &str) -> Result<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OrbitError::UnknownPreset(name.to_owned()))
    }

    /// Adds a scenario, replacing any existing one with the same name.
    pub fn insert(&mut self, scenario: Scenario) {
        match self
            .scenarios
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(&scenario.name))
        {
            Some(existing) => *existing = scenario,
            None => self.scenarios.push(scenario),
        }
    }

    pub fn extend_from_str(&mut self, contents: &str) -> Result<()> {
        let file: PresetFile = toml::from_str(contents)?;
        for scenario in file.scenario {
            self.insert(scenario);
        }
        Ok(())
    }

    pub fn extend_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path).map_err(|source| OrbitError::PresetIo {
            path: path.to_owned(),
            source,
        })?;
        let before = self.scenarios.len();
        self.extend_from_str(&contents)?;
        info!(
            "loaded presets from {} ({} new, {} total)",
            path.display(),
            self.scenarios.len() - before,
            self.scenarios.len()
        );
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }
}
