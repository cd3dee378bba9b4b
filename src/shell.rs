//! A line-oriented stand-in for the input form.
//!
//! The shell holds the text of the three input fields and the current output
//! list. Each line read is one command; see [HELP] for the list. It works over
//! any reader/writer pair, so it can be driven from stdin or from a buffer.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::calculator;
use crate::error::{Field, Result};
use crate::scenario::{Presets, Scenario};

pub const CALC_FAILED: &str = "Error performing calculations.";

pub const HELP: &str = "\
This program accepts planet mass, satellite mass, and orbit radius as input.
It then calculates and displays data about the orbiting satellite. This
program assumes circular orbits.

Planet mass: the mass of the planet in which the satellite orbits, in kilograms.
Satellite mass: the mass of the satellite, in kilograms.
Orbit radius: the distance from the center of the planet to the center of the
satellite, in meters.

All fields accept scientific notation (ex.: 5.972e24)

Commands:
  planet <value>     set the planet mass
  satellite <value>  set the satellite mass
  radius <value>     set the orbit radius
  calc               calculate and display orbit data
  show               display the fields and the last output
  clear              clear the fields and the output
  preset <name>      fill the fields from a preset
  presets            list preset names
  help               show this message
  about              show version and references
  quit               leave";

const REFERENCES: &str = "\
References:
www.physicsclassroom.com
hyperphysics.phy-astr.gsu.edu
https://www.space.com/16748-international-space-station.html";

/// The state behind the form: field text plus the output list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub planet_mass: String,
    pub satellite_mass: String,
    pub orbit_radius: String,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    form: Form,
    presets: Presets,
    prompt: bool,
}

impl Form {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Form {
            planet_mass: scenario.planet_mass.clone(),
            satellite_mass: scenario.satellite_mass.clone(),
            orbit_radius: scenario.orbit_radius.clone(),
            output: vec![],
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::PlanetMass => &self.planet_mass,
            Field::SatelliteMass => &self.satellite_mass,
            Field::OrbitRadius => &self.orbit_radius,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::PlanetMass => &mut self.planet_mass,
            Field::SatelliteMass => &mut self.satellite_mass,
            Field::OrbitRadius => &mut self.orbit_radius,
        }
    }

    pub fn clear(&mut self) {
        *self = Form::default();
    }

    /// Runs the calculator on the current fields. Either way the fields are
    /// emptied afterwards; on success the output list holds the results,
    /// on failure it's empty too.
    pub fn calculate(&mut self) -> Result<()> {
        let result =
            calculator::compute(&self.planet_mass, &self.satellite_mass, &self.orbit_radius);
        self.clear();
        self.output = result?.lines();
        Ok(())
    }
}

impl Shell {
    /// A shell with the fields pre-filled from the `default` preset.
    pub fn new(presets: Presets, default: &str) -> Result<Self> {
        let form = Form::from_scenario(presets.get(default)?);
        Ok(Shell {
            form,
            presets,
            prompt: false,
        })
    }

    /// Whether to print a `> ` prompt before reading each command.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Reads and runs commands until `quit` or end of input.
    ///
    /// Bytes that aren't UTF-8 are replaced rather than ending the session;
    /// whatever they were typed into just fails to parse.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if self.execute(&line, &mut out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        debug!("command {:?} {:?}", command, arg);

        match command.to_lowercase().as_str() {
            "" => {}
            "planet" => self.set(Field::PlanetMass, arg),
            "satellite" => self.set(Field::SatelliteMass, arg),
            "radius" => self.set(Field::OrbitRadius, arg),
            "calc" => match self.form.calculate() {
                Ok(()) => self.write_output(out)?,
                Err(err) => {
                    warn!("{}", err);
                    writeln!(out, "{}", CALC_FAILED)?;
                }
            },
            "show" => {
                for &field in Field::ALL.iter() {
                    let text = self.form.field(field);
                    writeln!(out, "{} [{}]: {}", field.label(), field.unit(), text)?;
                }
                self.write_output(out)?;
            }
            "clear" => self.form.clear(),
            "preset" => match self.presets.get(arg) {
                Ok(scenario) => self.form = Form::from_scenario(scenario),
                Err(err) => {
                    let names = self.presets.names().join(", ");
                    writeln!(out, "{}; try one of: {}", err, names)?;
                }
            },
            "presets" => writeln!(out, "{}", self.presets.names().join(", "))?,
            "help" => writeln!(out, "{}", HELP)?,
            "about" => {
                writeln!(out, "Version {}\n\n{}", env!("CARGO_PKG_VERSION"), REFERENCES)?;
            }
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "unknown command {:?}; type \"help\" for a list", other)?,
        }
        Ok(Flow::Continue)
    }

    fn set(&mut self, field: Field, text: &str) {
        *self.form.field_mut(field) = text.to_owned();
    }

    fn write_output<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.form.output.iter() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
