use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use orbit_data::scenario::{Presets, ISS};
use orbit_data::shell::{Shell, CALC_FAILED};

/// Calculates orbital velocity, period and acceleration for a satellite in a
/// circular orbit. All values accept scientific notation (ex.: 5.972e24).
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Mass of the planet, in kg
    #[arg(allow_hyphen_values = true)]
    planet_mass: Option<String>,
    /// Mass of the satellite, in kg
    #[arg(allow_hyphen_values = true)]
    satellite_mass: Option<String>,
    /// Distance between the centers of planet and satellite, in m
    #[arg(allow_hyphen_values = true)]
    orbit_radius: Option<String>,

    /// Preset supplying any values not given
    #[arg(long, default_value = ISS)]
    preset: String,
    /// TOML file with extra presets
    #[arg(long)]
    presets: Option<PathBuf>,
    /// Read commands from stdin instead of calculating once
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut presets = Presets::default();
    if let Some(path) = &args.presets {
        presets.extend_from_file(path)?;
    }

    if args.interactive {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        let mut shell = Shell::new(presets, &args.preset)?.with_prompt(prompt);
        shell.run(stdin.lock(), io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    }

    let defaults = presets.get(&args.preset)?;
    let planet_mass = args.planet_mass.as_deref().unwrap_or(&defaults.planet_mass);
    let satellite_mass = args
        .satellite_mass
        .as_deref()
        .unwrap_or(&defaults.satellite_mass);
    let orbit_radius = args.orbit_radius.as_deref().unwrap_or(&defaults.orbit_radius);

    match orbit_data::compute(planet_mass, satellite_mass, orbit_radius) {
        Ok(result) => {
            println!("{}", result);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!("{}", err);
            eprintln!("{} ({})", CALC_FAILED, err);
            Ok(ExitCode::FAILURE)
        }
    }
}
