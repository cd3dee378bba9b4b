use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use plotters::prelude::*;

use orbit_data::{OrbitQuery, OrbitResult};

/// Sweeps the orbit radius and plots velocity, period and acceleration
/// against it, on log-log axes.
#[derive(Debug, Parser)]
struct Args {
    /// Mass of the planet, in kg
    #[arg(long, default_value_t = 5.972e24)]
    planet_mass: f64,
    /// Smallest orbit radius, in m
    #[arg(long, default_value_t = 6.6e6)]
    min_radius: f64,
    /// Largest orbit radius, in m
    #[arg(long, default_value_t = 4.0e8)]
    max_radius: f64,
    /// Number of radii to sample
    #[arg(long, default_value_t = 200)]
    points: usize,
    #[arg(long, default_value = "plots")]
    out_dir: PathBuf,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let results = sweep(&args)?;
    fs::create_dir_all(&args.out_dir)?;

    let plots: [(&str, &str, fn(&OrbitResult) -> f64); 3] = [
        ("velocity", "Sat. Velocity (m/s)", |r| r.velocity()),
        ("period", "Sat. Period (hours)", |r| r.period_hours()),
        ("acceleration", "Sat. Acceleration (m/s\u{b2})", |r| r.acceleration()),
    ];
    for (name, caption, value) in plots.iter() {
        let path = args.out_dir.join(format!("{}.png", name));
        let series: Vec<(f64, f64)> = results
            .iter()
            .map(|r| (r.query().orbit_radius(), value(r)))
            .collect();
        draw_plot(&path, caption, &series)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn sweep(args: &Args) -> Result<Vec<OrbitResult>, Box<dyn Error>> {
    if !(args.min_radius > 0.0) || !(args.min_radius < args.max_radius) {
        return Err(format!(
            "need 0 < min radius < max radius, got {} and {}",
            args.min_radius, args.max_radius
        )
        .into());
    }
    if args.points < 2 {
        return Err("need at least 2 points".into());
    }

    // Evenly spaced in log space, to match the axes
    let (lo, hi) = (args.min_radius.ln(), args.max_radius.ln());
    let step = (hi - lo) / (args.points - 1) as f64;

    let mut results = Vec::with_capacity(args.points);
    for i in 0..args.points {
        let radius = (lo + step * i as f64).exp();
        // Satellite mass doesn't matter, so just use 1 kg
        // compute() rejects zero and infinite outputs, so everything that
        // comes back is safe to put on a log axis
        let query = OrbitQuery::new(args.planet_mass, 1.0, radius)?;
        let result = query
            .compute()
            .map_err(|err| format!("can't plot radius {} m: {}", radius, err))?;
        results.push(result);
    }
    Ok(results)
}

fn draw_plot(path: &Path, caption: &str, series: &[(f64, f64)]) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = bounds(series.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(series.iter().map(|p| p.1));

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Orbit Radius (m)")
        .x_label_formatter(&|x| orbit_data::format::scientific(*x))
        .y_label_formatter(&|y| orbit_data::format::scientific(*y))
        .draw()?;

    chart.draw_series(LineSeries::new(series.iter().copied(), &RED))?;

    root.present()?;
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn args(min_radius: f64, max_radius: f64, points: usize) -> Args {
        Args {
            planet_mass: 5.972e24,
            min_radius,
            max_radius,
            points,
            out_dir: PathBuf::from("plots"),
        }
    }

    #[test]
    fn test_sweep_endpoints() {
        let results = sweep(&args(1e7, 1e9, 3)).unwrap();
        let radii: Vec<f64> = results.iter().map(|r| r.query().orbit_radius()).collect();
        assert_relative_eq!(radii[0], 1e7, max_relative = 1e-12);
        assert_relative_eq!(radii[1], 1e8, max_relative = 1e-12);
        assert_relative_eq!(radii[2], 1e9, max_relative = 1e-12);

        // Velocity falls off with the square root of radius
        assert_relative_eq!(
            results[0].velocity() / results[2].velocity(),
            10.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_sweep_rejects_bad_ranges() {
        assert!(sweep(&args(0.0, 1e9, 10)).is_err());
        assert!(sweep(&args(1e9, 1e7, 10)).is_err());
        assert!(sweep(&args(1e7, 1e7, 10)).is_err());
        assert!(sweep(&args(1e7, 1e9, 1)).is_err());
        assert!(sweep(&args(f64::NAN, 1e9, 10)).is_err());
    }

    #[test]
    fn test_sweep_rejects_unplottable_values() {
        // r^3 underflows at the small end, so the period would be zero
        let err = sweep(&args(1e-120, 1e-100, 10)).unwrap_err();
        assert!(err.to_string().starts_with("can't plot radius"));

        // G * M underflows, so nothing is computable
        let mut tiny = args(1e7, 1e9, 10);
        tiny.planet_mass = 1e-320;
        assert!(sweep(&tiny).is_err());
    }
}
