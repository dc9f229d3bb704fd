//! Solar irradiance at the top of the atmosphere
//!
//! Prints the mean beam irradiance, the perihelion and aphelion, and the
//! diurnal variation of irradiance on a horizontal surface for a few
//! positions along the orbit.

use clap::{Parser, ValueEnum};
use gwm::cli::{self, CommonArgs};
use gwm_core::GwmResult;
use gwm_models::parameters::SolarParameters;
use gwm_models::solar::{OrbitPoint, Planet, Solar};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PlanetPreset {
    Earth,
    Mars,
}

#[derive(Parser, Debug)]
#[command(name = "solar")]
#[command(about = "Beam irradiance for a planet on a Keplerian orbit")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Use a preset orbit instead of the configured one
    #[arg(short, long, value_enum)]
    planet: Option<PlanetPreset>,

    /// Latitude for the diurnal tables (degrees north)
    #[arg(short, long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// True longitudes (degrees) for the diurnal tables
    #[arg(long, value_delimiter = ',', default_values_t = [69.0, 120.0, 153.0, 249.0, 299.0])]
    ls: Vec<f64>,

    /// Interval between rows of the diurnal tables (hours)
    #[arg(long, default_value_t = 1.0)]
    hours: f64,
}

#[derive(Serialize)]
struct Output {
    parameters: SolarParameters,
    mean_beam_irradiance: f64,
    perihelion: OrbitPoint,
    aphelion: OrbitPoint,
    annual: Vec<OrbitPoint>,
}

fn run(args: &Args) -> GwmResult<()> {
    let mut parameters: SolarParameters = args.common.load_parameters()?;
    match args.planet {
        Some(PlanetPreset::Earth) => parameters.planet = Planet::earth(),
        Some(PlanetPreset::Mars) => parameters.planet = Planet::mars(),
        None => {}
    }
    if let Some(latitude) = args.latitude {
        parameters.latitude = latitude;
    }

    let solar = Solar::from_parameters(parameters);
    let mean = solar.mean_beam_irradiance();
    let mut out = io::stdout().lock();
    writeln!(out, "Mean beam irradiance at top of atmosphere = {mean:6.2} W/m2")
        .map_err(cli::stdout_error)?;

    let (perihelion, aphelion) = solar.extrema()?;
    for (name, point) in [("Perihelion", &perihelion), ("Aphelion", &aphelion)] {
        writeln!(
            out,
            "{name} Ls={:.3}, distance={:.3}, irradiance={:.2}",
            point.ls, point.distance, point.irradiance
        )
        .map_err(cli::stdout_error)?;
    }

    let latitude = solar.parameters().latitude;
    for &ls in &args.ls {
        writeln!(out, "Ls={ls}, latitude={latitude}").map_err(cli::stdout_error)?;
        for (hour, irradiance) in solar.diurnal_table(latitude, ls, args.hours)? {
            writeln!(out, "{hour:6.2} {irradiance:8.2}").map_err(cli::stdout_error)?;
        }
        writeln!(out, "Daily mean {:.2} W/m2", solar.daily_insolation(latitude, ls))
            .map_err(cli::stdout_error)?;
    }

    args.common.write_json(&Output {
        parameters: solar.parameters().clone(),
        mean_beam_irradiance: mean,
        perihelion,
        aphelion,
        annual: solar.annual_table(),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.common.init_logging();
    cli::report(run(&args))
}
