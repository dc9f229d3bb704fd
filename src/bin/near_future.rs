//! CO2 driven warming with aerosol masking
//!
//! Runs the four aerosol masking exercises: the climate sensitivity implied
//! by present day warming, the first years of business as usual against a
//! world without us, the sensitivity for stronger masking, and the window in
//! which stopping emissions leaves the planet warmer.

use clap::Parser;
use gwm::cli::{self, CommonArgs};
use gwm_core::GwmResult;
use gwm_models::forcing::{climate_sensitivity_for, compare, unmasking_years, NearFuture, Scenario};
use gwm_models::parameters::NearFutureParameters;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "near-future")]
#[command(about = "Business as usual and world without us CO2 scenarios")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Stronger aerosol masking (W/m2) used for the unmasking exercise
    #[arg(long, default_value_t = -1.5, allow_negative_numbers = true)]
    strong_aerosol: f64,

    /// Number of samples in the scenario comparison
    #[arg(long, default_value_t = 2)]
    duration: usize,
}

#[derive(Serialize)]
struct Output {
    parameters: NearFutureParameters,
    business_as_usual: Scenario,
    world_without_us: Scenario,
    climate_sensitivity: f64,
    unmasking_years: Vec<i32>,
}

fn run(args: &Args) -> GwmResult<()> {
    let parameters: NearFutureParameters = args.common.load_parameters()?;
    let model = NearFuture::from_parameters(parameters);
    let p = model.parameters();
    let reference_year = p.reference_year as f64;

    let bau = model.business_as_usual()?;
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "Transient temperature in {} is {:.3} C",
        p.reference_year,
        bau.temp_trans.at_time(reference_year)?
    )
    .map_err(cli::stdout_error)?;
    let sensitivity = climate_sensitivity_for(&model, p.aerosol_forcing_now)?;
    writeln!(
        out,
        "Climate sensitivity 2X={sensitivity:.3} degrees C for doubling CO2 (aerosols {} W/m2)",
        p.aerosol_forcing_now
    )
    .map_err(cli::stdout_error)?;

    let wwu = model.world_without_us(&bau, p.climate_sensitivity_2x)?;
    writeln!(out, "Year  BAU    WWU").map_err(cli::stdout_error)?;
    for row in compare(&bau, &wwu, reference_year, args.duration)? {
        writeln!(
            out,
            "{:.0}  {:.3}  {:.3}",
            row.year, row.business_as_usual, row.world_without_us
        )
        .map_err(cli::stdout_error)?;
    }

    let strong = climate_sensitivity_for(&model, args.strong_aerosol)?;
    writeln!(
        out,
        "Climate sensitivity 2X={strong:.3} degrees C for doubling CO2 (aerosols {} W/m2)",
        args.strong_aerosol
    )
    .map_err(cli::stdout_error)?;

    let years = unmasking_years(&model, args.strong_aerosol)?;
    let window = match (years.first(), years.last()) {
        (Some(first), Some(last)) => {
            writeln!(out, "Stopping emissions is warmer from {first} to {last}")
        }
        _ => writeln!(out, "Stopping emissions is never warmer"),
    };
    window.map_err(cli::stdout_error)?;

    args.common.write_json(&Output {
        parameters: p.clone(),
        business_as_usual: bau,
        world_without_us: wwu,
        climate_sensitivity: sensitivity,
        unmasking_years: years,
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.common.init_logging();
    cli::report(run(&args))
}
