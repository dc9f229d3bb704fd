//! Time-dependent energy balance of a planet without an atmosphere
//!
//! Without arguments, reads the number of steps from stdin and prints the
//! final temperature and outgoing heat flux.

use clap::Parser;
use gwm::cli::{self, CommonArgs, GraderInput};
use gwm_core::GwmResult;
use gwm_models::energy_balance::NakedPlanet;
use gwm_models::parameters::NakedPlanetParameters;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "naked")]
#[command(about = "Step a naked planet towards radiative equilibrium")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of time steps
    #[arg(short, long, default_value_t = 200)]
    steps: usize,

    /// Time step in years, may be a fraction of a year
    #[arg(short, long)]
    time_step: Option<f64>,

    /// Depth of the water layer holding the heat (m)
    #[arg(short, long)]
    water_depth: Option<f64>,

    /// Starting temperature (K)
    #[arg(short = 'k', long)]
    initial_temperature: Option<f64>,
}

fn run_grader() -> GwmResult<()> {
    let mut input = GraderInput::from_stdin()?;
    let n_steps = input.next("number of steps")?;
    let mut planet = NakedPlanet::new();
    planet.run(n_steps);
    cli::print_numbers(&[planet.temperature(), planet.heat_flux_out()])
}

fn run(args: &Args) -> GwmResult<()> {
    let mut parameters: NakedPlanetParameters = args.common.load_parameters()?;
    if let Some(time_step) = args.time_step {
        parameters.time_step = time_step;
    }
    if let Some(depth) = args.water_depth {
        parameters.water_depth = depth;
    }
    if let Some(temperature) = args.initial_temperature {
        parameters.initial_temperature = temperature;
    }

    let mut planet = NakedPlanet::from_parameters(parameters);
    info!(
        equilibrium = planet.equilibrium_temperature(),
        "Equilibrium temperature"
    );
    let history = planet.run(args.steps);
    let mut out = io::stdout().lock();
    for (time, temperature) in history.iter() {
        writeln!(out, "{time:10.2} {temperature:8.3}").map_err(cli::stdout_error)?;
    }
    writeln!(
        out,
        "T={:.3} K, F={:.3} W/m2, equilibrium T={:.3} K",
        planet.temperature(),
        planet.heat_flux_out(),
        planet.equilibrium_temperature()
    )
    .map_err(cli::stdout_error)?;
    args.common.write_json(&history)
}

fn main() -> ExitCode {
    let grader = cli::is_grader_invocation();
    let args = Args::parse();
    args.common.init_logging();

    if grader {
        cli::report(run_grader())
    } else {
        cli::report(run(&args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args =
            Args::try_parse_from(["naked", "-s", "600", "-t", "0.05", "-w", "1", "--json", "out.json"])
                .unwrap();
        assert_eq!(args.steps, 600);
        assert_eq!(args.time_step, Some(0.05));
        assert_eq!(args.water_depth, Some(1.0));
        assert!(args.common.json.is_some());
    }
}
