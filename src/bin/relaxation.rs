//! Iterative relaxation to a consistent temperature and albedo
//!
//! Without arguments, reads `L albedo n_iters` from stdin and prints the
//! temperature and albedo after `n_iters` relaxations.

use clap::Parser;
use gwm::cli::{self, CommonArgs, GraderInput};
use gwm_core::GwmResult;
use gwm_models::energy_balance::{AlbedoRelaxation, SweepPoint};
use gwm_models::parameters::RelaxationParameters;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "relaxation")]
#[command(about = "Sweep solar luminosity down and up to expose ice-albedo hysteresis")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Lowest luminosity (W/m2)
    #[arg(short, long)]
    from_l: Option<f64>,

    /// Highest luminosity (W/m2)
    #[arg(short = 'l', long)]
    to_l: Option<f64>,

    /// Luminosity increment (W/m2)
    #[arg(short, long)]
    step: Option<f64>,

    /// Tolerance on the albedo between iterations
    #[arg(short, long)]
    tolerance: Option<f64>,
}

#[derive(Serialize)]
struct Hysteresis {
    descending: Vec<SweepPoint>,
    ascending: Vec<SweepPoint>,
}

fn run_grader() -> GwmResult<()> {
    let mut input = GraderInput::from_stdin()?;
    let l = input.next("L")?;
    let albedo = input.next("albedo")?;
    let n_iters = input.next("number of iterations")?;

    let state = AlbedoRelaxation::default().relax_repeatedly(l, albedo, n_iters)?;
    cli::print_numbers(&[state.temperature, state.albedo])
}

fn write_sweep(out: &mut impl Write, title: &str, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for point in points {
        writeln!(out, "{:.0}, {:.1}", point.luminosity, point.temperature)?;
    }
    Ok(())
}

fn run(args: &Args) -> GwmResult<()> {
    let mut parameters: RelaxationParameters = args.common.load_parameters()?;
    if let Some(from_l) = args.from_l {
        parameters.from_l = from_l;
    }
    if let Some(to_l) = args.to_l {
        parameters.to_l = to_l;
    }
    if let Some(step) = args.step {
        parameters.step = step;
    }
    if let Some(tolerance) = args.tolerance {
        parameters.tolerance = tolerance;
    }

    let model = AlbedoRelaxation::from_parameters(parameters);
    let (descending, ascending) = model.hysteresis()?;
    let p = model.parameters();
    let mut out = io::stdout().lock();
    write_sweep(
        &mut out,
        &format!(
            "From {} to {} by {}. Tolerance={}",
            p.to_l, p.from_l, p.step, p.tolerance
        ),
        &descending,
    )
    .map_err(cli::stdout_error)?;
    write_sweep(
        &mut out,
        &format!(
            "From {} to {} by {}. Tolerance={}",
            p.from_l, p.to_l, p.step, p.tolerance
        ),
        &ascending,
    )
    .map_err(cli::stdout_error)?;

    args.common.write_json(&Hysteresis {
        descending,
        ascending,
    })
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
