//! 1-D ice sheet flow model
//!
//! Without arguments, reads the number of years from stdin and prints the
//! elevation of grid point 5 at the end of the run.

use clap::Parser;
use gwm::cli::{self, CommonArgs, GraderInput};
use gwm_core::GwmResult;
use gwm_models::ice::IceSheet;
use gwm_models::parameters::IceSheetParameters;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};

/// Grid point reported to the checker.
const REPORTED_POINT: usize = 5;

/// Length of a review run when `--years` is not given.
const REVIEW_YEARS: f64 = 20000.0;

#[derive(Parser, Debug)]
#[command(name = "ice-sheet")]
#[command(about = "Simulate a 1-D ice sheet fed by snowfall and flowing towards its edges")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of years to simulate
    #[arg(short = 'y', long)]
    years: Option<f64>,

    /// Log the elevation profile after every step, over 20000 years unless
    /// `--years` is given
    #[arg(short, long)]
    review: bool,
}

impl Args {
    /// Configured parameters with the command line overrides applied.
    fn parameters(&self) -> GwmResult<IceSheetParameters> {
        let mut parameters: IceSheetParameters = self.common.load_parameters()?;
        match self.years {
            Some(years) => parameters.n_years = years,
            None if self.review => parameters.n_years = REVIEW_YEARS,
            None => {}
        }
        Ok(parameters)
    }

    /// Review mode logs at info level even without `-v`.
    fn init_logging(&self) {
        let verbose = if self.review {
            self.common.verbose.max(1)
        } else {
            self.common.verbose
        };
        cli::init_logging(verbose, self.common.quiet);
    }
}

fn run_grader() -> GwmResult<()> {
    let mut input = GraderInput::from_stdin()?;
    let n_years = input.next("number of years")?;
    let mut sheet = IceSheet::from_parameters(IceSheetParameters {
        n_years,
        ..Default::default()
    });
    sheet.run();
    cli::print_numbers(&[sheet.elevation_at(REPORTED_POINT)?])
}

fn run(args: &Args) -> GwmResult<()> {
    let parameters = args.parameters()?;
    info!(
        n_years = parameters.n_years,
        n_x = parameters.n_x,
        "Running ice sheet"
    );

    let mut sheet = IceSheet::from_parameters(parameters);
    let review = args.review;
    sheet.run_with(|year, elevation| {
        if review {
            info!("{year}: {}", cli::format_numbers(elevation));
        } else {
            debug!(year, "Step");
        }
    });

    let mut out = io::stdout().lock();
    for (distance, elevation) in sheet.profile() {
        writeln!(out, "{distance:10.0} {elevation:10.2}").map_err(cli::stdout_error)?;
    }
    args.common.write_json(&sheet)
}

fn main() -> ExitCode {
    let grader = cli::is_grader_invocation();
    let args = Args::parse();
    args.init_logging();

    if grader {
        cli::report(run_grader())
    } else {
        cli::report(run(&args))
    }
}
